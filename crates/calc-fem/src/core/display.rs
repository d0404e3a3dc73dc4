//! Display formatting
//!
//! The integer part of an operand is grouped with thousands separators; the
//! fractional part is reattached untouched so a value being typed (`"12."`,
//! `"0.50"`) is never rewritten under the user's fingers.

use serde::Serialize;

use crate::core::number::{parse_float, shortest_digits};
use crate::core::state::CalculatorState;

/// Text for the two display regions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedDisplay {
    /// Previous operand and pending operator, or empty
    pub previous: String,
    /// Current operand
    pub current: String,
}

/// Formats an operand string for display
///
/// Unparsable or non-finite integer parts render as the empty string.
#[must_use]
pub fn format_display_number(number: &str) -> String {
    let mut parts = number.split('.');
    let integer_part = parts.next().unwrap_or_default();
    let decimal_part = parts.next();

    let integer_display = match parse_float(integer_part) {
        Some(value) if value.is_finite() => group_thousands(value),
        _ => String::new(),
    };

    match decimal_part {
        Some(decimals) => format!("{integer_display}.{decimals}"),
        None => integer_display,
    }
}

/// Renders both display regions from the state
#[must_use]
pub fn render_display(state: &CalculatorState) -> RenderedDisplay {
    let previous = match state.operation() {
        Some(op) => format!("{} {op}", format_display_number(state.previous_operand())),
        None => String::new(),
    };

    RenderedDisplay {
        previous,
        current: format_display_number(state.current_operand()),
    }
}

// Rounds half away from zero, then inserts a comma every three digits.
// Digits past the shortest round-trip form are written as zeros.
fn group_thousands(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let digits = if rounded == 0.0 {
        "0".to_string()
    } else {
        let (digits, point) = shortest_digits(rounded.abs());
        let point = usize::try_from(point).unwrap_or(0);
        if digits.len() >= point {
            digits[..point.max(1)].to_string()
        } else {
            format!("{digits}{}", "0".repeat(point - digits.len()))
        }
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}")
}
