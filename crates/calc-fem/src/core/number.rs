//! Numeric text conversions
//!
//! Operands are kept as text while they are typed, so the calculator needs
//! one lenient parser (longest numeric prefix wins) and one printer that
//! produces the shortest text which reads back to the same `f64`.

/// Parses the longest numeric prefix of `text`.
///
/// Leading whitespace is skipped. Accepts an optional sign, `Infinity`,
/// digits with at most one decimal point, and an optional exponent. Returns
/// `None` when no digit is found, so `""`, `"."` and `"-"` are all
/// unparsable while `"12."`, `".5"` and `"7abc"` are not.
#[must_use]
pub fn parse_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    if s[pos..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &s[int_start..pos];

    let mut frac_digits = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &s[frac_start..end];
        pos = end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut exponent = String::new();
    if pos < bytes.len() && matches!(bytes[pos], b'e' | b'E') {
        let mut end = pos + 1;
        let mut sign = "";
        if end < bytes.len() && matches!(bytes[end], b'+' | b'-') {
            sign = if bytes[end] == b'-' { "-" } else { "" };
            end += 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > digits_start {
            exponent = format!("e{sign}{}", &s[digits_start..end]);
        }
    }

    let normalized = format!(
        "{}{}.{}{}",
        if negative { "-" } else { "" },
        if int_digits.is_empty() { "0" } else { int_digits },
        if frac_digits.is_empty() { "0" } else { frac_digits },
        exponent
    );
    normalized.parse().ok()
}

/// Renders a number the way a JavaScript `Number` prints itself.
///
/// Integral values have no fractional part (`8`, not `8.0`), non-finite
/// values print as `Infinity`, `-Infinity` and `NaN`, and magnitudes
/// outside `[1e-6, 1e21)` switch to exponent notation (`1e+21`).
#[must_use]
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value < 0.0 {
        return format!("-{}", number_to_string(-value));
    }
    if value.is_infinite() {
        return "Infinity".to_string();
    }

    let (digits, n) = shortest_digits(value);
    let k = digits.len() as i32;

    if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let e = n - 1;
        let sign = if e < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{sign}{}", e.abs())
        } else {
            format!("{first}.{rest}e{sign}{}", e.abs())
        }
    }
}

/// Shortest round-trip digits of a positive finite `value`, plus the
/// position of the decimal point relative to them.
///
/// `1234.5` gives `("12345", 4)`, `1e23` gives `("1", 24)`.
pub(crate) fn shortest_digits(value: f64) -> (String, i32) {
    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3".
    let sci = format!("{value:e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    (digits, exp.parse::<i32>().unwrap_or(0) + 1)
}
