//! Two-operand calculator state machine
//!
//! Operands are accumulated as text so a half-typed value such as `"12."`
//! survives until the next keypress. An operation is deferred until either
//! equals or the next operator, which makes chains left-associative:
//! `5 + 3 + 2` collapses `5 + 3` before `+ 2` is chosen.

use std::fmt;

use tracing::debug;

use crate::core::number::{number_to_string, parse_float};
use crate::core::{CalcError, CalcResult, Operation};

/// A single keypad input accepted by [`CalculatorState::append_digit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputToken {
    /// A decimal digit (0-9)
    Digit(u8),
    /// The decimal point
    Decimal,
}

impl InputToken {
    /// Validates a raw token such as a button label
    ///
    /// Only a single ASCII digit or `.` is accepted.
    pub fn parse(raw: &str) -> CalcResult<Self> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some('.'), None) => Ok(Self::Decimal),
            (Some(c), None) if c.is_ascii_digit() => Ok(Self::Digit(c as u8 - b'0')),
            _ => Err(CalcError::invalid_token(raw)),
        }
    }

    /// Returns the character this token appends
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Self::Digit(d) => (b'0' + *d % 10) as char,
            Self::Decimal => '.',
        }
    }
}

impl fmt::Display for InputToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Where the calculator is in its entry cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing entered
    Empty,
    /// Typing the left operand (or holding a computed result)
    EnteringFirst,
    /// Operator chosen, right operand not started
    OperatorChosen,
    /// Typing the right operand
    EnteringSecond,
}

/// The running calculation
///
/// Created once at startup with every field empty and mutated in place by
/// each user action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorState {
    previous_operand: String,
    current_operand: String,
    operation: Option<Operation>,
}

impl CalculatorState {
    /// Creates an empty state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Left operand text, empty when absent
    #[must_use]
    pub fn previous_operand(&self) -> &str {
        &self.previous_operand
    }

    /// Operand under entry, empty when absent
    #[must_use]
    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    /// Pending operation, if any
    #[must_use]
    pub const fn operation(&self) -> Option<Operation> {
        self.operation
    }

    /// Derives the entry phase from the fields
    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.operation.is_some(), self.current_operand.is_empty()) {
            (false, true) => Phase::Empty,
            (false, false) => Phase::EnteringFirst,
            (true, true) => Phase::OperatorChosen,
            (true, false) => Phase::EnteringSecond,
        }
    }

    /// Clears all fields
    pub fn reset(&mut self) {
        self.previous_operand.clear();
        self.current_operand.clear();
        self.operation = None;
    }

    /// Appends a digit or decimal point to the current operand
    ///
    /// A second decimal point is ignored.
    pub fn append_digit(&mut self, token: InputToken) {
        if token == InputToken::Decimal && self.current_operand.contains('.') {
            return;
        }
        self.current_operand.push(token.as_char());
    }

    /// Validates `raw` and appends it
    ///
    /// State is untouched when the token is rejected.
    pub fn append_str(&mut self, raw: &str) -> CalcResult<()> {
        let token = InputToken::parse(raw)?;
        self.append_digit(token);
        Ok(())
    }

    /// Removes the last character of the current operand
    pub fn delete_last(&mut self) {
        self.current_operand.pop();
    }

    /// Selects the pending operation
    ///
    /// Does nothing without a current operand. A calculation that is
    /// already pending is collapsed first.
    pub fn choose_operation(&mut self, op: Operation) {
        if self.current_operand.is_empty() {
            return;
        }
        if !self.previous_operand.is_empty() {
            self.compute();
        }
        debug!(operation = %op, operand = %self.current_operand, "operation chosen");
        self.operation = Some(op);
        self.previous_operand = std::mem::take(&mut self.current_operand);
    }

    /// Applies the pending operation
    ///
    /// A no-op when either operand does not parse or nothing is pending.
    pub fn compute(&mut self) {
        let Some(op) = self.operation else {
            return;
        };
        let (Some(lhs), Some(rhs)) = (
            parse_float(&self.previous_operand),
            parse_float(&self.current_operand),
        ) else {
            return;
        };

        let result = op.apply(lhs, rhs);
        debug!(lhs, rhs, operation = %op, result, "computed");

        self.current_operand = number_to_string(result);
        self.previous_operand.clear();
        self.operation = None;
    }
}
