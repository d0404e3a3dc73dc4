//! Calculator core: operand state machine and display formatting
//!
//! Nothing in here touches the DOM or storage. State transitions never
//! fail; input that cannot be used is ignored. Errors only exist at the
//! boundary where raw strings become typed values.

pub mod display;
pub mod number;
mod operations;
pub mod state;

pub use display::{format_display_number, render_display, RenderedDisplay};
pub use operations::Operation;
pub use state::{CalculatorState, InputToken, Phase};

use thiserror::Error;

/// Result type for boundary conversions
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised when raw input cannot be turned into a typed value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Append token other than a single digit or `.`
    #[error("Invalid input token: {0:?}")]
    InvalidToken(String),
    /// Operator outside `+ - * /` (or the `x` glyph)
    #[error("Unknown operator: {0:?}")]
    UnknownOperator(String),
    /// Theme identifier outside `1`, `2`, `3`
    #[error("Unknown theme: {0:?}")]
    UnknownTheme(String),
    /// Click target that is not a calculator control
    #[error("Unknown control: {0:?}")]
    UnknownControl(String),
    /// Durable storage could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CalcError {
    /// Creates an invalid token error
    #[must_use]
    pub fn invalid_token(raw: impl Into<String>) -> Self {
        Self::InvalidToken(raw.into())
    }

    /// Creates an unknown operator error
    #[must_use]
    pub fn unknown_operator(raw: impl Into<String>) -> Self {
        Self::UnknownOperator(raw.into())
    }

    /// Creates an unknown theme error
    #[must_use]
    pub fn unknown_theme(raw: impl Into<String>) -> Self {
        Self::UnknownTheme(raw.into())
    }

    /// Creates an unknown control error
    #[must_use]
    pub fn unknown_control(id: impl Into<String>) -> Self {
        Self::UnknownControl(id.into())
    }

    /// Creates a storage error
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== CalcError display =====

    #[test]
    fn test_calc_error_display_invalid_token() {
        let err = CalcError::invalid_token("12");
        assert_eq!(err.to_string(), "Invalid input token: \"12\"");
    }

    #[test]
    fn test_calc_error_display_unknown_operator() {
        let err = CalcError::unknown_operator("%");
        assert_eq!(err.to_string(), "Unknown operator: \"%\"");
    }

    #[test]
    fn test_calc_error_display_unknown_theme() {
        let err = CalcError::unknown_theme("4");
        assert_eq!(err.to_string(), "Unknown theme: \"4\"");
    }

    #[test]
    fn test_calc_error_display_unknown_control() {
        let err = CalcError::unknown_control("btn-power");
        assert_eq!(err.to_string(), "Unknown control: \"btn-power\"");
    }

    #[test]
    fn test_calc_error_display_storage() {
        let err = CalcError::storage("quota exceeded");
        assert_eq!(err.to_string(), "Storage error: quota exceeded");
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::storage("denied"));
        assert!(err.to_string().contains("denied"));
    }
}
