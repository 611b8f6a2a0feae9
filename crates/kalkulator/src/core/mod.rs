//! Expression core: operators, infix-to-postfix conversion, postfix evaluation
//! and the keypad input buffer that feeds them.
//!
//! Every calculation builds fresh working buffers and drops them once a value
//! (or an error) has been produced. Nothing here is shared between calls.

pub mod evaluator;
pub mod input;
mod operations;
pub mod parser;

pub use operations::Operator;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors surfaced by conversion and evaluation.
///
/// Floating-point anomalies (division by zero, NaN) are not errors: they are
/// ordinary values and flow through as results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A token is neither a finite number nor one of `+ - * /`
    #[error("Malformed expression: unrecognized token '{token}'")]
    MalformedExpression {
        /// The offending token as it appeared in the input
        token: String,
    },

    /// The operand buffer held the wrong number of values
    #[error("Invalid operand count: expected {expected}, found {found}")]
    InvalidOperandCount {
        /// Operands required at this point
        expected: usize,
        /// Operands actually available
        found: usize,
    },
}

impl CalcError {
    /// Create a malformed-expression error for a token
    #[must_use]
    pub fn malformed(token: impl Into<String>) -> Self {
        Self::MalformedExpression {
            token: token.into(),
        }
    }

    /// Create an operand-count error
    #[must_use]
    pub const fn operand_count(expected: usize, found: usize) -> Self {
        Self::InvalidOperandCount { expected, found }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== CalcError tests =====

    #[test]
    fn test_calc_error_display_malformed() {
        let err = CalcError::malformed("x");
        assert_eq!(
            format!("{err}"),
            "Malformed expression: unrecognized token 'x'"
        );
    }

    #[test]
    fn test_calc_error_display_malformed_empty_token() {
        let err = CalcError::malformed("");
        assert_eq!(
            format!("{err}"),
            "Malformed expression: unrecognized token ''"
        );
    }

    #[test]
    fn test_calc_error_display_operand_count() {
        let err = CalcError::operand_count(2, 1);
        assert_eq!(
            format!("{err}"),
            "Invalid operand count: expected 2, found 1"
        );
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::operand_count(1, 0));
        assert!(err.to_string().contains("operand count"));
    }

    #[test]
    fn test_calc_error_clone_eq() {
        let err = CalcError::malformed("abc");
        assert_eq!(err.clone(), err);
        assert_ne!(err, CalcError::operand_count(1, 2));
    }
}
