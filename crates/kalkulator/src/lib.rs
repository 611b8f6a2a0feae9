//! Kalkulator - keypad calculator core
//!
//! Evaluates the expressions a four-function keypad produces: numbers and the
//! binary operators `+ - * /`, separated by single spaces. Evaluation runs in
//! two passes:
//!
//! - **Conversion**: the infix string is reordered into postfix form with a
//!   restricted shunting-yard (`* /` bind tighter than `+ -`, equal
//!   precedence groups left to right).
//! - **Evaluation**: the postfix sequence is folded over an operand stack
//!   using IEEE-754 arithmetic, so `5 / 0` is `Infinity`, not an error.
//!
//! [`session::Calculator`] wraps both behind keypad actions (digit, operator,
//! equals, clear, backspace).
//!
//! # Example
//!
//! ```rust
//! use kalkulator::prelude::*;
//!
//! assert_eq!(evaluate_expression("3 + 4 * 2").unwrap(), "11.0");
//!
//! let postfix = convert("10 - 2 - 3").unwrap();
//! assert_eq!(evaluate(&postfix).unwrap(), 5.0);
//!
//! let mut calc = Calculator::new();
//! calc.replay(KeypadAction::parse_sequence("6 / 3 * 2 =").unwrap());
//! assert_eq!(calc.result(), Some("4.0"));
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod format;
pub mod keypad;
pub mod session;

use crate::config::CalculatorConfig;
use crate::core::evaluator::Evaluator;
use crate::core::parser::{Converter, Token};
use crate::core::CalcResult;
use crate::format::format_result;
use tracing::{debug, warn};

/// Evaluates an accumulated infix expression and formats the result with the
/// default configuration.
pub fn evaluate_expression(input: &str) -> CalcResult<String> {
    evaluate_expression_with(input, &CalculatorConfig::default())
}

/// Evaluates an accumulated infix expression and formats the result.
///
/// Conversion and evaluation errors are returned as-is; no partial result is
/// produced.
pub fn evaluate_expression_with(input: &str, config: &CalculatorConfig) -> CalcResult<String> {
    let outcome = Converter::convert(input).and_then(|postfix| {
        let rendered: Vec<&str> = postfix.iter().map(Token::as_str).collect();
        debug!(input, postfix = %rendered.join(" "), "converted expression");
        Evaluator::evaluate(&postfix)
    });

    match outcome {
        Ok(value) => {
            let shown = format_result(value, config.result_format);
            debug!(input, display = %shown, "evaluated expression");
            Ok(shown)
        }
        Err(err) => {
            warn!(input, error = %err, "calculation failed");
            Err(err)
        }
    }
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalculatorConfig, ConfigError};
    pub use crate::core::evaluator::{evaluate, Evaluator};
    pub use crate::core::input::InputBuffer;
    pub use crate::core::parser::{convert, Converter, Token, Tokenizer};
    pub use crate::core::{CalcError, CalcResult, Operator};
    pub use crate::format::{format_result, ResultFormat};
    pub use crate::keypad::KeypadAction;
    pub use crate::session::Calculator;
    pub use crate::{evaluate_expression, evaluate_expression_with};
}
