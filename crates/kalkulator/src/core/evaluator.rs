//! Postfix evaluator

use crate::core::parser::{Converter, Token};
use crate::core::{CalcError, CalcResult};

/// Evaluates postfix token sequences with an operand stack
#[derive(Debug, Default)]
pub struct Evaluator {
    operands: Vec<f64>,
}

impl Evaluator {
    /// Creates an evaluator with an empty operand stack
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates a postfix sequence to a single value.
    ///
    /// For each operator, `b` is popped before `a` and `a op b` is pushed.
    /// Exactly one value must remain at the end.
    pub fn evaluate(postfix: &[Token]) -> CalcResult<f64> {
        let mut evaluator = Self::new();
        for token in postfix {
            evaluator.push(token)?;
        }
        evaluator.finish()
    }

    /// Converts an infix string and evaluates it
    pub fn evaluate_str(infix: &str) -> CalcResult<f64> {
        let postfix = Converter::convert(infix)?;
        Self::evaluate(&postfix)
    }

    /// Applies one token to the operand stack
    pub fn push(&mut self, token: &Token) -> CalcResult<()> {
        match token {
            Token::Number { value, .. } => self.operands.push(*value),
            Token::Operator(op) => {
                let found = self.operands.len();
                let (Some(b), Some(a)) = (self.operands.pop(), self.operands.pop()) else {
                    return Err(CalcError::operand_count(2, found));
                };
                self.operands.push(op.apply(a, b));
            }
        }
        Ok(())
    }

    /// Consumes the evaluator, returning the single remaining value
    pub fn finish(self) -> CalcResult<f64> {
        match self.operands.as_slice() {
            [value] => Ok(*value),
            rest => Err(CalcError::operand_count(1, rest.len())),
        }
    }
}

/// Evaluates a postfix token sequence
pub fn evaluate(postfix: &[Token]) -> CalcResult<f64> {
    Evaluator::evaluate(postfix)
}
