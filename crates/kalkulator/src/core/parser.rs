//! Tokenizer and infix-to-postfix converter
//!
//! Input is the space-delimited string built by [`InputBuffer`]:
//! `"3 + 4 * 2"`. There are no parentheses and no unary operators, so the
//! conversion is a restricted shunting-yard over a single operator stack.
//!
//! [`InputBuffer`]: crate::core::input::InputBuffer

use crate::core::{CalcError, CalcResult, Operator};
use std::fmt;

/// A classified token
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Finite numeric literal, with the text it was parsed from
    Number {
        /// Lexeme as entered
        text: String,
        /// Parsed value
        value: f64,
    },
    /// Binary operator
    Operator(Operator),
}

impl Token {
    /// Classifies a single lexeme.
    ///
    /// Operator symbols are checked first so `"-"` never reaches the number
    /// parser. Numbers must parse to a finite `f64`.
    pub fn parse(text: &str) -> CalcResult<Self> {
        if let Some(op) = Operator::from_symbol(text) {
            return Ok(Self::Operator(op));
        }

        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Self::Number {
                text: text.to_string(),
                value,
            }),
            _ => Err(CalcError::malformed(text)),
        }
    }

    #[cfg(test)]
    pub(crate) fn number(value: f64) -> Self {
        Self::Number {
            text: value.to_string(),
            value,
        }
    }

    /// Returns true if this token is an operator
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    /// Returns true if this token is a number
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number { .. })
    }

    /// Returns the token text
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Number { text, .. } => text,
            Self::Operator(op) => op.symbol(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Splits an expression on single spaces and classifies each piece
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Returns the raw, unclassified pieces
    pub fn lexemes(&self) -> impl Iterator<Item = &'a str> {
        self.input.split(' ')
    }

    /// Tokenizes the entire input.
    ///
    /// Empty pieces (empty input, doubled or trailing spaces) are malformed.
    pub fn tokenize(&self) -> CalcResult<Vec<Token>> {
        self.lexemes().map(Token::parse).collect()
    }
}

/// Infix-to-postfix converter.
///
/// Holds the output sequence and the operator stack for one conversion.
#[derive(Debug, Default)]
pub struct Converter {
    output: Vec<Token>,
    operators: Vec<Operator>,
}

impl Converter {
    /// Creates a converter with empty working buffers
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts an infix string into postfix order
    pub fn convert(infix: &str) -> CalcResult<Vec<Token>> {
        let mut converter = Self::new();
        for token in Tokenizer::new(infix).tokenize()? {
            converter.push(token);
        }
        Ok(converter.finish())
    }

    /// Feeds one token through the shunting-yard step
    pub fn push(&mut self, token: Token) {
        match token {
            Token::Number { .. } => self.output.push(token),
            Token::Operator(op) => {
                // Equal precedence pops: every operator is left-associative.
                while let Some(&top) = self.operators.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    self.operators.pop();
                    self.output.push(Token::Operator(top));
                }
                self.operators.push(op);
            }
        }
    }

    /// Drains the remaining operators (LIFO) and returns the postfix sequence
    #[must_use]
    pub fn finish(mut self) -> Vec<Token> {
        while let Some(op) = self.operators.pop() {
            self.output.push(Token::Operator(op));
        }
        self.output
    }
}

/// Converts an infix expression to a postfix token sequence
pub fn convert(infix: &str) -> CalcResult<Vec<Token>> {
    Converter::convert(infix)
}
