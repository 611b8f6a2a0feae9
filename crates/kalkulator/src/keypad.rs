//! Keypad input events
//!
//! Each button press carries nothing but its identity. The standard layout
//! mirrors the physical keypad:
//!
//! ```text
//! [ 7 ] [ 8 ] [ 9 ] [ / ]
//! [ 4 ] [ 5 ] [ 6 ] [ * ]
//! [ 1 ] [ 2 ] [ 3 ] [ - ]
//! [ C ] [ 0 ] [ < ] [ + ]
//!             [ = ]
//! ```

use crate::core::Operator;
use serde::{Deserialize, Serialize};

/// Actions that keypad buttons can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeypadAction {
    /// Append a digit (0-9)
    Digit(u8),
    /// Append a padded operator
    Operator(Operator),
    /// Evaluate the expression
    Equals,
    /// Clear input and result
    Clear,
    /// Remove the last entry
    Backspace,
}

impl KeypadAction {
    /// Maps a key symbol to an action.
    ///
    /// `0-9`, `+ - * /`, `=`, `C` (either case) and `<` for backspace.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '0'..='9' => symbol.to_digit(10).map(|d| Self::Digit(d as u8)),
            '+' => Some(Self::Operator(Operator::Add)),
            '-' => Some(Self::Operator(Operator::Subtract)),
            '*' => Some(Self::Operator(Operator::Multiply)),
            '/' => Some(Self::Operator(Operator::Divide)),
            '=' => Some(Self::Equals),
            'C' | 'c' => Some(Self::Clear),
            '<' => Some(Self::Backspace),
            _ => None,
        }
    }

    /// Parses a run of key symbols, skipping whitespace.
    ///
    /// Returns the first unrecognized symbol as the error.
    pub fn parse_sequence(keys: &str) -> Result<Vec<Self>, char> {
        keys.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| Self::from_symbol(c).ok_or(c))
            .collect()
    }

    /// Returns the button label for this action
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Backspace => "<".to_string(),
        }
    }

    /// All buttons of the standard keypad, row by row
    #[must_use]
    pub fn standard_layout() -> Vec<Self> {
        vec![
            Self::Digit(7),
            Self::Digit(8),
            Self::Digit(9),
            Self::Operator(Operator::Divide),
            Self::Digit(4),
            Self::Digit(5),
            Self::Digit(6),
            Self::Operator(Operator::Multiply),
            Self::Digit(1),
            Self::Digit(2),
            Self::Digit(3),
            Self::Operator(Operator::Subtract),
            Self::Clear,
            Self::Digit(0),
            Self::Backspace,
            Self::Operator(Operator::Add),
            Self::Equals,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Symbol mapping tests =====

    #[test]
    fn test_from_symbol_digits() {
        for (i, c) in ('0'..='9').enumerate() {
            assert_eq!(KeypadAction::from_symbol(c), Some(KeypadAction::Digit(i as u8)));
        }
    }

    #[test]
    fn test_from_symbol_operators() {
        for op in Operator::ALL {
            let c = op.symbol().chars().next().unwrap();
            assert_eq!(KeypadAction::from_symbol(c), Some(KeypadAction::Operator(op)));
        }
    }

    #[test]
    fn test_from_symbol_controls() {
        assert_eq!(KeypadAction::from_symbol('='), Some(KeypadAction::Equals));
        assert_eq!(KeypadAction::from_symbol('C'), Some(KeypadAction::Clear));
        assert_eq!(KeypadAction::from_symbol('c'), Some(KeypadAction::Clear));
        assert_eq!(KeypadAction::from_symbol('<'), Some(KeypadAction::Backspace));
    }

    #[test]
    fn test_from_symbol_unknown() {
        for c in ['.', '(', ')', '%', '^', 'x', ' '] {
            assert_eq!(KeypadAction::from_symbol(c), None, "{c:?}");
        }
    }

    #[test]
    fn test_parse_sequence() {
        let actions = KeypadAction::parse_sequence("12 + 3 =").unwrap();
        assert_eq!(
            actions,
            vec![
                KeypadAction::Digit(1),
                KeypadAction::Digit(2),
                KeypadAction::Operator(Operator::Add),
                KeypadAction::Digit(3),
                KeypadAction::Equals,
            ]
        );
    }

    #[test]
    fn test_parse_sequence_rejects_unknown() {
        assert_eq!(KeypadAction::parse_sequence("1 + (2)"), Err('('));
    }

    // ===== Label tests =====

    #[test]
    fn test_labels_roundtrip_through_symbols() {
        for action in KeypadAction::standard_layout() {
            let label = action.label();
            let c = label.chars().next().unwrap();
            assert_eq!(KeypadAction::from_symbol(c), Some(action));
        }
    }

    // ===== Layout tests =====

    #[test]
    fn test_standard_layout_has_every_button_once() {
        let layout = KeypadAction::standard_layout();
        assert_eq!(layout.len(), 17);
        for d in 0..=9 {
            assert_eq!(
                layout.iter().filter(|a| **a == KeypadAction::Digit(d)).count(),
                1
            );
        }
        for op in Operator::ALL {
            assert!(layout.contains(&KeypadAction::Operator(op)));
        }
        assert!(layout.contains(&KeypadAction::Equals));
        assert!(layout.contains(&KeypadAction::Clear));
        assert!(layout.contains(&KeypadAction::Backspace));
    }
}
