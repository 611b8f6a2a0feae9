//! Accumulated keypad input
//!
//! The buffer holds the expression exactly as the converter expects it:
//! digits appended directly and operators padded with one space on each side.

use crate::core::Operator;

/// Expression text built up from keypad presses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    /// Creates an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current expression text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns true if nothing has been entered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Appends a digit. Returns false (and leaves the buffer alone) for
    /// values above 9.
    pub fn push_digit(&mut self, digit: u8) -> bool {
        match char::from_digit(u32::from(digit), 10) {
            Some(ch) => {
                self.text.push(ch);
                true
            }
            None => false,
        }
    }

    /// Appends `" op "` unless the buffer is empty or already ends in a space.
    ///
    /// Returns whether the operator was accepted.
    pub fn push_operator(&mut self, op: Operator) -> bool {
        if self.text.is_empty() || self.text.ends_with(' ') {
            return false;
        }
        self.text.push(' ');
        self.text.push_str(op.symbol());
        self.text.push(' ');
        true
    }

    /// Empties the buffer
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Removes the last entered token character.
    ///
    /// Trailing whitespace is trimmed before and after the removal, so a
    /// padded operator (`"12 + "`) goes away together with its leading space
    /// and the buffer never ends in a space afterwards.
    pub fn backspace(&mut self) {
        if self.text.is_empty() {
            return;
        }
        self.trim_end();
        self.text.pop();
        self.trim_end();
    }

    /// Replaces the whole expression, e.g. with a computed result
    pub fn replace(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    fn trim_end(&mut self) {
        let kept = self.text.trim_end().len();
        self.text.truncate(kept);
    }
}
