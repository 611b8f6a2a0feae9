//! Calculator session state
//!
//! Drives the input buffer from keypad actions and keeps the result field.
//! A failed calculation shows the error indicator but never touches the input,
//! so the entry can be corrected.

use crate::config::CalculatorConfig;
use crate::core::input::InputBuffer;
use crate::core::{CalcResult, Operator};
use crate::evaluate_expression_with;
use crate::keypad::KeypadAction;
use tracing::{trace, warn};

/// Calculator application state
#[derive(Debug, Default)]
pub struct Calculator {
    /// Expression being entered
    input: InputBuffer,
    /// Result field (empty until the first `=`)
    result: Option<String>,
    config: CalculatorConfig,
}

impl Calculator {
    /// Creates a calculator with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with custom configuration
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            input: InputBuffer::new(),
            result: None,
            config,
        }
    }

    /// Returns the current input expression
    #[must_use]
    pub fn input(&self) -> &str {
        self.input.as_str()
    }

    /// Returns the result field, if anything has been calculated
    #[must_use]
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Returns the result field as a display string (empty when unset)
    #[must_use]
    pub fn result_display(&self) -> &str {
        self.result.as_deref().unwrap_or_default()
    }

    /// Returns the active configuration
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Dispatches one keypad action
    pub fn handle(&mut self, action: KeypadAction) {
        trace!(?action, input = self.input.as_str(), "keypad action");
        match action {
            KeypadAction::Digit(d) => self.press_digit(d),
            KeypadAction::Operator(op) => self.press_operator(op),
            KeypadAction::Equals => {
                if let Err(err) = self.equals() {
                    trace!(%err, "equals failed");
                }
            }
            KeypadAction::Clear => self.clear(),
            KeypadAction::Backspace => self.backspace(),
        }
    }

    /// Handles every action in order
    pub fn replay(&mut self, actions: impl IntoIterator<Item = KeypadAction>) {
        for action in actions {
            self.handle(action);
        }
    }

    /// Appends a digit to the input
    pub fn press_digit(&mut self, digit: u8) {
        if !self.input.push_digit(digit) {
            warn!(digit, "ignoring out-of-range digit");
        }
    }

    /// Appends an operator unless one was just entered
    pub fn press_operator(&mut self, op: Operator) {
        if !self.input.push_operator(op) {
            trace!(%op, "operator rejected");
        }
    }

    /// Removes the last entry from the input
    pub fn backspace(&mut self) {
        self.input.backspace();
    }

    /// Clears input and result
    pub fn clear(&mut self) {
        self.input.clear();
        self.result = None;
    }

    /// Evaluates the input and updates the result field.
    ///
    /// On success the formatted value is shown and, when configured, becomes
    /// the new input. On failure the error indicator is shown and the input
    /// is left as it was.
    pub fn equals(&mut self) -> CalcResult<String> {
        let outcome = evaluate_expression_with(self.input.as_str(), &self.config);
        match &outcome {
            Ok(display) => {
                self.result = Some(display.clone());
                if self.config.reenter_result {
                    self.input.replace(display.clone());
                }
            }
            Err(_) => {
                self.result = Some(self.config.error_indicator.clone());
            }
        }
        outcome
    }
}
