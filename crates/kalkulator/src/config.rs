//! Calculator configuration

use crate::format::ResultFormat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed
    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Display and session behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// How results are rendered
    pub result_format: ResultFormat,
    /// Text shown in the result field when a calculation fails
    pub error_indicator: String,
    /// Replace the input with the result after a successful `=`
    pub reenter_result: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            result_format: ResultFormat::Decimal,
            error_indicator: Self::DEFAULT_ERROR_INDICATOR.to_string(),
            reenter_result: true,
        }
    }
}

impl CalculatorConfig {
    /// Text shown for failed calculations unless overridden
    pub const DEFAULT_ERROR_INDICATOR: &'static str = "Error";

    /// Create default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the result format
    #[must_use]
    pub const fn with_result_format(mut self, format: ResultFormat) -> Self {
        self.result_format = format;
        self
    }

    /// Set the error indicator text
    #[must_use]
    pub fn with_error_indicator(mut self, indicator: impl Into<String>) -> Self {
        self.error_indicator = indicator.into();
        self
    }

    /// Enable or disable re-entering results into the input
    #[must_use]
    pub const fn with_reenter_result(mut self, enabled: bool) -> Self {
        self.reenter_result = enabled;
        self
    }

    /// Parse configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize configuration to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
