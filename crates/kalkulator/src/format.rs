//! Result formatting for the display

use serde::{Deserialize, Serialize};

/// How a computed value is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultFormat {
    /// Always shows a fractional part (`11.0`); scientific notation with an
    /// upper-case `E` outside `[1e-3, 1e7)`.
    #[default]
    Decimal,
    /// Integers without a fraction (`11`), otherwise up to ten fractional
    /// digits with trailing zeros trimmed.
    Compact,
}

/// Formats a result value for display.
///
/// Non-finite values render as `Infinity`, `-Infinity` and `NaN` in every
/// format.
#[must_use]
pub fn format_result(value: f64, format: ResultFormat) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }

    match format {
        ResultFormat::Decimal => format_decimal(value),
        ResultFormat::Compact => format_compact(value),
    }
}

fn format_decimal(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 || (1e-3..1e7).contains(&magnitude) {
        // Debug keeps the ".0" on whole numbers
        return format!("{value:?}");
    }

    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => {
            format!("{mantissa}E{exponent}")
        }
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => scientific,
    }
}

fn format_compact(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let formatted = format!("{value:.10}");
        let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
        match trimmed {
            // Smaller than the last shown digit
            "0" | "-0" => format_decimal(value),
            _ => trimmed.to_string(),
        }
    }
}
