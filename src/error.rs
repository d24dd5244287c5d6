//! Error types for widget parameter validation.

use thiserror::Error;

/// Errors raised when a widget parameter is assigned an invalid value.
///
/// Every failure is reported at the point of assignment; the value being
/// replaced is left untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GaugeError {
    /// A ratio field was set outside `[0, 1]`
    #[error("{field} must be within [0, 1], got {value}")]
    OutOfRange { field: &'static str, value: f64 },

    /// A length or angle field was negative
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    /// NaN or infinity where a finite number is required
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}

pub type Result<T> = core::result::Result<T, GaugeError>;

/// Accept `value` if it is a finite ratio in `[0, 1]`.
pub(crate) fn check_ratio(field: &'static str, value: f64) -> Result<f64> {
    let value = check_finite(field, value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(GaugeError::OutOfRange { field, value });
    }
    Ok(value)
}

/// Accept `value` if it is finite and not negative.
pub(crate) fn check_non_negative(field: &'static str, value: f64) -> Result<f64> {
    let value = check_finite(field, value)?;
    if value < 0.0 {
        return Err(GaugeError::Negative { field, value });
    }
    Ok(value)
}

pub(crate) fn check_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GaugeError::NotFinite { field })
    }
}
