//! Error types for the pattern generators.
//!
//! Validation failures are reported before any geometry is computed, so a caller never
//! receives a partial layout.

use thiserror::Error;

/// Errors that can occur while generating a dieline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    /// A field is non-finite, negative, zero where a size is required, or a zero count.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// A value is valid on its own but cannot be repaired by clamping.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    ParameterOutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The derived geometry would have a non-positive edge or overlapping features.
    #[error("Geometric inconsistency: {0}")]
    GeometricInconsistency(String),
}

impl PatternError {
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn out_of_range(name: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        Self::ParameterOutOfRange {
            name: name.into(),
            value,
            min,
            max,
        }
    }

    pub fn inconsistent(msg: impl Into<String>) -> Self {
        Self::GeometricInconsistency(msg.into())
    }
}

/// Result type for pattern generation
pub type PatternResult<T> = Result<T, PatternError>;

/// Reject NaN, infinities and negative values.
pub(crate) fn require_non_negative(name: &str, value: f64) -> PatternResult<f64> {
    if !value.is_finite() {
        return Err(PatternError::invalid(name, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(PatternError::invalid(
            name,
            format!("must not be negative (got {})", value),
        ));
    }
    Ok(value)
}

/// Like [`require_non_negative`] but zero is also rejected.
pub(crate) fn require_positive(name: &str, value: f64) -> PatternResult<f64> {
    let value = require_non_negative(name, value)?;
    if value == 0.0 {
        return Err(PatternError::invalid(name, "must be greater than zero"));
    }
    Ok(value)
}

pub(crate) fn require_count(name: &str, count: u32) -> PatternResult<u32> {
    if count == 0 {
        return Err(PatternError::invalid(name, "must be at least 1"));
    }
    Ok(count)
}

/// Returns `clamped`, logging when it differs from the raw input.
pub(crate) fn log_clamp(name: &str, raw: f64, clamped: f64) -> f64 {
    if (raw - clamped).abs() > boxy_core::EPSILON {
        tracing::debug!("Clamped {} from {} to {}", name, raw, clamped);
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PatternError::out_of_range("lock_length", 250.0, 0.0, 204.0);
        assert_eq!(
            err.to_string(),
            "Parameter 'lock_length' out of range: 250 (valid: 0..204)"
        );

        let err = PatternError::invalid("width", "must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Invalid value for 'width': must be greater than zero"
        );
    }

    #[test]
    fn test_validators() {
        assert_eq!(require_non_negative("a", 0.0), Ok(0.0));
        assert!(require_non_negative("a", -1.0).is_err());
        assert!(require_non_negative("a", f64::NAN).is_err());
        assert!(require_non_negative("a", f64::INFINITY).is_err());
        assert!(require_positive("a", 0.0).is_err());
        assert_eq!(require_positive("a", 2.5), Ok(2.5));
        assert!(require_count("n", 0).is_err());
        assert_eq!(require_count("n", 3), Ok(3));
    }
}
