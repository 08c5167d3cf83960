//! Estimation errors.

use bp_core::CoreError;
use std::fmt;
use thiserror::Error;

/// Result type for estimation.
pub type EstimateResult<T> = Result<T, EstimateError>;

/// What was wrong with a rejected input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputIssue {
    Missing,
    NonFinite(f64),
    NonPositive(f64),
}

impl fmt::Display for InputIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "value is missing"),
            Self::NonFinite(v) => write!(f, "value {} is not finite", v),
            Self::NonPositive(v) => write!(f, "value {} must be greater than zero", v),
        }
    }
}

/// The two ways an estimate can fail. Neither is retried or clamped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimateError {
    /// A required input was missing, non-positive or non-finite.
    #[error("Invalid input for {field}: {issue}")]
    InvalidInput {
        field: &'static str,
        issue: InputIssue,
    },

    /// The solved temperature is non-positive or non-finite.
    #[error("Non-physical result for {what}: {value}")]
    NonPhysicalResult { what: &'static str, value: f64 },
}

impl EstimateError {
    pub fn missing(field: &'static str) -> Self {
        Self::InvalidInput {
            field,
            issue: InputIssue::Missing,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    pub fn is_non_physical(&self) -> bool {
        matches!(self, Self::NonPhysicalResult { .. })
    }
}

impl From<CoreError> for EstimateError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NonFinite { what, value } => EstimateError::InvalidInput {
                field: what,
                issue: InputIssue::NonFinite(value),
            },
            CoreError::NonPositive { what, value } => EstimateError::InvalidInput {
                field: what,
                issue: InputIssue::NonPositive(value),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EstimateError::missing("p2");
        assert!(err.to_string().contains("p2"));
        assert!(err.to_string().contains("missing"));

        let err = EstimateError::NonPhysicalResult {
            what: "t2",
            value: -12.0,
        };
        assert!(err.to_string().contains("Non-physical"));
    }

    #[test]
    fn core_error_becomes_invalid_input() {
        let err: EstimateError = CoreError::NonPositive {
            what: "p1",
            value: 0.0,
        }
        .into();
        assert_eq!(
            err,
            EstimateError::InvalidInput {
                field: "p1",
                issue: InputIssue::NonPositive(0.0),
            }
        );
        assert!(err.is_invalid_input());
        assert!(!err.is_non_physical());
    }
}
