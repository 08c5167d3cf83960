//! Error types for the bp-cli front-end.

use bp_estimator::{EstimateError, UnitError, UnknownRule};
use bp_project::ProjectError;

/// Everything a command can fail with, surfaced to the user as-is.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Estimate(#[from] EstimateError),

    #[error("Could not read {field}: {source}")]
    Unit {
        field: &'static str,
        source: UnitError,
    },

    #[error("{0}")]
    Rule(#[from] UnknownRule),

    #[error("Comparison file error: {0}")]
    Project(#[from] ProjectError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for bp-cli commands.
pub type AppResult<T> = Result<T, AppError>;
