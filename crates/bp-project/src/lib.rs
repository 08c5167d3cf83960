//! bp-project: boiling point comparison file format and validation.
//!
//! A comparison names a pressure range and the molecules whose boiling curves
//! are evaluated over it. Files are YAML or JSON.

pub mod compile;
pub mod schema;
pub mod validate;

pub use compile::{compile_molecule, compile_sweep};
pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_comparison};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unit error in {field}: {source}")]
    Unit {
        field: &'static str,
        source: bp_estimator::UnitError,
    },

    #[error("Estimate error: {0}")]
    Estimate(#[from] bp_estimator::EstimateError),

    #[error("Sweep error: {0}")]
    Sweep(#[from] bp_estimator::SweepError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn parse_yaml(content: &str) -> ProjectResult<Comparison> {
    let comparison: Comparison = serde_yaml::from_str(content)?;
    validate_comparison(&comparison)?;
    Ok(comparison)
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<Comparison> {
    let content = std::fs::read_to_string(path)?;
    parse_yaml(&content)
}

pub fn save_yaml(path: &std::path::Path, comparison: &Comparison) -> ProjectResult<()> {
    validate_comparison(comparison)?;
    let content = serde_yaml::to_string(comparison)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<Comparison> {
    let content = std::fs::read_to_string(path)?;
    let comparison: Comparison = serde_json::from_str(&content)?;
    validate_comparison(&comparison)?;
    Ok(comparison)
}

pub fn save_json(path: &std::path::Path, comparison: &Comparison) -> ProjectResult<()> {
    validate_comparison(comparison)?;
    let content = serde_json::to_string_pretty(comparison)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` is JSON, anything else YAML.
pub fn load(path: &std::path::Path) -> ProjectResult<Comparison> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_json(path),
        _ => load_yaml(path),
    }
}
