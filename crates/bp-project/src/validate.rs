//! Comparison validation logic.

use crate::compile::{compile_molecule, compile_sweep};
use crate::schema::Comparison;
use std::collections::HashSet;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate molecule name: {name}")]
    DuplicateName { name: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Comparison has no molecules")]
    NoMolecules,

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_comparison(comparison: &Comparison) -> Result<(), ValidationError> {
    if comparison.version == 0 || comparison.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: comparison.version,
        });
    }

    if comparison.molecules.is_empty() {
        return Err(ValidationError::NoMolecules);
    }

    let range = &comparison.pressure_range;
    compile_sweep(range).map_err(|e| ValidationError::InvalidValue {
        field: "pressure_range".to_string(),
        value: format!("{} .. {} ({} points)", range.start, range.end, range.points),
        reason: e.to_string(),
    })?;

    let mut names = HashSet::new();
    for molecule in &comparison.molecules {
        if molecule.name.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "molecules.name".to_string(),
                value: format!("{:?}", molecule.name),
                reason: "Name must not be empty".to_string(),
            });
        }
        if !names.insert(molecule.name.as_str()) {
            return Err(ValidationError::DuplicateName {
                name: molecule.name.clone(),
            });
        }
        compile_molecule(molecule).map_err(|e| ValidationError::InvalidValue {
            field: format!("molecules[{}]", molecule.name),
            value: match &molecule.pressure {
                Some(p) => format!("{} at {}", molecule.temperature, p),
                None => molecule.temperature.clone(),
            },
            reason: e.to_string(),
        })?;
    }

    Ok(())
}
