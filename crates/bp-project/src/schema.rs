//! Comparison file schema definitions.
//!
//! Quantities are stored as unit-tagged text (`"78.4 C"`, `"20 torr"`) so the
//! file keeps what the user typed; they are parsed when compiled.

use bp_estimator::{EnthalpyRule, SweepType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comparison {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub pressure_range: PressureRangeDef,
    #[serde(default)]
    pub molecules: Vec<MoleculeDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PressureRangeDef {
    pub start: String,
    pub end: String,
    #[serde(default = "default_points")]
    pub points: usize,
    #[serde(default)]
    pub spacing: SweepType,
}

fn default_points() -> usize {
    100
}

impl Default for PressureRangeDef {
    fn default() -> Self {
        Self {
            start: "0.1 torr".to_string(),
            end: "7 torr".to_string(),
            points: default_points(),
            spacing: SweepType::Linear,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoleculeDef {
    pub name: String,
    /// Known boiling temperature.
    pub temperature: String,
    /// Pressure of the known boiling point; absent means 760 Torr.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<String>,
    #[serde(default)]
    pub rule: EnthalpyRule,
}
