//! Enthalpy-of-vaporization rules.
//!
//! Each rule maps a normal boiling point `Tb` (K) to an estimated `ΔH`
//! (J/mol). All of them are empirical correlations over `ΔH/Tb`.

use bp_core::ensure_positive;
use bp_core::units::constants::R_J_PER_MOL_K;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::clausius::TROUTON_J_PER_MOL_K;
use crate::error::EstimateResult;

/// ΔH/Tb for small, weakly interacting molecules such as methane.
pub const METHANE_J_PER_MOL_K: f64 = 73.0;

/// ΔH/Tb for hydrogen-bonded liquids such as water.
pub const WATER_J_PER_MOL_K: f64 = 109.0;

/// How to estimate `ΔH` from a normal boiling point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum EnthalpyRule {
    /// ΔH = 88 Tb
    #[default]
    Trouton,
    /// ΔH = 73 Tb
    Methane,
    /// ΔH = 109 Tb
    Water,
    /// ΔH = (4.4 + ln Tb) R Tb
    #[cfg_attr(feature = "serde", serde(rename = "the"))]
    TroutonHildebrandEverett,
}

impl EnthalpyRule {
    pub const ALL: [EnthalpyRule; 4] = [
        Self::Trouton,
        Self::Methane,
        Self::Water,
        Self::TroutonHildebrandEverett,
    ];

    /// Estimated enthalpy of vaporization (J/mol) for normal boiling point `tb` (K).
    pub fn enthalpy(self, tb: f64) -> EstimateResult<f64> {
        let tb = ensure_positive(tb, "normal boiling point")?;
        Ok(self.entropy(tb) * tb)
    }

    /// Entropy of vaporization ΔH/Tb in J/(mol·K).
    fn entropy(self, tb: f64) -> f64 {
        match self.linear_coefficient() {
            Some(c) => c,
            None => (4.4 + tb.ln()) * R_J_PER_MOL_K,
        }
    }

    /// `c` in `ΔH = c Tb` when the rule is linear in `Tb`.
    pub fn linear_coefficient(self) -> Option<f64> {
        match self {
            Self::Trouton => Some(TROUTON_J_PER_MOL_K),
            Self::Methane => Some(METHANE_J_PER_MOL_K),
            Self::Water => Some(WATER_J_PER_MOL_K),
            Self::TroutonHildebrandEverett => None,
        }
    }

    /// Short identifier, accepted by [`FromStr`].
    pub fn id(self) -> &'static str {
        match self {
            Self::Trouton => "trouton",
            Self::Methane => "methane",
            Self::Water => "water",
            Self::TroutonHildebrandEverett => "the",
        }
    }
}

impl fmt::Display for EnthalpyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trouton => write!(f, "Trouton's rule"),
            Self::Methane => write!(f, "Methane-like"),
            Self::Water => write!(f, "Water-like"),
            Self::TroutonHildebrandEverett => write!(f, "T-H-E rule"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown enthalpy rule '{0}' (expected one of: trouton, methane, water, the)")]
pub struct UnknownRule(pub String);

impl FromStr for EnthalpyRule {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trouton" | "trouton's rule" => Ok(Self::Trouton),
            "methane" => Ok(Self::Methane),
            "water" => Ok(Self::Water),
            "the" | "t-h-e" | "t-h-e rule" | "trouton-hildebrand-everett" => {
                Ok(Self::TroutonHildebrandEverett)
            }
            _ => Err(UnknownRule(s.to_string())),
        }
    }
}
