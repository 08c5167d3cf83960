//! Unit-aware numeric input.
//!
//! Front-ends take text such as `"100 C"`, `"10 mmHg"` or `"40.7 kJ/mol"` and
//! need one number in the calculator's working unit:
//!
//! - temperature: Kelvin (bare numbers are Kelvin)
//! - pressure: Torr (bare numbers are Torr)
//! - molar enthalpy: J/mol (bare numbers are J/mol)
//!
//! Parsing only converts. Range checks (positive pressure, absolute
//! temperature above zero) belong to the estimator so that every front-end
//! reports them the same way.

use bp_core::celsius_to_k;
use bp_core::units::constants::PA_PER_TORR;
use std::fmt;
use thiserror::Error;

const PA_PER_PSI: f64 = 6_894.757;
const J_PER_CAL: f64 = 4.184;

/// Dimension/quantity family for a numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Temperature (canonical: Kelvin)
    Temperature,
    /// Absolute pressure (canonical: Torr)
    Pressure,
    /// Molar enthalpy of vaporization (canonical: J/mol)
    MolarEnthalpy,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "Temperature"),
            Self::Pressure => write!(f, "Pressure"),
            Self::MolarEnthalpy => write!(f, "Molar Enthalpy"),
        }
    }
}

/// Error in unit parsing or conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// Input text did not parse to a number + optional unit
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Unit not recognized for this quantity
    #[error("Unknown unit '{unit}' for {quantity}")]
    UnknownUnit { unit: String, quantity: Quantity },
    /// Unit not allowed for this quantity (plain "psi" requires "psia")
    #[error("Ambiguous unit '{unit}': {reason}")]
    AmbiguousUnit { unit: String, reason: String },
}

/// Parse a quantity value from user input text into its canonical unit.
pub fn parse_quantity(raw_text: &str, quantity: Quantity) -> Result<f64, UnitError> {
    let trimmed = raw_text.trim();

    match quantity {
        Quantity::Temperature => parse_temperature(trimmed),
        Quantity::Pressure => parse_pressure(trimmed),
        Quantity::MolarEnthalpy => parse_molar_enthalpy(trimmed),
    }
}

/// Parse temperature in various units, return Kelvin.
fn parse_temperature(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let kelvin = match unit.to_lowercase().as_str() {
        "" | "k" | "kelvin" => value,
        "c" | "°c" | "℃" | "celsius" => celsius_to_k(value),
        "f" | "°f" | "fahrenheit" => (value + 459.67) * 5.0 / 9.0,
        "r" | "°r" | "rankine" => value * 5.0 / 9.0,
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::Temperature,
            });
        }
    };

    Ok(kelvin)
}

/// Parse absolute pressure in various units, return Torr.
fn parse_pressure(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let torr = match unit.to_lowercase().as_str() {
        "" | "torr" | "mmhg" => value,
        "pa" | "pascal" => value / PA_PER_TORR,
        "kpa" => value * 1e3 / PA_PER_TORR,
        "mpa" => value * 1e6 / PA_PER_TORR,
        "bar" => value * 1e5 / PA_PER_TORR,
        "mbar" | "millibar" => value * 100.0 / PA_PER_TORR,
        "atm" => value * bp_core::units::constants::STD_PRESSURE_TORR,
        "psia" => value * PA_PER_PSI / PA_PER_TORR,
        "psi" => {
            return Err(UnitError::AmbiguousUnit {
                unit,
                reason: "Use 'psia'; boiling points need absolute pressure".to_string(),
            });
        }
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::Pressure,
            });
        }
    };

    Ok(torr)
}

/// Parse molar enthalpy, return J/mol.
fn parse_molar_enthalpy(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let j_mol = match unit.to_lowercase().as_str() {
        "" | "j/mol" => value,
        "kj/mol" => value * 1e3,
        "cal/mol" => value * J_PER_CAL,
        "kcal/mol" => value * J_PER_CAL * 1e3,
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::MolarEnthalpy,
            });
        }
    };

    Ok(j_mol)
}

/// Split a value+unit string into (numeric_value, unit_string).
///
/// Examples:
/// - "70F" -> (70.0, "F")
/// - "10 mmHg" -> (10.0, "mmHg")
/// - "300" -> (300.0, "")
fn split_value_and_unit(input: &str) -> Result<(f64, String), UnitError> {
    let trimmed = input.trim();

    // Find where the numeric part ends
    let split_idx = trimmed
        .find(|c: char| !c.is_ascii_digit() && !matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        .unwrap_or(trimmed.len());

    let (num_part, unit_part) = trimmed.split_at(split_idx);

    let value: f64 = num_part.trim().parse().map_err(|_| {
        UnitError::ParseError(format!("Could not parse numeric value from '{}'", input))
    })?;

    Ok((value, unit_part.trim().to_string()))
}
