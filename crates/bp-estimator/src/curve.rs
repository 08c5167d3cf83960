//! Boiling curves: a molecule's boiling point across a pressure sweep.
//!
//! A failed point (for example a non-physical extrapolation far from the
//! reference) is recorded as `None` and does not abort the curve.

use bp_core::k_to_celsius;

use crate::molecule::Molecule;
use crate::sweeps::PressureSweep;

#[derive(Debug, Clone, PartialEq)]
pub struct BoilingCurve {
    pub molecule: String,
    pub pressures_torr: Vec<f64>,
    /// Boiling points in K, `None` where the estimate failed
    pub temperatures_k: Vec<Option<f64>>,
    pub num_successful: usize,
    pub num_failed: usize,
}

impl BoilingCurve {
    /// Boiling points in °C (failed points stay `None`).
    pub fn temperatures_celsius(&self) -> Vec<Option<f64>> {
        self.temperatures_k
            .iter()
            .map(|t| t.map(k_to_celsius))
            .collect()
    }

    /// `(pressure, temperature)` pairs for successful points only.
    pub fn successful_points(&self) -> Vec<(f64, f64)> {
        self.pressures_torr
            .iter()
            .zip(&self.temperatures_k)
            .filter_map(|(p, t)| t.map(|t| (*p, t)))
            .collect()
    }
}

pub fn boiling_curve(molecule: &Molecule, sweep: &PressureSweep) -> BoilingCurve {
    let pressures = sweep.generate_points();
    let mut temperatures = Vec::with_capacity(pressures.len());
    let mut num_successful = 0;
    let mut num_failed = 0;

    for &p in &pressures {
        match molecule.boiling_point_at(p) {
            Ok(t) => {
                temperatures.push(Some(t));
                num_successful += 1;
            }
            Err(err) => {
                tracing::debug!(molecule = molecule.name(), pressure_torr = p, %err, "boiling point failed");
                temperatures.push(None);
                num_failed += 1;
            }
        }
    }

    BoilingCurve {
        molecule: molecule.name().to_string(),
        pressures_torr: pressures,
        temperatures_k: temperatures,
        num_successful,
        num_failed,
    }
}

/// One curve per molecule over a shared sweep.
pub fn boiling_curves(molecules: &[Molecule], sweep: &PressureSweep) -> Vec<BoilingCurve> {
    molecules.iter().map(|m| boiling_curve(m, sweep)).collect()
}
