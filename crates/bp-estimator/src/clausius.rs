//! Clausius–Clapeyron boiling point solver.
//!
//! Given one known point on the vapor-pressure curve `(p1, t1)`, a target
//! pressure `p2` and an enthalpy of vaporization `ΔH`, solve
//!
//! ```text
//! 1/t2 = 1/t1 - (R/ΔH) ln(p2/p1)
//! ```
//!
//! for `t2`. When no `ΔH` is supplied, Trouton's rule provides one from `t1`.

use bp_core::units::constants::R_J_PER_MOL_K;
use bp_core::{MolarEnergy, Pressure, Temperature, as_j_per_mol, as_k, as_pa, ensure_positive, k};

use crate::error::{EstimateError, EstimateResult};

/// Trouton's constant, ΔH/Tb in J/(mol·K).
pub const TROUTON_J_PER_MOL_K: f64 = 88.0;

/// Enthalpy of vaporization from Trouton's rule, J/mol.
///
/// This is an approximation that holds best when `t` is a normal boiling
/// point of a non-associating liquid. It is the fallback used by [`estimate`]
/// when the caller does not supply `ΔH`.
pub fn trouton_enthalpy(t: f64) -> f64 {
    TROUTON_J_PER_MOL_K * t
}

/// Estimate the boiling temperature at `p2` from a reference point `(p1, t1)`.
///
/// - `p1`, `p2`: pressures in any single consistent unit
/// - `t1`: Kelvin
/// - `delta_h`: J/mol; `None` falls back to [`trouton_enthalpy`] of `t1`
///
/// Returns `t2` in Kelvin.
///
/// # Errors
///
/// - [`EstimateError::InvalidInput`] for any non-positive or non-finite input
/// - [`EstimateError::NonPhysicalResult`] when `t2` would be non-positive or
///   infinite (the pressure drop demands more than `ΔH` can supply)
pub fn estimate(p1: f64, t1: f64, p2: f64, delta_h: Option<f64>) -> EstimateResult<f64> {
    let p1 = ensure_positive(p1, "p1")?;
    let t1 = ensure_positive(t1, "t1")?;
    let p2 = ensure_positive(p2, "p2")?;
    let delta_h = match delta_h {
        Some(h) => ensure_positive(h, "delta_h")?,
        None => {
            let h = trouton_enthalpy(t1);
            tracing::debug!(t1, delta_h = h, "no enthalpy supplied, using Trouton's rule");
            h
        }
    };

    solve(p1, t1, p2, delta_h)
}

/// Solve with already validated inputs.
///
/// Written as `t1 / (1 - (R t1/ΔH) ln(p2/p1))` so that `p2 == p1` returns
/// `t1` exactly. The log ratio is a difference of logs so extreme ratios do
/// not underflow to `ln(0)`.
fn solve(p1: f64, t1: f64, p2: f64, delta_h: f64) -> EstimateResult<f64> {
    let denominator = 1.0 - (R_J_PER_MOL_K * t1 / delta_h) * (p2.ln() - p1.ln());
    let t2 = t1 / denominator;

    if t2.is_finite() && t2 > 0.0 {
        tracing::trace!(p1, t1, p2, delta_h, t2, "clausius-clapeyron solve");
        Ok(t2)
    } else {
        Err(EstimateError::NonPhysicalResult {
            what: "t2",
            value: t2,
        })
    }
}

/// Estimation inputs as a front-end collects them; any field may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EstimateRequest {
    pub p1: Option<f64>,
    pub t1: Option<f64>,
    pub p2: Option<f64>,
    pub delta_h: Option<f64>,
}

impl EstimateRequest {
    pub fn new(p1: f64, t1: f64, p2: f64) -> Self {
        Self {
            p1: Some(p1),
            t1: Some(t1),
            p2: Some(p2),
            delta_h: None,
        }
    }

    pub fn with_delta_h(mut self, delta_h: f64) -> Self {
        self.delta_h = Some(delta_h);
        self
    }
}

/// [`estimate`] over a request, reporting absent required fields as
/// [`EstimateError::InvalidInput`].
pub fn estimate_request(request: &EstimateRequest) -> EstimateResult<f64> {
    let p1 = request.p1.ok_or(EstimateError::missing("p1"))?;
    let t1 = request.t1.ok_or(EstimateError::missing("t1"))?;
    let p2 = request.p2.ok_or(EstimateError::missing("p2"))?;
    estimate(p1, t1, p2, request.delta_h)
}

/// Unit-typed [`estimate`].
pub fn estimate_typed(
    p1: Pressure,
    t1: Temperature,
    p2: Pressure,
    delta_h: Option<MolarEnergy>,
) -> EstimateResult<Temperature> {
    let t2 = estimate(as_pa(p1), as_k(t1), as_pa(p2), delta_h.map(as_j_per_mol))?;
    Ok(k(t2))
}
