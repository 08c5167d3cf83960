//! Named substances with a derived normal boiling point.
//!
//! A molecule is defined by one known boiling point `(T, p)` and an
//! [`EnthalpyRule`]. Its normal boiling point `Tb` (at 760 Torr) is derived
//! from that reference, and every other boiling point is extrapolated from
//! `(760 Torr, Tb)` with `ΔH = rule(Tb)`.

use bp_core::{Tolerances, ensure_positive, nearly_equal};
use bp_core::units::constants::{R_J_PER_MOL_K, STD_PRESSURE_TORR};

use crate::clausius::estimate;
use crate::enthalpy::EnthalpyRule;
use crate::error::{EstimateError, EstimateResult};

const MAX_BACK_SOLVE_ITERATIONS: usize = 100;
const BACK_SOLVE_REL_TOL: f64 = 1e-10;

/// A known boiling point: temperature `temperature_k` at `pressure_torr`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoint {
    pub pressure_torr: f64,
    pub temperature_k: f64,
}

impl ReferencePoint {
    pub fn new(pressure_torr: f64, temperature_k: f64) -> EstimateResult<Self> {
        Ok(Self {
            pressure_torr: ensure_positive(pressure_torr, "reference pressure")?,
            temperature_k: ensure_positive(temperature_k, "reference temperature")?,
        })
    }

    /// The normal boiling point `tb` as a reference.
    pub fn normal(tb: f64) -> EstimateResult<Self> {
        Self::new(STD_PRESSURE_TORR, tb)
    }

    /// At 760 Torr, within the default tolerances.
    pub fn is_standard(&self) -> bool {
        nearly_equal(self.pressure_torr, STD_PRESSURE_TORR, Tolerances::default())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    name: String,
    reference: ReferencePoint,
    rule: EnthalpyRule,
    normal_bp_k: f64,
}

impl Molecule {
    pub fn from_normal_boiling_point(
        name: impl Into<String>,
        tb: f64,
        rule: EnthalpyRule,
    ) -> EstimateResult<Self> {
        Self::from_reference(name, ReferencePoint::normal(tb)?, rule)
    }

    /// Define a molecule from a boiling point at an arbitrary pressure.
    pub fn from_reference(
        name: impl Into<String>,
        reference: ReferencePoint,
        rule: EnthalpyRule,
    ) -> EstimateResult<Self> {
        let normal_bp_k = normal_boiling_point_from(reference, rule)?;
        Ok(Self {
            name: name.into(),
            reference,
            rule,
            normal_bp_k,
        })
    }

    /// Same reference, different rule. `Tb` is re-derived unless the
    /// reference already is the normal boiling point.
    pub fn with_rule(self, rule: EnthalpyRule) -> EstimateResult<Self> {
        Self::from_reference(self.name, self.reference, rule)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reference(&self) -> ReferencePoint {
        self.reference
    }

    pub fn rule(&self) -> EnthalpyRule {
        self.rule
    }

    /// Boiling point at 760 Torr, K.
    pub fn normal_boiling_point(&self) -> f64 {
        self.normal_bp_k
    }

    /// Enthalpy of vaporization from the rule, J/mol.
    pub fn enthalpy(&self) -> EstimateResult<f64> {
        self.rule.enthalpy(self.normal_bp_k)
    }

    /// Boiling point (K) at `pressure_torr`.
    pub fn boiling_point_at(&self, pressure_torr: f64) -> EstimateResult<f64> {
        estimate(
            STD_PRESSURE_TORR,
            self.normal_bp_k,
            pressure_torr,
            Some(self.enthalpy()?),
        )
    }
}

/// Solve for `Tb` such that extrapolating from `(760 Torr, Tb)` with
/// `ΔH = rule(Tb)` lands on `reference`.
fn normal_boiling_point_from(reference: ReferencePoint, rule: EnthalpyRule) -> EstimateResult<f64> {
    let ReferencePoint {
        pressure_torr: p,
        temperature_k: t,
    } = reference;

    if reference.is_standard() {
        return Ok(t);
    }

    let log_ratio = p.ln() - STD_PRESSURE_TORR.ln();
    let tb = match rule.linear_coefficient() {
        // ΔH/Tb is constant, so Tb = T (1 - (R/c) ln(p/760)).
        Some(c) => t * (1.0 - R_J_PER_MOL_K / c * log_ratio),
        None => solve_the_rule(t, log_ratio)?,
    };

    check_normal_bp(tb)
}

/// Fixed point of `Tb = T (1 - ln(p/760) / (4.4 + ln Tb))`.
fn solve_the_rule(t: f64, log_ratio: f64) -> EstimateResult<f64> {
    let linear_guess = t * (1.0 - log_ratio * R_J_PER_MOL_K / crate::TROUTON_J_PER_MOL_K);
    let mut tb = if linear_guess.is_finite() && linear_guess > 0.0 {
        linear_guess
    } else {
        t
    };

    for iteration in 0..MAX_BACK_SOLVE_ITERATIONS {
        let next = check_normal_bp(t * (1.0 - log_ratio / (4.4 + tb.ln())))?;
        if (next - tb).abs() <= BACK_SOLVE_REL_TOL * next {
            tracing::trace!(iteration, tb = next, "T-H-E back-solve converged");
            return Ok(next);
        }
        tb = next;
    }

    tracing::debug!(t, log_ratio, tb, "T-H-E back-solve did not converge");
    Err(EstimateError::NonPhysicalResult {
        what: "normal boiling point",
        value: tb,
    })
}

fn check_normal_bp(tb: f64) -> EstimateResult<f64> {
    if tb.is_finite() && tb > 0.0 {
        Ok(tb)
    } else {
        Err(EstimateError::NonPhysicalResult {
            what: "normal boiling point",
            value: tb,
        })
    }
}
