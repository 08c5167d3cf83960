//! bp-estimator: boiling point estimation for boilpoint.
//!
//! Provides:
//! - The Clausius–Clapeyron solver (`estimate` and its typed/request variants)
//! - Enthalpy-of-vaporization rules (Trouton's rule and friends)
//! - `Molecule`, a named substance with a derived normal boiling point
//! - Unit-aware parsing of user text inputs
//! - Pressure sweeps producing boiling curves
//!
//! # Model
//!
//! The integrated Clausius–Clapeyron equation with a constant enthalpy of
//! vaporization:
//!
//! ```text
//! ln(p2/p1) = -(ΔH/R) (1/t2 - 1/t1)
//! ```
//!
//! Only the pressure ratio enters, so the untyped API accepts any consistent
//! pressure unit. Temperatures are always Kelvin, ΔH is J/mol.
//!
//! # Example
//!
//! ```
//! use bp_estimator::estimate;
//!
//! // Water at 100 Torr, from its normal boiling point.
//! let t2 = estimate(760.0, 373.15, 100.0, Some(40_700.0)).unwrap();
//! assert!(t2 > 320.0 && t2 < 330.0);
//! ```

pub mod clausius;
pub mod curve;
pub mod enthalpy;
pub mod error;
pub mod molecule;
pub mod sweeps;
pub mod units;

// Re-exports for ergonomics
pub use clausius::{
    EstimateRequest, TROUTON_J_PER_MOL_K, estimate, estimate_request, estimate_typed,
    trouton_enthalpy,
};
pub use curve::{BoilingCurve, boiling_curve, boiling_curves};
pub use enthalpy::{EnthalpyRule, UnknownRule};
pub use error::{EstimateError, EstimateResult, InputIssue};
pub use molecule::{Molecule, ReferencePoint};
pub use sweeps::{PressureSweep, SweepError, SweepType};
pub use units::{Quantity, UnitError, parse_quantity};
