//! bp-core: stable foundation for boilpoint.
//!
//! Contains:
//! - units (uom SI types, constructors and physical constants)
//! - numeric (Real + tolerances + float guards)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
