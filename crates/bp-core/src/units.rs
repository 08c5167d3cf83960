// bp-core/src/units.rs

use uom::si::f64::{
    MolarEnergy as UomMolarEnergy, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type MolarEnergy = UomMolarEnergy;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn torr(v: f64) -> Pressure {
    pa(v * constants::PA_PER_TORR)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn j_per_mol(v: f64) -> MolarEnergy {
    use uom::si::molar_energy::joule_per_mole;
    MolarEnergy::new::<joule_per_mole>(v)
}

#[inline]
pub fn as_pa(p: Pressure) -> f64 {
    use uom::si::pressure::pascal;
    p.get::<pascal>()
}

#[inline]
pub fn as_torr(p: Pressure) -> f64 {
    as_pa(p) / constants::PA_PER_TORR
}

#[inline]
pub fn as_k(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

#[inline]
pub fn as_j_per_mol(h: MolarEnergy) -> f64 {
    use uom::si::molar_energy::joule_per_mole;
    h.get::<joule_per_mole>()
}

#[inline]
pub fn celsius_to_k(c: f64) -> f64 {
    c + constants::ZERO_CELSIUS_K
}

#[inline]
pub fn k_to_celsius(t: f64) -> f64 {
    t - constants::ZERO_CELSIUS_K
}

pub mod constants {
    /// Ideal gas constant, J/(mol·K).
    pub const R_J_PER_MOL_K: f64 = 8.314;

    /// Standard atmosphere in Torr; the reference pressure of a normal boiling point.
    pub const STD_PRESSURE_TORR: f64 = 760.0;

    pub const STD_PRESSURE_PA: f64 = 101_325.0;

    pub const PA_PER_TORR: f64 = STD_PRESSURE_PA / STD_PRESSURE_TORR;

    pub const ZERO_CELSIUS_K: f64 = 273.15;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = pa(101_325.0);
        let _t = k(300.0);
        let _h = j_per_mol(40_700.0);
    }

    #[test]
    fn torr_roundtrips_through_pascal() {
        let p = torr(constants::STD_PRESSURE_TORR);
        assert!((as_pa(p) - constants::STD_PRESSURE_PA).abs() < 1e-9);
        assert!((as_torr(p) - 760.0).abs() < 1e-9);
    }

    #[test]
    fn celsius_offsets() {
        assert!((celsius_to_k(100.0) - 373.15).abs() < 1e-12);
        assert!((k_to_celsius(273.15)).abs() < 1e-12);
        assert!((as_k(k(42.0)) - 42.0).abs() < 1e-12);
        assert!((as_j_per_mol(j_per_mol(1.5)) - 1.5).abs() < 1e-12);
    }
}
