//! Turn a validated comparison into estimator inputs.

use bp_estimator::{Molecule, PressureSweep, Quantity, ReferencePoint, parse_quantity};

use crate::schema::{Comparison, MoleculeDef, PressureRangeDef};
use crate::{ProjectError, ProjectResult};

pub fn compile_molecule(def: &MoleculeDef) -> ProjectResult<Molecule> {
    let temperature_k = parse_field(&def.temperature, Quantity::Temperature, "temperature")?;
    let reference = match &def.pressure {
        Some(text) => {
            let pressure_torr = parse_field(text, Quantity::Pressure, "pressure")?;
            ReferencePoint::new(pressure_torr, temperature_k)?
        }
        None => ReferencePoint::normal(temperature_k)?,
    };
    let molecule = Molecule::from_reference(def.name.clone(), reference, def.rule)?;
    tracing::debug!(
        name = molecule.name(),
        normal_bp_k = molecule.normal_boiling_point(),
        rule = %def.rule,
        "compiled molecule"
    );
    Ok(molecule)
}

pub fn compile_sweep(range: &PressureRangeDef) -> ProjectResult<PressureSweep> {
    let start = parse_field(&range.start, Quantity::Pressure, "pressure_range.start")?;
    let end = parse_field(&range.end, Quantity::Pressure, "pressure_range.end")?;
    Ok(PressureSweep::new(start, end, range.points, range.spacing)?)
}

impl Comparison {
    pub fn compile_molecules(&self) -> ProjectResult<Vec<Molecule>> {
        self.molecules.iter().map(compile_molecule).collect()
    }

    pub fn compile_sweep(&self) -> ProjectResult<PressureSweep> {
        compile_sweep(&self.pressure_range)
    }
}

fn parse_field(text: &str, quantity: Quantity, field: &'static str) -> ProjectResult<f64> {
    parse_quantity(text, quantity).map_err(|source| ProjectError::Unit { field, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bp_estimator::{EnthalpyRule, SweepType};

    fn water() -> MoleculeDef {
        MoleculeDef {
            name: "Water".to_string(),
            temperature: "100 C".to_string(),
            pressure: None,
            rule: EnthalpyRule::Water,
        }
    }

    #[test]
    fn normal_boiling_point_definition() {
        let m = compile_molecule(&water()).unwrap();
        assert!((m.normal_boiling_point() - 373.15).abs() < 1e-9);
        assert_eq!(m.rule(), EnthalpyRule::Water);
    }

    #[test]
    fn reference_pressure_definition() {
        let def = MoleculeDef {
            pressure: Some("20 mmHg".to_string()),
            temperature: "90 C".to_string(),
            ..water()
        };
        let m = compile_molecule(&def).unwrap();
        assert!(m.normal_boiling_point() > 363.15);
        assert!((m.boiling_point_at(20.0).unwrap() - 363.15).abs() < 1e-6);
    }

    #[test]
    fn bad_unit_names_the_field() {
        let def = MoleculeDef {
            pressure: Some("20 psi".to_string()),
            ..water()
        };
        match compile_molecule(&def) {
            Err(ProjectError::Unit { field, .. }) => assert_eq!(field, "pressure"),
            other => panic!("expected unit error, got {other:?}"),
        }
    }

    #[test]
    fn non_positive_temperature_is_invalid_input() {
        let def = MoleculeDef {
            temperature: "-5 K".to_string(),
            ..water()
        };
        assert!(matches!(
            compile_molecule(&def),
            Err(ProjectError::Estimate(e)) if e.is_invalid_input()
        ));
    }

    #[test]
    fn sweep_from_text() {
        let range = PressureRangeDef {
            start: "1 torr".to_string(),
            end: "1 atm".to_string(),
            points: 10,
            spacing: SweepType::Logarithmic,
        };
        let sweep = compile_sweep(&range).unwrap();
        assert_eq!(sweep.start_torr(), 1.0);
        assert!((sweep.end_torr() - 760.0).abs() < 1e-9);
        assert_eq!(sweep.generate_points().len(), 10);
    }
}
