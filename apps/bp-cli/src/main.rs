mod error;

use bp_core::k_to_celsius;
use bp_core::units::constants::STD_PRESSURE_TORR;
use bp_estimator::{
    BoilingCurve, EnthalpyRule, EstimateRequest, Molecule, Quantity, ReferencePoint,
    TROUTON_J_PER_MOL_K, boiling_curves, estimate_request, parse_quantity,
};
use clap::{Parser, Subcommand};
use error::{AppError, AppResult};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "bp-cli")]
#[command(about = "Boiling point estimator - Clausius-Clapeyron extrapolation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the boiling point at a target pressure from a known one
    Estimate {
        /// Reference pressure (e.g. "760", "1 atm", "20 mmHg"; bare numbers are Torr)
        #[arg(long, allow_hyphen_values = true)]
        p1: Option<String>,
        /// Boiling temperature at the reference pressure (e.g. "100 C"; bare numbers are K)
        #[arg(long, allow_hyphen_values = true)]
        t1: Option<String>,
        /// Target pressure
        #[arg(long, allow_hyphen_values = true)]
        p2: Option<String>,
        /// Enthalpy of vaporization (e.g. "40.7 kJ/mol"); Trouton's rule if omitted
        #[arg(long, allow_hyphen_values = true)]
        delta_h: Option<String>,
    },
    /// Derive the normal boiling point (760 Torr) from a boiling point at another pressure
    NormalBp {
        /// Known boiling temperature
        #[arg(long, allow_hyphen_values = true)]
        temperature: String,
        /// Pressure of the known boiling point
        #[arg(long, allow_hyphen_values = true)]
        pressure: String,
        /// Enthalpy rule: trouton, methane, water, the
        #[arg(long, default_value = "trouton")]
        rule: String,
    },
    /// Evaluate boiling curves for every molecule in a comparison file
    Curve {
        /// Path to the comparison YAML/JSON file
        comparison_path: PathBuf,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a comparison file
    Validate {
        /// Path to the comparison YAML/JSON file
        comparison_path: PathBuf,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Estimate {
            p1,
            t1,
            p2,
            delta_h,
        } => cmd_estimate(
            p1.as_deref(),
            t1.as_deref(),
            p2.as_deref(),
            delta_h.as_deref(),
        ),
        Commands::NormalBp {
            temperature,
            pressure,
            rule,
        } => cmd_normal_bp(&temperature, &pressure, &rule),
        Commands::Curve {
            comparison_path,
            output,
        } => cmd_curve(&comparison_path, output.as_deref()),
        Commands::Validate { comparison_path } => cmd_validate(&comparison_path),
    }
}

fn cmd_estimate(
    p1: Option<&str>,
    t1: Option<&str>,
    p2: Option<&str>,
    delta_h: Option<&str>,
) -> AppResult<()> {
    let request = EstimateRequest {
        p1: parse_optional(p1, Quantity::Pressure, "p1")?,
        t1: parse_optional(t1, Quantity::Temperature, "t1")?,
        p2: parse_optional(p2, Quantity::Pressure, "p2")?,
        delta_h: parse_optional(delta_h, Quantity::MolarEnthalpy, "delta_h")?,
    };
    tracing::debug!(?request, "estimate");

    let t2 = estimate_request(&request)?;

    if request.delta_h.is_none() {
        if let Some(t1) = request.t1 {
            println!(
                "ΔH not given; using Trouton's rule: {} J/(mol·K) × {:.2} K = {:.0} J/mol",
                TROUTON_J_PER_MOL_K,
                t1,
                TROUTON_J_PER_MOL_K * t1
            );
        }
    }
    println!(
        "✓ Boiling point at {} Torr: {:.2} K ({:.2} °C)",
        request.p2.unwrap_or_default(),
        t2,
        k_to_celsius(t2)
    );
    Ok(())
}

fn cmd_normal_bp(temperature: &str, pressure: &str, rule: &str) -> AppResult<()> {
    let rule: EnthalpyRule = rule.parse()?;
    let reference = ReferencePoint::new(
        parse_required(pressure, Quantity::Pressure, "pressure")?,
        parse_required(temperature, Quantity::Temperature, "temperature")?,
    )?;

    let molecule = Molecule::from_reference("input", reference, rule)?;
    let tb = molecule.normal_boiling_point();
    println!(
        "✓ Normal boiling point ({} Torr, {}): {:.2} K ({:.2} °C)",
        STD_PRESSURE_TORR,
        rule,
        tb,
        k_to_celsius(tb)
    );
    println!("  ΔH ≈ {:.0} J/mol", molecule.enthalpy()?);
    Ok(())
}

fn cmd_curve(comparison_path: &Path, output: Option<&Path>) -> AppResult<()> {
    let comparison = bp_project::load(comparison_path)?;
    let molecules = comparison.compile_molecules()?;
    let sweep = comparison.compile_sweep()?;
    tracing::info!(%sweep, molecules = molecules.len(), "evaluating boiling curves");

    let curves = boiling_curves(&molecules, &sweep);
    for curve in &curves {
        if curve.num_failed > 0 {
            tracing::warn!(
                molecule = %curve.molecule,
                failed = curve.num_failed,
                "some boiling points could not be estimated"
            );
        }
    }
    let csv = curves_to_csv(&curves);
    let summary = normal_bp_summary(&molecules);

    // Write to file or stdout; with CSV on stdout the summary goes to stderr
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        print!("{}", summary);
        println!(
            "✓ Exported {} pressures × {} molecules to {}",
            sweep.num_points(),
            curves.len(),
            path.display()
        );
    } else {
        eprint!("{}", summary);
        print!("{}", csv);
    }

    Ok(())
}

fn cmd_validate(comparison_path: &Path) -> AppResult<()> {
    println!("Validating comparison: {}", comparison_path.display());
    let comparison = bp_project::load(comparison_path)?;
    println!(
        "✓ '{}' is valid ({} molecules)",
        comparison.name,
        comparison.molecules.len()
    );
    Ok(())
}

fn normal_bp_summary(molecules: &[Molecule]) -> String {
    let mut summary = format!("Boiling points at {} Torr:\n", STD_PRESSURE_TORR);
    for molecule in molecules {
        summary.push_str(&format!(
            "  - {}: {:.2} °C ({})\n",
            molecule.name(),
            k_to_celsius(molecule.normal_boiling_point()),
            molecule.rule()
        ));
    }
    summary
}

/// One row per pressure; one °C column per molecule, empty where the estimate failed.
fn curves_to_csv(curves: &[BoilingCurve]) -> String {
    let mut csv = String::from("pressure_torr");
    for curve in curves {
        csv.push(',');
        csv.push_str(&curve.molecule);
    }
    csv.push('\n');

    let Some(first) = curves.first() else {
        return csv;
    };
    let celsius: Vec<Vec<Option<f64>>> = curves.iter().map(|c| c.temperatures_celsius()).collect();
    for (row, p) in first.pressures_torr.iter().enumerate() {
        csv.push_str(&p.to_string());
        for column in &celsius {
            csv.push(',');
            if let Some(t) = column[row] {
                csv.push_str(&format!("{:.4}", t));
            }
        }
        csv.push('\n');
    }
    csv
}

fn parse_required(text: &str, quantity: Quantity, field: &'static str) -> AppResult<f64> {
    parse_quantity(text, quantity).map_err(|source| AppError::Unit { field, source })
}

fn parse_optional(
    text: Option<&str>,
    quantity: Quantity,
    field: &'static str,
) -> AppResult<Option<f64>> {
    text.map(|t| parse_required(t, quantity, field)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bp_estimator::{PressureSweep, SweepType, boiling_curve};
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn estimate_arguments_parse() {
        let cli = Cli::try_parse_from([
            "bp-cli", "estimate", "--p1", "1 atm", "--t1", "100 C", "--p2", "100",
        ])
        .unwrap();
        match cli.command {
            Commands::Estimate { p1, t1, p2, delta_h } => {
                assert_eq!(p1.as_deref(), Some("1 atm"));
                assert_eq!(t1.as_deref(), Some("100 C"));
                assert_eq!(p2.as_deref(), Some("100"));
                assert!(delta_h.is_none());
            }
            _ => panic!("expected estimate"),
        }
    }

    #[test]
    fn missing_field_surfaces_as_invalid_input() {
        let err = cmd_estimate(Some("760"), None, Some("100"), None).unwrap_err();
        assert!(matches!(err, AppError::Estimate(e) if e.is_invalid_input()));
    }

    #[test]
    fn bad_unit_names_the_field() {
        let err = cmd_estimate(Some("760"), Some("100 C"), Some("1 psi"), None).unwrap_err();
        assert!(matches!(err, AppError::Unit { field: "p2", .. }));
    }

    #[test]
    fn unknown_rule_is_rejected() {
        let err = cmd_normal_bp("90 C", "20 torr", "benzene").unwrap_err();
        assert!(matches!(err, AppError::Rule(_)));
    }

    #[test]
    fn csv_has_header_and_rows() {
        let water =
            Molecule::from_normal_boiling_point("Water", 373.15, EnthalpyRule::Water).unwrap();
        let sweep = PressureSweep::new(100.0, 760.0, 3, SweepType::Linear).unwrap();
        let csv = curves_to_csv(&[boiling_curve(&water, &sweep)]);

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "pressure_torr,Water");
        assert_eq!(lines[3], "760,100.0000");
    }

    #[test]
    fn csv_leaves_failed_points_empty() {
        let m = Molecule::from_normal_boiling_point("X", 2000.0, EnthalpyRule::Methane).unwrap();
        let sweep = PressureSweep::new(760.0, 1e30, 2, SweepType::Linear).unwrap();
        let csv = curves_to_csv(&[boiling_curve(&m, &sweep)]);
        assert!(csv.lines().nth(2).unwrap().ends_with(','));
    }

    #[test]
    fn summary_lists_each_normal_boiling_point() {
        let molecules = vec![
            Molecule::from_normal_boiling_point("Water", 373.15, EnthalpyRule::Water).unwrap(),
            Molecule::from_reference(
                "DMSO",
                ReferencePoint::new(20.0, 363.15).unwrap(),
                EnthalpyRule::Trouton,
            )
            .unwrap(),
        ];
        let summary = normal_bp_summary(&molecules);
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Boiling points at 760 Torr:");
        assert_eq!(lines[1], "  - Water: 100.00 °C (Water-like)");
        assert!(lines[2].starts_with("  - DMSO: "));
    }

    #[test]
    fn empty_curve_list_is_header_only() {
        assert_eq!(curves_to_csv(&[]), "pressure_torr\n");
    }
}
