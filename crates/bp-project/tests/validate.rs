use bp_project::*;

const MINIMAL: &str = r#"
version: 1
name: Minimal
molecules:
  - name: Water
    temperature: 100 C
"#;

#[test]
fn defaults_fill_in() {
    let comparison = parse_yaml(MINIMAL).expect("minimal comparison should load");
    assert_eq!(comparison.pressure_range, PressureRangeDef::default());
    assert_eq!(comparison.molecules[0].rule, bp_estimator::EnthalpyRule::Trouton);
    assert!(comparison.molecules[0].pressure.is_none());

    let molecules = comparison.compile_molecules().unwrap();
    assert!((molecules[0].normal_boiling_point() - 373.15).abs() < 1e-9);
    assert_eq!(comparison.compile_sweep().unwrap().num_points(), 100);
}

#[test]
fn demo_file_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/solvents.yaml");
    let comparison = load(&path).expect("demo should load");
    assert_eq!(comparison.molecules.len(), 3);
    let molecules = comparison.compile_molecules().unwrap();
    let dmso = &molecules[2];
    assert!(dmso.normal_boiling_point() > 363.15);
}

#[test]
fn duplicate_names_rejected() {
    let yaml = r#"
version: 1
name: Dupes
molecules:
  - name: Water
    temperature: 100 C
  - name: Water
    temperature: 373 K
"#;
    assert!(matches!(
        parse_yaml(yaml),
        Err(ProjectError::Validation(ValidationError::DuplicateName { name })) if name == "Water"
    ));
}

#[test]
fn future_version_rejected() {
    let yaml = MINIMAL.replace("version: 1", "version: 9");
    assert!(matches!(
        parse_yaml(&yaml),
        Err(ProjectError::Validation(ValidationError::UnsupportedVersion { version: 9 }))
    ));
}

#[test]
fn empty_molecule_list_rejected() {
    let yaml = "version: 1\nname: Empty\n";
    assert!(matches!(
        parse_yaml(yaml),
        Err(ProjectError::Validation(ValidationError::NoMolecules))
    ));
}

#[test]
fn bad_pressure_range_rejected() {
    let yaml = format!(
        "{}pressure_range:\n  start: 5 torr\n  end: 5 torr\n",
        MINIMAL
    );
    match parse_yaml(&yaml) {
        Err(ProjectError::Validation(ValidationError::InvalidValue { field, .. })) => {
            assert_eq!(field, "pressure_range")
        }
        other => panic!("expected invalid pressure range, got {other:?}"),
    }
}

#[test]
fn unparseable_temperature_rejected() {
    let yaml = MINIMAL.replace("100 C", "hot");
    match parse_yaml(&yaml) {
        Err(ProjectError::Validation(ValidationError::InvalidValue { field, reason, .. })) => {
            assert_eq!(field, "molecules[Water]");
            assert!(reason.contains("temperature"));
        }
        other => panic!("expected invalid temperature, got {other:?}"),
    }
}

#[test]
fn unknown_rule_is_a_yaml_error() {
    let yaml = format!("{}    rule: benzene\n", MINIMAL);
    assert!(matches!(parse_yaml(&yaml), Err(ProjectError::Yaml(_))));
}
