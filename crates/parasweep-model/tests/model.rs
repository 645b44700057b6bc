use parasweep_model::{OperationKind, ParameterSpec, SweepError};

#[test]
fn validate_accepts_simple_ascending_range() {
    let spec = ParameterSpec::new("Width", 0.0, 5.0, 1.0);
    assert!(spec.validate().is_ok());
}

#[test]
fn validate_accepts_descending_range() {
    let spec = ParameterSpec::new("Depth", 5.0, 1.0, 2.0);
    assert!(spec.validate().is_ok());
}

#[test]
fn validate_rejects_equal_start_and_end() {
    let spec = ParameterSpec::new("Width", 3.0, 3.0, 1.0);
    let error = spec.validate().expect_err("start == end must be rejected");
    assert!(matches!(error, SweepError::InvalidSpec { ref name, .. } if name == "Width"));
    assert!(error.to_string().contains("different"));
}

#[test]
fn validate_rejects_non_positive_step() {
    for step in [0.0, -1.0] {
        let spec = ParameterSpec::new("Width", 0.0, 5.0, step);
        let error = spec.validate().expect_err("step <= 0 must be rejected");
        assert!(error.to_string().contains("greater than zero"));
    }
}

#[test]
fn validate_rejects_step_exceeding_range() {
    let spec = ParameterSpec::new("Width", 0.0, 2.0, 3.0);
    let error = spec.validate().expect_err("oversized step must be rejected");
    assert!(error.to_string().contains("value range"));
}

#[test]
fn validate_rejects_blank_name() {
    let spec = ParameterSpec::new("  ", 0.0, 2.0, 1.0);
    assert!(spec.validate().is_err());
}

#[test]
fn operation_extensions() {
    assert_eq!(OperationKind::LoopOnly.extension(), None);
    assert_eq!(OperationKind::ExportFusionArchive.extension(), Some("f3d"));
    assert_eq!(OperationKind::ExportIges.extension(), Some("igs"));
    assert_eq!(OperationKind::ExportSat.extension(), Some("sat"));
    assert_eq!(OperationKind::ExportSmt.extension(), Some("smt"));
    assert_eq!(OperationKind::ExportStep.extension(), Some("step"));
    assert_eq!(OperationKind::ExportStl.extension(), Some("stl"));
}

#[test]
fn operation_display_round_trips() {
    for kind in OperationKind::ALL {
        let text = kind.to_string();
        let parsed: OperationKind = text.parse().expect("parse operation");
        assert_eq!(parsed, kind);
    }
    assert!("ExportOBJ".parse::<OperationKind>().is_err());
}

#[test]
fn loop_only_is_not_an_export() {
    assert!(!OperationKind::LoopOnly.is_export());
    assert!(OperationKind::ExportStl.is_export());
}
