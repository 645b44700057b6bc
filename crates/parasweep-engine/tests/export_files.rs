use parasweep_engine::{MemoryDesign, ModelingHost, run_sweep};
use parasweep_model::{OperationKind, ParameterSpec, SweepError, SweepOptions};

#[test]
fn sweep_writes_one_artifact_per_combination() {
    let dir = tempfile::tempdir().expect("create export dir");
    let mut design = MemoryDesign::new("widget").with_parameter("W", "1");
    let specs = vec![ParameterSpec::new("W", 0.0, 2.0, 1.0)];
    let options = SweepOptions::new(OperationKind::ExportStep)
        .with_export_dir(dir.path())
        .with_restore(true);
    let outcome = run_sweep(&mut design, &specs, &options).expect("sweep");
    assert_eq!(outcome.combinations, 3);
    assert_eq!(outcome.artifacts_written, 3);
    for token in ["0", "1", "2"] {
        let path = dir.path().join(format!("widget_W_{token}.step"));
        let contents = std::fs::read_to_string(&path).expect("read artifact");
        assert!(contents.contains("format: ExportSTEP"));
    }
    // Restore leaves the design as loaded.
    assert_eq!(design.parameter_expression("W").as_deref(), Some("1"));
}

#[test]
fn per_body_artifacts_embed_body_names() {
    let dir = tempfile::tempdir().expect("create export dir");
    let mut design = MemoryDesign::new("bracket")
        .with_parameter("L", "5")
        .with_body("Arm")
        .with_body("Base");
    let specs = vec![ParameterSpec::new("L", 1.0, 2.0, 1.0)];
    let options = SweepOptions::new(OperationKind::ExportStl)
        .with_export_dir(dir.path())
        .with_stl_per_body(true);
    let outcome = run_sweep(&mut design, &specs, &options).expect("sweep");
    assert_eq!(outcome.artifacts_written, 4);
    assert!(dir.path().join("bracket_L_1_Arm.stl").exists());
    assert!(dir.path().join("bracket_L_2_Base.stl").exists());
}

#[test]
fn missing_export_directory_fails_the_leaf() {
    let dir = tempfile::tempdir().expect("create export dir");
    let gone = dir.path().join("never-created");
    let mut design = MemoryDesign::new("widget").with_parameter("W", "1");
    let specs = vec![ParameterSpec::new("W", 0.0, 1.0, 1.0)];
    let options = SweepOptions::new(OperationKind::ExportSat).with_export_dir(&gone);
    let error = run_sweep(&mut design, &specs, &options).expect_err("export must fail");
    assert!(matches!(error, SweepError::ExportFailed { .. }));
    // Restore still ran on the failure path.
    assert_eq!(design.parameter_expression("W").as_deref(), Some("1"));
}

#[test]
fn loop_only_drives_recomputes_without_artifacts() {
    let mut design = MemoryDesign::new("widget")
        .with_parameter("W", "1")
        .with_parameter("H", "2");
    let specs = vec![
        ParameterSpec::new("W", 0.0, 2.0, 1.0),
        ParameterSpec::new("H", 10.0, 11.0, 0.5),
    ];
    let outcome = run_sweep(&mut design, &specs, &SweepOptions::default()).expect("sweep");
    assert_eq!(outcome.combinations, 9);
    assert_eq!(outcome.artifacts_written, 0);
    // 3 outer binds + 9 inner binds, plus one recompute after restore.
    assert_eq!(design.recomputes(), 13);
    assert_eq!(design.events_processed(), 12);
}
