use parasweep_engine::filename::{artifact_stem, parent_prefix, sanitize};
use parasweep_model::{ParameterSpec, ValueTrail};

fn specs() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec::new("W", 0.0, 2.0, 1.0),
        ParameterSpec::new("H", 10.0, 11.0, 0.5),
    ]
}

#[test]
fn leaf_prefix_chains_visited_parameters_in_spec_order() {
    let mut trail = ValueTrail::new();
    trail.record("W", "2");
    let prefix = parent_prefix(&specs(), 1, &trail);
    assert_eq!(prefix, "W_2_H");
}

#[test]
fn outermost_prefix_is_just_the_leaf_name() {
    let prefix = parent_prefix(&specs(), 0, &ValueTrail::new());
    assert_eq!(prefix, "W");
}

#[test]
fn stem_sanitizes_fractional_values() {
    assert_eq!(artifact_stem("W_2_H", 10.5), "W_2_H_10_5");
    assert_eq!(artifact_stem("W_2_H", 11.0), "W_2_H_11");
}

#[test]
fn unit_bearing_expressions_survive_with_underscores() {
    let mut trail = ValueTrail::new();
    trail.record("W", "12 mm");
    let prefix = parent_prefix(&specs(), 1, &trail);
    assert_eq!(artifact_stem(&prefix, 10.0), "W_12_mm_H_10");
}

#[test]
fn stems_are_deterministic() {
    let mut trail = ValueTrail::new();
    trail.record("W", "1.5");
    let a = artifact_stem(&parent_prefix(&specs(), 1, &trail), 10.5);
    let b = artifact_stem(&parent_prefix(&specs(), 1, &trail), 10.5);
    assert_eq!(a, b);
    assert_eq!(a, "W_1_5_H_10_5");
}

#[test]
fn differing_trails_give_differing_stems() {
    let mut first = ValueTrail::new();
    first.record("W", "1");
    let mut second = ValueTrail::new();
    second.record("W", "2");
    let a = artifact_stem(&parent_prefix(&specs(), 1, &first), 10.0);
    let b = artifact_stem(&parent_prefix(&specs(), 1, &second), 10.0);
    assert_ne!(a, b);
}

#[test]
fn sanitize_is_minimal() {
    // Path separators are deliberately left alone.
    assert_eq!(sanitize("a/b\\c"), "a/b\\c");
    assert_eq!(sanitize("Panel  Width 1.25"), "Panel_Width_1_25");
}
