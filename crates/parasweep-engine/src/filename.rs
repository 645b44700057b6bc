//! Artifact name derivation.
//!
//! Names concatenate, in outer-to-inner sweep order, each visited
//! parameter's `name_value` pair, then the leaf parameter's name and value
//! token. Sanitization is deliberately minimal: runs of whitespace collapse
//! to a single underscore and literal periods become underscores, so
//! fractional values stay path-segment safe. Path separators and other
//! host-reserved characters are NOT escaped; extending the sanitizer would
//! change observable filenames.

use parasweep_model::{ParameterSpec, ValueTrail};

/// Collapse whitespace runs to `_` and replace `.` with `_`.
#[must_use]
pub fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_whitespace = false;
    for ch in raw.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push('_');
                in_whitespace = true;
            }
            continue;
        }
        in_whitespace = false;
        out.push(if ch == '.' { '_' } else { ch });
    }
    out
}

/// Joined `name_value` pairs for every spec before `leaf_index`, followed by
/// the leaf parameter's name. Unsanitized; computed once per recursion level
/// since it does not depend on the leaf value.
#[must_use]
pub fn parent_prefix(specs: &[ParameterSpec], leaf_index: usize, trail: &ValueTrail) -> String {
    let mut joined = String::new();
    for spec in &specs[..leaf_index] {
        if let Some(expression) = trail.expression(&spec.name) {
            if !joined.is_empty() {
                joined.push('_');
            }
            joined.push_str(&spec.name);
            joined.push('_');
            joined.push_str(expression);
        }
    }
    if !joined.is_empty() {
        joined.push('_');
    }
    joined.push_str(&specs[leaf_index].name);
    joined
}

/// Final sanitized base name for one leaf value.
#[must_use]
pub fn artifact_stem(prefix: &str, value: f64) -> String {
    sanitize(&format!("{prefix}_{value}"))
}
