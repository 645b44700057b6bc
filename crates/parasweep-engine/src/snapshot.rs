//! Capturing and reapplying pre-sweep parameter state.

use std::collections::BTreeMap;

use tracing::warn;

use parasweep_model::{ParameterSpec, Result, SweepError};

use crate::host::ModelingHost;

/// Each swept parameter's expression as it was before the first mutation.
///
/// Captured once, consumed exactly once by [`OriginalValueSnapshot::restore`].
#[derive(Debug, Clone)]
pub struct OriginalValueSnapshot {
    entries: BTreeMap<String, String>,
}

impl OriginalValueSnapshot {
    /// Capture the current expression of every spec'd parameter.
    ///
    /// # Errors
    ///
    /// [`SweepError::ParameterNotFound`] if any named parameter is missing.
    /// This runs before any mutation, so there is nothing to roll back.
    pub fn capture<H: ModelingHost + ?Sized>(
        host: &H,
        specs: &[ParameterSpec],
    ) -> Result<Self> {
        let mut entries = BTreeMap::new();
        for spec in specs {
            let expression = host.parameter_expression(&spec.name).ok_or_else(|| {
                SweepError::ParameterNotFound {
                    name: spec.name.clone(),
                }
            })?;
            entries.insert(spec.name.clone(), expression);
        }
        Ok(Self { entries })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reapply every snapshotted expression, best-effort.
    ///
    /// A parameter deleted mid-sweep fails its own entry but does not stop
    /// the remaining restores. Returns the failure messages; the caller
    /// decides how to report them alongside any original sweep error.
    pub fn restore<H: ModelingHost + ?Sized>(self, host: &mut H) -> Vec<String> {
        let mut failures = Vec::new();
        for (name, expression) in self.entries {
            if host.parameter_expression(&name).is_none() {
                warn!(parameter = %name, "restore skipped: parameter no longer exists");
                failures.push(format!("parameter not found: {name}"));
                continue;
            }
            if let Err(error) = host.set_parameter_expression(&name, &expression) {
                warn!(parameter = %name, %error, "restore failed");
                failures.push(format!("restore of '{name}' failed: {error}"));
            }
        }
        if let Err(error) = host.recompute() {
            warn!(%error, "recompute after restore failed");
            failures.push(format!("recompute after restore failed: {error}"));
        }
        failures
    }
}
