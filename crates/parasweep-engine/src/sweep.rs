//! The recursive, depth-first Cartesian-product sweep driver.

use std::path::{Path, PathBuf};

use tracing::{debug_span, info};

use parasweep_model::{
    OperationKind, ParameterSpec, Result, SweepError, SweepOptions, ValueTrail,
};

use crate::binder::bind_value;
use crate::export::{self, ExportRequest};
use crate::filename;
use crate::host::ModelingHost;
use crate::range::ValueRange;
use crate::snapshot::OriginalValueSnapshot;

/// What a completed (or failed-then-restored) sweep did.
#[derive(Debug, Clone, Default)]
pub struct SweepOutcome {
    /// Leaf combinations visited.
    pub combinations: u64,
    /// Artifact files written by the export dispatcher.
    pub artifacts_written: u64,
    /// Best-effort restore entries that could not be reapplied.
    pub restore_failures: Vec<String>,
}

/// Run one sweep to completion.
///
/// Validates every spec up front, snapshots original expressions, drives the
/// recursion from the first spec, and (when `options.restore` is set)
/// restores the snapshot on both the success and the failure path before
/// reporting the original error, so the model is never left in an arbitrary
/// swept state.
///
/// Preconditions: single-threaded, non-reentrant. The host is the one
/// shared mutable resource and this call is its only mutator until it
/// returns.
///
/// # Errors
///
/// `InvalidSpec` and `ExportDirRequired` are detected before any mutation.
/// `ParameterNotFound` and `ExportFailed`/`Host` abort the sweep; restore is
/// still attempted first.
pub fn run_sweep<H: ModelingHost + ?Sized>(
    host: &mut H,
    specs: &[ParameterSpec],
    options: &SweepOptions,
) -> Result<SweepOutcome> {
    if specs.is_empty() {
        return Err(SweepError::InvalidSpec {
            name: String::new(),
            reason: "no parameter name or table chosen".to_string(),
        });
    }
    for spec in specs {
        spec.validate()?;
    }
    let export_dir = match (&options.export_dir, options.operation.is_export()) {
        (Some(dir), _) => Some(dir.as_path()),
        (None, false) => None,
        (None, true) => {
            return Err(SweepError::ExportDirRequired {
                operation: options.operation,
            });
        }
    };

    let snapshot = OriginalValueSnapshot::capture(host, specs)?;
    info!(
        parameters = specs.len(),
        operation = %options.operation,
        "starting sweep"
    );

    let document_name = host.document_name();
    let mut run = SweepRun {
        host: &mut *host,
        specs,
        operation: options.operation,
        export_dir,
        document_name,
        combinations: 0,
        artifacts_written: 0,
    };
    let driven = run.drive(0, &ValueTrail::new(), options.stl_per_body);
    let (combinations, artifacts_written) = (run.combinations, run.artifacts_written);

    let restore_failures = if options.restore {
        snapshot.restore(host)
    } else {
        Vec::new()
    };

    driven?;
    info!(combinations, artifacts_written, "sweep complete");
    Ok(SweepOutcome {
        combinations,
        artifacts_written,
        restore_failures,
    })
}

struct SweepRun<'a, H: ModelingHost + ?Sized> {
    host: &'a mut H,
    specs: &'a [ParameterSpec],
    operation: OperationKind,
    export_dir: Option<&'a Path>,
    document_name: String,
    combinations: u64,
    artifacts_written: u64,
}

impl<H: ModelingHost + ?Sized> SweepRun<'_, H> {
    /// Process the spec at `index` for the current trail.
    ///
    /// `per_body` is only ever true at the outermost invocation; every
    /// recursive call forces it false, so the per-body STL fan-out applies
    /// exactly once, at the true leaf of a single-parameter sweep or at the
    /// leaf reached from depth zero.
    fn drive(&mut self, index: usize, trail: &ValueTrail, per_body: bool) -> Result<()> {
        let spec = &self.specs[index];
        if self.host.parameter_expression(&spec.name).is_none() {
            return Err(SweepError::ParameterNotFound {
                name: spec.name.clone(),
            });
        }

        let span = debug_span!("sweep_level", parameter = %spec.name, depth = index);
        let _guard = span.enter();
        let prefix = filename::parent_prefix(self.specs, index, trail);
        let is_leaf = index + 1 == self.specs.len();

        for value in ValueRange::from_spec(spec) {
            let mut trail = trail.clone();
            bind_value(self.host, &spec.name, value, &mut trail)?;

            if is_leaf {
                self.combinations += 1;
                if let (Some(dir), true) = (self.export_dir, self.operation.is_export()) {
                    let request = ExportRequest {
                        operation: self.operation,
                        target_stem: self.target_stem(dir, &prefix, value),
                        per_body,
                    };
                    self.artifacts_written +=
                        export::dispatch(self.host, &request, &trail.describe())?;
                }
            } else {
                self.drive(index + 1, &trail, false)?;
            }
        }
        Ok(())
    }

    fn target_stem(&self, dir: &Path, prefix: &str, value: f64) -> PathBuf {
        let stem = filename::artifact_stem(prefix, value);
        dir.join(format!("{}_{stem}", self.document_name))
    }
}
