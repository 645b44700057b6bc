//! Routing one leaf combination to the right export pathway.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use parasweep_model::{OperationKind, Result, SweepError};

use crate::host::ModelingHost;

/// One leaf node's export, constructed fresh per combination.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub operation: OperationKind,
    /// Destination path without extension; the operation supplies one.
    pub target_stem: PathBuf,
    /// Fan STL output out to one file per solid body.
    pub per_body: bool,
}

/// Dispatch `request` to the host, returning the number of files written.
///
/// `LoopOnly` succeeds immediately without touching the host. STL with
/// `per_body` set iterates every body of the root assembly; when there are
/// no bodies it falls back to a whole-assembly export so an artifact is
/// still produced.
///
/// # Errors
///
/// Host failures become [`SweepError::ExportFailed`] identifying the
/// combination; they are surfaced, never retried.
pub fn dispatch<H: ModelingHost + ?Sized>(
    host: &mut H,
    request: &ExportRequest,
    combination: &str,
) -> Result<u64> {
    let Some(extension) = request.operation.extension() else {
        return Ok(0);
    };

    if request.operation == OperationKind::ExportStl && request.per_body {
        let bodies = host.body_names();
        if !bodies.is_empty() {
            for body in &bodies {
                let path = append_suffix(&request.target_stem, &format!("_{body}.{extension}"));
                debug!(body = %body, path = %path.display(), "exporting body");
                host.export_body(body, &path)
                    .map_err(|source| SweepError::ExportFailed {
                        combination: combination.to_string(),
                        target: path.clone(),
                        source,
                    })?;
            }
            return Ok(bodies.len() as u64);
        }
    }

    let path = append_suffix(&request.target_stem, &format!(".{extension}"));
    debug!(path = %path.display(), "exporting document");
    host.export_document(request.operation, &path)
        .map_err(|source| SweepError::ExportFailed {
            combination: combination.to_string(),
            target: path.clone(),
            source,
        })?;
    Ok(1)
}

/// Append raw text to a path without `set_extension` semantics, which would
/// truncate at any period already present in the final component.
fn append_suffix(stem: &Path, suffix: &str) -> PathBuf {
    let mut os: OsString = stem.to_path_buf().into_os_string();
    os.push(suffix);
    PathBuf::from(os)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_suffix_keeps_existing_periods() {
        let stem = PathBuf::from("/out/My Doc v1.2_W_3");
        let path = append_suffix(&stem, ".stl");
        assert_eq!(path, PathBuf::from("/out/My Doc v1.2_W_3.stl"));
    }
}
