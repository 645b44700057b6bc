//! Configuration options for a sweep invocation.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::operation::OperationKind;

/// Options controlling one sweep invocation.
///
/// These are the resolved values the engine needs as plain inputs; how they
/// are collected (dialog, CLI flags, persisted settings) is a caller concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepOptions {
    /// What to do at each leaf combination.
    pub operation: OperationKind,

    /// Destination directory for exported artifacts. Must already exist;
    /// the engine never creates directories. Required for export operations.
    pub export_dir: Option<PathBuf>,

    /// Export one STL file per solid body instead of one for the whole
    /// root assembly. Only honored at the outermost sweep level.
    pub stl_per_body: bool,

    /// Reapply each parameter's pre-sweep expression after the sweep,
    /// on both success and failure paths.
    pub restore: bool,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            operation: OperationKind::LoopOnly,
            export_dir: None,
            stl_per_body: false,
            restore: true,
        }
    }
}

impl SweepOptions {
    pub fn new(operation: OperationKind) -> Self {
        Self {
            operation,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = Some(dir.into());
        self
    }

    #[must_use]
    pub fn with_stl_per_body(mut self, enable: bool) -> Self {
        self.stl_per_body = enable;
        self
    }

    #[must_use]
    pub fn with_restore(mut self, enable: bool) -> Self {
        self.restore = enable;
        self
    }
}
