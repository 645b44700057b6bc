//! Error types for the sweep engine.

use std::path::PathBuf;
use thiserror::Error;

use crate::operation::OperationKind;

/// Errors reported by a modeling host collaborator.
#[derive(Debug, Error)]
pub enum HostError {
    /// The host rejected or failed an export call.
    #[error("export failed: {message}")]
    Export { message: String },

    /// The host failed to recompute the model after an expression change.
    #[error("recompute failed: {message}")]
    Recompute { message: String },

    /// The host rejected an expression string.
    #[error("invalid expression '{expression}' for parameter '{name}'")]
    InvalidExpression { name: String, expression: String },

    /// The host has no parameter with this name.
    #[error("unknown parameter: {name}")]
    UnknownParameter { name: String },

    /// Filesystem failure while writing an artifact.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while preparing or running a sweep.
#[derive(Debug, Error)]
pub enum SweepError {
    /// Preflight rejection. The sweep was never started.
    #[error("invalid parameter spec '{name}': {reason}")]
    InvalidSpec { name: String, reason: String },

    /// A named parameter vanished or never existed. Fatal to the sweep.
    #[error("parameter not found: {name}")]
    ParameterNotFound { name: String },

    /// An export collaborator failed. The message identifies the combination.
    #[error("export failed for combination [{combination}] at {target}: {source}")]
    ExportFailed {
        combination: String,
        target: PathBuf,
        #[source]
        source: HostError,
    },

    /// The host failed outside an export call (expression set, recompute).
    #[error("host error at combination [{combination}]: {source}")]
    Host {
        combination: String,
        #[source]
        source: HostError,
    },

    /// An export operation was requested without a destination directory.
    #[error("operation {operation} requires an export directory")]
    ExportDirRequired { operation: OperationKind },
}

pub type Result<T> = std::result::Result<T, SweepError>;
