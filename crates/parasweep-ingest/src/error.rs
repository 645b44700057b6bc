//! Errors raised while reading a tabular parameter source.
//!
//! A malformed source aborts before any model mutation occurs; there is
//! nothing to restore.

use std::path::PathBuf;
use thiserror::Error;

/// Tabular source violations. Any one of these discards the whole source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file could not be opened or read.
    #[error("failed to read parameter source {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader itself rejected the file.
    #[error("malformed parameter source {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row did not have exactly four fields (name, start, end, step).
    #[error("values missing in {path} line {line}: expected 4 fields, found {found}")]
    FieldCount {
        path: PathBuf,
        line: u64,
        found: usize,
    },

    /// A numeric field failed to parse.
    #[error("invalid {field} value '{value}' in {path} line {line}")]
    InvalidNumber {
        path: PathBuf,
        line: u64,
        field: &'static str,
        value: String,
    },
}
