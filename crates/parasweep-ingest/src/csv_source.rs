//! CSV parameter source.
//!
//! Each row defines one [`ParameterSpec`] as exactly four fields:
//! `name, start, end, step`. Fields 2-4 must parse as numbers. Any row
//! failing the count or numeric checks invalidates the whole source, so a
//! sweep never starts from a partially readable file. Header rows are not
//! skipped: a header line is just another malformed row.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::{debug, info};

use parasweep_model::ParameterSpec;

use crate::error::SourceError;

/// Read every row of `path` into a list of parameter specs, outer-to-inner
/// sweep order following row order.
///
/// # Errors
///
/// Returns the first [`SourceError`] encountered; the caller gets either the
/// complete table or nothing.
pub fn read_parameter_specs(path: &Path) -> Result<Vec<ParameterSpec>, SourceError> {
    let file = File::open(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);

    let mut specs = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| SourceError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let line = record
            .position()
            .map_or_else(|| specs.len() as u64 + 1, |pos| pos.line());

        if record.len() != 4 {
            return Err(SourceError::FieldCount {
                path: path.to_path_buf(),
                line,
                found: record.len(),
            });
        }

        let name = record[0].to_string();
        let start = parse_field(path, line, "start", &record[1])?;
        let end = parse_field(path, line, "end", &record[2])?;
        let step = parse_field(path, line, "step", &record[3])?;

        debug!(line, name = %name, start, end, step, "parsed parameter row");
        specs.push(ParameterSpec::new(name, start, end, step));
    }

    info!(path = %path.display(), count = specs.len(), "loaded parameter source");
    Ok(specs)
}

fn parse_field(
    path: &Path,
    line: u64,
    field: &'static str,
    value: &str,
) -> Result<f64, SourceError> {
    value.parse().map_err(|_| SourceError::InvalidNumber {
        path: path.to_path_buf(),
        line,
        field,
        value: value.to_string(),
    })
}
