//! Trace ingestion — plain-line and CSV-column readers.
//!
//! A trace file is either one outcome per line (blank lines and `#` comments
//! skipped) or a headered CSV from which a named column is extracted. Both
//! modes produce the outcome strings in trace order, burn-in included.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV in {path}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("column {column:?} not found in {path} (available: {available})")]
    MissingColumn {
        column: String,
        path: String,
        available: String,
    },
}

/// Read a trace file into outcome strings, in trace order.
pub fn read_trace(path: &Path, column: Option<&str>) -> Result<Vec<String>, IngestError> {
    match column {
        Some(column) => read_csv_column(path, column),
        None => read_lines(path),
    }
}

fn read_lines(path: &Path) -> Result<Vec<String>, IngestError> {
    let io_err = |source| IngestError::Io {
        path: path.display().to_string(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let mut samples = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(io_err)?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        samples.push(line.to_string());
    }
    Ok(samples)
}

fn read_csv_column(path: &Path, column: &str) -> Result<Vec<String>, IngestError> {
    let csv_err = |source| IngestError::Csv {
        path: path.display().to_string(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(csv_err)?;
    let headers = reader.headers().map_err(csv_err)?.clone();
    let index = headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| IngestError::MissingColumn {
            column: column.to_string(),
            path: path.display().to_string(),
            available: headers.iter().collect::<Vec<_>>().join(", "),
        })?;

    let mut samples = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        if let Some(value) = record.get(index) {
            samples.push(value.to_string());
        }
    }
    Ok(samples)
}
