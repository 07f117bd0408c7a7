//! Reading tuning results into a structured table.
//!
//! This module owns the input side: parsing the delimited results file into
//! a `ResultsTable` of `Value` cells and locating the key and parameter
//! columns within it.

use std::path::Path;

use crate::error::SummaryError;
use crate::value::Value;
use crate::Result;

/// The three columns every results file must carry, in output order.
pub const KEY_COLUMNS: [&str; 3] = ["configuration", "sample_size", "iteration"];

/// Prefix marking a tuned-parameter column in the input header.
pub const PARAM_PREFIX: &str = "param_";

/// A parsed tuning-results file: ordered column names plus rows of cells.
///
/// Rows preserve input order; each row has exactly one cell per column.
#[derive(Debug, Clone, Default)]
pub struct ResultsTable {
    /// Column names from the header row, in file order
    pub columns: Vec<String>,
    /// Data rows, one `Value` per column
    pub rows: Vec<Vec<Value>>,
}

impl ResultsTable {
    /// Read a results table from a CSV file.
    ///
    /// The file must have a header row. Rows whose cell count differs from
    /// the header fail with `SummaryError::RowWidth`; everything else that
    /// prevents parsing fails with `SummaryError::InputRead`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path).map_err(|e| input_read(path, e))?;

        let columns: Vec<String> = reader
            .headers()
            .map_err(|e| input_read(path, e))?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| read_failure(path, e))?;
            rows.push(record.iter().map(Value::parse).collect());
        }

        Ok(ResultsTable { columns, rows })
    }

    /// Index of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Indices of the three key columns, in `KEY_COLUMNS` order.
    ///
    /// Fails with `SummaryError::MissingColumn` naming the first absent
    /// column, before any grouping is attempted.
    pub fn key_indices(&self) -> Result<[usize; 3]> {
        let mut indices = [0usize; 3];
        for (slot, name) in indices.iter_mut().zip(KEY_COLUMNS) {
            *slot = self
                .column_index(name)
                .ok_or_else(|| SummaryError::MissingColumn {
                    name: name.to_string(),
                })?;
        }
        Ok(indices)
    }

    /// Parameter columns as (stripped name, column index) pairs, sorted
    /// ascending by stripped name (case-sensitive ordinal order).
    pub fn param_columns(&self) -> Vec<(String, usize)> {
        let mut params: Vec<(String, usize)> = self
            .columns
            .iter()
            .enumerate()
            .filter_map(|(i, col)| {
                col.strip_prefix(PARAM_PREFIX)
                    .map(|name| (name.to_string(), i))
            })
            .collect();
        params.sort_by(|a, b| a.0.cmp(&b.0));
        params
    }
}

fn input_read(path: &Path, err: csv::Error) -> SummaryError {
    SummaryError::InputRead {
        path: path.to_path_buf(),
        source: into_io(err),
    }
}

/// Map a mid-file record error, keeping row-width mismatches distinct.
fn read_failure(path: &Path, err: csv::Error) -> SummaryError {
    if let csv::ErrorKind::UnequalLengths {
        pos,
        expected_len,
        len,
    } = err.kind()
    {
        return SummaryError::RowWidth {
            line: pos.as_ref().map(|p| p.line()).unwrap_or(0),
            expected: *expected_len as usize,
            found: *len as usize,
        };
    }
    input_read(path, err)
}

fn into_io(err: csv::Error) -> std::io::Error {
    match err.into_kind() {
        csv::ErrorKind::Io(e) => e,
        other => std::io::Error::new(std::io::ErrorKind::InvalidData, format!("{:?}", other)),
    }
}
