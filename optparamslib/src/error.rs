//! Error types for optparamslib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or persisting a summary table
#[derive(Error, Debug)]
pub enum SummaryError {
    /// Failed to read or parse the input results file
    #[error("failed to read results file '{path}': {source}")]
    InputRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A required key column is absent from the input header
    #[error("required column '{name}' not found in input header")]
    MissingColumn { name: String },

    /// A data row has a different number of cells than the header
    #[error("row at line {line} has {found} cells, expected {expected}")]
    RowWidth {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// Failed to create the output directory or write an output file
    #[error("failed to write output '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
