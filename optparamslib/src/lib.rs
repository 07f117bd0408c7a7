//! # optparamslib
//!
//! Aggregates hyperparameter-tuning results into a deduplicated summary
//! table: one row per (configuration, sample_size, iteration) triple, with
//! a representative value chosen for each tuned parameter, exported as both
//! CSV and HTML.
//!
//! ## Overview
//!
//! Tuning sweeps typically log one row per trial, repeating the same
//! parameter values across cross-validation folds or restarts. This library
//! collapses those repeats:
//!
//! - **Grouping**: rows sharing the (configuration, sample_size, iteration)
//!   triple form one group; numeric keys compare by value, text keys exactly.
//! - **Numeric parameters**: the first value in the group is taken as the
//!   representative (the values are assumed constant within a group).
//! - **Categorical parameters**: the most frequent value wins; ties break to
//!   the first value reaching the maximum count.
//! - **Missing parameters**: a group with no values at all for a parameter
//!   gets the sentinel `N/A`.
//!
//! Parameter columns are found by the `param_` prefix in the input header;
//! the prefix is stripped in the output, and parameter columns are sorted by
//! name after the three key columns.
//!
//! ## Example
//!
//! ```rust
//! use optparamslib::{summarize_results, write_summary};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let input = dir.path().join("tuning_results.csv");
//! fs::write(&input, "\
//! configuration,sample_size,iteration,param_lr,param_opt
//! cfgA,100,1,0.01,adam
//! cfgA,100,1,0.01,sgd
//! cfgB,200,1,0.02,adam
//! ").unwrap();
//!
//! // Build the in-memory summary
//! let table = summarize_results(&input).unwrap();
//! assert_eq!(table.rows.len(), 2);
//! assert_eq!(table.headers(), vec!["configuration", "sample_size", "iteration", "lr", "opt"]);
//!
//! // Persist it (directory created on demand)
//! let paths = write_summary(&table, dir.path().join("reports")).unwrap();
//! assert!(paths.csv.exists());
//! assert!(paths.html.exists());
//! ```

pub mod error;
pub mod export;
pub mod summary;
pub mod table;
pub mod value;

pub use error::SummaryError;
pub use export::{
    generate_report, write_summary, SummaryPaths, SummaryReport, CSV_FILE_NAME, HTML_FILE_NAME,
};
pub use summary::{
    build_summary, summarize_results, GroupKey, SummaryRow, SummaryTable, NOT_AVAILABLE,
};
pub use table::{ResultsTable, KEY_COLUMNS, PARAM_PREFIX};
pub use value::{Value, ValueKey};

/// Result type for optparamslib operations
pub type Result<T> = std::result::Result<T, SummaryError>;
