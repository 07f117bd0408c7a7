//! The grouping-and-reduction pass.
//!
//! Rows are partitioned by the (configuration, sample_size, iteration)
//! triple and each group collapses to one summary row with a representative
//! value per parameter column:
//!
//! - all non-missing values numeric: the first non-missing value in group
//!   order (assumed constant within the group; never averaged, never
//!   checked for agreement)
//! - any non-missing value non-numeric: the mode, with ties broken to the
//!   first value reaching the maximum count in group order
//! - no non-missing values at all: the literal text `N/A`
//!
//! Output rows are emitted in ascending key order (numbers before text,
//! numbers by value, text ordinal), which is stable across runs.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::table::{ResultsTable, KEY_COLUMNS};
use crate::value::{Value, ValueKey};
use crate::Result;

/// Sentinel emitted when a group has no non-missing values for a parameter.
pub const NOT_AVAILABLE: &str = "N/A";

/// The grouping key: one distinct triple per summary row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupKey {
    pub configuration: Value,
    pub sample_size: Value,
    pub iteration: Value,
}

impl GroupKey {
    fn sort_key(&self) -> (ValueKey, ValueKey, ValueKey) {
        (
            self.configuration.key(),
            self.sample_size.key(),
            self.iteration.key(),
        )
    }
}

/// One summary row: the key triple plus one reduced value per parameter,
/// aligned with the owning table's `param_names`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub key: GroupKey,
    pub params: Vec<Value>,
}

impl SummaryRow {
    /// All cells in output column order: the three keys, then parameters.
    pub fn cells(&self) -> impl Iterator<Item = &Value> {
        [
            &self.key.configuration,
            &self.key.sample_size,
            &self.key.iteration,
        ]
        .into_iter()
        .chain(self.params.iter())
    }
}

/// The deduplicated summary: one row per distinct group key.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SummaryTable {
    /// Parameter names (prefix stripped), sorted ascending
    pub param_names: Vec<String>,
    /// Rows in ascending key order
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    /// Column headers in output order: the key columns, then parameters.
    pub fn headers(&self) -> Vec<String> {
        KEY_COLUMNS
            .iter()
            .map(|c| c.to_string())
            .chain(self.param_names.iter().cloned())
            .collect()
    }
}

/// Read a results file and build its summary table.
///
/// This is the main library entry point for the build step: parse, check
/// required columns, group, reduce. It has no side effects beyond reading
/// `input_path`.
pub fn summarize_results(input_path: impl AsRef<Path>) -> Result<SummaryTable> {
    let table = ResultsTable::from_path(input_path)?;
    build_summary(&table)
}

/// Build the summary for an already-parsed table.
pub fn build_summary(table: &ResultsTable) -> Result<SummaryTable> {
    let [cfg_idx, size_idx, iter_idx] = table.key_indices()?;
    let params = table.param_columns();

    // Group row indices by key; BTreeMap fixes the output row order.
    let mut groups: BTreeMap<(ValueKey, ValueKey, ValueKey), (GroupKey, Vec<usize>)> =
        BTreeMap::new();
    for (row_idx, row) in table.rows.iter().enumerate() {
        let key = GroupKey {
            configuration: row[cfg_idx].clone(),
            sample_size: row[size_idx].clone(),
            iteration: row[iter_idx].clone(),
        };
        groups
            .entry(key.sort_key())
            .or_insert_with(|| (key, Vec::new()))
            .1
            .push(row_idx);
    }

    let rows = groups
        .into_values()
        .map(|(key, row_indices)| SummaryRow {
            key,
            params: params
                .iter()
                .map(|&(_, col)| reduce_column(table, &row_indices, col))
                .collect(),
        })
        .collect();

    Ok(SummaryTable {
        param_names: params.into_iter().map(|(name, _)| name).collect(),
        rows,
    })
}

/// Reduce one parameter column within one group to a single value.
fn reduce_column(table: &ResultsTable, row_indices: &[usize], col: usize) -> Value {
    let present: Vec<&Value> = row_indices
        .iter()
        .map(|&r| &table.rows[r][col])
        .filter(|v| !v.is_missing())
        .collect();

    if present.is_empty() {
        return Value::text(NOT_AVAILABLE);
    }
    if present.iter().all(|v| v.is_number()) {
        return present[0].clone();
    }
    mode(&present)
}

/// Most frequent value by rendered text, counted stably in group order.
/// The first value to reach the maximum count wins ties.
fn mode(values: &[&Value]) -> Value {
    let mut counts: Vec<(String, usize, &Value)> = Vec::new();
    for &value in values {
        let text = value.to_string();
        match counts.iter_mut().find(|(t, _, _)| *t == text) {
            Some(entry) => entry.1 += 1,
            None => counts.push((text, 1, value)),
        }
    }
    // Strictly-greater scan keeps the first entry on ties.
    let mut best = 0;
    for i in 1..counts.len() {
        if counts[i].1 > counts[best].1 {
            best = i;
        }
    }
    counts[best].2.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(header: &[&str], rows: &[&[&str]]) -> ResultsTable {
        ResultsTable {
            columns: header.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| Value::parse(cell)).collect())
                .collect(),
        }
    }

    #[test]
    fn test_grouping_completeness() {
        let t = table(
            &["configuration", "sample_size", "iteration", "param_lr"],
            &[
                &["cfgA", "100", "1", "0.01"],
                &["cfgA", "100", "1", "0.01"],
                &["cfgA", "100", "2", "0.01"],
                &["cfgB", "100", "1", "0.02"],
            ],
        );
        let summary = build_summary(&t).unwrap();
        assert_eq!(summary.rows.len(), 3);
    }

    #[test]
    fn test_numeric_first_value_policy() {
        let t = table(
            &["configuration", "sample_size", "iteration", "param_depth"],
            &[
                &["cfgA", "100", "1", "3"],
                &["cfgA", "100", "1", "3"],
                &["cfgA", "100", "1", "7"],
            ],
        );
        let summary = build_summary(&t).unwrap();
        assert_eq!(summary.rows[0].params[0].to_string(), "3");
    }

    #[test]
    fn test_categorical_mode_policy() {
        let t = table(
            &["configuration", "sample_size", "iteration", "param_opt"],
            &[
                &["cfgA", "100", "1", "a"],
                &["cfgA", "100", "1", "b"],
                &["cfgA", "100", "1", "a"],
            ],
        );
        let summary = build_summary(&t).unwrap();
        assert_eq!(summary.rows[0].params[0].to_string(), "a");
    }

    #[test]
    fn test_mode_tie_breaks_to_first_seen() {
        let t = table(
            &["configuration", "sample_size", "iteration", "param_opt"],
            &[
                &["cfgA", "100", "1", "adam"],
                &["cfgA", "100", "1", "sgd"],
            ],
        );
        let summary = build_summary(&t).unwrap();
        assert_eq!(summary.rows[0].params[0].to_string(), "adam");
    }

    #[test]
    fn test_mixed_numeric_and_text_uses_mode() {
        // A single text value flips the whole group to the mode path.
        let t = table(
            &["configuration", "sample_size", "iteration", "param_units"],
            &[
                &["cfgA", "100", "1", "64"],
                &["cfgA", "100", "1", "auto"],
                &["cfgA", "100", "1", "64"],
            ],
        );
        let summary = build_summary(&t).unwrap();
        assert_eq!(summary.rows[0].params[0].to_string(), "64");
    }

    #[test]
    fn test_all_missing_yields_sentinel() {
        let t = table(
            &["configuration", "sample_size", "iteration", "param_gamma"],
            &[&["cfgA", "100", "1", ""], &["cfgA", "100", "1", ""]],
        );
        let summary = build_summary(&t).unwrap();
        assert_eq!(summary.rows[0].params[0].to_string(), "N/A");
    }

    #[test]
    fn test_missing_cells_skipped_by_numeric_pick() {
        let t = table(
            &["configuration", "sample_size", "iteration", "param_lr"],
            &[&["cfgA", "100", "1", ""], &["cfgA", "100", "1", "0.05"]],
        );
        let summary = build_summary(&t).unwrap();
        assert_eq!(summary.rows[0].params[0].to_string(), "0.05");
    }

    #[test]
    fn test_headers_order() {
        let t = table(
            &[
                "configuration",
                "sample_size",
                "iteration",
                "param_opt",
                "param_lr",
            ],
            &[&["cfgA", "100", "1", "adam", "0.01"]],
        );
        let summary = build_summary(&t).unwrap();
        assert_eq!(
            summary.headers(),
            vec!["configuration", "sample_size", "iteration", "lr", "opt"]
        );
        // params align with the sorted names, not the input column order
        assert_eq!(summary.rows[0].params[0].to_string(), "0.01");
        assert_eq!(summary.rows[0].params[1].to_string(), "adam");
    }

    #[test]
    fn test_no_param_columns_degenerate_case() {
        let t = table(
            &["configuration", "sample_size", "iteration"],
            &[&["cfgA", "100", "1"], &["cfgA", "100", "1"]],
        );
        let summary = build_summary(&t).unwrap();
        assert_eq!(
            summary.headers(),
            vec!["configuration", "sample_size", "iteration"]
        );
        assert_eq!(summary.rows.len(), 1);
        assert!(summary.rows[0].params.is_empty());
    }

    #[test]
    fn test_numeric_key_equality_groups_spellings() {
        let t = table(
            &["configuration", "sample_size", "iteration", "param_lr"],
            &[
                &["cfgA", "100", "1", "0.01"],
                &["cfgA", "100.0", "1.0", "0.01"],
            ],
        );
        let summary = build_summary(&t).unwrap();
        assert_eq!(summary.rows.len(), 1);
    }

    #[test]
    fn test_rows_in_ascending_key_order() {
        let t = table(
            &["configuration", "sample_size", "iteration", "param_lr"],
            &[
                &["cfgB", "100", "1", "0.02"],
                &["cfgA", "200", "1", "0.01"],
                &["cfgA", "100", "2", "0.01"],
                &["cfgA", "100", "1", "0.01"],
            ],
        );
        let summary = build_summary(&t).unwrap();
        let keys: Vec<String> = summary
            .rows
            .iter()
            .map(|r| {
                format!(
                    "{}/{}/{}",
                    r.key.configuration, r.key.sample_size, r.key.iteration
                )
            })
            .collect();
        assert_eq!(
            keys,
            vec!["cfgA/100/1", "cfgA/100/2", "cfgA/200/1", "cfgB/100/1"]
        );
    }

    #[test]
    fn test_missing_column_surfaced_before_grouping() {
        let t = table(&["configuration", "iteration"], &[&["cfgA", "1"]]);
        assert!(build_summary(&t).is_err());
    }

    #[test]
    fn test_round_trip_scenario() {
        let t = table(
            &[
                "configuration",
                "sample_size",
                "iteration",
                "param_lr",
                "param_opt",
            ],
            &[
                &["cfgA", "100", "1", "0.01", "adam"],
                &["cfgA", "100", "1", "0.01", "sgd"],
                &["cfgB", "200", "1", "0.02", "adam"],
            ],
        );
        let summary = build_summary(&t).unwrap();
        assert_eq!(summary.rows.len(), 2);

        let a = &summary.rows[0];
        assert_eq!(a.key.configuration.to_string(), "cfgA");
        assert_eq!(a.params[0].to_string(), "0.01");
        assert_eq!(a.params[1].to_string(), "adam");

        let b = &summary.rows[1];
        assert_eq!(b.key.configuration.to_string(), "cfgB");
        assert_eq!(b.params[0].to_string(), "0.02");
        assert_eq!(b.params[1].to_string(), "adam");
    }

    #[test]
    fn test_determinism_across_runs() {
        let t = table(
            &["configuration", "sample_size", "iteration", "param_opt"],
            &[
                &["cfgB", "100", "1", "sgd"],
                &["cfgA", "100", "1", "adam"],
                &["cfgA", "100", "1", "sgd"],
            ],
        );
        let first = build_summary(&t).unwrap();
        let second = build_summary(&t).unwrap();
        assert_eq!(first, second);
    }
}
