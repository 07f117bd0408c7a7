//! Persisting a summary table to CSV and HTML.
//!
//! Both artifacts land in a caller-chosen directory (created on demand,
//! parents included) under fixed names. The build and persist steps are
//! separate calls so a write failure still leaves the in-memory table with
//! the caller; `generate_report` chains them and prints the notification.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SummaryError;
use crate::summary::{summarize_results, SummaryTable};
use crate::Result;

/// File name of the CSV export.
pub const CSV_FILE_NAME: &str = "optimal_parameters_summary_table.csv";

/// File name of the HTML export.
pub const HTML_FILE_NAME: &str = "optimal_parameters_summary_table.html";

/// Locations of the two persisted artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryPaths {
    pub csv: PathBuf,
    pub html: PathBuf,
}

/// A built summary together with where it was persisted.
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub table: SummaryTable,
    pub paths: SummaryPaths,
}

/// Write the CSV and HTML exports of `table` into `output_dir`.
///
/// Creates `output_dir` and any missing parents. Fails with
/// `SummaryError::OutputWrite` on directory-creation or write failure.
/// Prints nothing; see `generate_report` for the notifying variant.
pub fn write_summary(table: &SummaryTable, output_dir: impl AsRef<Path>) -> Result<SummaryPaths> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir).map_err(|e| output_write(output_dir, e))?;

    let csv_path = output_dir.join(CSV_FILE_NAME);
    write_csv(table, &csv_path)?;

    let html_path = output_dir.join(HTML_FILE_NAME);
    fs::write(&html_path, render_html(table)).map_err(|e| output_write(&html_path, e))?;

    Ok(SummaryPaths {
        csv: csv_path,
        html: html_path,
    })
}

/// Build the summary for `input_path`, persist it into `output_dir`, and
/// print a two-line notification naming both files.
pub fn generate_report(
    input_path: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
) -> Result<SummaryReport> {
    let table = summarize_results(input_path)?;
    let paths = write_summary(&table, output_dir)?;
    println!(
        "Table saved to:\n- {}\n- {}",
        paths.csv.display(),
        paths.html.display()
    );
    Ok(SummaryReport { table, paths })
}

fn write_csv(table: &SummaryTable, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| csv_write(path, e))?;
    writer
        .write_record(table.headers())
        .map_err(|e| csv_write(path, e))?;
    for row in &table.rows {
        writer
            .write_record(row.cells().map(|v| v.to_string()))
            .map_err(|e| csv_write(path, e))?;
    }
    writer.flush().map_err(|e| output_write(path, e))?;
    Ok(())
}

/// Render the summary as a single HTML table, header included, no index
/// column. A fixed string builder keeps the output byte-stable.
fn render_html(table: &SummaryTable) -> String {
    let mut out = String::new();
    out.push_str("<table border=\"1\">\n");
    out.push_str("  <thead>\n    <tr>\n");
    for header in table.headers() {
        push_cell(&mut out, "th", &header);
    }
    out.push_str("    </tr>\n  </thead>\n");
    out.push_str("  <tbody>\n");
    for row in &table.rows {
        out.push_str("    <tr>\n");
        for cell in row.cells() {
            push_cell(&mut out, "td", &cell.to_string());
        }
        out.push_str("    </tr>\n");
    }
    out.push_str("  </tbody>\n</table>\n");
    out
}

fn push_cell(out: &mut String, tag: &str, text: &str) {
    out.push_str("      <");
    out.push_str(tag);
    out.push('>');
    out.push_str(&escape_html(text));
    out.push_str("</");
    out.push_str(tag);
    out.push_str(">\n");
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn output_write(path: &Path, source: std::io::Error) -> SummaryError {
    SummaryError::OutputWrite {
        path: path.to_path_buf(),
        source,
    }
}

fn csv_write(path: &Path, err: csv::Error) -> SummaryError {
    let source = match err.into_kind() {
        csv::ErrorKind::Io(e) => e,
        other => std::io::Error::new(std::io::ErrorKind::Other, format!("{:?}", other)),
    };
    output_write(path, source)
}
