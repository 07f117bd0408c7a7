//! Terminal rendering for the summary table.

use console::Style;
use optparamslib::SummaryTable;

/// Render the summary as an aligned text table.
///
/// Column widths fit the widest cell (or header) per column; headers are
/// bolded when the stream supports styling.
pub fn render_summary_table(table: &SummaryTable) -> String {
    let headers = table.headers();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &table.rows {
        for (i, cell) in row.cells().enumerate() {
            let len = cell.to_string().len();
            if len > widths[i] {
                widths[i] = len;
            }
        }
    }

    let header_style = Style::new().bold();
    let mut out = String::new();

    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:<width$}", h, width = w))
        .collect();
    out.push_str(&header_style.apply_to(header_line.join("  ")).to_string());
    out.push('\n');

    let total_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(total_width));
    out.push('\n');

    for row in &table.rows {
        let cells: Vec<String> = row
            .cells()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<width$}", cell.to_string(), width = w))
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }

    out
}

/// Build the machine-readable JSON view: headers plus one object per row,
/// all cells rendered as strings.
pub fn summary_to_json(table: &SummaryTable) -> serde_json::Value {
    let headers = table.headers();
    let rows: Vec<serde_json::Value> = table
        .rows
        .iter()
        .map(|row| {
            let mut object = serde_json::Map::new();
            for (header, cell) in headers.iter().zip(row.cells()) {
                object.insert(
                    header.clone(),
                    serde_json::Value::String(cell.to_string()),
                );
            }
            serde_json::Value::Object(object)
        })
        .collect();

    serde_json::json!({
        "headers": headers,
        "rows": rows,
    })
}
