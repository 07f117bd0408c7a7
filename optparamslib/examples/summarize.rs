//! Summarize a tuning-results CSV and print the resulting table.

use optparamslib::summarize_results;
use std::env;

fn main() {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "tuning_results.csv".to_string());

    let table = summarize_results(&path).expect("Failed to summarize results");

    println!("{}", table.headers().join(" | "));
    println!("{}", "-".repeat(60));
    for row in &table.rows {
        let cells: Vec<String> = row.cells().map(|v| v.to_string()).collect();
        println!("{}", cells.join(" | "));
    }
    println!();
    println!("{} distinct configuration runs", table.rows.len());
}
