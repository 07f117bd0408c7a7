//! # optparams
//!
//! A CLI tool that summarizes hyperparameter-tuning results into one row
//! per configuration run.
//!
//! ## Overview
//!
//! optparams is built on top of optparamslib. It reads a tuning-results CSV
//! (one row per trial), collapses rows sharing the same (configuration,
//! sample_size, iteration) triple, picks a representative value for each
//! `param_*` column, and writes the summary as both CSV and HTML.
//!
//! ## Usage
//!
//! ```bash
//! # Summarize into the current directory
//! optparams tuning_results.csv
//!
//! # Choose the output directory (created if missing)
//! optparams tuning_results.csv --out reports/summary
//!
//! # Print the summary rows as JSON instead of a table
//! optparams tuning_results.csv --output json
//! ```

mod render;

use std::process::ExitCode;

use clap::{Arg, ArgMatches, Command};
use console::Style;
use optparamslib::{summarize_results, write_summary};

use crate::render::{render_summary_table, summary_to_json};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("optparams")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Summarize hyperparameter-tuning results into one row per configuration run")
        .arg(
            Arg::new("input")
                .help("Path to the tuning-results CSV")
                .required(true),
        )
        .arg(
            Arg::new("out")
                .short('o')
                .long("out")
                .default_value(".")
                .help("Directory for the summary files (created if missing)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Stdout format"),
        )
}

/// Run the summarization for parsed arguments
fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let out_dir = matches.get_one::<String>("out").expect("out has a default");
    let json = matches
        .get_one::<String>("output")
        .map(|s| s == "json")
        .unwrap_or(false);

    let table = summarize_results(input)?;
    let paths = write_summary(&table, out_dir)?;

    if json {
        // Machine-readable mode: stdout carries only the JSON document.
        println!("{}", serde_json::to_string_pretty(&summary_to_json(&table))?);
        return Ok(());
    }

    print!("{}", render_summary_table(&table));
    println!();

    let path_style = Style::new().green();
    println!("Table saved to:");
    println!("- {}", path_style.apply_to(paths.csv.display()));
    println!("- {}", path_style.apply_to(paths.html.display()));

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
