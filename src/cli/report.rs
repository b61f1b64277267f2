//! Report printing for generator runs.
//!
//! Kept apart from the pipeline so `core` can be used as a library.

use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::core::GenerateReport;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the run summary to stdout.
pub fn print_report(report: &GenerateReport, config_source: Option<&Path>, verbose: bool) {
    print_report_to(report, config_source, verbose, &mut io::stdout().lock());
}

/// Print the run summary to a custom writer.
pub fn print_report_to<W: Write>(
    report: &GenerateReport,
    config_source: Option<&Path>,
    verbose: bool,
    writer: &mut W,
) {
    if verbose {
        let source = match config_source {
            Some(path) => path.display().to_string(),
            None => "defaults".to_string(),
        };
        let _ = writeln!(writer, "{} {}", "config:".dimmed(), source);
    }

    let _ = writeln!(
        writer,
        "Reading scheme file: {}",
        report.schema_path.display()
    );
    let _ = writeln!(
        writer,
        "Found {} unique column names",
        report.columns.len()
    );
    let _ = writeln!(writer, "Found {} unique table names", report.tables.len());

    if verbose && !report.skipped.is_empty() {
        let skipped: Vec<&str> = report.skipped.iter().map(String::as_str).collect();
        let _ = writeln!(
            writer,
            "{} {}",
            "skipped keywords:".dimmed(),
            skipped.join(", ")
        );
    }

    for path in &report.written {
        let _ = writeln!(writer, "Generated: {}", path.display());
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        "Const class generation completed successfully!".green()
    );

    print_names("Column Names Found:", &report.columns, writer);
    print_names("Table Names Found:", &report.tables, writer);
}

/// Print a failure line to stdout.
pub fn print_error(err: &anyhow::Error) {
    print_error_to(err, &mut io::stdout().lock());
}

pub fn print_error_to<W: Write>(err: &anyhow::Error, writer: &mut W) {
    let _ = writeln!(writer, "{} {}: {:#}", FAILURE_MARK.red(), "Error".bold().red(), err);
}

fn print_names<W: Write>(title: &str, names: &BTreeSet<String>, writer: &mut W) {
    let _ = writeln!(writer, "\n{}", title.bold());
    for name in names {
        let _ = writeln!(writer, "  - {}", name);
    }
}
