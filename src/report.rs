//! Report rendering: CSV export and the console summary.
//!
//! Thin presentation layer over [`DirectorySummary`]; nothing here
//! changes the numbers.

use colored::*;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::stats::DirectorySummary;

const CSV_HEADER: &str = "filename,num_orders,num_incomplete,self_resolved";

/// Write the per-file stats table as CSV.
pub fn write_csv(summary: &DirectorySummary, path: &Path) -> Result<()> {
    let mut out = Vec::new();
    writeln!(out, "{}", CSV_HEADER)?;
    for stats in &summary.per_file {
        writeln!(
            out,
            "{},{},{},{}",
            stats.filename, stats.num_orders, stats.num_incomplete, stats.self_resolved
        )?;
    }
    fs::write(path, out)?;
    Ok(())
}

/// Render the three summary lines for the console.
pub fn summary_lines(summary: &DirectorySummary) -> Vec<String> {
    let incomplete = match summary.percent_incomplete() {
        Some(pct) => format!("Percentage of incomplete orders: {:.2}%", pct),
        None => "Percentage of incomplete orders: n/a (no orders)".to_string(),
    };
    vec![
        format!("Total number of orders: {}", summary.total_orders),
        incomplete,
        format!(
            "Number of dispense warnings resolved after 1 reorder: {}",
            summary.total_self_resolved
        ),
    ]
}

/// Print the colored console summary.
pub fn print_summary(summary: &DirectorySummary) {
    let lines = summary_lines(summary);
    for line in &lines {
        println!("{}", line.as_str().cyan());
    }
}

/// Serialize the whole summary as pretty JSON.
pub fn to_json(summary: &DirectorySummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}
