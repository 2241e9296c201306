//! Output module for presenting search results
//!
//! This module handles:
//! - Rendering ranked results as plain text
//! - Rendering the `{ query, results, count }` JSON envelope
//! - Displaying per-query source statistics

pub mod stats;

pub use stats::{format_statistics, print_statistics};

use crate::search::{SearchReport, Status};

/// Formats a report as a numbered plain text list
///
/// # Example output
///
/// ```text
/// 2 results for "rust"
///
/// 1. The Rust Programming Language (relevance 12)
///    https://www.rust-lang.org/
///    ... empowering everyone to build reliable and efficient software ...
/// ```
pub fn format_text(report: &SearchReport) -> String {
    let mut out = String::new();

    let noun = if report.results.len() == 1 {
        "result"
    } else {
        "results"
    };
    out.push_str(&format!(
        "{} {} for \"{}\"\n",
        report.results.len(),
        noun,
        report.query
    ));

    for (rank, result) in report.results.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!(
            "{}. {} (relevance {})\n",
            rank + 1,
            result.title(),
            result.relevance()
        ));
        out.push_str(&format!("   {}\n", result.url()));
        if !result.snippet().is_empty() {
            out.push_str(&format!("   {}\n", result.snippet()));
        }
    }

    out
}

/// Formats a report as pretty-printed JSON
pub fn format_json(report: &SearchReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&report.response())
}

/// Formats the service status line
pub fn format_status(status: &Status) -> String {
    format!("Sumi-Scout is ready: {} sources configured", status.source_count)
}
