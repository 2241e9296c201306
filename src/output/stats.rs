//! Per-query statistics display
//!
//! Shows how every queried source finished. Failure reasons never reach the
//! result list; this is where they become visible.

use crate::search::SearchStatistics;
use crate::state::SourceState;

/// Formats statistics as an indented plain text block
pub fn format_statistics(stats: &SearchStatistics) -> String {
    let mut out = String::new();

    out.push_str("=== Source Statistics ===\n\n");
    out.push_str(&format!("  Sources queried: {}\n", stats.sources_queried));

    for state in SourceState::all_states() {
        let count = stats.count(state);
        if count == 0 {
            continue;
        }
        let percentage = if stats.sources_queried > 0 {
            (count as f64 / stats.sources_queried as f64) * 100.0
        } else {
            0.0
        };
        out.push_str(&format!("  {}: {} ({:.1}%)\n", state, count, percentage));
    }

    out.push_str(&format!("  Failed sources: {}\n", stats.total_errors()));
    out
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &SearchStatistics) {
    println!("{}", format_statistics(stats));
}
