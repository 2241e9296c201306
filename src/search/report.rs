//! Per-query report: ranked results plus how every source finished

use crate::search::results::ResultSet;
use crate::state::SourceState;
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;

/// Counts of sources by terminal state for one query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Number of sources a worker was launched for
    pub sources_queried: u64,

    /// Count of sources by terminal state
    pub sources_by_state: HashMap<SourceState, u64>,
}

impl SearchStatistics {
    /// Records one finished source
    pub fn record(&mut self, state: SourceState) {
        *self.sources_by_state.entry(state).or_insert(0) += 1;
    }

    /// Number of sources that finished in `state`
    pub fn count(&self, state: SourceState) -> u64 {
        self.sources_by_state.get(&state).copied().unwrap_or(0)
    }

    /// Number of sources that finished in any state
    pub fn sources_finished(&self) -> u64 {
        self.sources_by_state.values().sum()
    }

    /// Number of sources whose failure was absorbed
    pub fn total_errors(&self) -> u64 {
        self.sources_by_state
            .iter()
            .filter(|(state, _)| state.is_error())
            .map(|(_, count)| count)
            .sum()
    }
}

/// Everything known about one finished query
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// The trimmed query
    pub query: String,

    /// Ranked, truncated results
    pub results: ResultSet,

    /// How every source finished
    pub statistics: SearchStatistics,

    /// Wall-clock time from dispatch to ranking
    pub elapsed: Duration,
}

/// JSON envelope for a finished query
#[derive(Debug, Serialize)]
pub struct SearchResponse<'a> {
    pub query: &'a str,
    pub results: &'a ResultSet,
    pub count: usize,
}

impl SearchReport {
    /// Borrows the report as the `{ query, results, count }` envelope
    pub fn response(&self) -> SearchResponse<'_> {
        SearchResponse {
            query: &self.query,
            results: &self.results,
            count: self.results.len(),
        }
    }
}
