//! Search module: the fetch → extract → score → rank pipeline
//!
//! This module contains the core search logic, including:
//! - HTTP fetching with a per-fetch timeout
//! - HTML text extraction
//! - Relevance scoring and snippet building
//! - The per-source worker and the fan-out coordinator

mod coordinator;
mod extractor;
mod fetcher;
mod query;
mod report;
mod results;
mod scorer;
mod snippet;
mod source_list;
mod worker;

pub use coordinator::Coordinator;
pub use extractor::{extract_document, extract_html, normalize_whitespace, NormalizedDocument};
pub use fetcher::{build_http_client, fetch_page, HttpFetcher, PageFetcher, RawPage};
pub use query::{fold_case, Query, MIN_QUERY_CHARS};
pub use report::{SearchReport, SearchResponse, SearchStatistics};
pub use results::{ResultSet, SourceResult, Status, MAX_TITLE_CHARS};
pub use scorer::{score, Relevance};
pub use snippet::{build_snippet, MAX_SNIPPET_CHARS};
pub use source_list::SourceList;
pub use worker::{query_source, SourceOutcome};

use crate::config::{collect_sources, Config};
use crate::ScoutError;

/// Builds an HTTP-backed coordinator from a loaded configuration
///
/// This is the main entry point for serving queries. It will:
/// 1. Collect the configured sources (inline URLs, then the list file)
/// 2. Build the HTTP client
/// 3. Return a coordinator that shares both across all queries
///
/// # Returns
///
/// * `Ok(Coordinator)` - Ready to serve queries, possibly with zero sources
/// * `Err(ScoutError)` - The HTTP client could not be built
pub fn build_coordinator(config: &Config) -> Result<Coordinator, ScoutError> {
    let sources = SourceList::new(collect_sources(config));
    tracing::info!("Loaded {} sources", sources.len());
    Coordinator::from_config(config, sources)
}
