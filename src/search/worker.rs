//! Per-source query worker
//!
//! Runs fetch → extract → score → snippet for one source. Every failure is
//! absorbed here: the worker always returns an outcome, never an error.

use crate::search::extractor::extract_document;
use crate::search::fetcher::PageFetcher;
use crate::search::query::Query;
use crate::search::results::SourceResult;
use crate::search::scorer::score;
use crate::search::snippet::build_snippet;
use crate::state::SourceState;
use crate::{ExtractError, FetchError};
use url::Url;

/// How one source finished for one query
#[derive(Debug)]
pub enum SourceOutcome {
    /// The page mentions the query
    Matched(SourceResult),

    /// The page was read but never mentions the query
    NoMatch,

    /// The page could not be fetched
    FetchFailed(FetchError),

    /// The page was fetched but could not be turned into text
    ParseFailed(ExtractError),
}

impl SourceOutcome {
    /// The terminal state this outcome is counted under
    pub fn state(&self) -> SourceState {
        match self {
            Self::Matched(_) => SourceState::Matched,
            Self::NoMatch => SourceState::NoMatch,
            Self::FetchFailed(FetchError::Timeout { .. }) => SourceState::Timeout,
            Self::FetchFailed(FetchError::Connection { .. }) => SourceState::Unreachable,
            Self::FetchFailed(FetchError::HttpStatus { .. }) => SourceState::HttpError,
            Self::FetchFailed(FetchError::Decode { .. }) => SourceState::Failed,
            Self::ParseFailed(_) => SourceState::ParseFailed,
        }
    }

    /// Drops the failure reason, keeping only a result if there is one
    pub fn into_result(self) -> Option<SourceResult> {
        match self {
            Self::Matched(result) => Some(result),
            _ => None,
        }
    }
}

/// Runs the full pipeline for one source
///
/// # Pipeline
///
/// 1. Fetch the page (one attempt, bounded by the fetch timeout)
/// 2. Extract title and normalized text
/// 3. Count query occurrences; zero means no result
/// 4. Build the snippet around the first occurrence
pub async fn query_source<F: PageFetcher>(fetcher: &F, source: &Url, query: &Query) -> SourceOutcome {
    let page = match fetcher.fetch(source).await {
        Ok(page) => page,
        Err(e) => return SourceOutcome::FetchFailed(e),
    };

    let document = match extract_document(&page) {
        Ok(document) => document,
        Err(e) => return SourceOutcome::ParseFailed(e),
    };

    let Some(relevance) = score(&document.text, query) else {
        return SourceOutcome::NoMatch;
    };

    let snippet = build_snippet(&document.text, relevance.first_offset);

    SourceOutcome::Matched(SourceResult::new(
        &document.title,
        source.as_str(),
        snippet,
        relevance.count,
    ))
}
