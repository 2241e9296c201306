//! Search coordinator - fan-out, collection, and ranking
//!
//! This module contains the per-query orchestration:
//! - Validating the query before any network activity
//! - Launching one worker per source, at most `max-concurrent-fetches` in flight
//! - Collecting outcomes in completion order
//! - Ranking the matches deterministically and truncating them

use crate::config::{Config, SearchConfig};
use crate::search::fetcher::{HttpFetcher, PageFetcher};
use crate::search::query::Query;
use crate::search::report::{SearchReport, SearchStatistics};
use crate::search::results::{ResultSet, Status};
use crate::search::source_list::SourceList;
use crate::search::worker::{query_source, SourceOutcome};
use crate::state::{QueryPhase, SourceState};
use crate::url::source_domain;
use crate::{ScoutError, ValidationError};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use url::Url;

/// Main search coordinator structure
///
/// Holds the shared source list and fetcher. A coordinator serves any number
/// of queries, including concurrent ones; no state carries over between them.
pub struct Coordinator<F: PageFetcher = HttpFetcher> {
    sources: SourceList,
    fetcher: Arc<F>,
    max_concurrent_fetches: usize,
    max_results: usize,
}

impl Coordinator<HttpFetcher> {
    /// Creates a coordinator that fetches over HTTP
    ///
    /// # Arguments
    ///
    /// * `config` - Search limits and user agent
    /// * `sources` - The sources every query fans out to
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to serve queries
    /// * `Err(ScoutError)` - The HTTP client could not be built
    pub fn from_config(config: &Config, sources: SourceList) -> Result<Self, ScoutError> {
        let fetcher = HttpFetcher::new(&config.user_agent, &config.search)?;
        Ok(Self::new(sources, fetcher, &config.search))
    }
}

impl<F: PageFetcher> Coordinator<F> {
    /// Creates a coordinator around any fetcher
    pub fn new(sources: SourceList, fetcher: F, settings: &SearchConfig) -> Self {
        Self {
            sources,
            fetcher: Arc::new(fetcher),
            max_concurrent_fetches: settings.max_concurrent_fetches.max(1),
            max_results: settings.max_results,
        }
    }

    /// The configured sources
    pub fn sources(&self) -> &SourceList {
        &self.sources
    }

    /// Reports how many sources are configured, without any network activity
    pub fn status(&self) -> Status {
        Status {
            source_count: self.sources.len(),
        }
    }

    /// Searches every source and returns the ranked results
    ///
    /// # Returns
    ///
    /// * `Ok(ResultSet)` - Possibly empty; failing sources are simply absent
    /// * `Err(ValidationError)` - The query is too short; nothing was fetched
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sumi_scout::config::Config;
    /// use sumi_scout::search::{Coordinator, SourceList};
    /// use url::Url;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let sources = SourceList::new(vec![Url::parse("https://www.rust-lang.org/")?]);
    /// let coordinator = Coordinator::from_config(&Config::default(), sources)?;
    /// for result in &coordinator.search("rust").await? {
    ///     println!("{} ({})", result.title(), result.relevance());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, query: &str) -> Result<ResultSet, ValidationError> {
        self.run_query(query).await.map(|report| report.results)
    }

    /// Searches every source and returns results together with per-source statistics
    pub async fn run_query(&self, query: &str) -> Result<SearchReport, ValidationError> {
        let query = Query::parse(query)?;
        Ok(self.execute(query).await)
    }

    /// Runs the dispatch → collect → rank cycle for a validated query
    async fn execute(&self, query: Query) -> SearchReport {
        let started = Instant::now();
        let mut phase = QueryPhase::Dispatching;
        let mut statistics = SearchStatistics {
            sources_queried: self.sources.len() as u64,
            ..Default::default()
        };

        tracing::debug!(
            "Searching {} sources for {:?} ({} at a time)",
            self.sources.len(),
            query.as_str(),
            self.max_concurrent_fetches
        );

        let query_text = query.as_str().to_string();
        let query = Arc::new(query);
        let permits = Arc::new(Semaphore::new(self.max_concurrent_fetches));
        let mut workers = JoinSet::new();

        for (index, source) in self.sources.iter().enumerate() {
            let permits = Arc::clone(&permits);
            let fetcher = Arc::clone(&self.fetcher);
            let query = Arc::clone(&query);
            let source = source.clone();

            workers.spawn(async move {
                // Queued here while the pool is full
                let _permit = permits.acquire_owned().await;
                let outcome = query_source(fetcher.as_ref(), &source, &query).await;
                (index, source, outcome)
            });
        }

        enter(&mut phase, QueryPhase::Collecting);

        let mut matched = Vec::new();
        while let Some(joined) = workers.join_next().await {
            match joined {
                Ok((index, source, outcome)) => {
                    statistics.record(outcome.state());
                    log_outcome(&source, &outcome);
                    if let Some(result) = outcome.into_result() {
                        matched.push((index, result));
                    }
                }
                Err(e) => {
                    tracing::error!("Source worker failed: {}", e);
                    statistics.record(SourceState::Failed);
                }
            }
        }

        enter(&mut phase, QueryPhase::Ranking);

        let matches = matched.len();
        let results = ResultSet::rank(matched, self.max_results);

        enter(&mut phase, QueryPhase::Done);

        let elapsed = started.elapsed();
        tracing::info!(
            "Search finished: {} of {} sources matched, {} failed, {} returned in {:?}",
            matches,
            statistics.sources_queried,
            statistics.total_errors(),
            results.len(),
            elapsed
        );

        SearchReport {
            query: query_text,
            results,
            statistics,
            elapsed,
        }
    }
}

/// Advances the query phase, logging if the move is not allowed
fn enter(phase: &mut QueryPhase, to: QueryPhase) {
    if let Err(e) = phase.transition(to) {
        tracing::error!("{}", e);
    }
}

/// Logs how a source finished; failures are kept out of the results
fn log_outcome(source: &Url, outcome: &SourceOutcome) {
    let domain = source_domain(source);
    match outcome {
        SourceOutcome::Matched(result) => {
            tracing::debug!(
                "{} matched {} times ({})",
                source,
                result.relevance(),
                domain
            );
        }
        SourceOutcome::NoMatch => {
            tracing::debug!("{} has no match ({})", source, domain);
        }
        SourceOutcome::FetchFailed(e) => {
            tracing::warn!("Skipping {}: {} ({})", source, e, outcome.state());
        }
        SourceOutcome::ParseFailed(e) => {
            tracing::warn!("Skipping {}: {} ({})", source, e, outcome.state());
        }
    }
}
