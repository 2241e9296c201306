use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Default number of sources fetched at the same time
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 10;

/// Default per-fetch timeout in milliseconds
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 5_000;

/// Default size of the ranked result list
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Browser identification sent with every fetch
pub const DEFAULT_BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Main configuration structure for Sumi-Scout
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
}

/// Fan-out and ranking behavior
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of sources fetched simultaneously
    #[serde(rename = "max-concurrent-fetches", default = "default_max_concurrent_fetches")]
    pub max_concurrent_fetches: usize,

    /// Timeout for a single fetch (milliseconds)
    #[serde(rename = "fetch-timeout-ms", default = "default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u64,

    /// Number of results kept after ranking
    #[serde(rename = "max-results", default = "default_max_results")]
    pub max_results: usize,
}

impl SearchConfig {
    /// The per-fetch timeout as a Duration
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Full User-Agent header value
    #[serde(default = "default_browser")]
    pub browser: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            browser: default_browser(),
        }
    }
}

/// Where the source list comes from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourcesConfig {
    /// Plain text file with one URL per line, relative to the config file
    #[serde(rename = "list-path")]
    pub list_path: Option<PathBuf>,

    /// Sources listed directly in the config, queried before file entries
    #[serde(default)]
    pub urls: Vec<String>,
}

fn default_max_concurrent_fetches() -> usize {
    DEFAULT_MAX_CONCURRENT_FETCHES
}

fn default_fetch_timeout_ms() -> u64 {
    DEFAULT_FETCH_TIMEOUT_MS
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

fn default_browser() -> String {
    DEFAULT_BROWSER_USER_AGENT.to_string()
}
