//! Sumi-Scout: an on-demand federated page search
//!
//! This crate answers a free-text query by fetching a fixed list of source pages
//! concurrently, extracting their visible text, counting query matches, and
//! returning a ranked list of the best matching pages with snippets.
//! Nothing is indexed or persisted; every query re-fetches every source.

pub mod config;
pub mod output;
pub mod search;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Sumi-Scout operations
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid phase transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: state::QueryPhase,
        to: state::QueryPhase,
    },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,
}

/// Rejected queries; the only failure a search reports to its caller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("query too short: {length} characters after trimming, at least {min} required")]
    QueryTooShort { length: usize, min: usize },
}

/// Failure to fetch a single source
///
/// These never leave the query worker; they are logged and counted.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection error for {url}: {message}")]
    Connection { url: String, message: String },

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to read body of {url}: {message}")]
    Decode { url: String, message: String },
}

/// Failure to turn a fetched page into text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("Page body is empty")]
    Empty,

    #[error("Page content type is not text: {content_type}")]
    Binary { content_type: String },
}

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::{load_sources, Config};
pub use search::{Coordinator, HttpFetcher, PageFetcher, ResultSet, SourceList, SourceResult, Status};
pub use state::{QueryPhase, SourceState};
