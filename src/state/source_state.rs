/// Terminal states a source can end a query in
///
/// Every launched worker ends in exactly one of these. Only `Matched`
/// contributes to the result set; the rest are kept for logs and statistics.
use std::fmt;

/// Represents how one source finished for one query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceState {
    // ===== Success =====
    /// Page fetched, parsed, and contained the query
    Matched,

    /// Page fetched and parsed but never mentions the query
    NoMatch,

    // ===== Fetch failures =====
    /// The fetch did not finish within the per-fetch timeout
    Timeout,

    /// Connection refused, DNS failure, TLS error
    Unreachable,

    /// The server answered with a non-2xx status
    HttpError,

    // ===== Processing failures =====
    /// The body was empty or not text
    ParseFailed,

    /// The body could not be read, or the worker itself failed
    Failed,
}

impl SourceState {
    /// Returns true if the source produced a result
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Matched)
    }

    /// Returns true if this represents an absorbed failure
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::Matched | Self::NoMatch)
    }

    /// Returns true if the failure happened before any content arrived
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, Self::Timeout | Self::Unreachable | Self::HttpError)
    }

    /// Short snake_case name used in logs and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Matched => "matched",
            Self::NoMatch => "no_match",
            Self::Timeout => "timeout",
            Self::Unreachable => "unreachable",
            Self::HttpError => "http_error",
            Self::ParseFailed => "parse_failed",
            Self::Failed => "failed",
        }
    }

    /// Returns all possible source states, in report order
    pub fn all_states() -> Vec<Self> {
        vec![
            Self::Matched,
            Self::NoMatch,
            Self::Timeout,
            Self::Unreachable,
            Self::HttpError,
            Self::ParseFailed,
            Self::Failed,
        ]
    }
}

impl fmt::Display for SourceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
