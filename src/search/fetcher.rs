//! HTTP fetcher implementation
//!
//! This module performs the single bounded-time GET issued for each source:
//! - Building an HTTP client that identifies as a regular browser
//! - Enforcing the per-fetch timeout
//! - Treating any non-2xx status as a failure
//! - Classifying failures into `FetchError` variants
//!
//! There are no retries. A source that fails simply has no result for this query.

use crate::config::{SearchConfig, UserAgentConfig};
use crate::FetchError;
use reqwest::{redirect::Policy, Client};
use std::future::Future;
use url::Url;

/// Unparsed content of a successfully fetched source
#[derive(Debug, Clone)]
pub struct RawPage {
    /// The source that was fetched
    pub source: Url,

    /// Content-Type header value (empty if absent)
    pub content_type: String,

    /// Response body, decoded using the charset declared in Content-Type
    /// (UTF-8 when none is declared)
    pub body: String,
}

/// Something that can fetch one source
///
/// The coordinator is generic over this so it can run against the network or
/// against in-process fakes.
pub trait PageFetcher: Send + Sync + 'static {
    /// Fetches one source, returning its raw content or why it failed
    fn fetch(&self, source: &Url) -> impl Future<Output = Result<RawPage, FetchError>> + Send;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - Browser identification to send
/// * `search` - Supplies the per-fetch timeout
///
/// # Example
///
/// ```no_run
/// use sumi_scout::config::{SearchConfig, UserAgentConfig};
/// use sumi_scout::search::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default(), &SearchConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    search: &SearchConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.browser.as_str())
        .timeout(search.fetch_timeout())
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches sources over HTTP with reqwest
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher from the user agent and search settings
    pub fn new(user_agent: &UserAgentConfig, search: &SearchConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(user_agent, search)?,
        })
    }

}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, source: &Url) -> Result<RawPage, FetchError> {
        fetch_page(&self.client, source).await
    }
}

/// Fetches one URL and classifies any failure
///
/// # Failure Mapping
///
/// | Condition | Result |
/// |-----------|--------|
/// | Timeout (connect, headers, or body) | `FetchError::Timeout` |
/// | Connection refused, DNS, TLS | `FetchError::Connection` |
/// | Non-2xx status | `FetchError::HttpStatus` |
/// | Body could not be read or decoded | `FetchError::Decode` |
pub async fn fetch_page(client: &Client, source: &Url) -> Result<RawPage, FetchError> {
    let response = client
        .get(source.clone())
        .send()
        .await
        .map_err(|e| classify_error(source, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus {
            url: source.to_string(),
            status: status.as_u16(),
        });
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let body = response.text().await.map_err(|e| {
        if e.is_timeout() {
            FetchError::Timeout {
                url: source.to_string(),
            }
        } else {
            FetchError::Decode {
                url: source.to_string(),
                message: e.to_string(),
            }
        }
    })?;

    Ok(RawPage {
        source: source.clone(),
        content_type,
        body,
    })
}

/// Maps a reqwest send error onto a fetch failure
fn classify_error(source: &Url, e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout {
            url: source.to_string(),
        }
    } else if e.is_status() {
        FetchError::HttpStatus {
            url: source.to_string(),
            status: e.status().map_or(0, |s| s.as_u16()),
        }
    } else {
        FetchError::Connection {
            url: source.to_string(),
            message: e.to_string(),
        }
    }
}
