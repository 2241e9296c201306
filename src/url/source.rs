use crate::{UrlError, UrlResult};
use url::Url;

/// Parses a source address into an absolute HTTP(S) URL
///
/// # Rules
///
/// 1. Surrounding whitespace is ignored
/// 2. The URL must parse as an absolute URL
/// 3. Only `http` and `https` are accepted
/// 4. The URL must name a host
///
/// Sources are not otherwise rewritten: the page is fetched exactly as listed
/// and reported under that address.
///
/// # Examples
///
/// ```
/// use sumi_scout::url::parse_source;
///
/// let url = parse_source("  https://Example.com/docs ").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/docs");
///
/// assert!(parse_source("ftp://example.com/").is_err());
/// ```
pub fn parse_source(raw: &str) -> UrlResult<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS sources are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingDomain);
    }

    Ok(url)
}

/// Lowercase host of a source, used as a log field
pub fn source_domain(url: &Url) -> String {
    url.host_str()
        .map(|h| h.to_lowercase())
        .unwrap_or_default()
}
