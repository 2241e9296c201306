//! Source list loading
//!
//! The source list is read once at startup. Problems with the list never stop
//! the process: an unreadable file yields no sources and a malformed line is
//! skipped.

use crate::config::types::Config;
use crate::url::parse_source;
use std::path::Path;
use url::Url;

/// Loads source URLs from a plain text file, one per line
///
/// Blank lines are ignored. Lines that are not absolute HTTP(S) URLs are
/// skipped with a warning. A missing or unreadable file yields an empty list.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use sumi_scout::config::load_sources;
///
/// let sources = load_sources(Path::new("websites.txt"));
/// println!("Loaded {} sources", sources.len());
/// ```
pub fn load_sources(path: &Path) -> Vec<Url> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Could not read source list {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    parse_source_lines(&content)
}

/// Parses source list content, keeping line order
pub fn parse_source_lines(content: &str) -> Vec<Url> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match parse_source(line) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!("Skipping source '{}': {}", line, e);
                None
            }
        })
        .collect()
}

/// Collects every configured source: inline URLs first, then the list file
pub fn collect_sources(config: &Config) -> Vec<Url> {
    let mut sources: Vec<Url> = config
        .sources
        .urls
        .iter()
        .filter_map(|raw| parse_source(raw).ok())
        .collect();

    if let Some(path) = &config.sources.list_path {
        sources.extend(load_sources(path));
    }

    sources
}
