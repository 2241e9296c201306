//! Result model: per-source results, the ranked result set, and status

use serde::Serialize;

/// Longest title kept in a result
pub const MAX_TITLE_CHARS: usize = 100;

/// One matching source
///
/// Built once by the query worker and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceResult {
    title: String,
    url: String,
    snippet: String,
    relevance: usize,
}

impl SourceResult {
    /// Creates a result, cutting the title to 100 characters
    pub fn new(
        title: impl AsRef<str>,
        url: impl Into<String>,
        snippet: impl Into<String>,
        relevance: usize,
    ) -> Self {
        Self {
            title: title.as_ref().chars().take(MAX_TITLE_CHARS).collect(),
            url: url.into(),
            snippet: snippet.into(),
            relevance,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn snippet(&self) -> &str {
        &self.snippet
    }

    /// Number of query occurrences on the page
    pub fn relevance(&self) -> usize {
        self.relevance
    }
}

/// The ranked results of one query
///
/// Ordered by relevance (highest first); sources with equal relevance keep
/// their order from the source list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    results: Vec<SourceResult>,
}

impl ResultSet {
    /// Ranks results tagged with their position in the source list
    ///
    /// The input may be in any order (typically completion order); the output
    /// depends only on relevance and source position.
    pub fn rank(mut tagged: Vec<(usize, SourceResult)>, limit: usize) -> Self {
        tagged.sort_by(|(a_index, a), (b_index, b)| {
            b.relevance
                .cmp(&a.relevance)
                .then_with(|| a_index.cmp(b_index))
        });
        tagged.truncate(limit);

        Self {
            results: tagged.into_iter().map(|(_, result)| result).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SourceResult> {
        self.results.iter()
    }

    pub fn as_slice(&self) -> &[SourceResult] {
        &self.results
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a SourceResult;
    type IntoIter = std::slice::Iter<'a, SourceResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// Service status, answered without touching the network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub source_count: usize,
}
