//! Relevance scoring
//!
//! Relevance is the number of non-overlapping, case-insensitive occurrences of
//! the query in a page's normalized text.

use crate::search::query::{fold_case, Query};

/// Outcome of scoring a page that mentions the query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relevance {
    /// Number of non-overlapping occurrences (always >= 1)
    pub count: usize,

    /// Character offset of the first occurrence
    pub first_offset: usize,
}

/// Scores normalized text against a query
///
/// # Returns
///
/// * `Some(Relevance)` - The query occurs at least once
/// * `None` - The text never mentions the query
///
/// # Example
///
/// ```
/// use sumi_scout::search::{score, Query};
///
/// let query = Query::parse("quick").unwrap();
/// let relevance = score("the quick brown fox the quick fox", &query).unwrap();
/// assert_eq!(relevance.count, 2);
/// assert_eq!(relevance.first_offset, 4);
/// ```
pub fn score(text: &str, query: &Query) -> Option<Relevance> {
    let needle = query.folded();
    if needle.is_empty() {
        return None;
    }

    let haystack = fold_case(text);
    let first_byte = haystack.find(needle)?;
    let count = haystack.matches(needle).count();

    Some(Relevance {
        count,
        first_offset: haystack[..first_byte].chars().count(),
    })
}
