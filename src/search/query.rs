//! Validated search queries

use crate::ValidationError;

/// Minimum number of characters a trimmed query must have
pub const MIN_QUERY_CHARS: usize = 2;

/// A validated, trimmed search query
///
/// Matching is case-insensitive, so the folded form is computed once here
/// instead of once per source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    folded: String,
}

impl Query {
    /// Validates a raw query string
    ///
    /// # Returns
    ///
    /// * `Ok(Query)` - The trimmed query
    /// * `Err(ValidationError)` - Fewer than two characters remain after trimming
    ///
    /// # Example
    ///
    /// ```
    /// use sumi_scout::search::Query;
    ///
    /// let query = Query::parse("  Rust ").unwrap();
    /// assert_eq!(query.as_str(), "Rust");
    /// assert!(Query::parse(" a ").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let text = raw.trim();
        let length = text.chars().count();

        if length < MIN_QUERY_CHARS {
            return Err(ValidationError::QueryTooShort {
                length,
                min: MIN_QUERY_CHARS,
            });
        }

        Ok(Self {
            text: text.to_string(),
            folded: fold_case(text),
        })
    }

    /// The trimmed query as entered
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The case-folded query used for matching
    pub fn folded(&self) -> &str {
        &self.folded
    }
}

/// Lowercases text one character at a time without changing its length
///
/// A character whose lowercase form is more than one character (such as
/// U+0130) is left unchanged, so character offsets found in the folded text
/// are valid offsets into the original.
///
/// Final sigma `ς` folds to `σ`. Per-character lowercasing maps `Σ` to `σ`
/// regardless of position, so `ΟΔΟΣ` and `οδος` both fold to `οδοσ`.
pub fn fold_case(text: &str) -> String {
    text.chars()
        .map(|c| {
            let mut lower = c.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some('ς'), None) => 'σ',
                (Some(single), None) => single,
                _ => c,
            }
        })
        .collect()
}
