//! Snippet construction around the first match

/// Characters of context kept before the match
pub const CONTEXT_BEFORE: usize = 75;

/// Characters of context kept after the start of the match
pub const CONTEXT_AFTER: usize = 225;

/// Longest snippet kept before the ellipsis is appended
pub const MAX_SNIPPET_CHARS: usize = 150;

/// Appended when a snippet is cut
pub const ELLIPSIS: &str = "...";

/// Builds the excerpt shown for a matching page
///
/// Takes the characters from `offset - 75` to `offset + 225` (clamped to the
/// text), collapses whitespace, and cuts the result to 150 characters plus
/// `"..."` if it is longer. The window can hold up to 300 characters, so most
/// snippets from long pages are cut.
///
/// # Example
///
/// ```
/// use sumi_scout::search::build_snippet;
///
/// assert_eq!(build_snippet("a  short\n text", 3), "a short text");
/// ```
pub fn build_snippet(text: &str, offset: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();

    let start = offset.saturating_sub(CONTEXT_BEFORE).min(len);
    let end = offset.saturating_add(CONTEXT_AFTER).min(len);

    let window: String = chars[start..end].iter().collect();
    let snippet = window.split_whitespace().collect::<Vec<_>>().join(" ");

    if snippet.chars().count() > MAX_SNIPPET_CHARS {
        let mut cut: String = snippet.chars().take(MAX_SNIPPET_CHARS).collect();
        cut.push_str(ELLIPSIS);
        cut
    } else {
        snippet
    }
}
