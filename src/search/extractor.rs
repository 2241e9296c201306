//! HTML text extraction
//!
//! This module turns a fetched page into plain text:
//! - Parses the body as HTML (malformed markup is repaired, not rejected)
//! - Drops `<script>` and `<style>` subtrees entirely
//! - Collects the remaining text in document order
//! - Collapses all whitespace into single spaces
//! - Takes the title from `<title>`, falling back to the source URL

use crate::search::fetcher::RawPage;
use crate::ExtractError;
use scraper::{ElementRef, Html, Node, Selector};

/// Elements whose content is never visible text
const HIDDEN_ELEMENTS: &[&str] = &["script", "style"];

/// Content types that are never parsed as markup
const BINARY_CONTENT_TYPES: &[&str] = &[
    "image/",
    "audio/",
    "video/",
    "font/",
    "application/octet-stream",
    "application/pdf",
    "application/zip",
    "application/gzip",
];

/// Plain text and title extracted from one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDocument {
    /// Page title, or the source URL when the page has none
    pub title: String,

    /// Visible text with whitespace collapsed to single spaces
    pub text: String,
}

/// Extracts a normalized document from a fetched page
///
/// # Returns
///
/// * `Ok(NormalizedDocument)` - Best-effort text, even for broken markup
/// * `Err(ExtractError)` - The body is empty or declared as binary content
pub fn extract_document(page: &RawPage) -> Result<NormalizedDocument, ExtractError> {
    let content_type = page.content_type.to_ascii_lowercase();
    if BINARY_CONTENT_TYPES
        .iter()
        .any(|binary| content_type.trim_start().starts_with(binary))
    {
        return Err(ExtractError::Binary {
            content_type: page.content_type.clone(),
        });
    }

    if page.body.trim().is_empty() {
        return Err(ExtractError::Empty);
    }

    Ok(extract_html(&page.body, page.source.as_str()))
}

/// Extracts title and visible text from HTML markup
///
/// # Example
///
/// ```
/// use sumi_scout::search::extract_html;
///
/// let html = r#"<html><head><title>Docs</title><style>p{}</style></head>
///               <body><p>Hello   world</p><script>var x;</script></body></html>"#;
/// let doc = extract_html(html, "https://example.com/");
/// assert_eq!(doc.title, "Docs");
/// assert_eq!(doc.text, "Docs Hello world");
/// ```
pub fn extract_html(html: &str, fallback_title: &str) -> NormalizedDocument {
    let document = Html::parse_document(html);

    let title = extract_title(&document).unwrap_or_else(|| fallback_title.to_string());

    let mut raw_text = String::new();
    collect_visible_text(document.root_element(), &mut raw_text);

    NormalizedDocument {
        title,
        text: normalize_whitespace(&raw_text),
    }
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Appends the text under `element`, skipping hidden subtrees
fn collect_visible_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            if HIDDEN_ELEMENTS.contains(&child_element.value().name()) {
                continue;
            }
            collect_visible_text(child_element, out);
        } else if let Node::Text(text) = child.value() {
            out.push_str(text);
        }
    }
}

/// Collapses text into single-space separated words
///
/// Lines are trimmed, split on whitespace runs, and the non-empty fragments
/// rejoined with one space, so no newline or indentation survives.
pub fn normalize_whitespace(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
