use std::sync::Arc;
use url::Url;

/// The ordered, read-only list of sources every query fans out to
///
/// Loaded once at startup and shared by reference between queries and their
/// workers. Cloning is cheap and never copies the URLs.
#[derive(Debug, Clone, Default)]
pub struct SourceList {
    sources: Arc<[Url]>,
}

impl SourceList {
    pub fn new(sources: Vec<Url>) -> Self {
        Self {
            sources: sources.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Url> {
        self.sources.iter()
    }

    pub fn as_slice(&self) -> &[Url] {
        &self.sources
    }
}

impl From<Vec<Url>> for SourceList {
    fn from(sources: Vec<Url>) -> Self {
        Self::new(sources)
    }
}
