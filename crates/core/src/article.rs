//! The extracted article.

use serde::Serialize;

/// Title and cleaned HTML of a page's main content.
///
/// Both fields are passed through exactly as the extractor produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub title: String,
    /// Readable content as HTML.
    pub content: String,
}

impl Article {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self { title: title.into(), content: content.into() }
    }

    /// True when there is no content markup at all.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Length of the content HTML in characters.
    pub fn content_length(&self) -> usize {
        self.content.chars().count()
    }
}

impl From<dom_smoothie::Article> for Article {
    fn from(article: dom_smoothie::Article) -> Self {
        Self { title: article.title, content: article.content.to_string() }
    }
}
