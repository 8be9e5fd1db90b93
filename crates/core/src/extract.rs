//! Document parsing and main-content extraction.
//!
//! Both steps are delegated to [`dom_smoothie`], a port of Mozilla's
//! Readability. Parsing builds an in-memory tree with html5ever and never
//! loads scripts, stylesheets or images referenced by the page.
//!
//! # Example
//!
//! ```rust
//! use readproxy_core::{ExtractConfig, ReadError, extract_article};
//!
//! let html = "<html><body></body></html>";
//! let result = extract_article(html, None, &ExtractConfig::default());
//! assert!(matches!(result, Err(ReadError::NoArticle)));
//! ```

use dom_smoothie::{Config, Readability};

use crate::{Article, ReadError, Result};

/// Tuning knobs passed through to the readability heuristic.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Maximum elements to parse (0 = unlimited).
    pub max_elements: usize,
    /// Minimum characters of text an article must have before the
    /// heuristic stops retrying with relaxed rules.
    pub char_threshold: usize,
    /// Keep `class` attributes in the output HTML.
    pub keep_classes: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self { max_elements: 0, char_threshold: 500, keep_classes: false }
    }
}

impl ExtractConfig {
    fn readability_config(&self) -> Config {
        Config {
            max_elements_to_parse: self.max_elements,
            char_threshold: self.char_threshold,
            keep_classes: self.keep_classes,
            ..Default::default()
        }
    }
}

/// Parses `html` and extracts its main article.
///
/// `url` is the page's own address and is used to resolve relative links in
/// the output. Returns [`ReadError::NoArticle`] when the heuristic finds no
/// readable content, and [`ReadError::Extraction`] when the document cannot
/// be set up for scoring at all.
pub fn extract_article(html: &str, url: Option<&str>, config: &ExtractConfig) -> Result<Article> {
    let mut readability = Readability::new(html, url, Some(config.readability_config()))
        .map_err(|e| ReadError::Extraction(e.to_string()))?;
    tracing::info!("document parsed");

    let article = readability.parse().map_err(|_| ReadError::NoArticle)?;
    if article.text_content.trim().is_empty() {
        return Err(ReadError::NoArticle);
    }

    let article = Article::from(article);
    if article.is_empty() {
        return Err(ReadError::NoArticle);
    }

    Ok(article)
}
