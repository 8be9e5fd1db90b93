//! The read pipeline: target URL → fetch → parse → extract.
//!
//! # Example
//!
//! ```no_run
//! use readproxy_core::{ExtractConfig, FetchConfig, Reader};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let reader = Reader::new(FetchConfig::default(), ExtractConfig::default())?;
//!     let article = reader.read("https://example.com/article").await?;
//!     println!("{}", article.title);
//!     Ok(())
//! }
//! ```

use tracing::{Instrument, Span, info, info_span};

use crate::extract::{ExtractConfig, extract_article};
use crate::fetch::{FetchConfig, Fetcher, parse_target};
use crate::{Article, ReadError, Result};

/// Fetches pages and extracts their articles.
///
/// Holds no per-request state; one instance serves every request and clones
/// share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Reader {
    fetcher: Fetcher,
    extract: ExtractConfig,
}

impl Reader {
    pub fn new(fetch: FetchConfig, extract: ExtractConfig) -> Result<Self> {
        Ok(Self { fetcher: Fetcher::new(fetch)?, extract })
    }

    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    pub fn extract_config(&self) -> &ExtractConfig {
        &self.extract
    }

    /// Reads the article behind `raw_url`.
    ///
    /// Every step is logged under a span carrying the target URL. Extraction
    /// runs on the blocking pool so a large document does not hold up the
    /// async workers.
    pub async fn read(&self, raw_url: &str) -> Result<Article> {
        let span = info_span!("read", url = %raw_url.trim());
        self.read_inner(raw_url).instrument(span).await
    }

    async fn read_inner(&self, raw_url: &str) -> Result<Article> {
        info!("Request initiated");

        let result = self.fetch_and_extract(raw_url).await;
        match &result {
            Ok(article) => info!(
                title = %article.title,
                chars = article.content_length(),
                "Readability title: {}",
                article.title
            ),
            Err(e) => info!(error = %e, kind = %e.kind(), "error detail: {}", e),
        }

        result
    }

    async fn fetch_and_extract(&self, raw_url: &str) -> Result<Article> {
        let url = parse_target(raw_url)?;
        let page = self.fetcher.fetch(&url).await?;
        info!(bytes = page.len(), final_url = %page.url, "{} bytes received", page.len());

        let html = page.text();
        let page_url = page.url.to_string();
        let config = self.extract.clone();
        let span = Span::current();

        tokio::task::spawn_blocking(move || {
            let _entered = span.enter();
            extract_article(&html, Some(&page_url), &config)
        })
        .await
        .map_err(|e| ReadError::Extraction(e.to_string()))?
    }
}
