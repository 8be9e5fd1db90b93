//! Fetching the target page.
//!
//! A single [`Fetcher`] is built at startup and shared by every request, so
//! upstream connections are pooled and kept alive between reads. Each fetch
//! is a plain GET that either yields a [`FetchedPage`] holding a non-empty
//! HTML body or fails with one of the fetch-class [`ReadError`] variants.

use std::time::Duration;

use bytes::{Bytes, BytesMut};
use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};
use reqwest::{Client, StatusCode, header};
use url::Url;

use crate::{ReadError, Result};

/// User-Agent sent upstream unless configured otherwise.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/60.0.3112.113 Safari/537.36";

/// Default cap on the upstream body: 5 MiB.
pub const DEFAULT_MAX_BYTES: usize = 5 * 1024 * 1024;

/// Upstream HTTP settings.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// User-Agent header for every upstream request.
    pub user_agent: String,
    /// Maximum body size in bytes (0 = unlimited).
    pub max_bytes: usize,
    /// Reject responses whose declared content type is not `text/html`.
    pub require_html: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_bytes: DEFAULT_MAX_BYTES,
            require_html: true,
        }
    }
}

/// A successful upstream response.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects.
    pub url: Url,
    pub status_code: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl FetchedPage {
    /// Body size in bytes.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Whether the upstream declared an HTML body. A missing header counts as HTML.
    pub fn is_html(&self) -> bool {
        self.content_type.as_deref().is_none_or(is_html_type)
    }

    /// Character encoding of the body.
    ///
    /// Taken from the `charset` parameter of the content type, then from a
    /// `<meta>` declaration near the top of the document, else UTF-8.
    pub fn encoding(&self) -> &'static Encoding {
        self.content_type
            .as_deref()
            .and_then(charset_label)
            .or_else(|| sniff_meta_charset(&self.body))
            .unwrap_or(UTF_8)
    }

    /// Body decoded to UTF-8, with invalid sequences replaced. A byte order
    /// mark overrides the declared encoding.
    pub fn text(&self) -> String {
        let (text, _, _) = self.encoding().decode(&self.body);
        text.into_owned()
    }
}

/// Encoding named by a `charset=` parameter anywhere in `value`.
fn charset_label(value: &str) -> Option<&'static Encoding> {
    let start = value.to_ascii_lowercase().find("charset=")? + "charset=".len();
    let label = value[start..].trim_start_matches(['"', '\'', ' ']);
    let end = label
        .find(|c: char| matches!(c, '"' | '\'' | ';' | ' ' | '/' | '>'))
        .unwrap_or(label.len());

    Encoding::for_label(label[..end].as_bytes())
}

/// Looks for a charset declaration in the `<meta>` tags of the first 1024 bytes.
fn sniff_meta_charset(body: &[u8]) -> Option<&'static Encoding> {
    let head = String::from_utf8_lossy(&body[..body.len().min(1024)]).to_ascii_lowercase();
    let mut rest = head.as_str();

    while let Some(pos) = rest.find("<meta") {
        rest = &rest[pos + "<meta".len()..];
        let tag = &rest[..rest.find('>').unwrap_or(rest.len())];

        if let Some(encoding) = charset_label(tag) {
            // A UTF-16 label in an ASCII-compatible prescan means UTF-8.
            return Some(if encoding == UTF_16LE || encoding == UTF_16BE { UTF_8 } else { encoding });
        }
    }

    None
}

/// Parses and validates the locator a caller asked for.
///
/// Spaces and non-ASCII characters are percent-encoded by the URL parser, so
/// `http://example.com/a b` becomes `http://example.com/a%20b`. Only `http`
/// and `https` targets are accepted.
pub fn parse_target(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ReadError::InvalidUrl("URL must not be empty".to_string()));
    }

    let url = Url::parse(raw).map_err(|e| ReadError::InvalidUrl(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ReadError::InvalidUrl(format!(
            "unsupported scheme \"{}\" (expected http or https)",
            other
        ))),
    }
}

fn is_html_type(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("text/html")
}

/// Pooled HTTP client for upstream pages.
///
/// Cloning is cheap; clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    /// Builds the shared client: gzip decoding, keep-alive pooling and the
    /// configured timeout and User-Agent.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .gzip(true)
            .timeout(Duration::from_secs(config.timeout))
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetches `url` and checks the response.
    ///
    /// Checks run in this order: transport, status (must be exactly 200),
    /// content type, declared length, streamed length, empty body. The body
    /// is streamed so an oversized page is abandoned as soon as it crosses
    /// the cap.
    pub async fn fetch(&self, url: &Url) -> Result<FetchedPage> {
        let mut response = self
            .client
            .get(url.clone())
            .header(
                header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header(header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ReadError::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        if self.config.require_html
            && let Some(ct) = content_type.as_deref()
            && !is_html_type(ct)
        {
            return Err(ReadError::UnsupportedContentType(ct.to_string()));
        }

        let limit = self.config.max_bytes;
        if limit > 0
            && let Some(len) = response.content_length()
            && len > limit as u64
        {
            return Err(ReadError::TooLarge { limit });
        }

        let final_url = response.url().clone();
        let mut body = BytesMut::new();

        while let Some(chunk) = response.chunk().await.map_err(|e| self.transport_error(e))? {
            if limit > 0 && body.len() + chunk.len() > limit {
                return Err(ReadError::TooLarge { limit });
            }
            body.extend_from_slice(&chunk);
        }

        let page = FetchedPage { url: final_url, status_code: status.as_u16(), content_type, body: body.freeze() };
        if page.is_empty() {
            return Err(ReadError::EmptyBody);
        }

        Ok(page)
    }

    fn transport_error(&self, err: reqwest::Error) -> ReadError {
        if err.is_timeout() { ReadError::Timeout { timeout: self.config.timeout } } else { ReadError::Http(err) }
    }
}
