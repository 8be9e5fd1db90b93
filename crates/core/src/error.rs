//! Error types for the read pipeline.
//!
//! Every failure of a single read is a [`ReadError`]. Callers only ever see
//! two classes of failure, exposed through [`ReadError::kind`]: the page could
//! not be fetched, or it was fetched but held no article.
//!
//! # Example
//!
//! ```rust
//! use readproxy_core::{FailureKind, ReadError};
//!
//! let err = ReadError::Status(404);
//! assert_eq!(err.kind(), FailureKind::FetchFailure);
//! assert_eq!(err.detail(), "Response 404");
//! ```

use serde::Serialize;
use thiserror::Error;

/// Everything that can go wrong between receiving a target URL and
/// producing an [`Article`](crate::Article).
#[derive(Error, Debug)]
pub enum ReadError {
    /// The target could not be parsed or uses a scheme other than http(s).
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Transport-level failure from reqwest (DNS, connect, TLS, decode).
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The upstream did not answer within the configured timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// The upstream answered with something other than 200.
    #[error("Response {0}")]
    Status(u16),

    /// The upstream declared a content type that is not HTML.
    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    /// The body exceeded the configured size cap.
    #[error("Response exceeds {limit} bytes")]
    TooLarge { limit: usize },

    /// The upstream answered 200 with no body.
    #[error("Empty response")]
    EmptyBody,

    /// The readability heuristic found no main content.
    #[error("Readability returned empty")]
    NoArticle,

    /// The extractor itself failed before it could score the document.
    #[error("{0}")]
    Extraction(String),
}

/// The two failure classes reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureKind {
    FetchFailure,
    ParseFailure,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FetchFailure => "FETCH_FAILURE",
            Self::ParseFailure => "PARSE_FAILURE",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ReadError {
    /// Classifies this error as a fetch or a parse failure.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::NoArticle | Self::Extraction(_) => FailureKind::ParseFailure,
            _ => FailureKind::FetchFailure,
        }
    }

    /// Human-readable detail for the response body. Never empty.
    ///
    /// Errors raised by a collaborator (transport, URL parsing, timeouts,
    /// extractor) are prefixed with `Error: `; checks made by this crate on
    /// an otherwise successful response are reported bare.
    pub fn detail(&self) -> String {
        match self {
            Self::Status(_)
            | Self::UnsupportedContentType(_)
            | Self::TooLarge { .. }
            | Self::EmptyBody
            | Self::NoArticle => self.to_string(),
            _ => format!("Error: {}", self),
        }
    }
}

/// Result type alias for [`ReadError`].
pub type Result<T> = std::result::Result<T, ReadError>;
