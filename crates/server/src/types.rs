//! JSON wire types.

use readproxy_core::{Article, FailureKind, ReadError};
use serde::Serialize;

/// Body of every JSON response from `/`.
///
/// Serialized with a `status` discriminator:
/// `{"status":"success","title":...,"content":...}` or
/// `{"status":"fail","error":"FETCH_FAILURE","detail":...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ResponsePayload {
    Success { title: String, content: String },
    Fail { error: FailureKind, detail: String },
}

impl ResponsePayload {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl From<Article> for ResponsePayload {
    fn from(article: Article) -> Self {
        Self::Success { title: article.title, content: article.content }
    }
}

impl From<&ReadError> for ResponsePayload {
    fn from(err: &ReadError) -> Self {
        Self::Fail { error: err.kind(), detail: err.detail() }
    }
}

impl From<readproxy_core::Result<Article>> for ResponsePayload {
    fn from(result: readproxy_core::Result<Article>) -> Self {
        match result {
            Ok(article) => article.into(),
            Err(e) => (&e).into(),
        }
    }
}
