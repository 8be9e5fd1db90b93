//! Request handlers.

use axum::Json;
use axum::extract::{RawQuery, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use readproxy_core::Reader;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use crate::types::ResponsePayload;

/// Shared handler state. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub reader: Reader,
}

impl AppState {
    pub fn new(reader: Reader) -> Self {
        Self { reader }
    }
}

/// `GET /?url=<target>`
///
/// A missing or blank `url` parameter gets a bare 400 with no body. Every
/// other outcome is a 200 carrying a [`ResponsePayload`], including fetch and
/// parse failures.
pub async fn read_article(State(state): State<AppState>, uri: Uri, RawQuery(query): RawQuery) -> Response {
    let span = info_span!("request", id = %Uuid::new_v4());

    async move {
        info!("Incoming request: {}", uri);

        let Some(target) = query.as_deref().and_then(target_param) else {
            return StatusCode::BAD_REQUEST.into_response();
        };

        let payload = ResponsePayload::from(state.reader.read(&target).await);
        Json(payload).into_response()
    }
    .instrument(span)
    .await
}

/// `GET /ok`
pub async fn ok() -> &'static str {
    "ok"
}

/// First `url` pair of a form-encoded query string, if it is not blank.
fn target_param(query: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "url")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.trim().is_empty())
}
