//! Shared helpers: a local upstream site and an in-process proxy.
#![allow(dead_code)]

use std::net::SocketAddr;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use readproxy_core::{ExtractConfig, FetchConfig, Reader};
use readproxy_server::{AppState, create_router};
use tower::ServiceExt;

pub const ARTICLE_TITLE: &str = "The Quiet Return of the Night Train";

pub const SHORT_HTML: &str = "<html><head><title>T</title></head><body><article>\
    <p>Hello world, this is a long paragraph of real content for extraction.</p>\
    </article></body></html>";

pub fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(get_fixture_path(name)).expect("fixture should exist")
}

fn html(body: String) -> Response {
    ([(header::CONTENT_TYPE, "text/html")], body).into_response()
}

/// Serves the fixture site on an ephemeral local port.
pub async fn spawn_upstream() -> SocketAddr {
    let article = fixture("article.html");
    let bare = fixture("bare.html");

    let app = Router::new()
        .route("/article", get(move || async move { html(article) }))
        .route("/bare", get(move || async move { html(bare) }))
        .route("/short", get(|| async { html(SHORT_HTML.to_string()) }))
        .route("/missing", get(|| async { (StatusCode::NOT_FOUND, "not found") }))
        .route("/broken", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }))
        .route("/empty", get(|| async { html(String::new()) }))
        .route("/json", get(|| async { ([(header::CONTENT_TYPE, "application/json")], "{}") }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

pub fn state() -> AppState {
    let fetch = FetchConfig { timeout: 5, ..Default::default() };
    AppState::new(Reader::new(fetch, ExtractConfig::default()).unwrap())
}

/// `/?url=<target>` with the target form-encoded.
pub fn read_uri(target: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(target.as_bytes()).collect();
    format!("/?url={}", encoded)
}

/// Sends one GET through the proxy router and returns status, content type and body.
pub async fn get_proxy(uri: &str) -> (StatusCode, Option<String>, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = create_router(state()).oneshot(request).await.unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn get_json(uri: &str) -> serde_json::Value {
    let (status, content_type, body) = get_proxy(uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    serde_json::from_str(&body).expect("body should be JSON")
}
