//! Local upstream site used by the integration tests.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;

pub const ARTICLE_TITLE: &str = "The Quiet Return of the Night Train";

/// One short paragraph, well under the default character threshold.
pub const SHORT_HTML: &str = "<html><head><title>T</title></head><body><article>\
    <p>Hello world, this is a long paragraph of real content for extraction.</p>\
    </article></body></html>";

/// ISO-8859-1 page declaring its charset only in a `<meta>` tag.
pub const LATIN1_HTML: &[u8] = b"<html><head><meta charset=\"ISO-8859-1\"><title>Caf\xe9 Society</title></head>\
    <body><article><p>The caf\xe9 on the corner serves cr\xe8me br\xfbl\xe9e every afternoon.</p></article>\
    </body></html>";

pub fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(get_fixture_path(name)).expect("fixture should exist")
}

fn html(body: String) -> Response {
    ([(header::CONTENT_TYPE, "text/html; charset=utf-8")], body).into_response()
}

fn upstream_router() -> Router {
    let article = fixture("article.html");
    let untyped = article.clone();
    let bare = fixture("bare.html");

    Router::new()
        .route("/article", get(move || async move { html(article) }))
        .route("/untyped", get(move || async move { Response::new(Body::from(untyped)) }))
        .route("/bare", get(move || async move { html(bare) }))
        .route("/short", get(|| async { html(SHORT_HTML.to_string()) }))
        .route("/latin1", get(|| async { ([(header::CONTENT_TYPE, "text/html")], LATIN1_HTML.to_vec()) }))
        .route("/moved", get(|| async { Redirect::permanent("/article") }))
        .route("/missing", get(|| async { (StatusCode::NOT_FOUND, "not found") }))
        .route("/broken", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }))
        .route("/created", get(|| async { (StatusCode::CREATED, "<p>created</p>") }))
        .route("/empty", get(|| async { html(String::new()) }))
        .route("/json", get(|| async { ([(header::CONTENT_TYPE, "application/json")], "{\"ok\":true}") }))
        .route("/large", get(|| async { html(large_page(64 * 1024)) }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                html("<p>late</p>".to_string())
            }),
        )
}

fn large_page(size: usize) -> String {
    format!("<html><body><p>{}</p></body></html>", "x".repeat(size))
}

/// Serves the fixture site on an ephemeral local port.
pub async fn spawn_upstream() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, upstream_router()).await.unwrap();
    });

    addr
}
