//! Route table.

use axum::Router;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{self, AppState};

/// Builds the router: `/` reads an article, `/ok` is the liveness probe.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::read_article))
        .route("/ok", get(handlers::ok))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
