//! Router configuration for the appdock web surface.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{pass_through, serve_asset, serve_entry, upload_app, AppState};

/// Create the main gateway router.
///
/// Bare application paths hit the entry-point handler; only nested paths
/// reach the generic asset handler, and anything neither route claims lands
/// on the pass-through fallback.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/upload", post(upload_app))
        .route("/:app_id", get(serve_entry))
        .route("/:app_id/*path", get(serve_asset))
        .fallback(pass_through)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
