//! Entry-point and asset serving handlers.

use axum::body::Body;
use axum::extract::{Path as UrlPath, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use std::path::Path;
use std::sync::Arc;

use crate::store::AssetLookup;
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// GET /:appId - serve an application's entry point.
///
/// Checked ahead of generic asset serving so the bare application path
/// always resolves to `index.html`.
pub async fn serve_entry(
    State(state): State<Arc<AppState>>,
    UrlPath(app_id): UrlPath<String>,
) -> Result<Response, ApiError> {
    let entry = state
        .store
        .entry_path(&app_id)
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    if !entry.is_file() {
        return Err(ApiError::not_found(format!("App '{app_id}' not found.")));
    }

    file_response(&entry).await
}

/// GET /:appId/*path - serve a nested asset.
///
/// Three outcomes: a found asset is served with inferred content type; a
/// missing asset inside an existing application answers this handler's own
/// 404; a missing application directory declines the request and defers to
/// the fallback at the end of the chain.
pub async fn serve_asset(
    State(state): State<Arc<AppState>>,
    UrlPath((app_id, requested)): UrlPath<(String, String)>,
) -> Response {
    let lookup = match state.store.resolve_asset(&app_id, &requested) {
        Ok(lookup) => lookup,
        Err(e) => return ApiError::bad_request(e.to_string()).into_response(),
    };

    match lookup {
        AssetLookup::Found(path) => match file_response(&path).await {
            Ok(response) => response,
            Err(e) => e.into_response(),
        },
        AssetLookup::AssetAbsent => (StatusCode::NOT_FOUND, "Not Found").into_response(),
        AssetLookup::DirectoryAbsent => pass_through().await.into_response(),
    }
}

/// Terminal fallback of the serving chain.
///
/// `serve_asset` delegates here when the application directory itself is
/// absent; the router also mounts this for paths no route claims.
pub async fn pass_through() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Build a file response with conventional content-type inference.
async fn file_response(path: &Path) -> Result<Response, ApiError> {
    let content = tokio::fs::read(path).await.map_err(|e| {
        tracing::error!("Failed to read {}: {}", path.display(), e);
        ApiError::internal("Failed to read file")
    })?;

    let content_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string();

    Response::builder()
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, content.len())
        .body(Body::from(content))
        .map_err(|e| {
            tracing::error!("Failed to build response: {}", e);
            ApiError::internal("Failed to build response")
        })
}
