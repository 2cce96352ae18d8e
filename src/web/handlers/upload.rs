//! Upload handler for the appdock web surface.

use axum::extract::{Multipart, State};
use axum::Json;
use std::sync::Arc;

use crate::error::AppdockError;
use crate::web::dto::UploadResponse;
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// POST /upload - receive one file for an application.
///
/// Multipart form fields: `file` (binary, exactly one), `appId` (required),
/// `filePath` (required when path preservation is enabled, ignored
/// otherwise). Required-field failures reject the request before anything
/// touches the filesystem; failures during staging or relocation answer 500
/// with the underlying cause, leaving already-created directories in place.
pub async fn upload_app(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut app_id: Option<String> = None;
    let mut file_path: Option<String> = None;
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::debug!("Failed to read multipart field: {}", e);
        ApiError::bad_request("Invalid multipart data")
    })? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "appId" => {
                app_id = Some(field.text().await.map_err(|e| {
                    tracing::debug!("Failed to read appId field: {}", e);
                    ApiError::bad_request("Invalid appId field")
                })?);
            }
            "filePath" => {
                file_path = Some(field.text().await.map_err(|e| {
                    tracing::debug!("Failed to read filePath field: {}", e);
                    ApiError::bad_request("Invalid filePath field")
                })?);
            }
            "file" => {
                if upload.is_some() {
                    return Err(ApiError::bad_request("Exactly one file is supported per upload"));
                }

                let original_name = field
                    .file_name()
                    .map(|s| s.to_string())
                    .ok_or_else(|| ApiError::bad_request("File part must carry a filename"))?;

                let content = field
                    .bytes()
                    .await
                    .map_err(|e| {
                        tracing::debug!("Failed to read file content: {}", e);
                        ApiError::bad_request("Failed to read file")
                    })?
                    .to_vec();

                upload = Some((original_name, content));
            }
            _ => {}
        }
    }

    // Required-field checks come before any filesystem mutation.
    let has_file_path = file_path.as_deref().is_some_and(|p| !p.is_empty());
    let app_id = match app_id.filter(|id| !id.is_empty()) {
        Some(id) if !state.preserve_paths || has_file_path => id,
        _ if state.preserve_paths => {
            return Err(ApiError::bad_request("Application ID and file path are required"))
        }
        _ => return Err(ApiError::bad_request("Application ID is required")),
    };

    let (original_name, content) =
        upload.ok_or_else(|| ApiError::bad_request("A file is required"))?;

    let rel_path = if state.preserve_paths {
        file_path.as_deref()
    } else {
        None
    };

    state
        .store
        .validate_target(&app_id, rel_path)
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let staged = state.staging.stage(&original_name, &content).map_err(|e| {
        tracing::error!("Failed to stage upload for app '{}': {}", app_id, e);
        ApiError::internal("Upload failed.").with_details(e.to_string())
    })?;

    let destination = state
        .store
        .install(staged, &app_id, rel_path)
        .map_err(|e| match e {
            AppdockError::PathRejected(msg) => ApiError::bad_request(msg),
            e => {
                tracing::error!("Failed to install upload for app '{}': {}", app_id, e);
                ApiError::internal("Upload failed.").with_details(e.to_string())
            }
        })?;

    tracing::info!(
        app_id = %app_id,
        destination = %destination.display(),
        size = content.len(),
        "Asset uploaded"
    );

    Ok(Json(UploadResponse::for_app(&app_id)))
}
