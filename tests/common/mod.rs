//! Test helpers for gateway API tests.

use std::sync::Arc;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::{TestResponse, TestServer};
use tempfile::TempDir;

use appdock::web::handlers::AppState;
use appdock::web::router::{create_health_router, create_router};
use appdock::{AppStore, TempStore};

/// Create a test server backed by a temporary directory tree.
pub fn create_test_server(preserve_paths: bool) -> (TestServer, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let store = AppStore::new(temp_dir.path().join("apps"));
    let staging =
        TempStore::new(temp_dir.path().join("uploads")).expect("Failed to create staging dir");
    let state = Arc::new(AppState::new(store, staging, preserve_paths));

    let router = create_router(state).merge(create_health_router());
    let server = TestServer::new(router).expect("Failed to create test server");

    (server, temp_dir)
}

/// Upload one file through the multipart endpoint.
pub async fn upload(
    server: &TestServer,
    app_id: &str,
    file_name: &str,
    content: &[u8],
) -> TestResponse {
    let form = MultipartForm::new()
        .add_text("appId", app_id)
        .add_part("file", Part::bytes(content.to_vec()).file_name(file_name));

    server.post("/upload").multipart(form).await
}

/// Upload one file with an explicit `filePath` form field.
pub async fn upload_with_path(
    server: &TestServer,
    app_id: &str,
    file_path: &str,
    file_name: &str,
    content: &[u8],
) -> TestResponse {
    let form = MultipartForm::new()
        .add_text("appId", app_id)
        .add_text("filePath", file_path)
        .add_part("file", Part::bytes(content.to_vec()).file_name(file_name));

    server.post("/upload").multipart(form).await
}
