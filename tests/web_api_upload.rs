//! Gateway upload tests.
//!
//! Integration tests for the multipart upload endpoint, in both the simple
//! and the path-preserving variants.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use serde_json::Value;
use tempfile::TempDir;

use appdock::web::handlers::AppState;
use appdock::web::router::create_router;
use appdock::{AppStore, TempStore};

use common::{create_test_server, upload, upload_with_path};

// ============================================================================
// Simple variant
// ============================================================================

#[tokio::test]
async fn test_upload_and_fetch_entry_point() {
    let (server, _temp_dir) = create_test_server(false);

    let response = upload(&server, "demo", "index.html", b"<h1>Hi</h1>").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["message"], "App 'demo' uploaded successfully.");

    let response = server.get("/demo").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "<h1>Hi</h1>");
}

#[tokio::test]
async fn test_upload_lands_in_app_directory() {
    let (server, temp_dir) = create_test_server(false);

    upload(&server, "demo", "style.css", b"body {}").await.assert_status_ok();

    let asset = temp_dir.path().join("apps").join("demo").join("style.css");
    assert_eq!(std::fs::read(&asset).unwrap(), b"body {}");
}

#[tokio::test]
async fn test_upload_moves_file_out_of_holding_area() {
    let (server, temp_dir) = create_test_server(false);

    upload(&server, "demo", "index.html", b"<h1>Hi</h1>")
        .await
        .assert_status_ok();

    let staged: Vec<_> = std::fs::read_dir(temp_dir.path().join("uploads"))
        .unwrap()
        .collect();
    assert!(staged.is_empty());
}

#[tokio::test]
async fn test_upload_without_app_id_is_rejected() {
    let (server, temp_dir) = create_test_server(false);

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(b"<h1>Hi</h1>".to_vec()).file_name("index.html"),
    );
    let response = server.post("/upload").multipart(form).await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"], "Application ID is required");

    // Rejected before any filesystem mutation.
    assert!(!temp_dir.path().join("apps").exists());
    let staged: Vec<_> = std::fs::read_dir(temp_dir.path().join("uploads"))
        .unwrap()
        .collect();
    assert!(staged.is_empty());
}

#[tokio::test]
async fn test_upload_with_empty_app_id_is_rejected() {
    let (server, _temp_dir) = create_test_server(false);

    let response = upload(&server, "", "index.html", b"x").await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"], "Application ID is required");
}

#[tokio::test]
async fn test_upload_without_file_is_rejected() {
    let (server, temp_dir) = create_test_server(false);

    let form = MultipartForm::new().add_text("appId", "demo");
    let response = server.post("/upload").multipart(form).await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"], "A file is required");

    assert!(!temp_dir.path().join("apps").exists());
}

#[tokio::test]
async fn test_upload_with_two_files_is_rejected() {
    let (server, _temp_dir) = create_test_server(false);

    let form = MultipartForm::new()
        .add_text("appId", "demo")
        .add_part("file", Part::bytes(b"one".to_vec()).file_name("one.txt"))
        .add_part("file", Part::bytes(b"two".to_vec()).file_name("two.txt"));
    let response = server.post("/upload").multipart(form).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_reupload_overwrites_previous_content() {
    let (server, _temp_dir) = create_test_server(false);

    upload(&server, "demo", "index.html", b"<h1>v1</h1>")
        .await
        .assert_status_ok();
    upload(&server, "demo", "index.html", b"<h1>v2</h1>")
        .await
        .assert_status_ok();

    let response = server.get("/demo").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "<h1>v2</h1>");
}

#[tokio::test]
async fn test_upload_ignores_unknown_form_fields() {
    let (server, _temp_dir) = create_test_server(false);

    let form = MultipartForm::new()
        .add_text("appId", "demo")
        .add_text("comment", "ignored")
        .add_part("file", Part::bytes(b"<h1>Hi</h1>".to_vec()).file_name("index.html"));
    let response = server.post("/upload").multipart(form).await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_upload_rejects_traversal_app_id() {
    let (server, temp_dir) = create_test_server(false);

    let response = upload(&server, "../escape", "index.html", b"x").await;

    response.assert_status_bad_request();
    assert!(!temp_dir.path().join("apps").exists());
    assert!(!temp_dir.path().join("escape").exists());
}

#[tokio::test]
async fn test_upload_ignores_file_path_in_simple_variant() {
    let (server, temp_dir) = create_test_server(false);

    upload_with_path(&server, "demo", "sub/dir/x.txt", "x.txt", b"flat")
        .await
        .assert_status_ok();

    // The simple variant drops the filePath field entirely.
    let flat = temp_dir.path().join("apps").join("demo").join("x.txt");
    assert_eq!(std::fs::read(&flat).unwrap(), b"flat");
    assert!(!temp_dir.path().join("apps").join("demo").join("sub").exists());
}

#[tokio::test]
async fn test_upload_filesystem_failure_returns_500() {
    let temp_dir = TempDir::new().unwrap();

    // A plain file where the applications root should be makes directory
    // creation fail on the first upload.
    let apps_path = temp_dir.path().join("apps");
    std::fs::write(&apps_path, b"not a directory").unwrap();

    let store = AppStore::new(&apps_path);
    let staging = TempStore::new(temp_dir.path().join("uploads")).unwrap();
    let state = Arc::new(AppState::new(store, staging, false));
    let server = TestServer::new(create_router(state)).unwrap();

    let response = upload(&server, "demo", "index.html", b"x").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "Upload failed.");
    assert!(body["details"].is_string());
}

// ============================================================================
// Path-preserving variant
// ============================================================================

#[tokio::test]
async fn test_preserving_upload_reconstructs_directories() {
    let (server, _temp_dir) = create_test_server(true);

    let response = upload_with_path(&server, "demo", "sub/dir/x.txt", "x.txt", b"nested").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["message"], "App 'demo' uploaded successfully.");

    let response = server.get("/demo/sub/dir/x.txt").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "nested");
}

#[tokio::test]
async fn test_preserving_upload_requires_file_path() {
    let (server, temp_dir) = create_test_server(true);

    let response = upload(&server, "demo", "x.txt", b"x").await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"], "Application ID and file path are required");

    assert!(!temp_dir.path().join("apps").exists());
}

#[tokio::test]
async fn test_preserving_upload_requires_app_id() {
    let (server, _temp_dir) = create_test_server(true);

    let form = MultipartForm::new()
        .add_text("filePath", "sub/x.txt")
        .add_part("file", Part::bytes(b"x".to_vec()).file_name("x.txt"));
    let response = server.post("/upload").multipart(form).await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"], "Application ID and file path are required");
}

#[tokio::test]
async fn test_preserving_upload_rejects_traversal_file_path() {
    let (server, temp_dir) = create_test_server(true);

    let response =
        upload_with_path(&server, "demo", "../outside/x.txt", "x.txt", b"x").await;

    response.assert_status_bad_request();
    assert!(!temp_dir.path().join("apps").exists());
    assert!(!temp_dir.path().join("outside").exists());
}
