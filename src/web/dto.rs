//! Response DTOs for the appdock web surface.

use serde::Serialize;

/// Successful upload confirmation.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Confirmation message naming the application.
    pub message: String,
}

impl UploadResponse {
    /// Create the confirmation for an application.
    pub fn for_app(app_id: &str) -> Self {
        Self {
            message: format!("App '{app_id}' uploaded successfully."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_response_message() {
        let response = UploadResponse::for_app("demo");
        assert_eq!(response.message, "App 'demo' uploaded successfully.");
    }

    #[test]
    fn test_upload_response_wire_shape() {
        let json = serde_json::to_string(&UploadResponse::for_app("demo")).unwrap();
        assert_eq!(json, r#"{"message":"App 'demo' uploaded successfully."}"#);
    }
}
