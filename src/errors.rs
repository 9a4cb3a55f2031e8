// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Each variant maps to appropriate HTTP status code and error response
#[derive(Error, Debug)]
pub enum PlacesError {
    /// Places API answered with a non-success status
    #[error("Places API returned status {status}")]
    UpstreamFailure { status: u16, body: String },

    /// Transport failure or unparsable success body
    #[error("External API error: {0}")]
    ExternalApiError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Convert PlacesError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for PlacesError {
    fn error_response(&self) -> HttpResponse {
        let error_code = match self {
            PlacesError::UpstreamFailure { .. } => "UPSTREAM_FAILURE",
            PlacesError::ExternalApiError(_) => "EXTERNAL_API_ERROR",
            PlacesError::ValidationError(_) => "VALIDATION_ERROR",
        };

        let mut error = json!({
            "code": error_code,
            "message": self.to_string(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        // Surface the upstream diagnostics verbatim
        if let PlacesError::UpstreamFailure { status, body } = self {
            error["status"] = json!(status);
            error["body"] = json!(body);
        }

        HttpResponse::build(self.status_code()).json(json!({ "error": error }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            PlacesError::UpstreamFailure { .. } => StatusCode::BAD_GATEWAY,
            PlacesError::ExternalApiError(_) => StatusCode::BAD_GATEWAY,
            PlacesError::ValidationError(_) => StatusCode::BAD_REQUEST,
        }
    }
}
