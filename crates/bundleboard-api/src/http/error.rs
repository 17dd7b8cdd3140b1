//! Application error type mapping domain errors to HTTP status codes.
//!
//! Every failure body is a JSON object with a single `detail` field.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use bundleboard_types::error::BundleError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub struct AppError(pub BundleError);

impl From<BundleError> for AppError {
    fn from(e: BundleError) -> Self {
        AppError(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self.0 {
            BundleError::DataNotFound => {
                (StatusCode::NOT_FOUND, "Bundles data file not found".to_string())
            }
            BundleError::PromptNotFound => {
                (StatusCode::NOT_FOUND, "Prompt not found".to_string())
            }
            BundleError::Malformed => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Error parsing bundles data".to_string())
            }
            BundleError::InvalidPromptId(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            BundleError::Storage(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            json!({ "detail": detail }).to_string(),
        )
            .into_response()
    }
}
