//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::voice::VoiceError;

/// Application-level error types
///
/// All errors that can occur in the application are represented by this enum.
/// Each variant implements automatic conversion to HTTP responses via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Session with the given ID was not found
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    /// Request payload failed validation
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Error occurred while loading the pattern resource
    #[error("Pattern store error: {0}")]
    PatternStore(#[from] crate::patterns::PatternStoreError),

    /// Error occurred in the voice input/output path
    #[error("Voice error: {0}")]
    Voice(#[from] VoiceError),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::SessionNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::PatternStore(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            AppError::Voice(VoiceError::Unrecognized) => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }
            AppError::Voice(VoiceError::ServiceUnavailable(_)) => {
                (StatusCode::SERVICE_UNAVAILABLE, self.to_string())
            }
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
