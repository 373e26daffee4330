// crates/server/src/error.rs
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;
use ts_rs::TS;
use uuid::Uuid;

use cruxlog_core::FieldError;
use cruxlog_db::DbError;

/// Structured JSON error response for API errors
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../../../frontend/src/api/generated/")]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Per-field validation messages, present only for 400 responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, String>>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            fields: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
            fields: None,
        }
    }

    pub fn with_fields(error: impl Into<String>, errors: &[FieldError]) -> Self {
        let mut fields = BTreeMap::new();
        for e in errors {
            // First message per field wins
            fields.entry(e.field.clone()).or_insert_with(|| e.message.clone());
        }
        Self {
            error: error.into(),
            details: None,
            fields: Some(fields),
        }
    }
}

/// API error types that map to HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Session not found: {0}")]
    SessionNotFound(Uuid),

    #[error("Insight not found: {0}")]
    InsightNotFound(Uuid),

    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            ApiError::SessionNotFound(id) => {
                tracing::warn!(session_id = %id, "Session not found");
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::with_details("Session not found", format!("Session ID: {}", id)),
                )
            }
            ApiError::InsightNotFound(id) => {
                tracing::warn!(insight_id = %id, "Insight not found");
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::with_details("Insight not found", format!("Insight ID: {}", id)),
                )
            }
            ApiError::Validation(errors) => {
                tracing::warn!(field_count = errors.len(), "Validation failed");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_fields("Validation failed", errors),
                )
            }
            ApiError::MalformedBody(msg) => {
                tracing::warn!(message = %msg, "Malformed request body");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_details("Malformed request body", msg.clone()),
                )
            }
            ApiError::Database(db_err) => {
                tracing::error!(error = %db_err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Database error"),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!(message = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Internal server error"),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
