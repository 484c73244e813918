#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// The ranking fit cannot proceed: the declared experience values lack
    /// variation (the classifier needs at least two distinct target classes).
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Every normalized skills text in the batch is empty, so the vectorizer
    /// has no vocabulary to build features from.
    #[error("Empty vocabulary: no usable text features in the candidate set")]
    EmptyVocabulary,

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::InsufficientData(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INSUFFICIENT_DATA",
                msg.clone(),
            ),
            AppError::EmptyVocabulary => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EMPTY_VOCABULARY",
                "No usable text features in the candidate set".to_string(),
            ),
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "A file storage error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
