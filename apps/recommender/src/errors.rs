use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extract::ExtractError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Bodies are `{"error": "..."}`, with a `"message"` detail where one helps.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::UnprocessableEntity(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, msg.clone(), None)
            }
            AppError::Extraction(ExtractError::UnsupportedFormat(_)) => (
                StatusCode::BAD_REQUEST,
                "Invalid file format. Only PDF, DOCX and TXT are supported.".to_string(),
                Some(self.to_string()),
            ),
            AppError::Extraction(ExtractError::Aborted(detail)) => {
                tracing::error!("Extraction task aborted: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to extract text from resume".to_string(),
                    None,
                )
            }
            AppError::Extraction(e) => {
                tracing::warn!("Extraction error: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Failed to extract text from resume".to_string(),
                    Some(e.to_string()),
                )
            }
            AppError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone(), None),
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to get response from the language model".to_string(),
                    None,
                )
            }
        };

        let body = match message {
            Some(message) => json!({ "error": error, "message": message }),
            None => json!({ "error": error }),
        };

        (status, Json(body)).into_response()
    }
}
