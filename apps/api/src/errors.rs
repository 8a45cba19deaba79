use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// A degraded parse is NOT represented here. A completion whose expected
/// JSON could not be extracted is still a successful call; the payload
/// carries the raw text instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Service credential is not configured")]
    Configuration,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Service error (status {status}): {message}")]
    Service { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Configuration => AppError::Configuration,
            LlmError::Service { status, message } => AppError::Service { status, message },
            LlmError::Transport(detail) => AppError::Transport(detail),
            LlmError::EmptyContent => AppError::Service {
                status: 200,
                message: "service returned an empty completion".to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Configuration => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIGURATION_ERROR",
                "The generative service credential is not configured".to_string(),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Service { status, message } => {
                tracing::error!("Service error (status {status}): {message}");
                (
                    StatusCode::BAD_GATEWAY,
                    "SERVICE_ERROR",
                    format!("The generative service returned an error (status {status})"),
                )
            }
            AppError::Transport(detail) => {
                tracing::error!("Transport error: {detail}");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    "TRANSPORT_ERROR",
                    "Could not reach the generative service".to_string(),
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
