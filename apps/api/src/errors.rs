use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Variants mirror the analysis failure taxonomy. The analyzer layer is the
/// only place that classifies provider failures into these, and every variant
/// renders as a short, actionable message — never a raw provider error body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Parse failure: {0}")]
    ParseFailure(String),

    #[error("Unknown error: {0}")]
    Unknown(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Unauthorized(msg) => {
                tracing::error!("Authorization failure: {msg}");
                (
                    StatusCode::UNAUTHORIZED,
                    "UNAUTHORIZED",
                    "The analyzer credential is missing or rejected. Fix the API key configuration."
                        .to_string(),
                )
            }
            AppError::RateLimited(msg) => {
                tracing::warn!("Rate limited: {msg}");
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    "RATE_LIMITED",
                    "The analyzer is rate limited. Retry in 30-60 seconds.".to_string(),
                )
            }
            AppError::ModelUnavailable(msg) => {
                tracing::error!("Model unavailable: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "MODEL_UNAVAILABLE",
                    "The analysis model is unavailable. Try again shortly.".to_string(),
                )
            }
            AppError::ParseFailure(msg) => {
                tracing::error!("Response parse failure: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PARSE_FAILURE",
                    "The analyzer returned a malformed result. Try again.".to_string(),
                )
            }
            AppError::Unknown(msg) => {
                tracing::error!("Unclassified analyzer error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UNKNOWN_ERROR",
                    "An unexpected analysis error occurred".to_string(),
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
