pub mod handlers;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Standard error response structure.
///
/// Returned for all error responses:
/// - `error`: machine-readable error identifier (e.g., "NotFound")
/// - `message`: human-readable error message
/// - `details`: optional structured detail (validation field errors, or the
///   body of a rejected upstream call)
/// - `tip`: optional remediation hint, set on upstream-unreachable failures
///
/// # JSON Example
///
/// ```json
/// {
///   "error": "ServiceUnavailable",
///   "message": "Pricing service is unreachable. Is it running?",
///   "tip": "Ensure the pricing API is listening at http://localhost:5001."
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Optional remediation hint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain error enums convert into this type so that every failure leaving
/// the service carries a structured JSON body and the right status code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Bad Gateway: {message}")]
    BadGateway {
        message: String,
        details: Option<serde_json::Value>,
    },

    #[error("Service Unavailable: {message}")]
    ServiceUnavailable { message: String, tip: String },

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details, tip) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::info!("JSON extraction error: {:?}", e);
                (
                    StatusCode::BAD_REQUEST,
                    "BadRequest",
                    e.body_text(),
                    None,
                    None,
                )
            }
            AppError::ValidationError(e) => {
                tracing::info!("Validation error: {:?}", e);
                (
                    StatusCode::BAD_REQUEST,
                    "BadRequest",
                    "Request validation failed".to_string(),
                    Some(serde_json::to_value(&e).unwrap_or(serde_json::json!(null))),
                    None,
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalServerError",
                    "A database error occurred".to_string(),
                    None,
                    None,
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "BadRequest", msg, None, None)
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "NotFound", msg, None, None)
            }
            AppError::BadGateway { message, details } => {
                tracing::warn!("Bad gateway: {}", message);
                (
                    StatusCode::BAD_GATEWAY,
                    "BadGateway",
                    message,
                    details,
                    None,
                )
            }
            AppError::ServiceUnavailable { message, tip } => {
                tracing::warn!("Service unavailable: {}", message);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "ServiceUnavailable",
                    message,
                    None,
                    Some(tip),
                )
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalServerError",
                    msg,
                    None,
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
            tip,
        });

        (status, body).into_response()
    }
}
