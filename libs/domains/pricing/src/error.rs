use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use domain_catalog::ProductError;
use thiserror::Error;

/// Failures on the price-conversion path.
///
/// Transport and protocol failures are classified at the client boundary so
/// the response mapping stays total: every outcome becomes a structured JSON
/// body, never an unhandled fault.
#[derive(Debug, Error)]
pub enum PricingError {
    /// The pricing service answered with a non-success status
    #[error("Pricing service rejected the conversion with status {status}")]
    Rejected { status: u16, body: String },

    /// The pricing service could not be reached at all
    #[error("Pricing service is unreachable at {url}: {message}")]
    Unreachable { url: String, message: String },

    /// The pricing service did not answer within the configured timeout
    #[error("Pricing service timed out at {url}")]
    Timeout { url: String },

    /// The pricing service answered 2xx but the body was not JSON
    #[error("Pricing service returned an invalid body: {message}")]
    InvalidBody { message: String },

    #[error(transparent)]
    Product(#[from] ProductError),
}

pub type PricingResult<T> = Result<T, PricingError>;

/// Convert PricingError to AppError for standardized error responses.
///
/// Rejections map to 502 with the collaborator's body passed through as
/// detail; unreachable and timed-out dependencies map to 503 with a
/// remediation tip naming the configured address.
impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::Rejected { status: _, body } => AppError::BadGateway {
                message: "Failed to convert price via pricing service".to_string(),
                details: Some(
                    serde_json::from_str(&body)
                        .unwrap_or_else(|_| serde_json::Value::String(body)),
                ),
            },
            PricingError::Unreachable { url, message: _ } => AppError::ServiceUnavailable {
                message: "Pricing service is unreachable. Is it running?".to_string(),
                tip: format!("Ensure the pricing API is listening at {}.", url),
            },
            PricingError::Timeout { url } => AppError::ServiceUnavailable {
                message: "Pricing service did not answer within the configured timeout".to_string(),
                tip: format!("Ensure the pricing API at {} is healthy and responsive.", url),
            },
            PricingError::InvalidBody { message } => AppError::BadGateway {
                message: "Pricing service returned an unreadable response".to_string(),
                details: Some(serde_json::Value::String(message)),
            },
            PricingError::Product(err) => err.into(),
        }
    }
}

impl IntoResponse for PricingError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
