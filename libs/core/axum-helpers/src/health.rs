use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check endpoint handler.
///
/// Returns a simple health status response.
/// This endpoint should always return 200 if the service is running.
pub async fn health_handler() -> Response {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// Router exposing the liveness endpoint at `/health`.
pub fn health_router() -> Router {
    Router::new().route("/health", get(health_handler))
}
