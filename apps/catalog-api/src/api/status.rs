use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub docs: &'static str,
}

/// Service status block served at the root.
pub async fn home() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "Product service is running",
        service: "GlobalPrice catalog API",
        docs: "/apidocs",
    })
}
