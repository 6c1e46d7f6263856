//! Route assembly for the catalog API.

mod products;
mod status;

use axum::{Router, routing::get};
use axum_helpers::errors::handlers::not_found;
use axum_helpers::health::health_router;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::openapi::ApiDoc;

/// Assemble the full router: status block, health, products CRUD, the
/// price-conversion endpoint and the Swagger UI.
pub fn router(config: &Config, db: DatabaseConnection) -> Router {
    Router::new()
        .route("/", get(status::home))
        .merge(health_router())
        .nest("/products", products::router(config, db))
        .merge(SwaggerUi::new("/apidocs").url("/apidocs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
