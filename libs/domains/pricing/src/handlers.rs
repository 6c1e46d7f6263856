//! HTTP handler for the price-conversion endpoint

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use std::collections::HashMap;
use std::sync::Arc;
use utoipa::OpenApi;

use domain_catalog::ProductRepository;

use crate::client::PricingClient;
use crate::error::PricingResult;
use crate::models::PricedProduct;
use crate::service::PriceService;

/// OpenAPI documentation for the pricing API
#[derive(OpenApi)]
#[openapi(
    paths(get_price_in_currency),
    components(schemas(PricedProduct, domain_catalog::Product)),
    tags(
        (name = "Pricing", description = "Price conversion via the external pricing service")
    )
)]
pub struct ApiDoc;

/// Create the pricing router; nested under the same prefix as the catalog
/// routes so the endpoint lives at `/products/{id}/price/{currency}`.
pub fn router<R, C>(service: PriceService<R, C>) -> Router
where
    R: ProductRepository + 'static,
    C: PricingClient + 'static,
{
    Router::new()
        .route("/{id}/price/{currency}", get(get_price_in_currency))
        .with_state(Arc::new(service))
}

/// Get a product with its price converted into a target currency
///
/// Override parameters tune the pricing service's strategy for this single
/// call; values that fail to parse are ignored so the service's own defaults
/// apply.
#[utoipa::path(
    get,
    path = "/{id}/price/{currency}",
    tag = "Pricing",
    params(
        ("id" = i32, Path, description = "Product id"),
        ("currency" = String, Path, description = "Target currency code (USD, EUR, BTC, ...)"),
        ("admin_fee" = Option<f64>, Query, description = "Administrative fee fraction, e.g. 0.005"),
        ("volatility_threshold" = Option<f64>, Query, description = "Volatility threshold percentage"),
        ("max_panic_margin" = Option<f64>, Query, description = "Maximum panic margin multiplier"),
        ("force_panic" = Option<String>, Query, description = "Force panic pricing (true/1/yes/on)"),
    ),
    responses(
        (status = 200, description = "Product with converted price", body = PricedProduct),
        (status = 404, description = "Product not found", body = axum_helpers::ErrorResponse),
        (status = 502, description = "Pricing service rejected the conversion", body = axum_helpers::ErrorResponse),
        (status = 503, description = "Pricing service unreachable", body = axum_helpers::ErrorResponse)
    )
)]
async fn get_price_in_currency<R: ProductRepository, C: PricingClient>(
    State(service): State<Arc<PriceService<R, C>>>,
    Path((id, currency)): Path<(i32, String)>,
    Query(params): Query<HashMap<String, String>>,
) -> PricingResult<Json<PricedProduct>> {
    let priced = service.price_in_currency(id, &currency, &params).await?;
    Ok(Json(priced))
}
