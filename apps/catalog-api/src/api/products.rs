use axum::Router;
use domain_catalog::{ProductService, SqlProductRepository, handlers as catalog_handlers};
use domain_pricing::{HttpPricingClient, PriceService, handlers as pricing_handlers};
use sea_orm::DatabaseConnection;

use crate::config::Config;

/// Catalog CRUD and the price-conversion endpoint share the `/products`
/// prefix, so both routers are merged before nesting.
pub fn router(config: &Config, db: DatabaseConnection) -> Router {
    let catalog_service = ProductService::new(SqlProductRepository::new(db.clone()));

    let pricing_client = HttpPricingClient::new(config.pricing.clone());
    let price_service = PriceService::new(SqlProductRepository::new(db), pricing_client);

    catalog_handlers::router(catalog_service).merge(pricing_handlers::router(price_service))
}
