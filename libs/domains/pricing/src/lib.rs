//! Pricing Domain
//!
//! Orchestrates the price-conversion path: resolve a product from the
//! catalog, build the outbound conversion request (including optional
//! strategy overrides from the query string), call the external pricing
//! service, and map every possible outcome to a well-defined HTTP response.
//!
//! The conversion math itself lives in the pricing service; this domain only
//! forwards parameters and interprets results. One attempt per inbound
//! request, no caching.
//!
//! # Usage
//!
//! ```rust,no_run
//! use core_config::pricing::PricingConfig;
//! use domain_catalog::sql::SqlProductRepository;
//! use domain_pricing::{client::HttpPricingClient, handlers, service::PriceService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = database::connect("sqlite://products.db?mode=rwc").await?;
//! let repository = SqlProductRepository::new(db);
//! let client = HttpPricingClient::new(PricingConfig::default());
//! let service = PriceService::new(repository, client);
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod handlers;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use client::{HttpPricingClient, PricingClient};
pub use error::{PricingError, PricingResult};
pub use handlers::ApiDoc;
pub use models::{ConversionRequest, PricedProduct};
pub use service::PriceService;
