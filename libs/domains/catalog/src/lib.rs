//! Catalog Domain
//!
//! CRUD over Product records, layered the usual way:
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + sea-orm implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! The repository speaks sea-orm, so the same implementation serves the
//! embedded SQLite store and a networked PostgreSQL instance.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{handlers, service::ProductService, sql::SqlProductRepository};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = database::connect("sqlite://products.db?mode=rwc").await?;
//! let repository = SqlProductRepository::new(db);
//! let service = ProductService::new(repository);
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod sql;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{CreateProduct, Product, UpdateProduct};
pub use repository::ProductRepository;
pub use service::ProductService;
pub use sql::SqlProductRepository;
