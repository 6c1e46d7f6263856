use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products.
/// Implementations can use different storage backends (SQLite, PostgreSQL).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product, assigning its id
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by id
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// List all products in insertion order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Apply a partial update to an existing product
    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Product>;

    /// Delete a product by id, returning whether a record was removed
    async fn delete(&self, id: i32) -> ProductResult<bool>;
}
