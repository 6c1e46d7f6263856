use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{CreateProduct, Product, UpdateProduct},
    repository::ProductRepository,
};

/// Sea-ORM backed repository.
///
/// Works over both backends the service supports: the embedded SQLite file
/// and a networked PostgreSQL instance. The connection is pooled internally,
/// so the repository is cheap to construct per service.
pub struct SqlProductRepository {
    db: DatabaseConnection,
}

impl SqlProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SqlProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();

        let model = entity::Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| ProductError::Database(format!("Database error: {}", e)))?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ProductError::Database(format!("Database error: {}", e)))?;

        Ok(model.map(|m| m.into()))
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ProductError::Database(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ProductError::Database(format!("Database error: {}", e)))?
            .ok_or(ProductError::NotFound(id))?;

        // Nothing supplied: the update is a no-op on the stored record
        if input.is_empty() {
            return Ok(model.into());
        }

        let mut active_model: entity::ActiveModel = model.into();
        if let Some(name) = input.name {
            active_model.name = Set(name);
        }
        if let Some(description) = input.description {
            active_model.description = Set(description);
        }
        if let Some(base_price) = input.base_price {
            active_model.base_price = Set(base_price);
        }

        let updated = entity::Entity::update(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| ProductError::Database(format!("Database error: {}", e)))?;

        tracing::info!(product_id = updated.id, "Updated product");
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ProductError::Database(format!("Database error: {}", e)))?;

        Ok(result.rows_affected > 0)
    }
}
