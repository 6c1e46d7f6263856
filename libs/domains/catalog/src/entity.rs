use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

/// Sea-ORM Entity for the products table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub base_price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            base_price: model.base_price,
        }
    }
}

impl From<crate::models::CreateProduct> for ActiveModel {
    fn from(input: crate::models::CreateProduct) -> Self {
        ActiveModel {
            id: NotSet, // assigned by the store
            name: Set(input.name),
            description: Set(input.description),
            base_price: Set(input.base_price),
        }
    }
}
