use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Product entity - a single catalog record.
///
/// The id is assigned by the store on creation and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, assigned by the store
    pub id: i32,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Price in the catalog's base currency
    pub base_price: f64,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Accepts a JSON number or a numeric string
    #[validate(range(min = 0.0, message = "base_price must not be negative"))]
    #[serde(deserialize_with = "coercible_f64")]
    pub base_price: f64,
}

/// DTO for updating an existing product.
///
/// Only supplied fields are changed; everything else is left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "base_price must not be negative"))]
    #[serde(default, deserialize_with = "opt_coercible_f64")]
    pub base_price: Option<f64>,
}

impl UpdateProduct {
    /// True when no field is supplied, making the update a no-op.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.base_price.is_none()
    }
}

fn coerce_f64(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Deserialize a price that may arrive as a number or a numeric string.
fn coercible_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    coerce_f64(&value).ok_or_else(|| serde::de::Error::custom("base_price must be numeric"))
}

fn opt_coercible_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value) => coerce_f64(&value)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom("base_price must be numeric")),
    }
}
