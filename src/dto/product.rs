//! Serialized record shape for the Product resource.
//!
//! A [`ProductRecord`] is both the transport representation (a mapping with
//! exactly the keys `id`, `name`, `description`, `price`, `available`,
//! `category`) and the in-memory handle for a product that may not have been
//! persisted yet (`id: None`).

use rust_decimal::Decimal;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use validator::Validate;

use crate::entities::product::{self, Category};
use crate::errors::ServiceError;

/// Plain key-value representation of one product.
///
/// `price` round-trips as a precision-preserving decimal string; `category`
/// as its symbolic name. Deserialization is strict about `available` (a
/// non-boolean is a validation error, never a coercion) and lenient about
/// `category` (unrecognized or absent names fall back to `UNKNOWN`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductRecord {
    /// Store-assigned identity; `None` until the first successful create.
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(length(min = 1, max = 255, message = "Product name must be between 1 and 255 characters"))]
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub available: bool,
    #[serde(default, deserialize_with = "category_or_unknown")]
    pub category: Category,
}

fn category_or_unknown<'de, D>(deserializer: D) -> Result<Category, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    Ok(Category::from_name(&name))
}

impl ProductRecord {
    /// Build a transient record (no identity yet).
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        available: bool,
        category: Category,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            price,
            available,
            category,
        }
    }

    /// Serialize into the plain mapping form.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "name": self.name,
            "description": self.description,
            "price": self.price,
            "available": self.available,
            "category": self.category,
        })
    }

    /// Deserialize from the plain mapping form.
    ///
    /// Fails with [`ServiceError::ValidationError`] when a required key is
    /// missing, the payload is not an object, or `available` carries a
    /// non-boolean value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ServiceError> {
        let record: ProductRecord = serde_json::from_value(value)
            .map_err(|e| ServiceError::ValidationError(format!("Invalid product record: {}", e)))?;
        Ok(record)
    }

    /// Active model for a write, leaving the id unset for transient records
    /// so the store assigns it.
    pub fn as_active_model(&self) -> product::ActiveModel {
        product::ActiveModel {
            id: match self.id {
                Some(id) => Set(id),
                None => NotSet,
            },
            name: Set(self.name.clone()),
            description: Set(self.description.clone()),
            price: Set(self.price),
            available: Set(self.available),
            category: Set(self.category),
        }
    }
}

impl From<product::Model> for ProductRecord {
    fn from(model: product::Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            description: model.description,
            price: model.price,
            available: model.available,
            category: model.category,
        }
    }
}

impl fmt::Display for ProductRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "<Product {} id=[{}]>", self.name, id),
            None => write!(f, "<Product {} id=[None]>", self.name),
        }
    }
}
