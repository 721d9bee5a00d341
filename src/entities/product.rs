use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ConnectionTrait};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Product classification. Stored as its symbolic name in a string column;
/// the same names are the wire representation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    #[default]
    #[sea_orm(string_value = "UNKNOWN")]
    Unknown,
    #[sea_orm(string_value = "CLOTHS")]
    Cloths,
    #[sea_orm(string_value = "FOOD")]
    Food,
    #[sea_orm(string_value = "HOUSEWARES")]
    Housewares,
    #[sea_orm(string_value = "AUTOMOTIVE")]
    Automotive,
    #[sea_orm(string_value = "TOOLS")]
    Tools,
}

impl Category {
    /// The symbolic name used in storage and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Unknown => "UNKNOWN",
            Category::Cloths => "CLOTHS",
            Category::Food => "FOOD",
            Category::Housewares => "HOUSEWARES",
            Category::Automotive => "AUTOMOTIVE",
            Category::Tools => "TOOLS",
        }
    }

    /// Resolve a symbolic name, falling back to `Unknown` for anything
    /// unrecognized. Unknown categories are tolerated; a bad `available`
    /// flag is not (see `ProductRecord`).
    pub fn from_name(name: &str) -> Self {
        match name {
            "CLOTHS" => Category::Cloths,
            "FOOD" => Category::Food,
            "HOUSEWARES" => Category::Housewares,
            "AUTOMOTIVE" => Category::Automotive,
            "TOOLS" => Category::Tools,
            _ => Category::Unknown,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product entity: one row of the `products` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Primary key, assigned by the store on insert.
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Product name
    #[validate(length(min = 1, max = 255, message = "Product name must be between 1 and 255 characters"))]
    pub name: String,

    /// Product description
    pub description: String,

    /// Unit price. Exact decimal semantics; never a binary float.
    pub price: Decimal,

    /// Is the product available for purchase
    pub available: bool,

    /// Product classification
    pub category: Category,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        // The id is NotSet on insert; stand in a placeholder so the field
        // checks can run against a complete Model.
        let mut check = self.clone();
        if check.id.is_not_set() {
            check.id = sea_orm::ActiveValue::Set(0);
        }
        let model: Model = check.try_into().map_err(|_| {
            DbErr::Custom("Failed to convert ActiveModel to Model for validation".to_string())
        })?;

        if let Err(err) = model.validate() {
            return Err(DbErr::Custom(format!("Validation error: {}", err)));
        }

        Ok(self)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Product {} id=[{}]>", self.name, self.id)
    }
}
