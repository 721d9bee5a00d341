use std::sync::Arc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set, TransactionTrait,
};
use tracing::{error, info, instrument};
use validator::Validate;

use crate::{
    dto::product::ProductRecord,
    entities::product::{self, Category, Column as ProductColumn, Entity as Product},
    errors::ServiceError,
};

/// Persistence operations for the Product resource.
///
/// Holds an explicitly injected connection handle; every mutating call runs
/// inside its own unit of work, committed on success and rolled back before
/// the error surfaces on failure. Record lifecycle: a transient record
/// (`id: None`) may only be created; a persisted one may only be updated or
/// deleted.
pub struct ProductService {
    db: Arc<DatabaseConnection>,
}

impl ProductService {
    /// Creates a new product service around a connection pool
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Insert a transient record and return the row with its store-assigned id.
    #[instrument(skip(self, record), fields(name = %record.name))]
    pub async fn create(&self, record: &ProductRecord) -> Result<product::Model, ServiceError> {
        if let Some(id) = record.id {
            let msg = format!("create() called on an already persisted product (id={})", id);
            error!(%msg);
            return Err(ServiceError::ValidationError(msg));
        }
        record.validate()?;

        let txn = self.db.begin().await?;
        let model = record.as_active_model().insert(&txn).await.map_err(|e| {
            error!(name = %record.name, error = %e, "Failed to insert product");
            ServiceError::DatabaseError(e)
        })?;
        txn.commit().await?;

        info!(product_id = model.id, name = %model.name, "Product created");
        Ok(model)
    }

    /// Persist every current field value of `record` against its existing row.
    #[instrument(skip(self, record), fields(product_id = ?record.id))]
    pub async fn update(&self, record: &ProductRecord) -> Result<product::Model, ServiceError> {
        let id = record.id.ok_or_else(|| {
            let msg = "Update called with empty ID field".to_string();
            error!(%msg);
            ServiceError::ValidationError(msg)
        })?;
        record.validate()?;

        let txn = self.db.begin().await?;
        let existing = Product::find_by_id(id).one(&txn).await?.ok_or_else(|| {
            let msg = format!("Product with id {} not found", id);
            error!(%msg);
            ServiceError::NotFound(msg)
        })?;

        let mut active: product::ActiveModel = existing.into();
        active.name = Set(record.name.clone());
        active.description = Set(record.description.clone());
        active.price = Set(record.price);
        active.available = Set(record.available);
        active.category = Set(record.category);

        let model = active.update(&txn).await.map_err(|e| {
            error!(product_id = id, error = %e, "Failed to update product");
            ServiceError::DatabaseError(e)
        })?;
        txn.commit().await?;

        info!(product_id = model.id, "Product updated");
        Ok(model)
    }

    /// Remove the row identified by `id`.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;
        let result = Product::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!(
                "Product with id {} not found",
                id
            )));
        }
        txn.commit().await?;

        info!(product_id = id, "Product deleted");
        Ok(())
    }

    /// Every persisted product, in store order.
    #[instrument(skip(self))]
    pub async fn all(&self) -> Result<Vec<product::Model>, ServiceError> {
        Ok(Product::find().all(&*self.db).await?)
    }

    /// Look up one product; a miss is `None`, not an error.
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i32) -> Result<Option<product::Model>, ServiceError> {
        Ok(Product::find_by_id(id).one(&*self.db).await?)
    }

    /// Products whose name equals `name` exactly.
    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<product::Model>, ServiceError> {
        Ok(Product::find()
            .filter(ProductColumn::Name.eq(name))
            .all(&*self.db)
            .await?)
    }

    /// Products matching the availability flag exactly.
    #[instrument(skip(self))]
    pub async fn find_by_availability(
        &self,
        available: bool,
    ) -> Result<Vec<product::Model>, ServiceError> {
        Ok(Product::find()
            .filter(ProductColumn::Available.eq(available))
            .all(&*self.db)
            .await?)
    }

    /// Products in the given category.
    #[instrument(skip(self))]
    pub async fn find_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<product::Model>, ServiceError> {
        Ok(Product::find()
            .filter(ProductColumn::Category.eq(category))
            .all(&*self.db)
            .await?)
    }

    /// Total number of persisted products.
    #[instrument(skip(self))]
    pub async fn count(&self) -> Result<u64, ServiceError> {
        Ok(Product::find().count(&*self.db).await?)
    }

    /// Count of exact-name matches; agrees with `find_by_name` over the same
    /// population.
    #[instrument(skip(self))]
    pub async fn count_by_name(&self, name: &str) -> Result<u64, ServiceError> {
        Ok(Product::find()
            .filter(ProductColumn::Name.eq(name))
            .count(&*self.db)
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn count_by_availability(&self, available: bool) -> Result<u64, ServiceError> {
        Ok(Product::find()
            .filter(ProductColumn::Available.eq(available))
            .count(&*self.db)
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn count_by_category(&self, category: Category) -> Result<u64, ServiceError> {
        Ok(Product::find()
            .filter(ProductColumn::Category.eq(category))
            .count(&*self.db)
            .await?)
    }
}
