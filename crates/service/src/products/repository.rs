use async_trait::async_trait;
use models::product;
use uuid::Uuid;

use super::{ProductFilter, ProductListItem, ProductWithSupplier};
use crate::errors::ServiceError;

/// Persistence for products.
///
/// Writes that reference a missing supplier fail with "Supplier not found".
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(&self, input: product::NewProduct) -> Result<ProductWithSupplier, ServiceError>;
    /// Matching products, newest first.
    async fn list(&self, filter: ProductFilter) -> Result<Vec<ProductListItem>, ServiceError>;
    async fn exists(&self, id: Uuid) -> Result<bool, ServiceError>;
    /// `Ok(None)` when the product is gone.
    async fn update(&self, id: Uuid, changes: product::ProductChanges) -> Result<Option<ProductWithSupplier>, ServiceError>;
    /// `Ok(false)` when nothing was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}
