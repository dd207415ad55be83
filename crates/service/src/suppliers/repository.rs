use async_trait::async_trait;
use models::supplier;
use uuid::Uuid;

use super::SupplierWithProducts;
use crate::errors::ServiceError;

/// Persistence for suppliers.
///
/// `insert` reports a duplicate email as [`ServiceError::Conflict`].
#[async_trait]
pub trait SupplierRepository: Send + Sync {
    async fn insert(&self, input: supplier::NewSupplier) -> Result<supplier::Model, ServiceError>;
    /// All suppliers, newest first.
    async fn list(&self) -> Result<Vec<supplier::Model>, ServiceError>;
    async fn get_with_products(&self, id: Uuid) -> Result<Option<SupplierWithProducts>, ServiceError>;
}
