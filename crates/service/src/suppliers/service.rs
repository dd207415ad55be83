use std::sync::Arc;

use models::supplier;
use tracing::{info, instrument};
use uuid::Uuid;

use super::repository::SupplierRepository;
use super::SupplierWithProducts;
use crate::errors::ServiceError;

pub struct SupplierService {
    repo: Arc<dyn SupplierRepository>,
}

impl SupplierService {
    pub fn new(repo: Arc<dyn SupplierRepository>) -> Self { Self { repo } }

    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: supplier::NewSupplier) -> Result<supplier::Model, ServiceError> {
        input.validate()?;
        let created = self.repo.insert(input).await?;
        info!(supplier_id = %created.id, "supplier_created");
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<supplier::Model>, ServiceError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: Uuid) -> Result<SupplierWithProducts, ServiceError> {
        self.repo
            .get_with_products(id)
            .await?
            .ok_or_else(ServiceError::supplier_not_found)
    }
}
