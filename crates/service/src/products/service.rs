use std::sync::Arc;

use models::product;
use tracing::{info, instrument};
use uuid::Uuid;

use super::repository::ProductRepository;
use super::{ProductFilter, ProductListItem, ProductWithSupplier};
use crate::errors::ServiceError;

pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self { Self { repo } }

    #[instrument(skip(self, input), fields(supplier_id = %input.supplier_id))]
    pub async fn create(&self, input: product::NewProduct) -> Result<ProductWithSupplier, ServiceError> {
        input.validate()?;
        let created = self.repo.insert(input).await?;
        info!(product_id = %created.product.id, "product_created");
        Ok(created)
    }

    pub async fn list(&self, filter: ProductFilter) -> Result<Vec<ProductListItem>, ServiceError> {
        self.repo.list(filter).await
    }

    #[instrument(skip(self, changes))]
    pub async fn update(&self, id: Uuid, changes: product::ProductChanges) -> Result<ProductWithSupplier, ServiceError> {
        changes.validate()?;
        if !self.repo.exists(id).await? {
            return Err(ServiceError::product_not_found());
        }
        let updated = self
            .repo
            .update(id, changes)
            .await?
            .ok_or_else(ServiceError::product_not_found)?;
        info!(product_id = %id, "product_updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if self.repo.delete(id).await? {
            info!(product_id = %id, "product_deleted");
            Ok(())
        } else {
            Err(ServiceError::product_not_found())
        }
    }
}
