use async_trait::async_trait;

use super::{CategoryCount, CertificationCount, ProductCount};
use crate::errors::ServiceError;

/// Counting and grouping queries over the catalogue.
///
/// Group-by results are ordered by key and omit empty groups.
#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    async fn count_suppliers(&self) -> Result<u64, ServiceError>;
    async fn count_products(&self, which: ProductCount) -> Result<u64, ServiceError>;
    async fn count_by_category(&self) -> Result<Vec<CategoryCount>, ServiceError>;
    async fn count_by_certification(&self) -> Result<Vec<CertificationCount>, ServiceError>;
}
