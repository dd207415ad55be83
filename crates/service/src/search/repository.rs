use async_trait::async_trait;
use models::supplier;

use super::{ProductMatch, SearchTerm};
use crate::errors::ServiceError;

/// Name lookups for the global search, in store order.
#[async_trait]
pub trait SearchRepository: Send + Sync {
    async fn suppliers_matching(&self, term: &SearchTerm) -> Result<Vec<supplier::Model>, ServiceError>;
    async fn products_matching(&self, term: &SearchTerm) -> Result<Vec<ProductMatch>, ServiceError>;
}
