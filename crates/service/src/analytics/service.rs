use std::sync::Arc;

use common::metrics::SUMMARY_DURATION;
use models::product::CertificationStatus;
use tracing::{debug, instrument};

use super::repository::AnalyticsRepository;
use super::{AnalyticsSummary, ProductCount};
use crate::errors::ServiceError;

pub struct AnalyticsService {
    repo: Arc<dyn AnalyticsRepository>,
}

impl AnalyticsService {
    pub fn new(repo: Arc<dyn AnalyticsRepository>) -> Self { Self { repo } }

    /// Run the six summary queries concurrently; the first failure aborts the rest.
    #[instrument(skip(self))]
    pub async fn summary(&self) -> Result<AnalyticsSummary, ServiceError> {
        let timer = SUMMARY_DURATION.start_timer();
        let repo = self.repo.as_ref();
        let (
            total_suppliers,
            total_products,
            products_by_category,
            products_by_certification,
            out_of_stock_count,
            active_certifications_count,
        ) = tokio::try_join!(
            repo.count_suppliers(),
            repo.count_products(ProductCount::All),
            repo.count_by_category(),
            repo.count_by_certification(),
            repo.count_products(ProductCount::OutOfStock),
            repo.count_products(ProductCount::WithStatus(CertificationStatus::Certified)),
        )?;
        timer.observe_duration();

        debug!(total_suppliers, total_products, out_of_stock_count, "summary_computed");
        Ok(AnalyticsSummary {
            total_suppliers,
            total_products,
            out_of_stock_count,
            active_certifications_count,
            products_by_category,
            products_by_certification,
        })
    }
}
