//! Dashboard summary statistics.

pub mod repository;
pub mod service;

use models::product::{Category, CertificationStatus};
use serde::Serialize;

/// Which products a count covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductCount {
    All,
    /// `stockQuantity == 0`
    OutOfStock,
    WithStatus(CertificationStatus),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CertificationCount {
    pub status: CertificationStatus,
    pub count: u64,
}

/// Counts computed by independent queries; not a transactional snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_suppliers: u64,
    pub total_products: u64,
    pub out_of_stock_count: u64,
    pub active_certifications_count: u64,
    pub products_by_category: Vec<CategoryCount>,
    pub products_by_certification: Vec<CertificationCount>,
}
