//! Product catalogue operations.

pub mod filter;
pub mod repository;
pub mod service;

use models::{product, supplier};
use serde::Serialize;
use uuid::Uuid;

pub use filter::ProductFilter;

/// A product with its full owning supplier.
#[derive(Clone, Debug, Serialize)]
pub struct ProductWithSupplier {
    #[serde(flatten)]
    pub product: product::Model,
    pub supplier: supplier::Model,
}

/// Supplier fields embedded in product listings.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SupplierSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub country: String,
}

impl From<supplier::Model> for SupplierSummary {
    fn from(s: supplier::Model) -> Self {
        Self { id: s.id, name: s.name, email: s.email, country: s.country }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ProductListItem {
    #[serde(flatten)]
    pub product: product::Model,
    pub supplier: SupplierSummary,
}
