//! Supplier registration and lookup.

pub mod repository;
pub mod service;

use models::{product, supplier};
use serde::Serialize;

/// A supplier together with every product it owns.
#[derive(Clone, Debug, Serialize)]
pub struct SupplierWithProducts {
    #[serde(flatten)]
    pub supplier: supplier::Model,
    pub products: Vec<product::Model>,
}
