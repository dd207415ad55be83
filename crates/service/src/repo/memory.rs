//! In-process catalogue for tests, benches and local demos.
//!
//! Enforces the same constraints as the database: unique supplier email and
//! product -> supplier references. Lock order is always suppliers, then products.

use std::collections::BTreeMap;

use async_trait::async_trait;
use models::{product, supplier};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::analytics::repository::AnalyticsRepository;
use crate::analytics::{CategoryCount, CertificationCount, ProductCount};
use crate::errors::ServiceError;
use crate::products::repository::ProductRepository;
use crate::products::{ProductFilter, ProductListItem, ProductWithSupplier};
use crate::search::repository::SearchRepository;
use crate::search::{ProductMatch, SearchTerm};
use crate::suppliers::repository::SupplierRepository;
use crate::suppliers::SupplierWithProducts;

#[derive(Default)]
pub struct InMemoryCatalog {
    suppliers: RwLock<Vec<supplier::Model>>,
    products: RwLock<Vec<product::Model>>,
}

impl InMemoryCatalog {
    pub async fn contains_product(&self, id: Uuid) -> bool {
        self.products.read().await.iter().any(|p| p.id == id)
    }
}

/// Newest first; ties keep the most recent insert first.
fn newest_first<T: Clone>(rows: &[T], created: impl Fn(&T) -> chrono::DateTime<chrono::FixedOffset>) -> Vec<T> {
    let mut out: Vec<T> = rows.iter().rev().cloned().collect();
    out.sort_by(|a, b| created(b).cmp(&created(a)));
    out
}

fn find_supplier(suppliers: &[supplier::Model], id: Uuid) -> Option<&supplier::Model> {
    suppliers.iter().find(|s| s.id == id)
}

fn owner(suppliers: &[supplier::Model], p: &product::Model) -> Result<supplier::Model, ServiceError> {
    find_supplier(suppliers, p.supplier_id)
        .cloned()
        .ok_or_else(|| ServiceError::Db(format!("product {} references a missing supplier", p.id)))
}

#[async_trait]
impl SupplierRepository for InMemoryCatalog {
    async fn insert(&self, input: supplier::NewSupplier) -> Result<supplier::Model, ServiceError> {
        let mut suppliers = self.suppliers.write().await;
        if suppliers.iter().any(|s| s.email == input.email) {
            return Err(ServiceError::email_taken());
        }
        let m = input.into_model();
        suppliers.push(m.clone());
        Ok(m)
    }

    async fn list(&self) -> Result<Vec<supplier::Model>, ServiceError> {
        Ok(newest_first(self.suppliers.read().await.as_slice(), |s| s.created_at))
    }

    async fn get_with_products(&self, id: Uuid) -> Result<Option<SupplierWithProducts>, ServiceError> {
        let suppliers = self.suppliers.read().await;
        let Some(s) = find_supplier(&suppliers, id).cloned() else { return Ok(None) };
        let products = self.products.read().await;
        let owned: Vec<_> = products.iter().filter(|p| p.supplier_id == id).cloned().collect();
        Ok(Some(SupplierWithProducts { supplier: s, products: newest_first(owned.as_slice(), |p| p.created_at) }))
    }
}

#[async_trait]
impl ProductRepository for InMemoryCatalog {
    async fn insert(&self, input: product::NewProduct) -> Result<ProductWithSupplier, ServiceError> {
        let suppliers = self.suppliers.read().await;
        let supplier = find_supplier(&suppliers, input.supplier_id)
            .cloned()
            .ok_or_else(ServiceError::supplier_not_found)?;
        let m = input.into_model();
        self.products.write().await.push(m.clone());
        Ok(ProductWithSupplier { product: m, supplier })
    }

    async fn list(&self, filter: ProductFilter) -> Result<Vec<ProductListItem>, ServiceError> {
        let suppliers = self.suppliers.read().await;
        let products = self.products.read().await;
        let matching: Vec<_> = products.iter().filter(|p| filter.matches(p)).cloned().collect();
        newest_first(matching.as_slice(), |p| p.created_at)
            .into_iter()
            .map(|p| {
                let s = owner(&suppliers, &p)?;
                Ok(ProductListItem { product: p, supplier: s.into() })
            })
            .collect()
    }

    async fn exists(&self, id: Uuid) -> Result<bool, ServiceError> {
        Ok(self.contains_product(id).await)
    }

    async fn update(&self, id: Uuid, changes: product::ProductChanges) -> Result<Option<ProductWithSupplier>, ServiceError> {
        let suppliers = self.suppliers.read().await;
        let mut products = self.products.write().await;
        let Some(row) = products.iter_mut().find(|p| p.id == id) else { return Ok(None) };
        if let Some(new_owner) = changes.supplier_id {
            if find_supplier(&suppliers, new_owner).is_none() {
                return Err(ServiceError::supplier_not_found());
            }
        }
        changes.apply_to(row);
        let updated = row.clone();
        let supplier = owner(&suppliers, &updated)?;
        Ok(Some(ProductWithSupplier { product: updated, supplier }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() < before)
    }
}

#[async_trait]
impl AnalyticsRepository for InMemoryCatalog {
    async fn count_suppliers(&self) -> Result<u64, ServiceError> {
        Ok(self.suppliers.read().await.len() as u64)
    }

    async fn count_products(&self, which: ProductCount) -> Result<u64, ServiceError> {
        let products = self.products.read().await;
        let n = products
            .iter()
            .filter(|p| match which {
                ProductCount::All => true,
                ProductCount::OutOfStock => p.stock_quantity == 0,
                ProductCount::WithStatus(s) => p.certification_status == s,
            })
            .count();
        Ok(n as u64)
    }

    async fn count_by_category(&self) -> Result<Vec<CategoryCount>, ServiceError> {
        let mut groups: BTreeMap<&'static str, CategoryCount> = BTreeMap::new();
        for p in self.products.read().await.iter() {
            groups
                .entry(p.category.as_str())
                .or_insert(CategoryCount { category: p.category, count: 0 })
                .count += 1;
        }
        Ok(groups.into_values().collect())
    }

    async fn count_by_certification(&self) -> Result<Vec<CertificationCount>, ServiceError> {
        let mut groups: BTreeMap<&'static str, CertificationCount> = BTreeMap::new();
        for p in self.products.read().await.iter() {
            groups
                .entry(p.certification_status.as_str())
                .or_insert(CertificationCount { status: p.certification_status, count: 0 })
                .count += 1;
        }
        Ok(groups.into_values().collect())
    }
}

#[async_trait]
impl SearchRepository for InMemoryCatalog {
    async fn suppliers_matching(&self, term: &SearchTerm) -> Result<Vec<supplier::Model>, ServiceError> {
        let suppliers = self.suppliers.read().await;
        Ok(suppliers.iter().filter(|s| term.matches(&s.name)).cloned().collect())
    }

    async fn products_matching(&self, term: &SearchTerm) -> Result<Vec<ProductMatch>, ServiceError> {
        let suppliers = self.suppliers.read().await;
        let products = self.products.read().await;
        products
            .iter()
            .filter(|p| term.matches(&p.name))
            .map(|p| {
                let s = owner(&suppliers, p)?;
                Ok(ProductMatch { product: p.clone(), supplier_name: s.name })
            })
            .collect()
    }
}
