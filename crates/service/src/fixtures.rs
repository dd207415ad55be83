//! Reference catalogue: three suppliers and six products.
//!
//! Loaded by the `greentrade-seed` binary and by tests.

use chrono::{TimeZone, Utc};
use models::product::{Category, CertificationStatus, NewProduct};
use models::supplier::NewSupplier;
use sea_orm::prelude::DateTimeWithTimeZone;
use tracing::info;

use crate::errors::ServiceError;
use crate::products::repository::ProductRepository;
use crate::suppliers::repository::SupplierRepository;

struct SupplierSeed {
    name: &'static str,
    email: &'static str,
    country: &'static str,
    contact_person: &'static str,
    phone: &'static str,
}

struct ProductSeed {
    /// Index into `SUPPLIERS`
    supplier: usize,
    name: &'static str,
    category: Category,
    price: f64,
    stock_quantity: i32,
    certification_status: CertificationStatus,
    expires: Option<(i32, u32, u32)>,
    description: &'static str,
}

const SUPPLIERS: [SupplierSeed; 3] = [
    SupplierSeed {
        name: "Green Farms Co.",
        email: "contact@greenfarms.com",
        country: "India",
        contact_person: "Rajesh Kumar",
        phone: "+91-9876543210",
    },
    SupplierSeed {
        name: "EcoHandicrafts Ltd.",
        email: "info@ecohandicrafts.com",
        country: "Bangladesh",
        contact_person: "Fatima Ali",
        phone: "+880-1712345678",
    },
    SupplierSeed {
        name: "Sustainable Goods Inc.",
        email: "sales@sustainablegoods.com",
        country: "Kenya",
        contact_person: "John Kamau",
        phone: "+254-712345678",
    },
];

const PRODUCTS: [ProductSeed; 6] = [
    ProductSeed {
        supplier: 0,
        name: "Organic Basmati Rice",
        category: Category::OrganicFood,
        price: 45.50,
        stock_quantity: 500,
        certification_status: CertificationStatus::Certified,
        expires: Some((2025, 12, 31)),
        description: "Premium quality organic basmati rice grown without pesticides",
    },
    ProductSeed {
        supplier: 0,
        name: "Organic Turmeric Powder",
        category: Category::OrganicFood,
        price: 12.75,
        stock_quantity: 300,
        certification_status: CertificationStatus::Certified,
        expires: Some((2026, 6, 30)),
        description: "Pure organic turmeric powder with high curcumin content",
    },
    ProductSeed {
        supplier: 1,
        name: "Handwoven Cotton Rugs",
        category: Category::Handmade,
        price: 89.99,
        stock_quantity: 150,
        certification_status: CertificationStatus::Pending,
        expires: None,
        description: "Beautifully handwoven cotton rugs by local artisans",
    },
    ProductSeed {
        supplier: 1,
        name: "Jute Shopping Bags",
        category: Category::SustainableGoods,
        price: 8.50,
        stock_quantity: 1000,
        certification_status: CertificationStatus::Certified,
        expires: Some((2025, 8, 15)),
        description: "Eco-friendly reusable jute bags",
    },
    ProductSeed {
        supplier: 2,
        name: "Bamboo Fiber Towels",
        category: Category::SustainableGoods,
        price: 22.00,
        stock_quantity: 400,
        certification_status: CertificationStatus::Certified,
        expires: Some((2026, 3, 20)),
        description: "Soft and sustainable bamboo fiber towels",
    },
    ProductSeed {
        supplier: 2,
        name: "Recycled Paper Notebooks",
        category: Category::SustainableGoods,
        price: 5.99,
        stock_quantity: 800,
        certification_status: CertificationStatus::NotCertified,
        expires: None,
        description: "100% recycled paper notebooks",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedReport {
    pub suppliers: usize,
    pub products: usize,
}

fn midnight_utc((y, m, d): (i32, u32, u32)) -> Option<DateTimeWithTimeZone> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).single().map(Into::into)
}

pub fn reference_suppliers() -> Vec<NewSupplier> {
    SUPPLIERS
        .iter()
        .map(|s| NewSupplier {
            name: s.name.into(),
            email: s.email.into(),
            country: s.country.into(),
            contact_person: Some(s.contact_person.into()),
            phone: Some(s.phone.into()),
        })
        .collect()
}

/// Insert the reference data; the stores are expected to be empty.
pub async fn seed_reference_catalog(
    suppliers: &dyn SupplierRepository,
    products: &dyn ProductRepository,
) -> Result<SeedReport, ServiceError> {
    let mut supplier_ids = Vec::with_capacity(SUPPLIERS.len());
    for input in reference_suppliers() {
        supplier_ids.push(suppliers.insert(input).await?.id);
    }
    info!(count = supplier_ids.len(), "seeded_suppliers");

    for seed in PRODUCTS.iter() {
        let supplier_id = supplier_ids[seed.supplier];
        products
            .insert(NewProduct {
                supplier_id,
                name: seed.name.into(),
                category: seed.category,
                price: seed.price,
                stock_quantity: seed.stock_quantity,
                certification_status: seed.certification_status,
                certification_expiry_date: seed.expires.and_then(midnight_utc),
                description: Some(seed.description.into()),
            })
            .await?;
    }
    info!(count = PRODUCTS.len(), "seeded_products");

    Ok(SeedReport { suppliers: supplier_ids.len(), products: PRODUCTS.len() })
}
