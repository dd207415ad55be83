//! OpenAPI document. Schemas mirror the JSON shapes of the entity types.

use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "OK")]
    pub status: String,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDoc {
    #[schema(example = "Validation Error")]
    pub error: String,
    pub message: String,
    #[schema(example = 400)]
    pub status_code: u16,
    pub details: Option<Vec<FieldViolationDoc>>,
}

#[derive(Serialize, ToSchema)]
pub struct FieldViolationDoc {
    pub field: String,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewSupplierDoc {
    #[schema(example = "Green Farms Co.")]
    pub name: String,
    #[schema(example = "contact@greenfarms.com")]
    pub email: String,
    #[schema(example = "India")]
    pub country: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDoc {
    pub id: String,
    pub name: String,
    pub email: String,
    pub country: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    #[schema(example = "2025-01-15T09:30:00Z")]
    pub created_at: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryDoc {
    OrganicFood,
    Handmade,
    SustainableGoods,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CertificationStatusDoc {
    Certified,
    Pending,
    NotCertified,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewProductDoc {
    pub supplier_id: String,
    #[schema(example = "Organic Basmati Rice")]
    pub name: String,
    pub category: CategoryDoc,
    #[schema(example = 45.5)]
    pub price: f64,
    #[schema(example = 500)]
    pub stock_quantity: i32,
    pub certification_status: CertificationStatusDoc,
    /// RFC 3339 timestamp
    pub certification_expiry_date: Option<String>,
    pub description: Option<String>,
}

/// Every field optional; `certificationExpiryDate: null` clears the date.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductChangesDoc {
    pub supplier_id: Option<String>,
    pub name: Option<String>,
    pub category: Option<CategoryDoc>,
    pub price: Option<f64>,
    pub stock_quantity: Option<i32>,
    pub certification_status: Option<CertificationStatusDoc>,
    pub certification_expiry_date: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDoc {
    pub id: String,
    pub supplier_id: String,
    pub name: String,
    pub category: CategoryDoc,
    pub price: f64,
    pub stock_quantity: i32,
    pub certification_status: CertificationStatusDoc,
    pub certification_expiry_date: Option<String>,
    pub description: Option<String>,
    pub created_at: String,
    pub supplier: SupplierDoc,
}

#[derive(Serialize, ToSchema)]
pub struct CategoryCountDoc {
    pub category: CategoryDoc,
    pub count: u64,
}

#[derive(Serialize, ToSchema)]
pub struct CertificationCountDoc {
    pub status: CertificationStatusDoc,
    pub count: u64,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDoc {
    pub total_suppliers: u64,
    pub total_products: u64,
    pub out_of_stock_count: u64,
    pub active_certifications_count: u64,
    pub products_by_category: Vec<CategoryCountDoc>,
    pub products_by_certification: Vec<CertificationCountDoc>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchHitDoc {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    #[schema(example = "product")]
    pub kind: String,
    /// `{country}` for suppliers, `{category, price, supplierName}` for products
    #[schema(value_type = Object)]
    pub additional_info: serde_json::Value,
}

#[derive(Serialize, ToSchema)]
pub struct SearchResultsDoc {
    pub success: bool,
    pub count: usize,
    pub data: Vec<SearchHitDoc>,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "GreenTrade Hub API", description = "Supplier and product management for sustainable trade"),
    paths(
        crate::routes::health::health,
        crate::routes::metrics::metrics,
        crate::routes::suppliers::create,
        crate::routes::suppliers::list,
        crate::routes::suppliers::get,
        crate::routes::products::create,
        crate::routes::products::list,
        crate::routes::products::update,
        crate::routes::products::delete,
        crate::routes::analytics::summary,
        crate::routes::search::search,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            FieldViolationDoc,
            NewSupplierDoc,
            SupplierDoc,
            CategoryDoc,
            CertificationStatusDoc,
            NewProductDoc,
            ProductChangesDoc,
            ProductDoc,
            CategoryCountDoc,
            CertificationCountDoc,
            SummaryDoc,
            SearchHitDoc,
            SearchResultsDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "suppliers"),
        (name = "products"),
        (name = "analytics"),
        (name = "search")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/api/suppliers",
            "/api/suppliers/{id}",
            "/api/products",
            "/api/products/{id}",
            "/api/analytics/summary",
            "/api/search",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
