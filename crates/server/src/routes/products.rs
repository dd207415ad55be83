use std::str::FromStr;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::errors::ModelError;
use models::product::{NewProduct, ProductChanges};
use models::validation::FieldViolation;
use serde::Deserialize;
use service::products::{ProductFilter, ProductListItem, ProductWithSupplier};
use uuid::Uuid;

use super::Envelope;
use crate::{
    errors::ApiError,
    extract::{parse_id, ApiJson, ApiQuery},
    state::AppState,
};

/// Raw listing filters; empty values mean "no filter".
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// ORGANIC_FOOD, HANDMADE or SUSTAINABLE_GOODS
    pub category: Option<String>,
    /// CERTIFIED, PENDING or NOT_CERTIFIED
    pub certification_status: Option<String>,
    pub supplier_id: Option<String>,
}

fn parse_enum<T>(raw: Option<&str>, bad: &mut Vec<FieldViolation>) -> Option<T>
where
    T: FromStr<Err = ModelError>,
{
    match raw.filter(|s| !s.is_empty())?.parse() {
        Ok(v) => Some(v),
        Err(ModelError::Validation(list)) => {
            bad.extend(list);
            None
        }
        Err(other) => {
            bad.push(FieldViolation::new("query", other.to_string()));
            None
        }
    }
}

impl ProductQuery {
    pub fn into_filter(self) -> Result<ProductFilter, ApiError> {
        let mut bad = Vec::new();
        let category = parse_enum(self.category.as_deref(), &mut bad);
        let certification_status = parse_enum(self.certification_status.as_deref(), &mut bad);
        let supplier_id = match self.supplier_id.as_deref().filter(|s| !s.is_empty()) {
            None => None,
            Some(raw) => match Uuid::parse_str(raw) {
                Ok(id) => Some(id),
                Err(_) => {
                    bad.push(FieldViolation::new("supplierId", "Invalid UUID"));
                    None
                }
            },
        };
        if !bad.is_empty() {
            return Err(ApiError::validation(bad));
        }
        Ok(ProductFilter { category, certification_status, supplier_id })
    }
}

#[utoipa::path(
    post, path = "/api/products", tag = "products",
    request_body = crate::openapi::NewProductDoc,
    responses(
        (status = 201, description = "Product created", body = crate::openapi::ProductDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Supplier not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewProduct>,
) -> Result<(StatusCode, Json<Envelope<ProductWithSupplier>>), ApiError> {
    let created = state.products.create(input).await?;
    Ok((StatusCode::CREATED, Json(Envelope::with_message("Product created successfully", created))))
}

#[utoipa::path(
    get, path = "/api/products", tag = "products",
    params(ProductQuery),
    responses(
        (status = 200, description = "Matching products, newest first", body = [crate::openapi::ProductDoc]),
        (status = 400, description = "Invalid filter value", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ProductQuery>,
) -> Result<Json<Envelope<Vec<ProductListItem>>>, ApiError> {
    let filter = query.into_filter()?;
    Ok(Json(Envelope::list(state.products.list(filter).await?)))
}

#[utoipa::path(
    put, path = "/api/products/{id}", tag = "products",
    params(("id" = String, Path, description = "Product id (UUID)")),
    request_body = crate::openapi::ProductChangesDoc,
    responses(
        (status = 200, description = "Product updated", body = crate::openapi::ProductDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Product or supplier not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(changes): ApiJson<ProductChanges>,
) -> Result<Json<Envelope<ProductWithSupplier>>, ApiError> {
    let id = parse_id(&id)?;
    let updated = state.products.update(id, changes).await?;
    Ok(Json(Envelope::with_message("Product updated successfully", updated)))
}

#[utoipa::path(
    delete, path = "/api/products/{id}", tag = "products",
    params(("id" = String, Path, description = "Product id (UUID)")),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 404, description = "Product not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<()>>, ApiError> {
    let id = parse_id(&id)?;
    state.products.delete(id).await?;
    Ok(Json(Envelope::message("Product deleted successfully")))
}
