use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::supplier::{self, NewSupplier};
use service::suppliers::SupplierWithProducts;

use super::Envelope;
use crate::{
    errors::ApiError,
    extract::{parse_id, ApiJson},
    state::AppState,
};

#[utoipa::path(
    post, path = "/api/suppliers", tag = "suppliers",
    request_body = crate::openapi::NewSupplierDoc,
    responses(
        (status = 201, description = "Supplier created", body = crate::openapi::SupplierDoc),
        (status = 400, description = "Validation Error or Email already exists", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewSupplier>,
) -> Result<(StatusCode, Json<Envelope<supplier::Model>>), ApiError> {
    let created = state.suppliers.create(input).await?;
    Ok((StatusCode::CREATED, Json(Envelope::with_message("Supplier created successfully", created))))
}

#[utoipa::path(
    get, path = "/api/suppliers", tag = "suppliers",
    responses((status = 200, description = "All suppliers, newest first", body = [crate::openapi::SupplierDoc]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Envelope<Vec<supplier::Model>>>, ApiError> {
    Ok(Json(Envelope::list(state.suppliers.list().await?)))
}

#[utoipa::path(
    get, path = "/api/suppliers/{id}", tag = "suppliers",
    params(("id" = String, Path, description = "Supplier id (UUID)")),
    responses(
        (status = 200, description = "Supplier with its products", body = crate::openapi::SupplierDoc),
        (status = 400, description = "Invalid id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Supplier not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<SupplierWithProducts>>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(Envelope::data(state.suppliers.get(id).await?)))
}
