use axum::{extract::State, Json};
use serde::Deserialize;
use service::search::{SearchHit, SearchTerm};
use tracing::info;

use super::Envelope;
use crate::{errors::ApiError, extract::ApiQuery, state::AppState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Case-insensitive substring of a supplier or product name
    pub q: Option<String>,
}

#[utoipa::path(
    get, path = "/api/search", tag = "search",
    params(SearchParams),
    responses(
        (status = 200, description = "Suppliers then products whose name contains q", body = crate::openapi::SearchResultsDoc),
        (status = 400, description = "Missing or repeated q", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn search(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> Result<Json<Envelope<Vec<SearchHit>>>, ApiError> {
    let term = SearchTerm::parse(params.q.as_deref())?;
    let hits = state.search.search(&term).await?;
    info!(q = %term.as_str(), hits = hits.len(), "search");
    Ok(Json(Envelope::list(hits)))
}
