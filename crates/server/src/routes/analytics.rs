use axum::{extract::State, Json};
use service::analytics::AnalyticsSummary;

use super::Envelope;
use crate::{errors::ApiError, state::AppState};

#[utoipa::path(
    get, path = "/api/analytics/summary", tag = "analytics",
    responses(
        (status = 200, description = "Dashboard summary metrics", body = crate::openapi::SummaryDoc),
        (status = 400, description = "Database Error", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn summary(State(state): State<AppState>) -> Result<Json<Envelope<AnalyticsSummary>>, ApiError> {
    let summary = state.analytics.summary().await?;
    Ok(Json(Envelope::data(summary)))
}
