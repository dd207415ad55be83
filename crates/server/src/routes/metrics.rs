use axum::http::StatusCode;

/// Prometheus text exposition of the default registry.
#[utoipa::path(
    get, path = "/metrics", tag = "health",
    responses((status = 200, description = "Prometheus metrics", body = String, content_type = "text/plain"))
)]
pub async fn metrics() -> (StatusCode, String) {
    common::metrics::encode_metrics()
}
