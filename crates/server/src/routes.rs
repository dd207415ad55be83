use axum::{
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{get, put},
    Router,
};
use serde::Serialize;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::metrics::{status_class, HTTP_REQUESTS_TOTAL, HTTP_REQUEST_DURATION};

use crate::errors::ApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod analytics;
pub mod health;
pub mod metrics;
pub mod products;
pub mod search;
pub mod suppliers;

/// Success body: `{success: true, message?, count?, data?}`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn data(data: T) -> Self {
        Self { success: true, message: None, count: None, data: Some(data) }
    }

    pub fn with_message(message: &'static str, data: T) -> Self {
        Self { success: true, message: Some(message), count: None, data: Some(data) }
    }
}

impl<T> Envelope<Vec<T>> {
    pub fn list(items: Vec<T>) -> Self {
        Self { success: true, message: None, count: Some(items.len()), data: Some(items) }
    }
}

impl Envelope<()> {
    pub fn message(message: &'static str) -> Self {
        Self { success: true, message: Some(message), count: None, data: None }
    }
}

/// Count and time every request by method and status class.
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let method = req.method().as_str().to_owned();
    let timer = HTTP_REQUEST_DURATION.start_timer();
    let res = next.run(req).await;
    timer.observe_duration();
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method.as_str(), status_class(res.status().as_u16())])
        .inc();
    res
}

async fn not_found() -> ApiError {
    ApiError::app(StatusCode::NOT_FOUND, "Route not found")
}

/// Build the full application router: JSON API, docs, metrics and optional dashboard assets.
pub fn build_router(state: AppState, cors: CorsLayer, frontend_dir: Option<&str>) -> Router {
    let api = Router::new()
        .route("/health", get(health::health))
        .route("/metrics", get(metrics::metrics))
        .route("/api/suppliers", get(suppliers::list).post(suppliers::create))
        .route("/api/suppliers/:id", get(suppliers::get))
        .route("/api/products", get(products::list).post(products::create))
        .route("/api/products/:id", put(products::update).delete(products::delete))
        .route("/api/analytics/summary", get(analytics::summary))
        .route("/api/search", get(search::search))
        .with_state(state);

    let docs = SwaggerUi::new("/api/docs").url("/api-docs/openapi.json", ApiDoc::openapi());
    let app = api.merge(docs);

    // 有前端目录时作为兜底静态服务，否则未知路由返回 JSON 404
    let app = match frontend_dir {
        Some(dir) => app.fallback_service(
            ServeDir::new(dir).fallback(ServeFile::new(format!("{}/index.html", dir))),
        ),
        None => app.fallback(not_found),
    };

    app.layer(middleware::from_fn(track_metrics))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
