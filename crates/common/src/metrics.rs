//! Prometheus metrics (default registry)

use once_cell::sync::Lazy;
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, Encoder, Histogram,
    IntCounter, IntCounterVec, TextEncoder,
};

pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "greentrade_http_requests_total",
        "HTTP requests by method and status class",
        &["method", "status"]
    )
    .expect("register http_requests_total")
});

pub static HTTP_REQUEST_DURATION: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "greentrade_http_request_duration_seconds",
        "HTTP request duration in seconds",
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]
    )
    .expect("register http_request_duration")
});

pub static SEARCH_REQUESTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "greentrade_search_requests_total",
        "Global searches executed"
    )
    .expect("register search_requests_total")
});

pub static SEARCH_HITS: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "greentrade_search_hits",
        "Number of hits returned per search",
        vec![0.0, 1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 500.0]
    )
    .expect("register search_hits")
});

pub static SUMMARY_DURATION: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "greentrade_analytics_summary_duration_seconds",
        "Time to compute the analytics summary",
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]
    )
    .expect("register summary_duration")
});

/// Status class label (`2xx`, `4xx`, ...) for a numeric status code.
pub fn status_class(status: u16) -> &'static str {
    match status {
        100..=199 => "1xx",
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        _ => "5xx",
    }
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
