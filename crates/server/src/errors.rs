use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::validation::FieldViolation;
use serde::Serialize;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Error body shared by every endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldViolation>>,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: String,
    pub details: Option<Vec<FieldViolation>>,
}

impl ApiError {
    pub fn new(status: StatusCode, error: &'static str, message: impl Into<String>) -> Self {
        Self { status, error, message: message.into(), details: None }
    }

    /// 400 with per-field reasons.
    pub fn validation(details: Vec<FieldViolation>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: "Validation Error",
            message: "Invalid request data".into(),
            details: Some(details),
        }
    }

    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        Self::validation(vec![FieldViolation::new(field, message)])
    }

    /// Plain `Error` envelope with a caller-facing message.
    pub fn app(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, "Error", message)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", "Something went wrong")
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Invalid(list) => ApiError::validation(list),
            ServiceError::Validation(msg) => ApiError::app(StatusCode::BAD_REQUEST, msg),
            ServiceError::NotFound(msg) => ApiError::app(StatusCode::NOT_FOUND, msg),
            ServiceError::Conflict(msg) => ApiError::app(StatusCode::BAD_REQUEST, msg),
            ServiceError::Db(detail) => {
                error!(error = %detail, "database_error");
                ApiError::new(StatusCode::BAD_REQUEST, "Database Error", "A database error occurred")
            }
            ServiceError::Unavailable(detail) => {
                error!(error = %detail, "database_unavailable");
                ApiError::internal()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_client_error() {
            warn!(status = self.status.as_u16(), message = %self.message, "request_rejected");
        }
        let body = ErrorBody {
            error: self.error,
            message: self.message,
            status_code: self.status.as_u16(),
            details: self.details,
        };
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("migration failed: {0}")]
    Migration(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
