use models::errors::ModelError;
use models::validation::FieldViolation;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {}", FieldViolation::join(.0))]
    Invalid(Vec<FieldViolation>),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("database unavailable: {0}")]
    Unavailable(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn supplier_not_found() -> Self { Self::not_found("Supplier") }

    pub fn product_not_found() -> Self { Self::not_found("Product") }

    pub fn email_taken() -> Self { Self::Conflict("Email already exists".into()) }

    /// Connection-level failures are kept apart from query failures.
    pub fn from_db(e: DbErr) -> Self {
        match e {
            DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => Self::Unavailable(e.to_string()),
            other => Self::Db(other.to_string()),
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(list) => Self::Invalid(list),
            ModelError::Db(e) => Self::from_db(e),
        }
    }
}
