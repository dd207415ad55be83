use sea_orm::DbErr;
use thiserror::Error;

use crate::validation::FieldViolation;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {}", FieldViolation::join(.0))]
    Validation(Vec<FieldViolation>),
    #[error("database error: {0}")]
    Db(#[from] DbErr),
}

impl ModelError {
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::Validation(vec![FieldViolation::new(field, message)])
    }
}
