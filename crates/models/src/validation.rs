//! Field-level validation shared by the entity input types.
//!
//! Rules mirror what the dashboard enforces client-side: bounded string
//! lengths, a syntactic email check, positive prices and non-negative stock.

use serde::Serialize;

/// One rejected field and the reason.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self { field: field.to_string(), message: message.into() }
    }

    pub fn join(list: &[FieldViolation]) -> String {
        list.iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Collects violations so every bad field is reported in one response.
#[derive(Debug, Default)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldViolation::new(field, message));
    }

    /// Required string with a character-count window.
    pub fn required_len(&mut self, field: &str, label: &str, value: &str, max: usize) {
        let n = value.chars().count();
        if n == 0 {
            self.push(field, format!("{label} is required"));
        } else if n > max {
            self.push(field, format!("{label} must be at most {max} characters"));
        }
    }

    pub fn optional_len(&mut self, field: &str, label: &str, value: Option<&str>, max: usize) {
        if let Some(v) = value {
            if v.chars().count() > max {
                self.push(field, format!("{label} must be at most {max} characters"));
            }
        }
    }

    pub fn email(&mut self, field: &str, value: &str) {
        if !is_valid_email(value) {
            self.push(field, "Invalid email address");
        }
    }

    pub fn into_result(self) -> Result<(), crate::errors::ModelError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(crate::errors::ModelError::Validation(self.0))
        }
    }
}

/// Syntactic check only: `local@domain.tld`, no whitespace.
pub fn is_valid_email(s: &str) -> bool {
    if s.len() > 320 || s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else { return false };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|l| !l.is_empty())
}
