//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Malformed calendar day: {value:?} (expected YYYY-MM-DD)")]
    MalformedDate { value: String },

    #[error("Achievement not found: {id}")]
    AchievementNotFound { id: String },

    #[error("Validation error: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn malformed_date<T: AsRef<str>>(value: T) -> Self {
        Self::MalformedDate {
            value: value.as_ref().to_string(),
        }
    }

    pub fn achievement_not_found<T: AsRef<str>>(id: T) -> Self {
        Self::AchievementNotFound {
            id: id.as_ref().to_string(),
        }
    }
}
