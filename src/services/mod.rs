use thiserror::Error;

use crate::forms::{FieldViolation, FormError};
use crate::repository::RepositoryError;

pub mod flashcards;
pub mod tags;

/// Result alias returned by every service function.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced to the HTTP layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request payload broke one or more field rules.
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldViolation>),
    /// The targeted record does not exist.
    #[error("record not found")]
    NotFound,
    /// Any store failure; the message is only ever logged.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(value: FormError) -> Self {
        ServiceError::Validation(value.violations())
    }
}
