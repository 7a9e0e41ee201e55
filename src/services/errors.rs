use thiserror::Error;

use crate::repository::errors::{ConstraintKind, RepositoryError};

/// Failures surfaced by the service layer.
///
/// Messages keep the original database detail for the logs; the HTTP layer
/// never forwards them to callers.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A uniqueness constraint rejected the write.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A required field was absent.
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::ConstraintViolation(ConstraintKind::Unique, message) => {
                ServiceError::Conflict(message)
            }
            RepositoryError::ConstraintViolation(ConstraintKind::NotNull, message) => {
                ServiceError::MissingField(message)
            }
            other => ServiceError::Internal(other.to_string()),
        }
    }
}
