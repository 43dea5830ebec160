use diesel::result::{DatabaseErrorKind, Error as DieselError};
use gathering_core::validation::ValidationErrors;
use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    DatabaseError(#[from] gathering_db::error::DbError),

    #[error("Validation failed: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Diesel error: {0}")]
    DieselError(#[from] DieselError),
}

impl ServiceError {
    /// Field errors carried by a validation failure, if any.
    #[must_use]
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::ValidationError(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Returns `true` if `error` is a unique violation on the named constraint.
#[must_use]
pub fn is_unique_violation(error: &DieselError, constraint: &str) -> bool {
    matches!(
        error,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info)
            if info.constraint_name() == Some(constraint)
    )
}

/// Returns `true` if `error` is a foreign key violation.
#[must_use]
pub fn is_foreign_key_violation(error: &DieselError) -> bool {
    matches!(
        error,
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _)
    )
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
