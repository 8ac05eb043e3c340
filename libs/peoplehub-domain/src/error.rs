//! Domain errors
//!
//! These are the failures a service can report. They are independent of the
//! transport (no HTTP status codes here) and of the persistence backend.

use thiserror::Error;

use crate::ports::PersistenceError;
use crate::validation::ValidationErrors;

/// Errors surfaced by domain services
#[derive(Error, Debug)]
pub enum DomainError {
    /// Input shape violated; never reaches persistence
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// The referenced record does not exist
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// The request conflicts with stored state or a business rule
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A required collaborator is not configured or not reachable
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// The persistence engine failed
    #[error("Persistence failure: {0}")]
    Persistence(String),

    /// An upstream backend (e.g. the AI backend) failed
    #[error("Upstream failure: {0}")]
    Upstream(String),
}

impl DomainError {
    /// Create a not-found error for an entity kind and id
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Create a conflict error with a message
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create an unavailable error with a message
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Create an upstream error with a message
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    /// Whether the caller caused this failure
    ///
    /// Client errors are safe to expose verbatim; the rest get a generic
    /// response and are logged.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::NotFound { .. } | Self::Conflict(_)
        )
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<PersistenceError> for DomainError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::NotFound { collection, id } => Self::NotFound {
                entity: collection,
                id,
            },
            PersistenceError::Conflict(msg) => Self::Conflict(msg),
            PersistenceError::Backend(msg) => Self::Persistence(msg),
            PersistenceError::Corrupt(msg) => Self::Persistence(msg),
        }
    }
}

/// Result type alias for domain operations
pub type Result<T> = std::result::Result<T, DomainError>;
