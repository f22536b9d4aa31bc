//! Error types for FarGoat

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FarGoatError>;

#[derive(Error, Debug)]
pub enum FarGoatError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Uniqueness violation: {0}")]
    Conflict(String),

    /// A ledger rule refused the operation
    #[error("{0}")]
    Rejected(String),

    #[error("Data service is unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl FarGoatError {
    pub fn not_found(resource: &str) -> Self {
        FarGoatError::NotFound(resource.to_string())
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        FarGoatError::Rejected(reason.into())
    }
}
