use thiserror::Error;

/// Failure modes of the entity stores. Every error aborts the enclosing
/// operation before any state change; the store never recovers, retries, or
/// logs internally.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),
}

impl StoreError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        StoreError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        StoreError::NotFound(msg.into())
    }

    pub fn conflict<T: Into<String>>(msg: T) -> Self {
        StoreError::Conflict(msg.into())
    }
}
