use thiserror::Error;

/// Errors related to the core domain model of the video catalog.
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("{0} is a required field")]
    MissingField(&'static str),
}

#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
}
