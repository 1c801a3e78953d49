use thiserror::Error;

/// Result type for domain operations of the share store.
pub type Result<T> = std::result::Result<T, ShareError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid share id: {0}")]
    InvalidShareId(String),
}

/// Failures reported by a [`Repository`](crate::Repository) backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
}

/// Errors surfaced by the share store to its callers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShareError {
    /// The id is unknown or the record behind it has expired.
    #[error("code not found: {0}")]
    NotFound(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("{field} is {size} bytes, exceeding the {limit} byte limit")]
    PayloadTooLarge {
        field: &'static str,
        size: usize,
        limit: usize,
    },
    /// Every generated id collided with a live record.
    #[error("no free share id after {attempts} attempts")]
    StorageExhausted { attempts: u32 },
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl From<StorageError> for ShareError {
    fn from(value: StorageError) -> Self {
        Self::StorageUnavailable(value.to_string())
    }
}

impl From<CoreError> for ShareError {
    fn from(value: CoreError) -> Self {
        match value {
            CoreError::InvalidShareId(message) => Self::InvalidArgument(message),
        }
    }
}
