//! Record store errors

use std::io;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the record store
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with the same fingerprint already exists
    #[error("record already exists")]
    Conflict,

    /// No record matches the requested value
    #[error("record not found")]
    NotFound,

    /// The backing log could not be read or written
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The record log failed checksum or framing validation
    #[error("record log corrupted: {0}")]
    Corruption(String),
}

impl StoreError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        StoreError::Unavailable(message.into())
    }

    pub fn corruption(message: impl Into<String>) -> Self {
        StoreError::Corruption(message.into())
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_to_unavailable() {
        let err: StoreError = io::Error::new(io::ErrorKind::Other, "disk full").into();
        assert!(matches!(err, StoreError::Unavailable(_)));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(StoreError::Conflict.to_string(), "record already exists");
        assert_eq!(StoreError::NotFound.to_string(), "record not found");
    }
}
