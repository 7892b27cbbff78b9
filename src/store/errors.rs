//! # Store Errors
//!
//! Error types for document store backends.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Document store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No store configured, or the connection could not be used
    #[error("Database not available: {0}")]
    Unavailable(String),

    /// The backend rejected or failed the operation
    #[error("Database error: {0}")]
    Backend(String),

    /// A document could not be converted to or from the backend format
    #[error("Document encoding error: {0}")]
    Encoding(String),
}

impl StoreError {
    /// Whether the error means the store could not be reached at all
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Encoding(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::Unavailable("DATABASE_URL not set".into());
        assert_eq!(err.to_string(), "Database not available: DATABASE_URL not set");
        assert!(err.is_unavailable());
        assert!(!StoreError::Backend("boom".into()).is_unavailable());
    }
}
