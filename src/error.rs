//! Error types for mongopage
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for mongopage
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Lookup Errors
    // ============================================================================
    #[error("document not found")]
    NotFound,

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    // ============================================================================
    // Cursor Errors
    // ============================================================================
    #[error("malformed cursor: {message}")]
    MalformedCursor { message: String },

    #[error("could not create a {boundary} cursor: {message}")]
    CursorGeneration { boundary: String, message: String },

    // ============================================================================
    // Store Errors
    // ============================================================================
    #[error("store operation failed: {0}")]
    Store(#[from] mongodb::error::Error),

    #[error("operation '{operation}' timed out after {timeout_ms}ms")]
    Timeout { operation: String, timeout_ms: u64 },

    // ============================================================================
    // Serialization Errors
    // ============================================================================
    #[error("failed to serialize BSON: {0}")]
    BsonSerialize(#[from] mongodb::bson::ser::Error),

    #[error("failed to deserialize BSON: {0}")]
    BsonDeserialize(#[from] mongodb::bson::de::Error),
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a malformed cursor error
    pub fn malformed_cursor(message: impl Into<String>) -> Self {
        Self::MalformedCursor {
            message: message.into(),
        }
    }

    /// Create a cursor generation error for the given page boundary
    pub fn cursor_generation(boundary: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CursorGeneration {
            boundary: boundary.into(),
            message: message.into(),
        }
    }

    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            timeout_ms,
        }
    }

    /// Check if this error is a missing-document lookup
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Check if this error came from a supplied page token
    pub fn is_malformed_cursor(&self) -> bool {
        matches!(self, Self::MalformedCursor { .. })
    }
}

/// Result type alias for mongopage
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_argument("results container is unusable");
        assert_eq!(
            err.to_string(),
            "invalid argument: results container is unusable"
        );

        let err = Error::malformed_cursor("token is not valid base64");
        assert_eq!(
            err.to_string(),
            "malformed cursor: token is not valid base64"
        );

        let err = Error::cursor_generation("next", "paginated field missing");
        assert_eq!(
            err.to_string(),
            "could not create a next cursor: paginated field missing"
        );

        let err = Error::timeout("find", 5000);
        assert_eq!(err.to_string(), "operation 'find' timed out after 5000ms");
    }

    #[test]
    fn test_error_predicates() {
        assert!(Error::NotFound.is_not_found());
        assert!(!Error::NotFound.is_malformed_cursor());
        assert!(Error::malformed_cursor("bad").is_malformed_cursor());
        assert!(!Error::invalid_argument("bad").is_not_found());
    }
}
