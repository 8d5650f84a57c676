//! Error types for request handling.

use productstore_core::storage::RepositoryError;
use thiserror::Error;

/// Result type alias for request handling.
pub type Result<T> = std::result::Result<T, HandlerError>;

/// Errors that can occur while routing and executing an operation.
///
/// Operation handlers catch nothing; every variant propagates to the
/// dispatcher, which converts it into the failure response.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Unsupported route: \"{0}\"")]
    UnsupportedOperation(String),

    #[error("Malformed request body: {0}")]
    MalformedRequest(String),

    #[error("Update payload has no fields to set")]
    EmptyUpdate,

    #[error("Missing request parameter \"{0}\"")]
    MissingParameter(&'static str),

    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_operation_carries_method_name() {
        let error = HandlerError::UnsupportedOperation("PATCH".to_string());
        assert_eq!(error.to_string(), "Unsupported route: \"PATCH\"");
    }

    #[test]
    fn test_storage_error_is_transparent() {
        let error = HandlerError::Storage(RepositoryError::QueryFailed("boom".to_string()));
        assert_eq!(error.to_string(), "Query failed: boom");
    }

    #[test]
    fn test_empty_update_display() {
        assert_eq!(
            HandlerError::EmptyUpdate.to_string(),
            "Update payload has no fields to set"
        );
    }
}
