//! Error types for the scribe client

use std::time::Duration;

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the vendor API
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (transport-level)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Reading the file to upload failed
    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),

    /// A run did not reach a terminal status before the poll deadline
    #[error("Run did not reach a terminal status within {waited:?}")]
    DeadlineExceeded {
        /// How long the poller waited before giving up
        waited: Duration,
    },
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_class_predicates() {
        let unauthorized = ClientError::api_error(401, "invalid api key");
        assert!(unauthorized.is_client_error());
        assert!(!unauthorized.is_server_error());
        assert!(!unauthorized.is_not_found());

        let missing = ClientError::api_error(404, "no such thread");
        assert!(missing.is_not_found());

        let overloaded = ClientError::api_error(503, "overloaded");
        assert!(overloaded.is_server_error());
    }
}
