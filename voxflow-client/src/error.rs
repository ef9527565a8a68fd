//! Error types for the Voxflow client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the transcription service
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Service returned a non-success HTTP status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Service answered 2xx but reported `success: false` in the body
    #[error("{message}")]
    Rejected {
        /// Error message from the API, or a generic fallback
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Create a rejection error from an optional service message
    ///
    /// Falls back to `"Unknown error"` when the service gives no detail.
    pub fn rejected(message: Option<String>) -> Self {
        Self::Rejected {
            message: message.unwrap_or_else(|| "Unknown error".to_string()),
        }
    }

    /// Check if this error came from a `success: false` body
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_falls_back_to_unknown_error() {
        let err = ClientError::rejected(None);
        assert_eq!(err.to_string(), "Unknown error");

        let err = ClientError::rejected(Some("quota exceeded".to_string()));
        assert_eq!(err.to_string(), "quota exceeded");
        assert!(err.is_rejected());
    }

    #[test]
    fn test_status_class_predicates() {
        assert!(ClientError::api_error(404, "missing").is_client_error());
        assert!(!ClientError::api_error(503, "down").is_client_error());
        assert!(!ClientError::api_error(503, "down").is_rejected());
    }
}
