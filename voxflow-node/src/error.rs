//! Error types for the transcription node
//!
//! Every variant is terminal for the item being processed; nothing is
//! retried. Messages prefer the service-reported error text and fall back
//! to a generic `"Unknown error"` string (the client supplies the
//! fallback for in-body rejections).

use thiserror::Error;

use voxflow_client::ClientError;

/// Result type alias for node operations
pub type Result<T> = std::result::Result<T, NodeError>;

/// Errors raised while processing a single input item
#[derive(Debug, Error)]
pub enum NodeError {
    /// The upload-initiate call failed (transport error or rejection)
    #[error("Failed to initiate upload: {message}")]
    UploadInitiation { message: String },

    /// The signed-URL transfer failed at the transport level
    #[error("Failed to transfer file: {message}")]
    UploadTransfer { message: String },

    /// The upload-complete call failed (transport error or rejection)
    #[error("Failed to complete upload: {message}")]
    UploadCompletion { message: String },

    /// A status poll failed; polling stops immediately
    #[error("Failed to check job status: {message}")]
    JobStatusQuery { message: String },

    /// The service reported the job as failed
    #[error("Transcription failed: {message}")]
    TranscriptionFailed { message: String },

    /// No terminal state was observed before the deadline
    #[error("Polling timeout after {elapsed_minutes} minutes. Job status: {last_status}")]
    PollingTimeout {
        elapsed_minutes: u64,
        last_status: String,
    },

    /// The input item has no binary payload under the configured name
    #[error("Input item has no binary property '{property}'")]
    MissingBinaryProperty { property: String },

    /// Host-supplied credentials are unusable
    #[error("Invalid credentials: {0}")]
    Credentials(String),

    /// Node parameters failed validation
    #[error("Invalid node configuration: {0}")]
    Configuration(String),
}

impl NodeError {
    pub fn upload_initiation(source: ClientError) -> Self {
        Self::UploadInitiation {
            message: source.to_string(),
        }
    }

    pub fn upload_transfer(source: ClientError) -> Self {
        Self::UploadTransfer {
            message: source.to_string(),
        }
    }

    pub fn upload_completion(source: ClientError) -> Self {
        Self::UploadCompletion {
            message: source.to_string(),
        }
    }

    pub fn job_status_query(source: ClientError) -> Self {
        Self::JobStatusQuery {
            message: source.to_string(),
        }
    }

    /// Build a transcription-failure error from an optional service message
    pub fn transcription_failed(message: Option<String>) -> Self {
        Self::TranscriptionFailed {
            message: message.unwrap_or_else(|| "Unknown error".to_string()),
        }
    }
}
