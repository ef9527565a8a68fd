//! Voxflow HTTP Client
//!
//! A typed HTTP client for the Voxflow transcription service.
//!
//! The service speaks a small bearer-authenticated JSON protocol: a
//! three-call upload handshake (initiate, raw transfer to a signed URL,
//! complete), a job status endpoint, and a health endpoint used for
//! credential validation.
//!
//! # Example
//!
//! ```no_run
//! use voxflow_client::TranscriptionClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), voxflow_client::ClientError> {
//!     let client = TranscriptionClient::new("https://api.voxflow.dev", "sk_live_example");
//!
//!     let job = client.initiate_upload("clip.mp4", "video/mp4").await?;
//!     println!("upload target for job {}: {}", job.job_id, job.upload_url);
//!     Ok(())
//! }
//! ```

pub mod error;
mod jobs;
mod uploads;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use voxflow_core::domain::job::UploadJob;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the Voxflow transcription API
///
/// Covers the whole node-facing protocol surface:
/// - Upload handshake (initiate, transfer, complete)
/// - Job status queries
/// - Health check for credential validation
#[derive(Debug, Clone)]
pub struct TranscriptionClient {
    /// Base URL of the API gateway (e.g., "https://api.voxflow.dev")
    base_url: String,
    /// Bearer token sent on every call except the raw transfer
    api_key: String,
    /// HTTP client instance
    client: Client,
}

impl TranscriptionClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - The API gateway base URL
    /// * `api_key` - The account API key used as a bearer token
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_client(base_url, api_key, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Get the base URL of the API gateway
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the HTTP status code and returns an appropriate error if the
    /// request failed, or deserializes the response body if successful.
    /// In-body `success` flags are checked by the individual endpoint
    /// methods, since the transfer step has no such flag.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}
