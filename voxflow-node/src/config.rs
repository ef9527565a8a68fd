//! Node configuration
//!
//! Per-item parameters and per-batch credentials. Parameters carry the
//! same defaults the node advertises in its descriptor; credentials are
//! fetched once per batch from the host and shared read-only.

use std::time::Duration;

use crate::error::{NodeError, Result};

/// Parameters for processing one input item
///
/// In practice these are node-level settings shared by every item in a
/// batch, but the host resolves them per item and they may differ.
#[derive(Debug, Clone)]
pub struct NodeParameters {
    /// Name of the binary property holding the video payload
    pub binary_property: String,

    /// Optional file name override; empty means auto-detect
    pub file_name: Option<String>,

    /// Seconds between status polls
    pub poll_interval_secs: u64,

    /// Maximum minutes to wait for a terminal state
    pub timeout_minutes: u64,
}

impl NodeParameters {
    /// The constant delay between status polls
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// The total polling budget
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_minutes * 60)
    }

    /// The file name override, with empty strings treated as unset
    pub fn file_name_override(&self) -> Option<&str> {
        self.file_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Validates the parameters
    pub fn validate(&self) -> Result<()> {
        if self.binary_property.is_empty() {
            return Err(NodeError::Configuration(
                "binary property name cannot be empty".to_string(),
            ));
        }

        if self.poll_interval_secs == 0 {
            return Err(NodeError::Configuration(
                "poll interval must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for NodeParameters {
    fn default() -> Self {
        Self {
            binary_property: "data".to_string(),
            file_name: None,
            poll_interval_secs: 5,
            timeout_minutes: 30,
        }
    }
}

/// Credentials for the transcription service
#[derive(Debug, Clone)]
pub struct Credentials {
    /// API gateway base URL (e.g., "https://api.voxflow.dev")
    pub api_url: String,

    /// Account API key, sent as a bearer token
    pub api_key: String,
}

impl Credentials {
    /// Creates credentials, trimming any trailing slash from the URL
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Validates the credentials
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(NodeError::Credentials("API key cannot be empty".to_string()));
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(NodeError::Credentials(
                "API URL must start with http:// or https://".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters() {
        let params = NodeParameters::default();
        assert_eq!(params.binary_property, "data");
        assert_eq!(params.poll_interval(), Duration::from_secs(5));
        assert_eq!(params.timeout(), Duration::from_secs(30 * 60));
        assert!(params.file_name_override().is_none());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_empty_file_name_counts_as_unset() {
        let params = NodeParameters {
            file_name: Some(String::new()),
            ..Default::default()
        };
        assert!(params.file_name_override().is_none());

        let params = NodeParameters {
            file_name: Some("a.mp4".to_string()),
            ..Default::default()
        };
        assert_eq!(params.file_name_override(), Some("a.mp4"));
    }

    #[test]
    fn test_parameter_validation() {
        let mut params = NodeParameters::default();
        assert!(params.validate().is_ok());

        params.binary_property = String::new();
        assert!(params.validate().is_err());

        params.binary_property = "data".to_string();
        params.poll_interval_secs = 0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_is_allowed() {
        // A zero timeout is valid: the poller fails after its first
        // non-terminal observation.
        let params = NodeParameters {
            timeout_minutes: 0,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_credentials_validation() {
        let creds = Credentials::new("https://api.voxflow.dev/", "sk_live_test");
        assert_eq!(creds.api_url, "https://api.voxflow.dev");
        assert!(creds.validate().is_ok());

        let creds = Credentials::new("ftp://api.voxflow.dev", "sk_live_test");
        assert!(creds.validate().is_err());

        let creds = Credentials::new("https://api.voxflow.dev", "");
        assert!(creds.validate().is_err());
    }
}
