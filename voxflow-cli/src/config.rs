//! Configuration module
//!
//! Handles CLI configuration: API gateway URL and key.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the API gateway
    pub api_url: String,

    /// Account API key
    pub api_key: String,
}
