//! Verify command
//!
//! Issues the same health-check request a workflow host uses to test
//! stored credentials.

use anyhow::Result;
use colored::*;

use crate::config::Config;
use voxflow_client::TranscriptionClient;

pub async fn handle(config: &Config) -> Result<()> {
    let client = TranscriptionClient::new(&config.api_url, &config.api_key);

    match client.check_health().await {
        Ok(()) => {
            println!("{} {}", "OK".green().bold(), config.api_url);
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "FAILED".red().bold(), e);
            anyhow::bail!("credential verification failed")
        }
    }
}
