//! Command definitions and dispatch

mod transcribe;
mod verify;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Upload video files and wait for their transcripts
    Transcribe(transcribe::TranscribeArgs),
    /// Verify credentials against the service health endpoint
    Verify,
}

/// Route a command to its handler
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Transcribe(args) => transcribe::handle(args, config).await,
        Commands::Verify => verify::handle(config).await,
    }
}
