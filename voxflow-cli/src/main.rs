//! Voxflow CLI
//!
//! A standalone host for the transcription node: transcribe local video
//! files from the command line, or verify stored credentials.

mod commands;
mod config;
mod host;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "voxflow")]
#[command(about = "Voxflow video transcription CLI", long_about = None)]
struct Cli {
    /// API gateway URL
    #[arg(long, env = "VOXFLOW_API_URL", default_value = "https://api.voxflow.dev")]
    api_url: String,

    /// API key (starts with sk_live_)
    #[arg(long, env = "VOXFLOW_API_KEY", hide_env_values = true)]
    api_key: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "voxflow_node=warn,voxflow_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_url: cli.api_url,
        api_key: cli.api_key,
    };

    handle_command(cli.command, &config).await
}
