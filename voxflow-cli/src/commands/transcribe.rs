//! Transcribe command
//!
//! Uploads each file, polls for its transcript, and prints one result
//! row per file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::*;

use crate::config::Config;
use crate::host::FileHost;
use voxflow_node::{ItemOutput, NodeParameters, TranscribeNode};

#[derive(Args)]
pub struct TranscribeArgs {
    /// Video files to transcribe, processed in order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// File name reported to the service (auto-detected if not provided)
    #[arg(long)]
    pub file_name: Option<String>,

    /// Seconds between status polls
    #[arg(long, default_value_t = 5)]
    pub poll_interval: u64,

    /// Maximum minutes to wait per file
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Keep going when a file fails, reporting the error instead
    #[arg(long)]
    pub continue_on_fail: bool,

    /// Print full result rows as JSON instead of transcript text
    #[arg(long)]
    pub json: bool,
}

pub async fn handle(args: TranscribeArgs, config: &Config) -> Result<()> {
    let parameters = NodeParameters {
        file_name: args.file_name.clone(),
        poll_interval_secs: args.poll_interval,
        timeout_minutes: args.timeout,
        ..Default::default()
    };

    let host = FileHost::load(&args.files, parameters, config, args.continue_on_fail)?;
    let node = TranscribeNode::from_host(&host)?;

    let rows = node.execute(&host).await?;

    for (path, row) in args.files.iter().zip(&rows) {
        if args.json {
            println!(
                "{}",
                serde_json::to_string_pretty(row).context("Failed to serialize result row")?
            );
            continue;
        }

        match row {
            ItemOutput::Transcript(output) => {
                println!(
                    "{} {}",
                    path.display().to_string().bold(),
                    format!("(job {})", output.job_id).dimmed()
                );
                println!("{}", output.transcription);
            }
            ItemOutput::Error { error } => {
                println!(
                    "{} {}",
                    path.display().to_string().bold(),
                    error.red()
                );
            }
        }
    }

    let failures = rows.iter().filter(|row| row.is_error()).count();
    if failures > 0 {
        println!(
            "{}",
            format!("{} of {} file(s) failed", failures, rows.len()).yellow()
        );
    }

    Ok(())
}
