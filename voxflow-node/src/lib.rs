//! Voxflow Node
//!
//! The transcription node core: uploads a video to the Voxflow service,
//! then polls until the transcript is ready.
//!
//! Architecture:
//! - Host interface: traits for everything the surrounding workflow host
//!   supplies (items, parameters, credentials, scheduling)
//! - Uploader: the three-step signed-URL upload handshake
//! - Poller: bounded status polling with timeout and terminal-state
//!   detection
//! - Executor: strictly sequential per-item processing with optional
//!   continue-on-fail
//! - Descriptor: static registration data for host integration layers
//!
//! Items never share state: each gets its own job id, and a poller only
//! ever queries the job produced by its own upload.

pub mod api;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod host;
pub mod output;
pub mod poller;
pub mod uploader;

mod executor;

// Re-export the main entry points
pub use api::TranscriptionApi;
pub use config::{Credentials, NodeParameters};
pub use error::{NodeError, Result};
pub use executor::TranscribeNode;
pub use host::{BinaryPayload, InputItem, NodeHost};
pub use output::{ItemOutput, TranscriptOutput};
