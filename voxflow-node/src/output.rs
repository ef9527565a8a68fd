//! Node output rows
//!
//! Each input item produces exactly one row: a transcript on success, or
//! an error record when the item failed and the host asked the batch to
//! continue.

use serde::Serialize;

use voxflow_core::domain::transcription::TranscriptionSegment;

/// Successful transcription of one item
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptOutput {
    /// Full transcript text, empty if the service returned none
    pub transcription: String,
    /// Per-segment detail, passed through verbatim
    pub segments: Vec<TranscriptionSegment>,
    /// The service-side job id, for cross-referencing
    #[serde(rename = "jobId")]
    pub job_id: String,
}

/// One output row per input item
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ItemOutput {
    Transcript(TranscriptOutput),
    Error { error: String },
}

impl ItemOutput {
    pub fn is_error(&self) -> bool {
        matches!(self, ItemOutput::Error { .. })
    }
}
