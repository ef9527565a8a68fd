//! Job status DTOs

use serde::{Deserialize, Serialize};

use crate::domain::job::{JobState, JobStatusSnapshot};
use crate::domain::transcription::Transcription;

/// Response from `GET /api/jobs/{jobId}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatusResponse {
    pub success: bool,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub transcription: Option<Transcription>,
    #[serde(default)]
    pub error: Option<String>,
}

impl From<JobStatusResponse> for JobStatusSnapshot {
    fn from(resp: JobStatusResponse) -> Self {
        let state = JobState::classify(&resp.status);
        Self {
            status: resp.status,
            state,
            transcription: resp.transcription,
            error: resp.error,
        }
    }
}
