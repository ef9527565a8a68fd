//! Job domain types

use serde::{Deserialize, Serialize};

use crate::domain::transcription::Transcription;

/// Handle returned by the upload-initiate call
///
/// The `upload_url` is a short-lived signed target consumed by the raw
/// transfer step; `job_id` persists for the lifetime of the poll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadJob {
    pub job_id: String,
    pub upload_url: String,
}

/// Classification of a service-reported job status label
///
/// The service defines its own in-progress labels ("pending",
/// "transcribing", ...). The node never enumerates them: anything that is
/// not `completed` or `failed` counts as still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobState {
    Running,
    Completed,
    Failed,
}

impl JobState {
    /// Classifies a raw status label from the service
    pub fn classify(status: &str) -> Self {
        match status {
            "completed" => JobState::Completed,
            "failed" => JobState::Failed,
            _ => JobState::Running,
        }
    }

    /// Whether polling stops at this state
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Completed | JobState::Failed)
    }
}

/// One observation of a job's status
///
/// `status` keeps the raw service label so timeout reporting can surface
/// it verbatim; `transcription` is populated only for completed jobs and
/// `error` only for failed ones.
#[derive(Debug, Clone)]
pub struct JobStatusSnapshot {
    pub status: String,
    pub state: JobState,
    pub transcription: Option<Transcription>,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_terminal_states() {
        assert_eq!(JobState::classify("completed"), JobState::Completed);
        assert_eq!(JobState::classify("failed"), JobState::Failed);
        assert!(JobState::classify("completed").is_terminal());
        assert!(JobState::classify("failed").is_terminal());
    }

    #[test]
    fn test_classify_anything_else_is_running() {
        for status in ["pending", "processing", "uploading", "transcribing", ""] {
            assert_eq!(JobState::classify(status), JobState::Running);
            assert!(!JobState::classify(status).is_terminal());
        }
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        // The service emits lowercase labels; anything else is non-terminal.
        assert_eq!(JobState::classify("Completed"), JobState::Running);
    }
}
