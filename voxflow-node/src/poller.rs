//! Completion poller
//!
//! Repeatedly queries job status until a terminal state or a wall-clock
//! deadline is reached. The interval is constant (no backoff) and the
//! deadline is captured once at loop entry, so the timeout is not
//! affected by how long individual queries take to resolve.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::api::TranscriptionApi;
use crate::config::NodeParameters;
use crate::error::{NodeError, Result};
use crate::host::NodeHost;
use crate::output::TranscriptOutput;
use voxflow_core::domain::job::JobState;

/// Polls one job to completion
///
/// Terminal outcomes:
/// - `completed` returns the transcript (empty text / segments when the
///   service sent none) and stops querying immediately;
/// - `failed` fails with the service's error message;
/// - a failed status query fails the item at once, without further polls;
/// - passing the deadline on a non-terminal status fails with a timeout
///   that reports the last observed status label.
pub async fn poll_transcription(
    api: &dyn TranscriptionApi,
    host: &dyn NodeHost,
    job_id: &str,
    params: &NodeParameters,
) -> Result<TranscriptOutput> {
    let deadline = Instant::now() + params.timeout();
    let interval = params.poll_interval();

    debug!(%job_id, timeout_minutes = params.timeout_minutes, "polling for completion");

    loop {
        let snapshot = api
            .job_status(job_id)
            .await
            .map_err(NodeError::job_status_query)?;

        match snapshot.state {
            JobState::Completed => {
                let transcription = snapshot.transcription.unwrap_or_default();
                info!(
                    %job_id,
                    segments = transcription.segments.len(),
                    "transcription completed"
                );
                return Ok(TranscriptOutput {
                    transcription: transcription.text,
                    segments: transcription.segments,
                    job_id: job_id.to_string(),
                });
            }
            JobState::Failed => {
                warn!(%job_id, "service reported transcription failure");
                return Err(NodeError::transcription_failed(snapshot.error));
            }
            JobState::Running => {
                if Instant::now() >= deadline {
                    return Err(NodeError::PollingTimeout {
                        elapsed_minutes: params.timeout_minutes,
                        last_status: snapshot.status,
                    });
                }
                debug!(%job_id, status = %snapshot.status, "job still running");
                host.sleep(interval).await;
            }
        }
    }
}
