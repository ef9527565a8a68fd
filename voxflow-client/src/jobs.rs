//! Job status and health endpoints

use tracing::debug;

use crate::TranscriptionClient;
use crate::error::{ClientError, Result};
use voxflow_core::domain::job::JobStatusSnapshot;
use voxflow_core::dto::job::JobStatusResponse;

impl TranscriptionClient {
    /// Query the current status of a transcription job
    ///
    /// # Arguments
    /// * `job_id` - The job id returned by the upload handshake
    ///
    /// # Returns
    /// A snapshot of the job: raw status label, classified state, and the
    /// transcription payload when the job has completed
    pub async fn job_status(&self, job_id: &str) -> Result<JobStatusSnapshot> {
        let url = format!("{}/api/jobs/{}", self.base_url, job_id);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let body: JobStatusResponse = self.handle_response(response).await?;

        if !body.success {
            return Err(ClientError::rejected(body.error));
        }

        debug!(%job_id, status = %body.status, "job status polled");

        Ok(body.into())
    }

    /// Probe the service health endpoint
    ///
    /// Used to validate credentials: a bad key or unreachable gateway
    /// fails here before any upload is attempted.
    pub async fn check_health(&self) -> Result<()> {
        let url = format!("{}/health", self.base_url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxflow_core::domain::job::JobState;

    fn test_client(server: &mockito::ServerGuard) -> TranscriptionClient {
        TranscriptionClient::new(server.url(), "sk_live_test")
    }

    #[tokio::test]
    async fn test_job_status_parses_completed_job() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/jobs/job-1")
            .match_header("authorization", "Bearer sk_live_test")
            .with_body(
                r#"{
                    "success": true,
                    "status": "completed",
                    "transcription": {
                        "text": "hello world",
                        "segments": [{
                            "id": 0, "seek": 0, "start": 0.0, "end": 2.5,
                            "text": "hello world", "tokens": [1, 2],
                            "temperature": 0.0, "avg_logprob": -0.2,
                            "compression_ratio": 1.1, "no_speech_prob": 0.02
                        }]
                    }
                }"#,
            )
            .create_async()
            .await;

        let snapshot = test_client(&server).job_status("job-1").await.unwrap();

        assert_eq!(snapshot.state, JobState::Completed);
        let transcription = snapshot.transcription.unwrap();
        assert_eq!(transcription.text, "hello world");
        assert_eq!(transcription.segments.len(), 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_job_status_failed_job_keeps_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/jobs/job-1")
            .with_body(r#"{"success":true,"status":"failed","error":"bad codec"}"#)
            .create_async()
            .await;

        let snapshot = test_client(&server).job_status("job-1").await.unwrap();

        assert_eq!(snapshot.state, JobState::Failed);
        assert_eq!(snapshot.error.as_deref(), Some("bad codec"));
    }

    #[tokio::test]
    async fn test_job_status_rejection_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/jobs/job-1")
            .with_body(r#"{"success":false,"error":"invalid api key"}"#)
            .create_async()
            .await;

        let err = test_client(&server).job_status("job-1").await.unwrap_err();
        assert!(err.is_rejected());
        assert_eq!(err.to_string(), "invalid api key");
    }

    #[tokio::test]
    async fn test_check_health_ok_and_failing() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/health")
            .match_header("authorization", "Bearer sk_live_test")
            .with_body("ok")
            .create_async()
            .await;

        test_client(&server).check_health().await.unwrap();
        mock.assert_async().await;

        server
            .mock("GET", "/health")
            .with_status(401)
            .with_body("unauthorized")
            .create_async()
            .await;

        let err = test_client(&server).check_health().await.unwrap_err();
        assert!(err.is_client_error());
    }
}
