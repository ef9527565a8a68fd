//! Transcription service seam
//!
//! The node talks to the service through this trait rather than the
//! concrete client, so tests can script upload outcomes and status
//! sequences without a server.

use async_trait::async_trait;

use voxflow_client::{ClientError, TranscriptionClient};
use voxflow_core::domain::job::{JobStatusSnapshot, UploadJob};

/// The protocol operations the node needs from the service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranscriptionApi: Send + Sync {
    /// Initiate an upload, producing a job id and signed upload URL
    async fn initiate_upload(
        &self,
        file_name: &str,
        content_type: &str,
    ) -> Result<UploadJob, ClientError>;

    /// Push raw bytes to the signed upload URL
    async fn transfer_file(
        &self,
        upload_url: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<(), ClientError>;

    /// Notify the service that the transfer is done
    async fn complete_upload(&self, job_id: &str) -> Result<(), ClientError>;

    /// Query the current job status
    async fn job_status(&self, job_id: &str) -> Result<JobStatusSnapshot, ClientError>;
}

#[async_trait]
impl TranscriptionApi for TranscriptionClient {
    async fn initiate_upload(
        &self,
        file_name: &str,
        content_type: &str,
    ) -> Result<UploadJob, ClientError> {
        TranscriptionClient::initiate_upload(self, file_name, content_type).await
    }

    async fn transfer_file(
        &self,
        upload_url: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<(), ClientError> {
        TranscriptionClient::transfer_file(self, upload_url, content_type, body).await
    }

    async fn complete_upload(&self, job_id: &str) -> Result<(), ClientError> {
        TranscriptionClient::complete_upload(self, job_id).await
    }

    async fn job_status(&self, job_id: &str) -> Result<JobStatusSnapshot, ClientError> {
        TranscriptionClient::job_status(self, job_id).await
    }
}
