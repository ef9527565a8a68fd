//! Upload handshake endpoints

use tracing::debug;

use crate::TranscriptionClient;
use crate::error::{ClientError, Result};
use voxflow_core::domain::job::UploadJob;
use voxflow_core::dto::upload::{
    AckResponse, CompleteUploadRequest, InitiateUploadRequest, InitiateUploadResponse,
};

impl TranscriptionClient {
    /// Initiate an upload and obtain a job id plus signed upload URL
    ///
    /// # Arguments
    /// * `file_name` - Name reported to the service for this file
    /// * `content_type` - MIME type of the payload
    ///
    /// # Returns
    /// The created upload job handle
    pub async fn initiate_upload(&self, file_name: &str, content_type: &str) -> Result<UploadJob> {
        let url = format!("{}/api/upload/initiate", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&InitiateUploadRequest::new(file_name, content_type))
            .send()
            .await?;

        let body: InitiateUploadResponse = self.handle_response(response).await?;

        if !body.success {
            return Err(ClientError::rejected(body.error));
        }

        let job_id = body
            .job_id
            .ok_or_else(|| ClientError::ParseError("initiate response missing jobId".to_string()))?;
        let upload_url = body.upload_url.ok_or_else(|| {
            ClientError::ParseError("initiate response missing uploadUrl".to_string())
        })?;

        debug!(%job_id, "upload initiated");

        Ok(UploadJob { job_id, upload_url })
    }

    /// Push raw bytes to the signed upload URL
    ///
    /// The signed target is a plain storage sink: the call is not
    /// bearer-authenticated and the response body carries no `success`
    /// flag, so only a transport or HTTP-status failure aborts.
    ///
    /// # Arguments
    /// * `upload_url` - The signed URL from [`initiate_upload`](Self::initiate_upload)
    /// * `content_type` - MIME type, must match the initiate call
    /// * `body` - The file contents
    pub async fn transfer_file(
        &self,
        upload_url: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<()> {
        debug!(bytes = body.len(), "transferring file to signed URL");

        let response = self
            .client
            .put(upload_url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body)
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

    /// Notify the service that the transfer is done
    ///
    /// # Arguments
    /// * `job_id` - The job id from the initiate call
    pub async fn complete_upload(&self, job_id: &str) -> Result<()> {
        let url = format!("{}/api/upload/complete", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&CompleteUploadRequest {
                job_id: job_id.to_string(),
            })
            .send()
            .await?;

        let body: AckResponse = self.handle_response(response).await?;

        if !body.success {
            return Err(ClientError::rejected(body.error));
        }

        debug!(%job_id, "upload completed");

        Ok(())
    }
}
