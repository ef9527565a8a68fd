//! Batch executor
//!
//! Processes a host-supplied batch of items strictly sequentially: each
//! item's upload and poll cycle fully completes before the next item
//! begins. Item failures either abort the batch or, when the host enables
//! continue-on-fail, become error rows while processing moves on.

use tracing::{error, info, warn};

use crate::api::TranscriptionApi;
use crate::error::{NodeError, Result};
use crate::host::{InputItem, NodeHost};
use crate::output::ItemOutput;
use crate::poller::poll_transcription;
use crate::uploader::upload_video;
use voxflow_client::TranscriptionClient;

/// The transcription node, bound to a service API
pub struct TranscribeNode<A> {
    api: A,
}

impl TranscribeNode<TranscriptionClient> {
    /// Builds a node from host-stored credentials
    ///
    /// Credentials are fetched and validated once here; every item in the
    /// batch shares the resulting client.
    pub fn from_host(host: &dyn NodeHost) -> Result<Self> {
        let credentials = host.credentials()?;
        credentials.validate()?;
        Ok(Self::new(TranscriptionClient::new(
            credentials.api_url,
            credentials.api_key,
        )))
    }
}

impl<A: TranscriptionApi> TranscribeNode<A> {
    /// Creates a node around an existing API handle
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Processes the host's batch, producing exactly one row per item
    pub async fn execute(&self, host: &dyn NodeHost) -> Result<Vec<ItemOutput>> {
        let items = host.items();
        info!(items = items.len(), "processing batch");

        let mut rows = Vec::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            match self.process_item(host, index, item).await {
                Ok(row) => rows.push(row),
                Err(e) if host.continue_on_fail() => {
                    warn!(item = index, error = %e, "item failed, continuing batch");
                    rows.push(ItemOutput::Error {
                        error: e.to_string(),
                    });
                }
                Err(e) => {
                    error!(item = index, error = %e, "item failed, aborting batch");
                    return Err(e);
                }
            }
        }

        Ok(rows)
    }

    /// Runs the upload-then-poll cycle for one item
    async fn process_item(
        &self,
        host: &dyn NodeHost,
        index: usize,
        item: &InputItem,
    ) -> Result<ItemOutput> {
        let params = host.parameters(index);
        params.validate()?;

        let payload = item
            .binary(&params.binary_property)
            .ok_or_else(|| NodeError::MissingBinaryProperty {
                property: params.binary_property.clone(),
            })?;

        let job = upload_video(&self.api, payload, &params).await?;
        let output = poll_transcription(&self.api, host, &job.job_id, &params).await?;

        Ok(ItemOutput::Transcript(output))
    }
}
