//! Video uploader
//!
//! Drives the three-step upload handshake: initiate (obtain job id and
//! signed target), transfer (push raw bytes), complete (notify the
//! service). The steps run strictly in order and a failure at any step
//! aborts the remaining ones; there is no retry.

use tracing::{debug, info};

use crate::api::TranscriptionApi;
use crate::config::NodeParameters;
use crate::error::{NodeError, Result};
use crate::host::BinaryPayload;
use voxflow_core::domain::job::UploadJob;

const DEFAULT_FILE_NAME: &str = "video.mp4";
const DEFAULT_CONTENT_TYPE: &str = "video/mp4";

/// Resolves the file name reported to the service
///
/// Precedence: parameter override (if non-empty), then the name embedded
/// in the payload, then `"video.mp4"`.
fn resolve_file_name(params: &NodeParameters, payload: &BinaryPayload) -> String {
    params
        .file_name_override()
        .or(payload.file_name.as_deref())
        .unwrap_or(DEFAULT_FILE_NAME)
        .to_string()
}

/// Resolves the content type, defaulting to `"video/mp4"`
fn resolve_content_type(payload: &BinaryPayload) -> String {
    payload
        .mime_type
        .clone()
        .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string())
}

/// Uploads one video payload and returns the resulting job handle
///
/// All three calls share the job id / upload URL pairing produced by the
/// initiate step.
pub async fn upload_video(
    api: &dyn TranscriptionApi,
    payload: &BinaryPayload,
    params: &NodeParameters,
) -> Result<UploadJob> {
    let file_name = resolve_file_name(params, payload);
    let content_type = resolve_content_type(payload);

    debug!(%file_name, %content_type, bytes = payload.data.len(), "initiating upload");

    let job = api
        .initiate_upload(&file_name, &content_type)
        .await
        .map_err(NodeError::upload_initiation)?;

    info!(job_id = %job.job_id, "upload initiated, transferring file");

    api.transfer_file(&job.upload_url, &content_type, payload.data.clone())
        .await
        .map_err(NodeError::upload_transfer)?;

    api.complete_upload(&job.job_id)
        .await
        .map_err(NodeError::upload_completion)?;

    info!(job_id = %job.job_id, "upload complete");

    Ok(job)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockTranscriptionApi;
    use mockall::Sequence;
    use voxflow_client::ClientError;

    fn payload() -> BinaryPayload {
        BinaryPayload::new(b"bytes".to_vec())
            .with_file_name("b.mp4")
            .with_mime_type("video/webm")
    }

    #[test]
    fn test_file_name_override_wins() {
        let params = NodeParameters {
            file_name: Some("a.mp4".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_file_name(&params, &payload()), "a.mp4");
    }

    #[test]
    fn test_empty_override_falls_back_to_embedded_name() {
        let params = NodeParameters {
            file_name: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(resolve_file_name(&params, &payload()), "b.mp4");
    }

    #[test]
    fn test_file_name_defaults_when_both_absent() {
        let params = NodeParameters::default();
        let payload = BinaryPayload::new(vec![]);
        assert_eq!(resolve_file_name(&params, &payload), "video.mp4");
    }

    #[test]
    fn test_content_type_defaults_to_mp4() {
        assert_eq!(resolve_content_type(&payload()), "video/webm");
        assert_eq!(
            resolve_content_type(&BinaryPayload::new(vec![])),
            "video/mp4"
        );
    }

    #[tokio::test]
    async fn test_upload_runs_all_three_steps_in_order() {
        let mut api = MockTranscriptionApi::new();
        let mut seq = Sequence::new();

        api.expect_initiate_upload()
            .withf(|name, ct| name == "b.mp4" && ct == "video/webm")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(UploadJob {
                    job_id: "job-1".to_string(),
                    upload_url: "https://storage.example/put/job-1".to_string(),
                })
            });
        api.expect_transfer_file()
            .withf(|url, ct, body| {
                url == "https://storage.example/put/job-1"
                    && ct == "video/webm"
                    && body == b"bytes"
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(()));
        api.expect_complete_upload()
            .withf(|job_id| job_id == "job-1")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let job = upload_video(&api, &payload(), &NodeParameters::default())
            .await
            .unwrap();
        assert_eq!(job.job_id, "job-1");
    }

    #[tokio::test]
    async fn test_initiate_rejection_skips_later_steps() {
        let mut api = MockTranscriptionApi::new();

        api.expect_initiate_upload()
            .times(1)
            .returning(|_, _| Err(ClientError::rejected(Some("quota exceeded".to_string()))));
        api.expect_transfer_file().never();
        api.expect_complete_upload().never();

        let err = upload_video(&api, &payload(), &NodeParameters::default())
            .await
            .unwrap_err();

        assert!(matches!(err, NodeError::UploadInitiation { .. }));
        assert_eq!(err.to_string(), "Failed to initiate upload: quota exceeded");
    }

    #[tokio::test]
    async fn test_complete_rejection_maps_to_completion_error() {
        let mut api = MockTranscriptionApi::new();

        api.expect_initiate_upload().returning(|_, _| {
            Ok(UploadJob {
                job_id: "job-1".to_string(),
                upload_url: "https://storage.example/put/job-1".to_string(),
            })
        });
        api.expect_transfer_file().returning(|_, _, _| Ok(()));
        api.expect_complete_upload()
            .returning(|_| Err(ClientError::rejected(None)));

        let err = upload_video(&api, &payload(), &NodeParameters::default())
            .await
            .unwrap_err();

        assert!(matches!(err, NodeError::UploadCompletion { .. }));
        assert_eq!(
            err.to_string(),
            "Failed to complete upload: Unknown error"
        );
    }
}
