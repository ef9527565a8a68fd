//! Upload handshake DTOs

use serde::{Deserialize, Serialize};

/// Body for `POST /api/upload/initiate`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiateUploadRequest {
    pub file_name: String,
    pub content_type: String,
    /// Upload origin marker, always `"computer"` for this node
    pub source: String,
}

impl InitiateUploadRequest {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            source: "computer".to_string(),
        }
    }
}

/// Response from `POST /api/upload/initiate`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiateUploadResponse {
    pub success: bool,
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub upload_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body for `POST /api/upload/complete`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteUploadRequest {
    pub job_id: String,
}

/// Minimal acknowledgement body (`complete` and similar calls)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initiate_request_wire_shape() {
        let req = InitiateUploadRequest::new("clip.mp4", "video/mp4");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "fileName": "clip.mp4",
                "contentType": "video/mp4",
                "source": "computer"
            })
        );
    }

    #[test]
    fn test_initiate_response_accepts_failure_without_ids() {
        let resp: InitiateUploadResponse =
            serde_json::from_str(r#"{"success":false,"error":"quota exceeded"}"#).unwrap();
        assert!(!resp.success);
        assert!(resp.job_id.is_none());
        assert_eq!(resp.error.as_deref(), Some("quota exceeded"));
    }

    #[test]
    fn test_complete_request_uses_camel_case_job_id() {
        let req = CompleteUploadRequest {
            job_id: "job-42".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"jobId": "job-42"})
        );
    }
}
