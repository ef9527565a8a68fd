//! Static node descriptor
//!
//! Pure configuration data describing the node to a host integration
//! layer: identity, required credential fields (with the health-check
//! request hosts use to test them), and the user-facing parameter
//! declarations. Carries no behavior; hosts serialize it into whatever
//! registration format they need.

use serde::Serialize;

/// Everything a host needs to register and render the node
#[derive(Debug, Clone, Serialize)]
pub struct NodeDescriptor {
    pub name: &'static str,
    pub display_name: &'static str,
    pub group: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub credential: CredentialDescriptor,
    pub properties: Vec<ParameterDescriptor>,
}

/// Credential requirements and the request used to validate them
#[derive(Debug, Clone, Serialize)]
pub struct CredentialDescriptor {
    pub name: &'static str,
    pub display_name: &'static str,
    pub fields: Vec<CredentialField>,
    pub test_request: TestRequest,
}

/// One credential input field
#[derive(Debug, Clone, Serialize)]
pub struct CredentialField {
    pub name: &'static str,
    pub display_name: &'static str,
    pub secret: bool,
    pub default: Option<&'static str>,
    pub description: &'static str,
}

/// Lightweight request a host issues to verify stored credentials
#[derive(Debug, Clone, Serialize)]
pub struct TestRequest {
    pub method: &'static str,
    pub path: &'static str,
}

/// One user-facing node parameter
#[derive(Debug, Clone, Serialize)]
pub struct ParameterDescriptor {
    pub name: &'static str,
    pub display_name: &'static str,
    pub kind: ParameterKind,
    pub default: serde_json::Value,
    pub required: bool,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    String,
    Number,
}

/// Builds the descriptor for the transcription node
pub fn descriptor() -> NodeDescriptor {
    NodeDescriptor {
        name: "voxflow",
        display_name: "Voxflow",
        group: "transform",
        subtitle: "Transcribe Video",
        description: "Upload and transcribe videos using the Voxflow API",
        credential: CredentialDescriptor {
            name: "voxflowApi",
            display_name: "Voxflow API",
            fields: vec![
                CredentialField {
                    name: "apiKey",
                    display_name: "API Key",
                    secret: true,
                    default: None,
                    description: "Your Voxflow API key (starts with sk_live_)",
                },
                CredentialField {
                    name: "apiUrl",
                    display_name: "API Gateway URL",
                    secret: false,
                    default: Some("https://api.voxflow.dev"),
                    description: "Voxflow API Gateway URL",
                },
            ],
            test_request: TestRequest {
                method: "GET",
                path: "/health",
            },
        },
        properties: vec![
            ParameterDescriptor {
                name: "binaryProperty",
                display_name: "Binary Property",
                kind: ParameterKind::String,
                default: serde_json::json!("data"),
                required: true,
                description: "Name of the binary property containing the video file",
            },
            ParameterDescriptor {
                name: "fileName",
                display_name: "File Name",
                kind: ParameterKind::String,
                default: serde_json::json!(""),
                required: false,
                description: "Optional custom file name (auto-detected if not provided)",
            },
            ParameterDescriptor {
                name: "pollInterval",
                display_name: "Polling Interval (Seconds)",
                kind: ParameterKind::Number,
                default: serde_json::json!(5),
                required: false,
                description: "How often to check for transcription completion",
            },
            ParameterDescriptor {
                name: "timeout",
                display_name: "Timeout (Minutes)",
                kind: ParameterKind::Number,
                default: serde_json::json!(30),
                required: false,
                description: "Maximum time to wait for transcription to complete",
            },
        ],
    }
}
