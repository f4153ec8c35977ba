//! Request and response bodies of the backend HTTP API.
//!
//! Shared by the client ([`HttpStackApi`](super::HttpStackApi)) and the server crate so both
//! sides agree on field names. Application-level outcome is the `status` string: `"success"`
//! means success, anything else (including absent) is a failure.

use serde::{Deserialize, Serialize};

use crate::config::LlmConfig;

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";
/// Status of a config lookup that fell back to defaults.
pub const STATUS_DEFAULT: &str = "default";

pub fn is_success(status: &str) -> bool {
    status == STATUS_SUCCESS
}

/// Error body: `{ "detail": "..." }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Plain `{ "message": "..." }` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response of `POST /api/validate-workflow`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub workflow_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<String>>,
}

impl ValidationResponse {
    pub fn is_success(&self) -> bool {
        is_success(&self.status)
    }
}

/// Body of `POST /api/search`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

/// Model and temperature the backend answered with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LlmSummary {
    pub model: String,
    pub temperature: f32,
}

/// Response of `POST /api/search`. Error responses carry only `detail`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub used_pdfs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm_config: Option<LlmSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl SearchResponse {
    pub fn is_success(&self) -> bool {
        is_success(&self.status)
    }
}

/// Response of `POST /api/upload-document`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl UploadResponse {
    pub fn is_success(&self) -> bool {
        is_success(&self.status)
    }
}

/// Body of `POST /api/llm-config`. Both fields are required by the server; they are
/// optional here so the server can report which one is missing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveLlmConfigRequest {
    #[serde(default)]
    pub node_id: Option<String>,
    #[serde(default)]
    pub config: Option<LlmConfig>,
}

impl SaveLlmConfigRequest {
    pub fn new(node_id: impl Into<String>, config: LlmConfig) -> Self {
        Self {
            node_id: Some(node_id.into()),
            config: Some(config),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveLlmConfigResponse {
    pub message: String,
    pub node_id: String,
    pub status: String,
}

/// Response of `GET /api/llm-config/{nodeId}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LlmConfigResponse {
    pub config: LlmConfig,
    #[serde(default)]
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub filename: String,
    pub text_length: usize,
}

/// Response of `GET /api/documents`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentsResponse {
    #[serde(default)]
    pub documents: Vec<DocumentSummary>,
}
