//! Backend API: the [`StackApi`] trait and its HTTP and mock implementations.
//!
//! Every front-end action that talks to the backend (build, chat, upload, LLM config
//! save/load) goes through `StackApi`, so actions can be exercised against [`MockStackApi`]
//! and run for real against [`HttpStackApi`].

mod error;
mod http;
mod mock;
mod protocol;

use async_trait::async_trait;

use crate::config::LlmConfig;
use crate::graph::Workflow;

pub use error::ApiError;
pub use http::HttpStackApi;
pub use mock::MockStackApi;
pub use protocol::{
    is_success, DocumentSummary, DocumentsResponse, ErrorBody, LlmConfigResponse, LlmSummary,
    MessageResponse, SaveLlmConfigRequest, SaveLlmConfigResponse, SearchRequest,
    SearchResponse, UploadResponse, ValidationResponse, STATUS_DEFAULT, STATUS_ERROR,
    STATUS_SUCCESS,
};

/// Calls the front end makes against the backend.
///
/// `validate_workflow`, `search` and `upload_document` return the decoded body whatever the
/// HTTP status, leaving the `status` field to decide success. `save_llm_config` and
/// `load_llm_config` decide on the HTTP status alone.
#[async_trait]
pub trait StackApi: Send + Sync {
    /// `POST /api/validate-workflow` with the workflow as-is.
    async fn validate_workflow(&self, workflow: &Workflow)
        -> Result<ValidationResponse, ApiError>;

    /// `POST /api/search` with `{ query }`.
    async fn search(&self, query: &str) -> Result<SearchResponse, ApiError>;

    /// `POST /api/upload-document`, multipart field `file`.
    async fn upload_document(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse, ApiError>;

    /// `POST /api/llm-config`. `Ok` only on a 2xx response.
    async fn save_llm_config(&self, node_id: &str, config: &LlmConfig) -> Result<(), ApiError>;

    /// `GET /api/llm-config/{nodeId}`. `Ok(None)` on a non-2xx response.
    async fn load_llm_config(&self, node_id: &str) -> Result<Option<LlmConfig>, ApiError>;

    /// `GET /api/documents`.
    async fn list_documents(&self) -> Result<Vec<DocumentSummary>, ApiError>;

    /// `DELETE /api/documents/{filename}`.
    async fn delete_document(&self, filename: &str) -> Result<(), ApiError>;
}
