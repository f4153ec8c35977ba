//! In-memory [`StackApi`] for tests and offline runs.
//!
//! Responses are configured up front with the `with_*` builders; LLM configurations are
//! kept in a map so save-then-load behaves like the real backend. Each endpoint counts its
//! calls so tests can assert that a request was (or was not) made.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::api::protocol::{
    DocumentSummary, SearchResponse, UploadResponse, ValidationResponse, STATUS_SUCCESS,
};
use crate::api::{ApiError, StackApi};
use crate::config::LlmConfig;
use crate::graph::Workflow;

#[derive(Default)]
struct MockState {
    validation: Option<Result<ValidationResponse, ApiError>>,
    search: Option<Result<SearchResponse, ApiError>>,
    upload: Option<Result<UploadResponse, ApiError>>,
    config_error: Option<ApiError>,
    configs: HashMap<String, LlmConfig>,
    documents: Vec<DocumentSummary>,
    validated: Vec<Workflow>,
    queries: Vec<String>,
    uploads: Vec<(String, usize)>,
    saves: usize,
    loads: usize,
}

/// Scripted backend. Unconfigured endpoints answer with a plain success.
#[derive(Default)]
pub struct MockStackApi {
    state: Mutex<MockState>,
}

impl MockStackApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn with_validation(self, response: ValidationResponse) -> Self {
        self.state().validation = Some(Ok(response));
        self
    }

    pub fn with_validation_error(self, error: ApiError) -> Self {
        self.state().validation = Some(Err(error));
        self
    }

    /// Search answers `{ status: "success", result }`.
    pub fn with_search_result(self, result: impl Into<String>) -> Self {
        let response = SearchResponse {
            status: STATUS_SUCCESS.to_string(),
            result: Some(result.into()),
            ..Default::default()
        };
        self.with_search_response(response)
    }

    pub fn with_search_response(self, response: SearchResponse) -> Self {
        self.state().search = Some(Ok(response));
        self
    }

    pub fn with_search_error(self, error: ApiError) -> Self {
        self.state().search = Some(Err(error));
        self
    }

    pub fn with_upload_response(self, response: UploadResponse) -> Self {
        self.state().upload = Some(Ok(response));
        self
    }

    pub fn with_upload_error(self, error: ApiError) -> Self {
        self.state().upload = Some(Err(error));
        self
    }

    /// Makes both config save and load fail with `error`.
    pub fn with_config_error(self, error: ApiError) -> Self {
        self.state().config_error = Some(error);
        self
    }

    pub fn with_stored_config(self, node_id: impl Into<String>, config: LlmConfig) -> Self {
        self.state().configs.insert(node_id.into(), config);
        self
    }

    pub fn with_documents(self, documents: Vec<DocumentSummary>) -> Self {
        self.state().documents = documents;
        self
    }

    pub fn validate_calls(&self) -> usize {
        self.state().validated.len()
    }

    /// Workflows received by `validate_workflow`, in call order.
    pub fn validated(&self) -> Vec<Workflow> {
        self.state().validated.clone()
    }

    pub fn search_calls(&self) -> usize {
        self.state().queries.len()
    }

    /// Queries received by `search`, in call order.
    pub fn queries(&self) -> Vec<String> {
        self.state().queries.clone()
    }

    pub fn upload_calls(&self) -> usize {
        self.state().uploads.len()
    }

    /// `(filename, byte length)` of every upload.
    pub fn uploads(&self) -> Vec<(String, usize)> {
        self.state().uploads.clone()
    }

    pub fn save_calls(&self) -> usize {
        self.state().saves
    }

    pub fn load_calls(&self) -> usize {
        self.state().loads
    }

    pub fn stored_config(&self, node_id: &str) -> Option<LlmConfig> {
        self.state().configs.get(node_id).cloned()
    }
}

#[async_trait]
impl StackApi for MockStackApi {
    async fn validate_workflow(
        &self,
        workflow: &Workflow,
    ) -> Result<ValidationResponse, ApiError> {
        let mut state = self.state();
        state.validated.push(workflow.clone());
        state.validation.clone().unwrap_or_else(|| {
            Ok(ValidationResponse {
                status: STATUS_SUCCESS.to_string(),
                ..Default::default()
            })
        })
    }

    async fn search(&self, query: &str) -> Result<SearchResponse, ApiError> {
        let mut state = self.state();
        state.queries.push(query.to_string());
        state.search.clone().unwrap_or_else(|| {
            Ok(SearchResponse {
                status: STATUS_SUCCESS.to_string(),
                result: Some(String::new()),
                ..Default::default()
            })
        })
    }

    async fn upload_document(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse, ApiError> {
        let mut state = self.state();
        state.uploads.push((filename.to_string(), bytes.len()));
        state.upload.clone().unwrap_or_else(|| {
            Ok(UploadResponse {
                status: STATUS_SUCCESS.to_string(),
                filename: Some(filename.to_string()),
                ..Default::default()
            })
        })
    }

    async fn save_llm_config(&self, node_id: &str, config: &LlmConfig) -> Result<(), ApiError> {
        let mut state = self.state();
        state.saves += 1;
        if let Some(err) = state.config_error.clone() {
            return Err(err);
        }
        state.configs.insert(node_id.to_string(), config.clone());
        Ok(())
    }

    async fn load_llm_config(&self, node_id: &str) -> Result<Option<LlmConfig>, ApiError> {
        let mut state = self.state();
        state.loads += 1;
        if let Some(err) = state.config_error.clone() {
            return Err(err);
        }
        Ok(state.configs.get(node_id).cloned())
    }

    async fn list_documents(&self) -> Result<Vec<DocumentSummary>, ApiError> {
        Ok(self.state().documents.clone())
    }

    async fn delete_document(&self, filename: &str) -> Result<(), ApiError> {
        let mut state = self.state();
        let before = state.documents.len();
        state.documents.retain(|d| d.filename != filename);
        if state.documents.len() == before {
            return Err(ApiError::Status {
                status: 404,
                detail: "Document not found".to_string(),
            });
        }
        Ok(())
    }
}
