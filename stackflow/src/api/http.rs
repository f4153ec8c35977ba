//! reqwest implementation of [`StackApi`].

use async_trait::async_trait;
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;

use crate::api::protocol::{
    DocumentSummary, DocumentsResponse, ErrorBody, LlmConfigResponse, SaveLlmConfigRequest,
    SearchRequest, SearchResponse, UploadResponse, ValidationResponse,
};
use crate::api::{ApiError, StackApi};
use crate::config::{ClientConfig, LlmConfig};
use crate::graph::Workflow;

/// Backend client over HTTP. The base URL comes from [`ClientConfig`]; nothing is hardcoded.
#[derive(Clone, Debug)]
pub struct HttpStackApi {
    config: ClientConfig,
    http: reqwest::Client,
}

impl HttpStackApi {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// URL of `path` with one extra, percent-encoded path segment (node id, filename).
    fn url_with_segment(&self, path: &str, segment: &str) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.config.url(path))
            .map_err(|e| ApiError::Transport(format!("invalid API URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Transport("API URL cannot carry a path".to_string()))?
            .push(segment);
        Ok(url)
    }

    /// Decodes the body as JSON regardless of the HTTP status.
    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Turns a non-2xx response into [`ApiError::Status`], preferring the `detail` field.
    async fn status_error(response: Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.detail)
            .ok()
            .filter(|d| !d.is_empty())
            .or_else(|| (!body.trim().is_empty()).then(|| body.trim().to_string()))
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
        ApiError::Status {
            status: status.as_u16(),
            detail,
        }
    }
}

#[async_trait]
impl StackApi for HttpStackApi {
    async fn validate_workflow(
        &self,
        workflow: &Workflow,
    ) -> Result<ValidationResponse, ApiError> {
        tracing::debug!(
            nodes = workflow.nodes.len(),
            edges = workflow.edges.len(),
            "validate workflow"
        );
        let response = self
            .http
            .post(self.config.url("/api/validate-workflow"))
            .json(workflow)
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn search(&self, query: &str) -> Result<SearchResponse, ApiError> {
        tracing::debug!(query_len = query.len(), "search");
        let response = self
            .http
            .post(self.config.url("/api/search"))
            .json(&SearchRequest {
                query: query.to_string(),
            })
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn upload_document(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse, ApiError> {
        tracing::debug!(filename, size = bytes.len(), "upload document");
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str("application/pdf")?;
        let form = reqwest::multipart::Form::new().part("file", part);
        let response = self
            .http
            .post(self.config.url("/api/upload-document"))
            .multipart(form)
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn save_llm_config(&self, node_id: &str, config: &LlmConfig) -> Result<(), ApiError> {
        tracing::debug!(node_id, "save llm config");
        let response = self
            .http
            .post(self.config.url("/api/llm-config"))
            .json(&SaveLlmConfigRequest::new(node_id, config.clone()))
            .send()
            .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::status_error(response).await)
        }
    }

    async fn load_llm_config(&self, node_id: &str) -> Result<Option<LlmConfig>, ApiError> {
        tracing::debug!(node_id, "load llm config");
        let url = self.url_with_segment("/api/llm-config", node_id)?;
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Ok(None);
        }
        let body: LlmConfigResponse = Self::read_json(response).await?;
        Ok(Some(body.config))
    }

    async fn list_documents(&self) -> Result<Vec<DocumentSummary>, ApiError> {
        let response = self
            .http
            .get(self.config.url("/api/documents"))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }
        let body: DocumentsResponse = Self::read_json(response).await?;
        Ok(body.documents)
    }

    async fn delete_document(&self, filename: &str) -> Result<(), ApiError> {
        tracing::debug!(filename, "delete document");
        let url = self.url_with_segment("/api/documents", filename)?;
        let response = self.http.delete(url).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::status_error(response).await)
        }
    }
}
