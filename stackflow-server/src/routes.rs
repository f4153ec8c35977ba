//! Route handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, Path, State};
use axum::Json;
use serde_json::Value;
use stackflow::api::{
    DocumentsResponse, LlmConfigResponse, LlmSummary, MessageResponse, SaveLlmConfigRequest,
    SaveLlmConfigResponse, SearchRequest, SearchResponse, UploadResponse, ValidationResponse,
    STATUS_DEFAULT, STATUS_SUCCESS,
};
use stackflow::{unreadable_workflow, validate_json, LlmConfig, LlmRequest};

use crate::documents::StoredDocument;
use crate::error::ServerError;
use crate::state::AppState;

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "AI Workflow API is running!".to_string(),
    })
}

/// Client-side body problems (not JSON, wrong content type, wrong shape) as a 400 `{ detail }`.
fn bad_body(rejection: JsonRejection) -> ServerError {
    ServerError::BadRequest(rejection.body_text())
}

/// Always answers 200; the outcome is in `status`, including for a body that is not JSON.
pub async fn validate_workflow(
    body: Result<Json<Value>, JsonRejection>,
) -> Json<ValidationResponse> {
    let response = match body {
        Ok(Json(body)) => validate_json(body),
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "workflow body rejected");
            unreadable_workflow(&rejection.body_text())
        }
    };
    tracing::debug!(status = %response.status, message = %response.message, "workflow validated");
    Json(response)
}

pub async fn upload_document(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ServerError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::BadRequest(format!("Invalid multipart data: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ServerError::BadRequest(format!("Invalid multipart data: {}", e)))?;
        upload = Some((filename, bytes));
        break;
    }
    let (filename, bytes) =
        upload.ok_or_else(|| ServerError::BadRequest("Missing file".to_string()))?;

    if !filename.ends_with(".pdf") {
        return Err(ServerError::BadRequest("Only PDF files supported".to_string()));
    }

    let extractor = Arc::clone(&state.extractor);
    let text = tokio::task::spawn_blocking(move || extractor.extract(&bytes))
        .await
        .map_err(|e| ServerError::Internal(format!("PDF processing failed: {}", e)))?
        .map_err(|e| ServerError::Internal(format!("PDF processing failed: {}", e)))?;
    if text.trim().is_empty() {
        return Err(ServerError::BadRequest(
            "Could not extract text from PDF".to_string(),
        ));
    }

    let text_length = state.documents.insert(&filename, text);
    tracing::info!(filename = %filename, text_length, "document stored");
    Ok(Json(UploadResponse {
        status: STATUS_SUCCESS.to_string(),
        message: Some("PDF uploaded successfully!".to_string()),
        filename: Some(filename),
        text_length: Some(text_length),
        detail: None,
    }))
}

/// `config` absent, `null` or `{}` counts as missing.
fn has_config(body: &Value) -> bool {
    match body.get("config") {
        None | Some(Value::Null) => false,
        Some(Value::Object(fields)) => !fields.is_empty(),
        Some(_) => true,
    }
}

pub async fn save_llm_config(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SaveLlmConfigResponse>, ServerError> {
    let Json(body) = body.map_err(bad_body)?;
    let config_given = has_config(&body);
    let req: SaveLlmConfigRequest =
        serde_json::from_value(body).map_err(|e| ServerError::BadRequest(e.to_string()))?;
    let (node_id, config) = match (req.node_id.filter(|id| !id.is_empty()), req.config) {
        (Some(node_id), Some(config)) if config_given => (node_id, config),
        _ => return Err(ServerError::BadRequest("Missing nodeId or config".to_string())),
    };
    tracing::debug!(node_id = %node_id, model = %config.model, "llm config saved");
    state.llm_configs.save(&node_id, config);
    Ok(Json(SaveLlmConfigResponse {
        message: "LLM configuration saved".to_string(),
        node_id,
        status: STATUS_SUCCESS.to_string(),
    }))
}

pub async fn get_llm_config(
    State(state): State<Arc<AppState>>,
    Path(node_id): Path<String>,
) -> Json<LlmConfigResponse> {
    let response = match state.llm_configs.get(&node_id) {
        Some(config) => LlmConfigResponse {
            config,
            status: STATUS_SUCCESS.to_string(),
        },
        None => LlmConfigResponse {
            config: LlmConfig::default(),
            status: STATUS_DEFAULT.to_string(),
        },
    };
    Json(response)
}

/// Prompt sent to the LLM: system prompt, the query, then an excerpt of every document.
pub fn search_prompt(system_prompt: &str, query: &str, documents: &[StoredDocument]) -> String {
    let mut context = String::new();
    if !documents.is_empty() {
        context.push_str("\n\nAvailable PDF Content:\n");
        for doc in documents {
            context.push_str(&format!("\nFrom {}:\n{}...\n", doc.filename, doc.excerpt()));
        }
    }
    format!(
        "System: {}\n\nUser Query: {}\n{}\nPlease provide a helpful response based on the context above.",
        system_prompt, query, context
    )
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ServerError> {
    let Json(req) = body.map_err(bad_body)?;
    let llm = state
        .llm
        .as_ref()
        .ok_or_else(|| ServerError::Internal("LLM API key not configured".to_string()))?;

    let config = state.llm_configs.active().unwrap_or_default();
    let documents = state.documents.documents();
    let request = LlmRequest::new(
        config.model.clone(),
        search_prompt(&config.prompt, &req.query, &documents),
        config.temperature,
    );
    tracing::debug!(
        model = %config.model,
        temperature = config.temperature,
        documents = documents.len(),
        "search"
    );
    let result = llm
        .generate(&request)
        .await
        .map_err(|e| ServerError::Internal(format!("Search failed: {}", e)))?;

    Ok(Json(SearchResponse {
        status: STATUS_SUCCESS.to_string(),
        query: Some(req.query),
        result: Some(result),
        used_pdfs: documents.into_iter().map(|d| d.filename).collect(),
        llm_config: Some(LlmSummary {
            model: config.model,
            temperature: config.temperature,
        }),
        detail: None,
    }))
}

pub async fn list_documents(State(state): State<Arc<AppState>>) -> Json<DocumentsResponse> {
    Json(DocumentsResponse {
        documents: state.documents.summaries(),
    })
}

pub async fn delete_document(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Json<MessageResponse>, ServerError> {
    if !state.documents.remove(&filename) {
        return Err(ServerError::NotFound("Document not found".to_string()));
    }
    tracing::info!(filename = %filename, "document deleted");
    Ok(Json(MessageResponse {
        message: format!("Deleted {}", filename),
    }))
}
