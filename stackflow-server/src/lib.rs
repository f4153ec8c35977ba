//! HTTP backend for stackflow.
//!
//! Routes:
//! - `GET /` liveness message.
//! - `POST /api/validate-workflow` workflow rules, outcome in `status`.
//! - `POST /api/upload-document` multipart `file`, PDF text kept in memory.
//! - `GET /api/documents`, `DELETE /api/documents/:filename`.
//! - `POST /api/llm-config`, `GET /api/llm-config/:node_id`.
//! - `POST /api/search` prompt built from the first saved LLM config and all documents.
//!
//! All state lives in [`AppState`]; nothing is persisted across restarts.

pub mod config;
pub mod documents;
pub mod error;
pub mod llm_configs;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info_span;

pub use config::ServerConfig;
pub use documents::{DocumentStore, ExtractError, PdfTextExtractor, TextExtractor};
pub use error::ServerError;
pub use llm_configs::LlmConfigStore;
pub use state::AppState;

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %o, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// The full router with tracing, CORS and the upload size limit applied.
pub fn app(state: Arc<AppState>, config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route("/api/validate-workflow", post(routes::validate_workflow))
        .route("/api/upload-document", post(routes::upload_document))
        .route("/api/documents", get(routes::list_documents))
        .route("/api/documents/:filename", delete(routes::delete_document))
        .route("/api/llm-config", post(routes::save_llm_config))
        .route("/api/llm-config/:node_id", get(routes::get_llm_config))
        .route("/api/search", post(routes::search))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(
            TraceLayer::new_for_http().make_span_with(
                |req: &axum::http::Request<axum::body::Body>| {
                    info_span!("request", method = %req.method(), uri = %req.uri())
                },
            ),
        )
        .layer(cors_layer(&config.cors_origins))
        .with_state(state)
}
