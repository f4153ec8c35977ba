//! # stackflow
//!
//! Visual builder for AI pipeline "stacks": a user drags components onto a canvas, wires
//! them together, validates the graph on a backend and chats with the resulting assistant.
//! This crate holds everything the front end needs apart from rendering.
//!
//! ## Main Modules
//!
//! - [`graph`]: `Workflow`, typed `Node`/`NodeKind`, `Edge`, palette and drop events.
//! - [`forms`]: per-node configuration state (LLM engine, knowledge base, query, output).
//! - [`chat`]: `ChatSession`, one outstanding request at a time.
//! - [`stack`]: the "Build Stack" action and its result text.
//! - [`api`]: `StackApi` trait with `HttpStackApi` (reqwest) and `MockStackApi`.
//! - [`validation`]: workflow rules applied by the backend.
//! - [`llm`]: `LlmClient` trait, `MockLlm`, and `ChatOpenAI` (feature `openai`).
//! - [`config`]: `LlmConfig` record and `ClientConfig` (backend URL from env).
//!
//! ## Features
//!
//! - `openai` (default): OpenAI-compatible chat completions via `async-openai`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use stackflow::{build_stack, ChatSession, ClientConfig, HttpStackApi, Workflow};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let api = Arc::new(HttpStackApi::new(ClientConfig::from_env()?)?);
//! let outcome = build_stack(api.as_ref(), &Workflow::starter()).await;
//! println!("{}", outcome.text);
//!
//! let chat = ChatSession::new(api);
//! chat.submit("What is in my report?").await;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod chat;
pub mod config;
pub mod forms;
pub mod graph;
pub mod llm;
pub mod stack;
pub mod validation;

pub use api::{ApiError, HttpStackApi, MockStackApi, StackApi};
pub use chat::{ChatMessage, ChatSession, Sender, SubmitOutcome};
pub use config::{ClientConfig, LlmConfig, AVAILABLE_MODELS};
pub use forms::{KnowledgeBaseForm, LlmEngineForm, LlmField, OutputView, UserQueryForm};
pub use graph::{
    CanvasTransform, Connection, DropEvent, Edge, GraphError, Node, NodeKind, NodeType,
    Position, ScreenPoint, Viewport, Workflow, PALETTE,
};
#[cfg(feature = "openai")]
pub use llm::ChatOpenAI;
pub use llm::{LlmClient, LlmError, LlmRequest, MockLlm};
pub use stack::{build_stack, BuildOutcome};
pub use validation::{unreadable_workflow, validate_json, validate_workflow};
