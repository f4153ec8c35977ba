//! LLM client abstraction used by the search endpoint.
//!
//! The backend renders one prompt per query (system prompt, user query, document context)
//! and hands it to an [`LlmClient`] together with the model and temperature of the active
//! LLM node configuration. Implementations: [`MockLlm`] (fixed reply) and `ChatOpenAI`
//! (any OpenAI-compatible chat API, feature `openai`).

mod mock;
#[cfg(feature = "openai")]
mod openai;

pub use mock::MockLlm;
#[cfg(feature = "openai")]
pub use openai::ChatOpenAI;

use async_trait::async_trait;
use thiserror::Error;

/// One completion call.
#[derive(Clone, Debug, PartialEq)]
pub struct LlmRequest {
    /// Model id; empty means the client's default model.
    pub model: String,
    pub prompt: String,
    pub temperature: f32,
}

impl LlmRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>, temperature: f32) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            temperature,
        }
    }
}

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("request build failed: {0}")]
    Request(String),

    #[error("LLM API error: {0}")]
    Api(String),

    #[error("LLM returned no choices")]
    EmptyResponse,
}

/// Text completion: prompt in, generated text out.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, request: &LlmRequest) -> Result<String, LlmError>;
}
