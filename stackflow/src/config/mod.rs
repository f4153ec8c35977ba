//! Configuration records: the LLM node settings and the client's backend address.

mod client_config;
mod llm_config;

pub use client_config::{ClientConfig, Error, DEFAULT_API_URL};
pub use llm_config::{
    LlmConfig, LlmModel, AVAILABLE_MODELS, DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT,
    DEFAULT_TEMPERATURE,
};
