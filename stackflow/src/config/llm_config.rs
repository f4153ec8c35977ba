//! LLM engine configuration: the record edited in the LLM node and persisted per node id.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful AI assistant. Use the provided context to answer questions accurately.";

pub const DEFAULT_TEMPERATURE: f32 = 0.75;

/// A model choice offered by the LLM node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LlmModel {
    pub value: &'static str,
    pub label: &'static str,
}

pub const AVAILABLE_MODELS: [LlmModel; 3] = [
    LlmModel {
        value: "gemini-1.5-flash",
        label: "Gemini 1.5 Flash (Fast)",
    },
    LlmModel {
        value: "gemini-1.5-pro",
        label: "Gemini 1.5 Pro (Better)",
    },
    LlmModel {
        value: "gemini-2.0-flash",
        label: "Gemini 2.0 Flash (Latest)",
    },
];

/// LLM node settings. Keys are camelCase on the wire; missing keys take defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LlmConfig {
    /// Model id, e.g. `gemini-1.5-flash`.
    pub model: String,
    pub api_key: String,
    /// System prompt prepended to every query.
    pub prompt: String,
    /// Sampling temperature in [0, 1].
    pub temperature: f32,
    pub web_search_enabled: bool,
    /// Key for the optional web search provider.
    pub serp_api_key: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_key: String::new(),
            prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            web_search_enabled: true,
            serp_api_key: String::new(),
        }
    }
}
