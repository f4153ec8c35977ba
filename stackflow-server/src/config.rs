//! Server configuration from environment variables.

use stackflow::config::DEFAULT_MODEL;

pub type Error = Box<dyn std::error::Error + Send + Sync>;

pub const DEFAULT_LISTEN: &str = "0.0.0.0:8000";

/// Gemini's OpenAI-compatible endpoint.
pub const DEFAULT_LLM_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

pub const DEFAULT_MAX_UPLOAD_MB: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind, e.g. `0.0.0.0:8000`.
    pub listen: String,
    /// LLM API key. `None` disables search.
    pub llm_api_key: Option<String>,
    pub llm_api_base: String,
    /// Model used when the active LLM configuration does not name one.
    pub llm_model: String,
    /// Allowed CORS origins; empty means any origin.
    pub cors_origins: Vec<String>,
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN.to_string(),
            llm_api_key: None,
            llm_api_base: DEFAULT_LLM_API_BASE.to_string(),
            llm_model: DEFAULT_MODEL.to_string(),
            cors_origins: Vec::new(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ServerConfig {
    /// Reads `LISTEN`, `GEMINI_API_KEY` (or `LLM_API_KEY`), `LLM_API_BASE`, `LLM_MODEL`,
    /// `CORS_ORIGINS` (comma-separated) and `MAX_UPLOAD_MB`.
    pub fn from_env() -> Result<Self, Error> {
        let defaults = Self::default();
        let max_upload_bytes = match non_empty_var("MAX_UPLOAD_MB") {
            Some(raw) => {
                raw.parse::<usize>()
                    .ok()
                    .and_then(|mb| mb.checked_mul(1024 * 1024))
                    .ok_or_else(|| {
                        format!("MAX_UPLOAD_MB must be a whole number of megabytes, got {:?}", raw)
                    })?
            }
            None => defaults.max_upload_bytes,
        };
        Ok(Self {
            listen: non_empty_var("LISTEN").unwrap_or(defaults.listen),
            llm_api_key: non_empty_var("GEMINI_API_KEY").or_else(|| non_empty_var("LLM_API_KEY")),
            llm_api_base: non_empty_var("LLM_API_BASE")
                .map(|b| b.trim_end_matches('/').to_string())
                .unwrap_or(defaults.llm_api_base),
            llm_model: non_empty_var("LLM_MODEL").unwrap_or(defaults.llm_model),
            cors_origins: non_empty_var("CORS_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            max_upload_bytes,
        })
    }
}
