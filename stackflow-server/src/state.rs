//! Shared state for all routes.

use std::sync::Arc;

use async_openai::config::OpenAIConfig;
use stackflow::{ChatOpenAI, LlmClient};

use crate::config::ServerConfig;
use crate::documents::{DocumentStore, PdfTextExtractor, TextExtractor};
use crate::llm_configs::LlmConfigStore;

pub struct AppState {
    pub documents: DocumentStore,
    pub llm_configs: LlmConfigStore,
    /// `None` when no API key is configured; search then answers 500.
    pub llm: Option<Arc<dyn LlmClient>>,
    pub extractor: Arc<dyn TextExtractor>,
}

impl AppState {
    /// Empty stores, PDF extraction with lopdf.
    pub fn new(llm: Option<Arc<dyn LlmClient>>) -> Self {
        Self {
            documents: DocumentStore::new(),
            llm_configs: LlmConfigStore::new(),
            llm,
            extractor: Arc::new(PdfTextExtractor),
        }
    }

    /// State whose LLM talks to the configured OpenAI-compatible endpoint, if a key is set.
    pub fn from_config(config: &ServerConfig) -> Self {
        let llm = config.llm_api_key.as_ref().map(|key| {
            let openai_config = OpenAIConfig::new()
                .with_api_key(key.clone())
                .with_api_base(config.llm_api_base.trim_end_matches('/'));
            Arc::new(ChatOpenAI::with_config(openai_config, config.llm_model.clone()))
                as Arc<dyn LlmClient>
        });
        Self::new(llm)
    }

    pub fn with_extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.extractor = extractor;
        self
    }
}
