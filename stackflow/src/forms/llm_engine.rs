//! LLM engine form: model, keys, system prompt, temperature and web search settings,
//! persisted remotely per node id.

use std::time::Duration;

use tokio::time::Instant;

use crate::api::StackApi;
use crate::config::LlmConfig;
use crate::graph::{GraphError, Node, NodeKind, NodeType, Workflow};

/// How long the "saved" indicator stays on after a successful save.
pub const SAVED_INDICATOR: Duration = Duration::from_secs(2);

/// One field edit.
#[derive(Clone, Debug, PartialEq)]
pub enum LlmField {
    Model(String),
    ApiKey(String),
    Prompt(String),
    /// Clamped to [0, 1] when applied.
    Temperature(f32),
    WebSearchEnabled(bool),
    SerpApiKey(String),
}

#[derive(Clone, Debug)]
pub struct LlmEngineForm {
    node_id: String,
    config: LlmConfig,
    saving: bool,
    saved_at: Option<Instant>,
    loaded: bool,
}

impl LlmEngineForm {
    /// Form with default settings.
    pub fn new(node_id: impl Into<String>) -> Self {
        Self::with_config(node_id, LlmConfig::default())
    }

    pub fn with_config(node_id: impl Into<String>, config: LlmConfig) -> Self {
        Self {
            node_id: node_id.into(),
            config,
            saving: false,
            saved_at: None,
            loaded: false,
        }
    }

    /// Form over the settings held by an `llmEngine` node; `None` for other node types.
    pub fn for_node(node: &Node) -> Option<Self> {
        match &node.kind {
            NodeKind::LlmEngine(data) => Some(Self::with_config(&node.id, data.config.clone())),
            _ => None,
        }
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    /// Applies one edit. Any edit turns the saved indicator off.
    pub fn edit(&mut self, field: LlmField) {
        match field {
            LlmField::Model(v) => self.config.model = v,
            LlmField::ApiKey(v) => self.config.api_key = v,
            LlmField::Prompt(v) => self.config.prompt = v,
            LlmField::Temperature(t) => {
                if !t.is_nan() {
                    self.config.temperature = t.clamp(0.0, 1.0);
                }
            }
            LlmField::WebSearchEnabled(v) => self.config.web_search_enabled = v,
            LlmField::SerpApiKey(v) => self.config.serp_api_key = v,
        }
        self.saved_at = None;
    }

    /// The web search key field is only offered while web search is on.
    pub fn serp_key_visible(&self) -> bool {
        self.config.web_search_enabled
    }

    pub fn saving(&self) -> bool {
        self.saving
    }

    /// Saved indicator: on for [`SAVED_INDICATOR`] after a successful save.
    pub fn is_saved(&self) -> bool {
        self.saved_at
            .map(|at| at.elapsed() < SAVED_INDICATOR)
            .unwrap_or(false)
    }

    /// Posts the current settings. Returns whether the backend accepted them; a failure is
    /// only logged.
    pub async fn save(&mut self, api: &dyn StackApi) -> bool {
        self.saving = true;
        let saved = match api.save_llm_config(&self.node_id, &self.config).await {
            Ok(()) => {
                tracing::debug!(node_id = %self.node_id, "llm config saved");
                self.saved_at = Some(Instant::now());
                true
            }
            Err(e) => {
                tracing::warn!(node_id = %self.node_id, error = %e, "failed to save llm config");
                false
            }
        };
        self.saving = false;
        saved
    }

    /// Fetches the stored settings the first time it is called and replaces the local ones
    /// wholesale. Later calls do nothing. Failures are logged and the current settings stay.
    pub async fn load(&mut self, api: &dyn StackApi) -> bool {
        if self.loaded {
            return false;
        }
        self.loaded = true;
        match api.load_llm_config(&self.node_id).await {
            Ok(Some(config)) => {
                self.config = config;
                true
            }
            Ok(None) => {
                tracing::debug!(node_id = %self.node_id, "no stored llm config");
                false
            }
            Err(e) => {
                tracing::warn!(node_id = %self.node_id, error = %e, "failed to load llm config");
                false
            }
        }
    }

    /// Writes the settings back into the node of the same id.
    pub fn apply(&self, workflow: &mut Workflow) -> Result<(), GraphError> {
        if let NodeKind::LlmEngine(data) =
            super::node_kind_mut(workflow, &self.node_id, NodeType::LlmEngine)?
        {
            data.config = self.config.clone();
        }
        Ok(())
    }
}
