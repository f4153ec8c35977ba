//! Saved LLM node configurations keyed by node id.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use stackflow::LlmConfig;

#[derive(Debug, Default)]
pub struct LlmConfigStore {
    configs: DashMap<String, (u64, LlmConfig)>,
    next_seq: AtomicU64,
}

impl LlmConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves `config` for `node_id`. A node keeps its place in save order when overwritten.
    pub fn save(&self, node_id: &str, config: LlmConfig) {
        let mut entry = self
            .configs
            .entry(node_id.to_string())
            .or_insert_with(|| (self.next_seq.fetch_add(1, Ordering::Relaxed), LlmConfig::default()));
        entry.1 = config;
    }

    pub fn get(&self, node_id: &str) -> Option<LlmConfig> {
        self.configs.get(node_id).map(|e| e.1.clone())
    }

    /// The configuration saved first, which drives search.
    pub fn active(&self) -> Option<LlmConfig> {
        self.configs
            .iter()
            .min_by_key(|e| e.value().0)
            .map(|e| e.value().1.clone())
    }
}
