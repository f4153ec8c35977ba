//! User-query form and output view.

use crate::graph::{GraphError, Node, NodeKind, NodeType, Workflow, OUTPUT_PLACEHOLDER};

/// Text typed into a user-query node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserQueryForm {
    node_id: String,
    query: String,
}

impl UserQueryForm {
    pub fn new(node_id: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            query: String::new(),
        }
    }

    pub fn for_node(node: &Node) -> Option<Self> {
        match &node.kind {
            NodeKind::UserQuery(data) => Some(Self {
                node_id: node.id.clone(),
                query: data.query.clone(),
            }),
            _ => None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn apply(&self, workflow: &mut Workflow) -> Result<(), GraphError> {
        if let NodeKind::UserQuery(data) =
            super::node_kind_mut(workflow, &self.node_id, NodeType::UserQuery)?
        {
            data.query = self.query.clone();
        }
        Ok(())
    }
}

/// Read-only view of an output node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputView {
    result: Option<String>,
}

impl OutputView {
    pub fn for_node(node: &Node) -> Option<Self> {
        match &node.kind {
            NodeKind::Output(data) => Some(Self {
                result: data.result.clone(),
            }),
            _ => None,
        }
    }

    /// The result, or the placeholder when there is none yet.
    pub fn text(&self) -> &str {
        self.result
            .as_deref()
            .filter(|r| !r.is_empty())
            .unwrap_or(OUTPUT_PLACEHOLDER)
    }
}
