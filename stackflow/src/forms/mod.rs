//! Per-node configuration forms.
//!
//! A form is the local, editable state behind one node on the canvas. Forms that talk to the
//! backend take the [`StackApi`](crate::api::StackApi) per call; edits stay local until
//! written back into the [`Workflow`] with `apply`.

mod knowledge_base;
mod llm_engine;
mod query_output;

pub use knowledge_base::{KnowledgeBaseForm, PDF_ONLY, UPLOADED, UPLOADING};
pub use llm_engine::{LlmEngineForm, LlmField, SAVED_INDICATOR};
pub use query_output::{OutputView, UserQueryForm};

use crate::graph::{GraphError, NodeKind, NodeType, Workflow};

/// Node `id` of `workflow`, which must be of type `expected`.
fn node_kind_mut<'a>(
    workflow: &'a mut Workflow,
    id: &str,
    expected: NodeType,
) -> Result<&'a mut NodeKind, GraphError> {
    let node = workflow
        .node_mut(id)
        .ok_or_else(|| GraphError::NodeNotFound(id.to_string()))?;
    if node.node_type() != expected {
        return Err(GraphError::InvalidNodeData {
            id: id.to_string(),
            reason: format!("expected a {} node, found {}", expected, node.node_type()),
        });
    }
    Ok(&mut node.kind)
}
