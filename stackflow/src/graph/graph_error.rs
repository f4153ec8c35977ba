//! Graph model error.
//!
//! Returned when a type token or a wire node cannot be turned into a typed [`Node`](super::Node).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    /// The type token is not one of the four known node types.
    #[error("unknown node type: {0}")]
    UnknownNodeType(String),

    /// The node's `data` does not match its type.
    #[error("invalid data for node {id}: {reason}")]
    InvalidNodeData { id: String, reason: String },

    /// No node with this id exists in the workflow.
    #[error("node not found: {0}")]
    NodeNotFound(String),
}
