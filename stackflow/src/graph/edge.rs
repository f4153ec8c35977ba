//! Edges and the handles they attach to.

use serde::{Deserialize, Serialize};

/// Whether a handle emits (source) or receives (target) connections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleKind {
    Source,
    Target,
}

/// A labelled connection point on a node. `id` is `None` for a node's default handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Handle {
    pub kind: HandleKind,
    pub id: Option<&'static str>,
}

impl Handle {
    pub const fn new(kind: HandleKind, id: Option<&'static str>) -> Self {
        Self { kind, id }
    }
}

/// A connection request produced by dragging from one handle to another.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Connection {
    pub source: String,
    pub source_handle: Option<String>,
    pub target: String,
    pub target_handle: Option<String>,
}

impl Connection {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            ..Default::default()
        }
    }

    pub fn with_source_handle(mut self, handle: impl Into<String>) -> Self {
        self.source_handle = Some(handle.into());
        self
    }

    pub fn with_target_handle(mut self, handle: impl Into<String>) -> Self {
        self.target_handle = Some(handle.into());
        self
    }

    /// Edge id in the graph-UI library's format:
    /// `reactflow__edge-{source}{sourceHandle}-{target}{targetHandle}`.
    pub fn edge_id(&self) -> String {
        format!(
            "reactflow__edge-{}{}-{}{}",
            self.source,
            self.source_handle.as_deref().unwrap_or(""),
            self.target,
            self.target_handle.as_deref().unwrap_or("")
        )
    }
}

/// A directed connection between two node ports.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,
}

impl Edge {
    /// True when this edge joins the same ports as `conn`.
    pub fn joins(&self, conn: &Connection) -> bool {
        self.source == conn.source
            && self.target == conn.target
            && self.source_handle == conn.source_handle
            && self.target_handle == conn.target_handle
    }
}

impl From<Connection> for Edge {
    fn from(conn: Connection) -> Self {
        Edge {
            id: conn.edge_id(),
            source: conn.source,
            source_handle: conn.source_handle,
            target: conn.target,
            target_handle: conn.target_handle,
        }
    }
}
