//! Workflow nodes: type token, per-type data and canvas position.
//!
//! The node-type → component mapping of the canvas is the [`NodeKind`] enum: every variant
//! carries its own data record, so a `llmEngine` node cannot hold knowledge-base data.
//! On the wire a node is the graph-UI library's JSON (`id`, `type`, `position`, `data`);
//! conversion goes through [`WireNode`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::LlmConfig;
use crate::graph::edge::{Handle, HandleKind};
use crate::graph::graph_error::GraphError;

/// Placeholder shown by an output node before any result exists.
pub const OUTPUT_PLACEHOLDER: &str = "Output will be generated based on your query...";

/// Embedding model offered by the knowledge-base node.
pub const DEFAULT_EMBEDDING_MODEL: &str = "Built-in AI Processing";

/// The closed set of node types the canvas knows how to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeType {
    UserQuery,
    KnowledgeBase,
    LlmEngine,
    Output,
}

impl NodeType {
    pub const ALL: [NodeType; 4] = [
        NodeType::UserQuery,
        NodeType::KnowledgeBase,
        NodeType::LlmEngine,
        NodeType::Output,
    ];

    /// Wire token, e.g. `"llmEngine"`.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeType::UserQuery => "userQuery",
            NodeType::KnowledgeBase => "knowledgeBase",
            NodeType::LlmEngine => "llmEngine",
            NodeType::Output => "output",
        }
    }

    /// Connection points exposed by nodes of this type.
    pub fn handles(self) -> &'static [Handle] {
        const USER_QUERY: &[Handle] = &[Handle::new(HandleKind::Source, None)];
        const KNOWLEDGE_BASE: &[Handle] = &[
            Handle::new(HandleKind::Target, None),
            Handle::new(HandleKind::Source, None),
        ];
        const LLM_ENGINE: &[Handle] = &[
            Handle::new(HandleKind::Target, Some("query")),
            Handle::new(HandleKind::Target, Some("context")),
            Handle::new(HandleKind::Source, None),
        ];
        const OUTPUT: &[Handle] = &[Handle::new(HandleKind::Target, None)];
        match self {
            NodeType::UserQuery => USER_QUERY,
            NodeType::KnowledgeBase => KNOWLEDGE_BASE,
            NodeType::LlmEngine => LLM_ENGINE,
            NodeType::Output => OUTPUT,
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| GraphError::UnknownNodeType(s.to_string()))
    }
}

/// Canvas coordinates of a node's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserQueryData {
    pub label: String,
    pub query: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KnowledgeBaseData {
    pub label: String,
    pub embedding_model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_file: Option<String>,
}

impl Default for KnowledgeBaseData {
    fn default() -> Self {
        Self {
            label: String::new(),
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            uploaded_file: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LlmEngineData {
    pub label: String,
    pub config: LlmConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutputData {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl OutputData {
    /// Text the output node displays: the result, or the placeholder.
    pub fn display_text(&self) -> &str {
        self.result
            .as_deref()
            .filter(|r| !r.is_empty())
            .unwrap_or(OUTPUT_PLACEHOLDER)
    }
}

/// Per-type node data. One variant per [`NodeType`].
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    UserQuery(UserQueryData),
    KnowledgeBase(KnowledgeBaseData),
    LlmEngine(LlmEngineData),
    Output(OutputData),
}

impl NodeKind {
    /// Default data for a freshly dropped node, labelled `"{type} node"`.
    pub fn default_for(node_type: NodeType) -> Self {
        let label = format!("{} node", node_type);
        match node_type {
            NodeType::UserQuery => NodeKind::UserQuery(UserQueryData {
                label,
                ..Default::default()
            }),
            NodeType::KnowledgeBase => NodeKind::KnowledgeBase(KnowledgeBaseData {
                label,
                ..Default::default()
            }),
            NodeType::LlmEngine => NodeKind::LlmEngine(LlmEngineData {
                label,
                ..Default::default()
            }),
            NodeType::Output => NodeKind::Output(OutputData {
                label,
                ..Default::default()
            }),
        }
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            NodeKind::UserQuery(_) => NodeType::UserQuery,
            NodeKind::KnowledgeBase(_) => NodeType::KnowledgeBase,
            NodeKind::LlmEngine(_) => NodeType::LlmEngine,
            NodeKind::Output(_) => NodeType::Output,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            NodeKind::UserQuery(d) => &d.label,
            NodeKind::KnowledgeBase(d) => &d.label,
            NodeKind::LlmEngine(d) => &d.label,
            NodeKind::Output(d) => &d.label,
        }
    }

    fn from_wire(node_type: NodeType, data: Value) -> Result<Self, serde_json::Error> {
        // The graph-UI library sends `null` or `{}` for nodes it created itself.
        let data = if data.is_null() {
            Value::Object(Default::default())
        } else {
            data
        };
        Ok(match node_type {
            NodeType::UserQuery => NodeKind::UserQuery(serde_json::from_value(data)?),
            NodeType::KnowledgeBase => NodeKind::KnowledgeBase(serde_json::from_value(data)?),
            NodeType::LlmEngine => NodeKind::LlmEngine(serde_json::from_value(data)?),
            NodeType::Output => NodeKind::Output(serde_json::from_value(data)?),
        })
    }

    fn to_wire(&self) -> Value {
        let value = match self {
            NodeKind::UserQuery(d) => serde_json::to_value(d),
            NodeKind::KnowledgeBase(d) => serde_json::to_value(d),
            NodeKind::LlmEngine(d) => serde_json::to_value(d),
            NodeKind::Output(d) => serde_json::to_value(d),
        };
        // Plain data structs with string keys always serialize.
        value.unwrap_or(Value::Null)
    }
}

/// A typed unit of the workflow graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireNode", into = "WireNode")]
pub struct Node {
    pub id: String,
    pub position: Position,
    pub kind: NodeKind,
}

impl Node {
    pub fn new(id: impl Into<String>, position: Position, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            position,
            kind,
        }
    }

    pub fn node_type(&self) -> NodeType {
        self.kind.node_type()
    }
}

/// Node as exchanged with the canvas and the backend.
#[derive(Serialize, Deserialize)]
struct WireNode {
    id: String,
    #[serde(rename = "type")]
    node_type: String,
    #[serde(default)]
    position: Position,
    #[serde(default)]
    data: Value,
}

impl TryFrom<WireNode> for Node {
    type Error = GraphError;

    fn try_from(wire: WireNode) -> Result<Self, Self::Error> {
        let node_type: NodeType = wire.node_type.parse()?;
        let kind = NodeKind::from_wire(node_type, wire.data).map_err(|e| {
            GraphError::InvalidNodeData {
                id: wire.id.clone(),
                reason: e.to_string(),
            }
        })?;
        Ok(Node {
            id: wire.id,
            position: wire.position,
            kind,
        })
    }
}

impl From<Node> for WireNode {
    fn from(node: Node) -> Self {
        WireNode {
            node_type: node.node_type().as_str().to_string(),
            data: node.kind.to_wire(),
            id: node.id,
            position: node.position,
        }
    }
}
