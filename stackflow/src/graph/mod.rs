//! Workflow graph: typed nodes, edges, palette placement.
//!
//! The canvas surface owns a [`Workflow`] and mutates it in response to gestures:
//! a palette drop becomes [`Workflow::drop_node`], a handle drag becomes
//! [`Workflow::connect`]. Rendering is left to the graph-UI library.

mod edge;
mod graph_error;
mod node;
mod palette;
mod workflow;

pub use edge::{Connection, Edge, Handle, HandleKind};
pub use graph_error::GraphError;
pub use node::{
    KnowledgeBaseData, LlmEngineData, Node, NodeKind, NodeType, OutputData, Position,
    UserQueryData, DEFAULT_EMBEDDING_MODEL, OUTPUT_PLACEHOLDER,
};
pub use palette::{CanvasTransform, DropEvent, PaletteEntry, ScreenPoint, Viewport, PALETTE};
pub use workflow::{StackInfo, StackStatus, Workflow};
