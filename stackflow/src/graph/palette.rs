//! Node palette and drop placement.
//!
//! The palette is a static list of node types. Dropping an entry on the canvas produces a
//! [`DropEvent`]; the canvas projects the drop point through its [`Viewport`] and
//! [`Workflow::drop_node`](super::Workflow::drop_node) inserts the node.

use crate::graph::node::{NodeType, Position};

/// One draggable palette entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteEntry {
    pub node_type: NodeType,
    pub label: &'static str,
    pub description: &'static str,
}

/// Palette entries, in display order.
pub const PALETTE: [PaletteEntry; 4] = [
    PaletteEntry {
        node_type: NodeType::UserQuery,
        label: "User Query",
        description: "Input queries and prompts",
    },
    PaletteEntry {
        node_type: NodeType::KnowledgeBase,
        label: "Knowledge Base",
        description: "Upload and process documents",
    },
    PaletteEntry {
        node_type: NodeType::LlmEngine,
        label: "LLM Engine",
        description: "AI processing and generation",
    },
    PaletteEntry {
        node_type: NodeType::Output,
        label: "Output",
        description: "Display final results",
    },
];

/// Pointer coordinates in screen pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A palette entry released over the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DropEvent {
    pub node_type: NodeType,
    pub point: ScreenPoint,
}

impl DropEvent {
    pub fn new(node_type: NodeType, point: ScreenPoint) -> Self {
        Self { node_type, point }
    }

    /// Builds an event from a raw type token; `None` for tokens that name no node type.
    pub fn from_token(token: &str, point: ScreenPoint) -> Option<Self> {
        match token.parse::<NodeType>() {
            Ok(node_type) => Some(Self::new(node_type, point)),
            Err(e) => {
                tracing::debug!(token, error = %e, "ignoring drop");
                None
            }
        }
    }
}

/// Screen → canvas projection supplied by the canvas surface.
pub trait Viewport {
    fn project(&self, point: ScreenPoint) -> Position;
}

/// Pan/zoom transform of a canvas whose element starts at (`bounds_left`, `bounds_top`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasTransform {
    pub bounds_left: f64,
    pub bounds_top: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for CanvasTransform {
    fn default() -> Self {
        Self {
            bounds_left: 0.0,
            bounds_top: 0.0,
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: 1.0,
        }
    }
}

impl Viewport for CanvasTransform {
    fn project(&self, point: ScreenPoint) -> Position {
        // A zero zoom would collapse every drop onto one point.
        let zoom = if self.zoom > 0.0 { self.zoom } else { 1.0 };
        Position::new(
            (point.x - self.bounds_left - self.pan_x) / zoom,
            (point.y - self.bounds_top - self.pan_y) / zoom,
        )
    }
}
