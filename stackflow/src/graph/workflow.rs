//! Workflow graph: the node set and edge set edited on the canvas.
//!
//! Order-insensitive; nodes and edges are kept in insertion order only so that the
//! serialized body is stable. No cycle or type-compatibility checks are made here; the
//! backend decides whether a graph forms a usable stack.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::graph::edge::{Connection, Edge};
use crate::graph::graph_error::GraphError;
use crate::graph::node::{Node, NodeKind, NodeType, Position, UserQueryData};
use crate::graph::palette::{DropEvent, Viewport};

/// Full node+edge graph, serialized as `{ "nodes": [...], "edges": [...] }`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// Whether the stack has any connections yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackStatus {
    Connected,
    Pending,
}

/// Counts shown next to the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackInfo {
    pub components: usize,
    pub connections: usize,
    pub status: StackStatus,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// The graph a new canvas opens with: a single user-query node.
    pub fn starter() -> Self {
        Self {
            nodes: vec![Node::new(
                "1",
                Position::new(100.0, 100.0),
                NodeKind::UserQuery(UserQueryData {
                    label: "User Query".to_string(),
                    query: String::new(),
                }),
            )],
            edges: Vec::new(),
        }
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Nodes of one type, in insertion order.
    pub fn nodes_of_type(&self, node_type: NodeType) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |n| n.node_type() == node_type)
    }

    /// Next free id for a node of `node_type`: `{type}-{n}` with `n` starting at
    /// `node_count + 1` and increasing until no existing node has that id.
    pub fn next_node_id(&self, node_type: NodeType) -> String {
        let taken: HashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        let mut n = self.nodes.len() + 1;
        loop {
            let id = format!("{}-{}", node_type, n);
            if !taken.contains(id.as_str()) {
                return id;
            }
            n += 1;
        }
    }

    /// Adds a node of the dropped type, with default data, at the projected drop point.
    pub fn drop_node(&mut self, event: &DropEvent, viewport: &impl Viewport) -> &Node {
        let id = self.next_node_id(event.node_type);
        let position = viewport.project(event.point);
        tracing::debug!(node_id = %id, x = position.x, y = position.y, "node dropped");
        self.nodes
            .push(Node::new(id, position, NodeKind::default_for(event.node_type)));
        &self.nodes[self.nodes.len() - 1]
    }

    /// Adds a node as-is. Replaces the node with the same id if present.
    pub fn insert_node(&mut self, node: Node) {
        match self.node_mut(&node.id) {
            Some(existing) => *existing = node,
            None => self.nodes.push(node),
        }
    }

    pub fn move_node(&mut self, id: &str, position: Position) -> Result<(), GraphError> {
        let node = self
            .node_mut(id)
            .ok_or_else(|| GraphError::NodeNotFound(id.to_string()))?;
        node.position = position;
        Ok(())
    }

    /// Removes a node and every edge touching it.
    pub fn remove_node(&mut self, id: &str) -> Option<Node> {
        let idx = self.nodes.iter().position(|n| n.id == id)?;
        self.edges.retain(|e| e.source != id && e.target != id);
        Some(self.nodes.remove(idx))
    }

    /// Adds an edge for `conn`. Returns `None` when an identical edge already exists.
    ///
    /// Endpoints are not checked: any source may connect to any target.
    pub fn connect(&mut self, conn: Connection) -> Option<&Edge> {
        if self.edges.iter().any(|e| e.joins(&conn)) {
            return None;
        }
        self.edges.push(conn.into());
        self.edges.last()
    }

    pub fn remove_edge(&mut self, id: &str) -> Option<Edge> {
        let idx = self.edges.iter().position(|e| e.id == id)?;
        Some(self.edges.remove(idx))
    }

    pub fn info(&self) -> StackInfo {
        StackInfo {
            components: self.nodes.len(),
            connections: self.edges.len(),
            status: if self.edges.is_empty() {
                StackStatus::Pending
            } else {
                StackStatus::Connected
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::palette::{CanvasTransform, ScreenPoint};

    fn drop(wf: &mut Workflow, t: NodeType) -> String {
        wf.drop_node(
            &DropEvent::new(t, ScreenPoint::new(50.0, 50.0)),
            &CanvasTransform::default(),
        )
        .id
        .clone()
    }

    /// **Scenario**: successive drops on the starter graph number ids by node count.
    #[test]
    fn drop_ids_follow_node_count() {
        let mut wf = Workflow::starter();
        assert_eq!(drop(&mut wf, NodeType::KnowledgeBase), "knowledgeBase-2");
        assert_eq!(drop(&mut wf, NodeType::LlmEngine), "llmEngine-3");
        assert_eq!(drop(&mut wf, NodeType::Output), "output-4");
    }

    /// **Scenario**: after a removal the count-based id would collide; the next free id is used.
    #[test]
    fn drop_ids_stay_unique_after_removal() {
        let mut wf = Workflow::new();
        let a = drop(&mut wf, NodeType::Output); // output-1
        let _b = drop(&mut wf, NodeType::Output); // output-2
        wf.remove_node(&a);
        let c = drop(&mut wf, NodeType::Output);
        assert_eq!(c, "output-3");
    }

    /// **Scenario**: any interleaving of drops and removals keeps ids unique.
    #[test]
    fn drop_ids_unique_over_mixed_sequence() {
        let mut wf = Workflow::starter();
        for round in 0..40 {
            let t = NodeType::ALL[round % 4];
            let id = drop(&mut wf, t);
            let dupes = wf.nodes.iter().filter(|n| n.id == id).count();
            assert_eq!(dupes, 1, "duplicate id {}", id);
            if round % 3 == 0 {
                let victim = wf.nodes[round % wf.nodes.len()].id.clone();
                wf.remove_node(&victim);
            }
        }
        let ids: HashSet<_> = wf.nodes.iter().map(|n| n.id.clone()).collect();
        assert_eq!(ids.len(), wf.nodes.len());
    }

    #[test]
    fn dropped_node_gets_default_label_and_projected_position() {
        let mut wf = Workflow::new();
        let view = CanvasTransform {
            bounds_left: 100.0,
            ..Default::default()
        };
        let node = wf.drop_node(
            &DropEvent::new(NodeType::LlmEngine, ScreenPoint::new(150.0, 80.0)),
            &view,
        );
        assert_eq!(node.kind.label(), "llmEngine node");
        assert_eq!(node.position, Position::new(50.0, 80.0));
    }

    /// **Scenario**: duplicate connections are ignored; connecting unknown ids is allowed.
    #[test]
    fn connect_is_permissive_but_deduplicates() {
        let mut wf = Workflow::starter();
        assert!(wf.connect(Connection::new("1", "llmEngine-9")).is_some());
        assert!(wf.connect(Connection::new("1", "llmEngine-9")).is_none());
        assert!(wf
            .connect(Connection::new("1", "llmEngine-9").with_target_handle("query"))
            .is_some());
        // output → user query is not a meaningful direction, but it is not refused either.
        assert!(wf.connect(Connection::new("output-4", "1")).is_some());
        assert_eq!(wf.edges.len(), 3);
    }

    #[test]
    fn remove_node_drops_incident_edges() {
        let mut wf = Workflow::starter();
        let llm = drop(&mut wf, NodeType::LlmEngine);
        let out = drop(&mut wf, NodeType::Output);
        wf.connect(Connection::new("1", llm.clone()));
        wf.connect(Connection::new(llm.clone(), out.clone()));
        wf.remove_node(&llm).unwrap();
        assert!(wf.edges.is_empty());
        assert_eq!(wf.nodes.len(), 2);
    }

    #[test]
    fn move_node_reports_missing_node() {
        let mut wf = Workflow::starter();
        wf.move_node("1", Position::new(5.0, 6.0)).unwrap();
        assert_eq!(wf.node("1").unwrap().position, Position::new(5.0, 6.0));
        assert!(matches!(
            wf.move_node("nope", Position::default()),
            Err(GraphError::NodeNotFound(_))
        ));
    }

    #[test]
    fn info_reports_pending_until_connected() {
        let mut wf = Workflow::starter();
        assert_eq!(wf.info().status, StackStatus::Pending);
        let out = drop(&mut wf, NodeType::Output);
        wf.connect(Connection::new("1", out));
        let info = wf.info();
        assert_eq!(info.components, 2);
        assert_eq!(info.connections, 1);
        assert_eq!(info.status, StackStatus::Connected);
    }

    /// **Scenario**: the serialized workflow reads back unchanged.
    #[test]
    fn workflow_json_reads_back() {
        let mut wf = Workflow::starter();
        let llm = drop(&mut wf, NodeType::LlmEngine);
        wf.connect(Connection::new("1", llm).with_target_handle("query"));
        let json = serde_json::to_string(&wf).unwrap();
        let back: Workflow = serde_json::from_str(&json).unwrap();
        assert_eq!(back, wf);
    }
}
