//! Structural checks run by the backend before a stack is built.
//!
//! Rules are applied in order and the first failing one is reported. A workflow passes when
//! it has at least two components, at least one connection, one node of each required type,
//! a user-query node with an outgoing edge and an LLM node wired into an output node.

use std::collections::{HashMap, HashSet};

use serde_json::Value;

use crate::api::{ValidationResponse, STATUS_ERROR, STATUS_SUCCESS};
use crate::graph::{NodeType, Workflow};

/// Description of a workflow that reads uploaded documents.
pub const PDF_ASSISTANT_DESCRIPTION: &str = "📄 PDF-Powered AI Assistant\n\
• User asks questions\n\
• System searches uploaded PDFs for context\n\
• AI generates intelligent responses using document knowledge\n\
• Results displayed to user\n\
\n\
This creates a smart document Q&A system!";

/// Description of a workflow without a knowledge base.
pub const GENERAL_ASSISTANT_DESCRIPTION: &str = "🤖 General AI Assistant\n\
• User asks questions\n\
• AI processes queries directly\n\
• Smart responses generated\n\
• Results displayed to user\n\
\n\
This creates a general-purpose AI chatbot!";

fn rejected(message: impl Into<String>, suggestion: &str) -> ValidationResponse {
    ValidationResponse {
        status: STATUS_ERROR.to_string(),
        message: message.into(),
        workflow_description: String::new(),
        suggestion: Some(suggestion.to_string()),
        components: None,
    }
}

/// Validates a raw request body. A body that is not a workflow is reported as a failed
/// validation, not as an error.
pub fn validate_json(body: Value) -> ValidationResponse {
    match serde_json::from_value::<Workflow>(body) {
        Ok(workflow) => validate_workflow(&workflow),
        Err(e) => {
            tracing::debug!(error = %e, "workflow body did not parse");
            unreadable_workflow(&e)
        }
    }
}

/// Response for a request body that could not be read as a workflow at all.
pub fn unreadable_workflow(reason: &dyn std::fmt::Display) -> ValidationResponse {
    rejected(
        format!("Workflow validation failed: {}", reason),
        "Check your workflow structure and try again.",
    )
}

pub fn validate_workflow(workflow: &Workflow) -> ValidationResponse {
    // Nodes are keyed by id; a repeated id keeps its last definition.
    let mut types: HashMap<&str, NodeType> = HashMap::new();
    let mut components: Vec<String> = Vec::new();
    for node in &workflow.nodes {
        if types.insert(node.id.as_str(), node.node_type()).is_none() {
            components.push(node.id.clone());
        }
    }

    if types.len() < 2 {
        return rejected(
            "Workflow needs at least 2 components to build a stack!",
            "Drag more components from the sidebar.",
        );
    }
    if workflow.edges.is_empty() {
        return rejected(
            "Components are not connected!",
            "Connect the nodes by dragging from output handles to input handles.",
        );
    }

    let has = |t: NodeType| types.values().any(|&v| v == t);
    if !has(NodeType::UserQuery) {
        return rejected(
            "Missing User Query component!",
            "Add a User Query node to start your workflow.",
        );
    }
    if !has(NodeType::LlmEngine) {
        return rejected(
            "Missing LLM Engine component!",
            "Add an LLM Engine node to process queries.",
        );
    }
    if !has(NodeType::Output) {
        return rejected(
            "Missing Output component!",
            "Add an Output node to display results.",
        );
    }

    let is = |id: &str, t: NodeType| types.get(id) == Some(&t);
    let sources: HashSet<&str> = workflow.edges.iter().map(|e| e.source.as_str()).collect();
    if !sources.iter().any(|s| is(s, NodeType::UserQuery)) {
        return rejected(
            "User Query is not connected to anything!",
            "Connect User Query to Knowledge Base or LLM Engine.",
        );
    }
    let llm_to_output = workflow
        .edges
        .iter()
        .any(|e| is(&e.source, NodeType::LlmEngine) && is(&e.target, NodeType::Output));
    if !llm_to_output {
        return rejected(
            "LLM Engine is not connected to Output!",
            "Connect LLM Engine output to the Output component.",
        );
    }

    let description = if has(NodeType::KnowledgeBase) {
        PDF_ASSISTANT_DESCRIPTION
    } else {
        GENERAL_ASSISTANT_DESCRIPTION
    };
    ValidationResponse {
        status: STATUS_SUCCESS.to_string(),
        message: format!(
            "Perfect! Your AI workflow is ready with {} components and {} connections.",
            types.len(),
            workflow.edges.len()
        ),
        workflow_description: description.to_string(),
        suggestion: None,
        components: Some(components),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Connection, Node, NodeKind, Position};
    use serde_json::json;

    fn node(id: &str, t: NodeType) -> Node {
        Node::new(id, Position::default(), NodeKind::default_for(t))
    }

    fn workflow(nodes: &[(&str, NodeType)], edges: &[(&str, &str)]) -> Workflow {
        let mut wf = Workflow::new();
        for (id, t) in nodes {
            wf.insert_node(node(id, *t));
        }
        for (s, t) in edges {
            wf.connect(Connection::new(*s, *t));
        }
        wf
    }

    fn full(with_kb: bool) -> Workflow {
        let mut nodes = vec![
            ("1", NodeType::UserQuery),
            ("llmEngine-2", NodeType::LlmEngine),
            ("output-3", NodeType::Output),
        ];
        let mut edges = vec![("1", "llmEngine-2"), ("llmEngine-2", "output-3")];
        if with_kb {
            nodes.push(("knowledgeBase-4", NodeType::KnowledgeBase));
            edges.push(("knowledgeBase-4", "llmEngine-2"));
        }
        workflow(&nodes, &edges)
    }

    #[test]
    fn single_node_is_rejected() {
        let r = validate_workflow(&Workflow::starter());
        assert_eq!(r.status, "error");
        assert_eq!(r.message, "Workflow needs at least 2 components to build a stack!");
        assert_eq!(r.suggestion.as_deref(), Some("Drag more components from the sidebar."));
        assert_eq!(r.workflow_description, "");
    }

    #[test]
    fn duplicate_ids_count_once() {
        let r = validate_workflow(&Workflow {
            nodes: vec![node("1", NodeType::UserQuery), node("1", NodeType::Output)],
            edges: vec![],
        });
        assert_eq!(r.message, "Workflow needs at least 2 components to build a stack!");
    }

    #[test]
    fn unconnected_nodes_are_rejected() {
        let r = validate_workflow(&workflow(
            &[("1", NodeType::UserQuery), ("o", NodeType::Output)],
            &[],
        ));
        assert_eq!(r.message, "Components are not connected!");
    }

    #[test]
    fn missing_types_are_reported_in_order() {
        let r = validate_workflow(&workflow(
            &[("l", NodeType::LlmEngine), ("o", NodeType::Output)],
            &[("l", "o")],
        ));
        assert_eq!(r.message, "Missing User Query component!");

        let r = validate_workflow(&workflow(
            &[("1", NodeType::UserQuery), ("o", NodeType::Output)],
            &[("1", "o")],
        ));
        assert_eq!(r.message, "Missing LLM Engine component!");

        let r = validate_workflow(&workflow(
            &[("1", NodeType::UserQuery), ("l", NodeType::LlmEngine)],
            &[("1", "l")],
        ));
        assert_eq!(r.message, "Missing Output component!");
        assert_eq!(
            r.suggestion.as_deref(),
            Some("Add an Output node to display results.")
        );
    }

    #[test]
    fn user_query_without_outgoing_edge() {
        let r = validate_workflow(&workflow(
            &[
                ("1", NodeType::UserQuery),
                ("l", NodeType::LlmEngine),
                ("o", NodeType::Output),
            ],
            &[("l", "o"), ("o", "1")],
        ));
        assert_eq!(r.message, "User Query is not connected to anything!");
    }

    #[test]
    fn llm_not_wired_to_output() {
        let r = validate_workflow(&workflow(
            &[
                ("1", NodeType::UserQuery),
                ("l", NodeType::LlmEngine),
                ("o", NodeType::Output),
            ],
            &[("1", "l"), ("1", "o")],
        ));
        assert_eq!(r.message, "LLM Engine is not connected to Output!");
        assert_eq!(
            r.suggestion.as_deref(),
            Some("Connect LLM Engine output to the Output component.")
        );
    }

    /// **Scenario**: a complete workflow passes and lists its components.
    #[test]
    fn general_assistant_passes() {
        let r = validate_workflow(&full(false));
        assert!(r.is_success());
        assert_eq!(
            r.message,
            "Perfect! Your AI workflow is ready with 3 components and 2 connections."
        );
        assert_eq!(r.workflow_description, GENERAL_ASSISTANT_DESCRIPTION);
        assert_eq!(
            r.components,
            Some(vec!["1".into(), "llmEngine-2".into(), "output-3".into()])
        );
        assert_eq!(r.suggestion, None);
    }

    #[test]
    fn knowledge_base_selects_pdf_description() {
        let r = validate_workflow(&full(true));
        assert!(r.is_success());
        assert!(r.workflow_description.starts_with("📄 PDF-Powered AI Assistant\n"));
        assert!(r.message.contains("4 components and 3 connections"));
    }

    /// **Scenario**: a body that is not a workflow is a failed validation.
    #[test]
    fn malformed_body_is_reported() {
        let r = validate_json(json!({
            "nodes": [{ "id": "x", "type": "teleporter" }],
            "edges": []
        }));
        assert_eq!(r.status, "error");
        assert!(r.message.starts_with("Workflow validation failed: "));
        assert!(r.message.contains("teleporter"));
        assert_eq!(
            r.suggestion.as_deref(),
            Some("Check your workflow structure and try again.")
        );
    }

    #[test]
    fn json_body_of_valid_workflow_passes() {
        let body = serde_json::to_value(full(false)).unwrap();
        assert!(validate_json(body).is_success());
    }
}
