//! Workflow file commands: the terminal stand-in for the canvas.
//!
//! Workflows are stored as the same JSON the canvas sends to the backend. Each editing
//! command loads the file, applies one gesture and writes it back.

use std::io::Write;
use std::path::Path;

use stackflow::graph::{StackStatus, PALETTE};
use stackflow::{
    build_stack, validate_workflow, BuildOutcome, CanvasTransform, Connection, DropEvent,
    GraphError, Position, ScreenPoint, StackApi, Workflow,
};

use crate::config::Error;

pub fn load(path: &Path) -> Result<Workflow, Error> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    let workflow = serde_json::from_str(&raw)
        .map_err(|e| format!("{} is not a workflow: {}", path.display(), e))?;
    Ok(workflow)
}

pub fn save(path: &Path, workflow: &Workflow) -> Result<(), Error> {
    let json = serde_json::to_string_pretty(workflow)?;
    std::fs::write(path, json + "\n")
        .map_err(|e| format!("cannot write {}: {}", path.display(), e))?;
    Ok(())
}

pub fn palette(out: &mut dyn Write) -> Result<bool, Error> {
    for entry in PALETTE.iter() {
        writeln!(
            out,
            "{:<14} {:<15} {}",
            entry.node_type, entry.label, entry.description
        )?;
    }
    Ok(true)
}

pub fn new_workflow(target: Option<&Path>, out: &mut dyn Write) -> Result<bool, Error> {
    let workflow = Workflow::starter();
    match target {
        Some(path) => {
            save(path, &workflow)?;
            writeln!(out, "Created {}", path.display())?;
        }
        None => writeln!(out, "{}", serde_json::to_string_pretty(&workflow)?)?,
    }
    Ok(true)
}

/// Drops a node of type `token` at screen point (`x`, `y`) on an untransformed canvas.
pub fn add_node(
    path: &Path,
    token: &str,
    x: f64,
    y: f64,
    out: &mut dyn Write,
) -> Result<bool, Error> {
    let mut workflow = load(path)?;
    let event = DropEvent::from_token(token, ScreenPoint::new(x, y))
        .ok_or_else(|| GraphError::UnknownNodeType(token.to_string()))?;
    let id = workflow
        .drop_node(&event, &CanvasTransform::default())
        .id
        .clone();
    save(path, &workflow)?;
    writeln!(out, "Added {}", id)?;
    Ok(true)
}

pub fn connect(path: &Path, connection: Connection, out: &mut dyn Write) -> Result<bool, Error> {
    let mut workflow = load(path)?;
    let added = workflow.connect(connection).map(|e| e.id.clone());
    match added {
        Some(id) => {
            save(path, &workflow)?;
            writeln!(out, "Connected {}", id)?;
        }
        None => writeln!(out, "Already connected")?,
    }
    Ok(true)
}

pub fn move_node(
    path: &Path,
    id: &str,
    x: f64,
    y: f64,
    out: &mut dyn Write,
) -> Result<bool, Error> {
    let mut workflow = load(path)?;
    workflow.move_node(id, Position::new(x, y))?;
    save(path, &workflow)?;
    writeln!(out, "Moved {} to ({}, {})", id, x, y)?;
    Ok(true)
}

/// Removes the node `id` with its edges, or else the edge `id`.
pub fn remove(path: &Path, id: &str, out: &mut dyn Write) -> Result<bool, Error> {
    let mut workflow = load(path)?;
    if workflow.remove_node(id).is_some() {
        writeln!(out, "Removed node {}", id)?;
    } else if workflow.remove_edge(id).is_some() {
        writeln!(out, "Removed edge {}", id)?;
    } else {
        return Err(GraphError::NodeNotFound(id.to_string()).into());
    }
    save(path, &workflow)?;
    Ok(true)
}

pub fn show(path: &Path, out: &mut dyn Write) -> Result<bool, Error> {
    let workflow = load(path)?;
    writeln!(out, "Nodes:")?;
    for node in &workflow.nodes {
        writeln!(
            out,
            "  {:<18} {:<14} {:<20} ({}, {})",
            node.id,
            node.node_type(),
            node.kind.label(),
            node.position.x,
            node.position.y
        )?;
    }
    writeln!(out, "Edges:")?;
    for edge in &workflow.edges {
        let target_handle = edge
            .target_handle
            .as_deref()
            .map(|h| format!(" [{}]", h))
            .unwrap_or_default();
        writeln!(out, "  {} -> {}{}", edge.source, edge.target, target_handle)?;
    }
    let info = workflow.info();
    let status = match info.status {
        StackStatus::Connected => "Connected",
        StackStatus::Pending => "Pending",
    };
    writeln!(
        out,
        "Components: {}  Connections: {}  Status: {}",
        info.components, info.connections, status
    )?;
    Ok(true)
}

/// Prints the build result; `Ok(false)` when the stack could not be built.
pub async fn build(
    api: Option<&dyn StackApi>,
    path: &Path,
    out: &mut dyn Write,
) -> Result<bool, Error> {
    let workflow = load(path)?;
    let outcome = match api {
        Some(api) => build_stack(api, &workflow).await,
        None => BuildOutcome::from_response(&validate_workflow(&workflow)),
    };
    writeln!(out, "{}", outcome.text)?;
    Ok(outcome.success)
}
