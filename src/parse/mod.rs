//! Parse phase: workflow JSON → Rust types + graph construction.

pub mod graph;
pub mod types;

pub use graph::WorkflowGraph;
pub use types::*;

use crate::error::{Result, WorkflowError};

/// Deserialize a `{ nodes, edges }` workflow JSON string.
pub fn parse(json: &str) -> Result<Workflow> {
    serde_json::from_str::<Workflow>(json).map_err(|e| WorkflowError::parse("workflow", e))
}

/// Deserialize a single node JSON string.
pub fn parse_node(json: &str) -> Result<WorkflowNode> {
    serde_json::from_str::<WorkflowNode>(json).map_err(|e| WorkflowError::parse("node", e))
}
