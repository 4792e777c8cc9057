//! Workflow graph validation.
//!
//! Validation is a pure function of the node list and edge list. Every check
//! runs on every call and findings accumulate; the only early return is the
//! empty-workflow check.

pub mod condition;
pub mod node_rules;
pub mod structural;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ValidationConfig;
use crate::parse::types::{WorkflowEdge, WorkflowNode};

/// A single finding. `code` is stable across message wording changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub code: String,
    pub message: String,
    pub node_id: Option<String>,
}

impl ValidationIssue {
    pub fn new(code: &str, message: impl Into<String>, node_id: Option<&str>) -> Self {
        ValidationIssue {
            code: code.into(),
            message: message.into(),
            node_id: node_id.map(str::to_string),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Pass/fail verdict plus every error message, in check order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn from_issues(issues: &[ValidationIssue]) -> Self {
        ValidationResult {
            is_valid: issues.is_empty(),
            errors: issues.iter().map(|i| i.message.clone()).collect(),
        }
    }

    /// The message a single-line banner should show, if any.
    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }
}

/// Validate with the default (lenient) configuration.
pub fn validate_workflow(nodes: &[WorkflowNode], edges: &[WorkflowEdge]) -> ValidationResult {
    validate_workflow_with(nodes, edges, &ValidationConfig::default())
}

pub fn validate_workflow_with(
    nodes: &[WorkflowNode],
    edges: &[WorkflowEdge],
    config: &ValidationConfig,
) -> ValidationResult {
    ValidationResult::from_issues(&validate_issues(nodes, edges, config))
}

/// Run structural checks, then per-node checks, returning structured findings.
pub fn validate_issues(
    nodes: &[WorkflowNode],
    edges: &[WorkflowEdge],
    config: &ValidationConfig,
) -> Vec<ValidationIssue> {
    let mut issues = structural::validate_structural(nodes, edges, config);

    for node in nodes {
        issues.extend(node_rules::validate_node_config(node, config));
    }

    debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        errors = issues.len(),
        strict = config.is_strict(),
        "validated workflow"
    );

    issues
}

/// Validate a single node's label and configuration.
pub fn validate_node(node: &WorkflowNode) -> Vec<String> {
    validate_node_with(node, &ValidationConfig::default())
}

pub fn validate_node_with(node: &WorkflowNode, config: &ValidationConfig) -> Vec<String> {
    node_rules::validate_node_config(node, config)
        .into_iter()
        .map(|i| i.message)
        .collect()
}
