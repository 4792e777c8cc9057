//! Graph-level structural validation rules (V001–V008).

use std::collections::{HashMap, HashSet};

use tracing::trace;

use super::ValidationIssue;
use crate::config::ValidationConfig;
use crate::parse::graph::WorkflowGraph;
use crate::parse::types::{WorkflowEdge, WorkflowNode};

/// Run all structural rules. An empty node list yields exactly one issue.
pub fn validate_structural(
    nodes: &[WorkflowNode],
    edges: &[WorkflowEdge],
    config: &ValidationConfig,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if nodes.is_empty() {
        issues.push(ValidationIssue::new(
            "V001",
            "Workflow must have at least one node",
            None,
        ));
        return issues;
    }

    v002_trigger_cardinality(nodes, &mut issues);
    v004_all_nodes_connected(nodes, edges, &mut issues);
    v005_edge_endpoints(nodes, edges, config, &mut issues);
    if config.require_reachability {
        v007_reachable_from_trigger(nodes, edges, &mut issues);
    }

    issues
}

fn v002_trigger_cardinality(nodes: &[WorkflowNode], issues: &mut Vec<ValidationIssue>) {
    let trigger_count = nodes.iter().filter(|n| n.is_trigger()).count();
    trace!(trigger_count, "checking trigger cardinality");
    if trigger_count == 0 {
        issues.push(ValidationIssue::new(
            "V002",
            "Workflow must have a trigger node",
            None,
        ));
    } else if trigger_count > 1 {
        issues.push(ValidationIssue::new(
            "V003",
            "Workflow can only have one trigger node",
            None,
        ));
    }
}

/// A non-trigger node counts as connected when it appears as either endpoint of
/// any edge, dangling edges included.
fn v004_all_nodes_connected(
    nodes: &[WorkflowNode],
    edges: &[WorkflowEdge],
    issues: &mut Vec<ValidationIssue>,
) {
    let connected: HashSet<&str> = edges
        .iter()
        .flat_map(|e| [e.source.as_str(), e.target.as_str()])
        .collect();

    for node in nodes {
        if !node.is_trigger() && !connected.contains(node.id()) {
            issues.push(ValidationIssue::new(
                "V004",
                format!("Node {} is not connected", node.label()),
                Some(node.id()),
            ));
        }
    }
}

fn v005_edge_endpoints(
    nodes: &[WorkflowNode],
    edges: &[WorkflowEdge],
    config: &ValidationConfig,
    issues: &mut Vec<ValidationIssue>,
) {
    // Duplicate ids resolve to the first node, like a front-to-back search.
    let mut by_id: HashMap<&str, &WorkflowNode> = HashMap::new();
    for node in nodes {
        by_id.entry(node.id()).or_insert(node);
    }

    for edge in edges {
        let (Some(source), Some(target)) = (
            by_id.get(edge.source.as_str()),
            by_id.get(edge.target.as_str()),
        ) else {
            issues.push(ValidationIssue::new(
                "V005",
                "Invalid connection detected: missing node",
                None,
            ));
            continue;
        };

        if source.is_trigger() && target.is_trigger() {
            issues.push(ValidationIssue::new(
                "V006",
                "Trigger node cannot connect to another trigger node",
                Some(source.id()),
            ));
        } else if config.reject_edges_into_trigger && target.is_trigger() {
            issues.push(ValidationIssue::new(
                "V008",
                format!(
                    "Node {} cannot connect into trigger node \"{}\"",
                    source.label(),
                    target.label()
                ),
                Some(source.id()),
            ));
        }
    }
}

/// Only meaningful with exactly one trigger; cardinality problems are reported by V002/V003.
fn v007_reachable_from_trigger(
    nodes: &[WorkflowNode],
    edges: &[WorkflowEdge],
    issues: &mut Vec<ValidationIssue>,
) {
    let mut triggers = nodes.iter().filter(|n| n.is_trigger());
    let (Some(trigger), None) = (triggers.next(), triggers.next()) else {
        return;
    };

    let graph = WorkflowGraph::build(nodes, edges);
    let reachable = graph.reachable_from(trigger.id());

    for node in nodes {
        if !node.is_trigger() && !reachable.contains(node.id()) {
            issues.push(ValidationIssue::new(
                "V007",
                format!("Node {} is not reachable from the trigger node", node.label()),
                Some(node.id()),
            ));
        }
    }
}
