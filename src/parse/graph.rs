//! petgraph-based directed graph view over a node list and edge list.

use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Bfs;

use super::types::{WorkflowEdge, WorkflowNode};

pub struct WorkflowGraph {
    pub graph: DiGraph<String, ()>,
    pub node_indices: HashMap<String, NodeIndex>,
}

impl WorkflowGraph {
    /// Build the graph. Edges whose endpoints are not in `nodes` are skipped;
    /// reporting them is left to validation.
    pub fn build(nodes: &[WorkflowNode], edges: &[WorkflowEdge]) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();

        for node in nodes {
            let id = node.id().to_string();
            // First occurrence wins on duplicate ids.
            if node_indices.contains_key(&id) {
                continue;
            }
            let idx = graph.add_node(id.clone());
            node_indices.insert(id, idx);
        }

        for edge in edges {
            if let (Some(&s), Some(&t)) = (
                node_indices.get(&edge.source),
                node_indices.get(&edge.target),
            ) {
                graph.add_edge(s, t, ());
            }
        }

        WorkflowGraph { graph, node_indices }
    }

    /// Ids of every node reachable from `start` (inclusive) following edge direction.
    pub fn reachable_from(&self, start: &str) -> HashSet<&str> {
        let Some(&start_idx) = self.node_indices.get(start) else {
            return HashSet::new();
        };
        let mut reachable = HashSet::new();
        let mut bfs = Bfs::new(&self.graph, start_idx);
        while let Some(nx) = bfs.next(&self.graph) {
            reachable.insert(self.graph[nx].as_str());
        }
        reachable
    }
}
