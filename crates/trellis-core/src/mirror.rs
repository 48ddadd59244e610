//! Mirror synchronization between step records and execution-graph nodes.
//!
//! Every step has a denormalized [`ExecutionNode`] summary embedded in the
//! parent interaction's execution graph. These helpers mutate the in-memory
//! graph; the service layer controls write ordering so the authoritative
//! step record is always durable before the mirror is attempted.

use crate::models::{ExecutionGraph, ExecutionNode, Status, Step};

/// Appends a summary node mirroring the given step's identity and status.
pub fn append_node(graph: &mut ExecutionGraph, step: &Step) {
    graph.nodes.push(ExecutionNode {
        step_id: step.id.clone(),
        name: step.name.clone(),
        status: step.status,
    });
}

/// Updates the first node whose `step_id` matches, in place.
///
/// Returns whether a node matched. No match is not an error; the caller
/// decides whether to log the stale mirror.
pub fn sync_node_status(graph: &mut ExecutionGraph, step_id: &str, status: Status) -> bool {
    for node in &mut graph.nodes {
        if node.step_id == step_id {
            node.status = status;
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with_nodes(ids: &[&str]) -> ExecutionGraph {
        let mut graph = ExecutionGraph {
            id: "e1".to_string(),
            ..ExecutionGraph::default()
        };
        for id in ids {
            graph.nodes.push(ExecutionNode {
                step_id: (*id).to_string(),
                name: format!("step {id}"),
                status: Status::Pending,
            });
        }
        graph
    }

    #[test]
    fn append_node_mirrors_step_fields() {
        let mut graph = graph_with_nodes(&[]);
        let step = Step {
            id: "s1".to_string(),
            name: "fetch-logs".to_string(),
            ..Step::default()
        };

        append_node(&mut graph, &step);

        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.nodes[0].step_id, "s1");
        assert_eq!(graph.nodes[0].name, "fetch-logs");
        assert_eq!(graph.nodes[0].status, Status::Pending);
    }

    #[test]
    fn sync_updates_first_match_only() {
        let mut graph = graph_with_nodes(&["s1", "s2", "s1"]);

        assert!(sync_node_status(&mut graph, "s1", Status::Success));

        assert_eq!(graph.nodes[0].status, Status::Success);
        assert_eq!(graph.nodes[1].status, Status::Pending);
        assert_eq!(graph.nodes[2].status, Status::Pending);
    }

    #[test]
    fn sync_without_match_leaves_graph_unchanged() {
        let mut graph = graph_with_nodes(&["s1"]);

        assert!(!sync_node_status(&mut graph, "missing", Status::Error));
        assert_eq!(graph.nodes[0].status, Status::Pending);
    }
}
