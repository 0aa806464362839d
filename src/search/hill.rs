//! Hill climbing.

use crate::context::{SearchContext, SearchError};
use crate::graph::NodeId;
use crate::path::FoundPath;
use crate::search::resources::ResourceTracker;

/// Greedy local descent on the heuristic.
///
/// From the current node, move to the neighbor with the lowest heuristic
/// value (first in adjacency order on ties). Stop as soon as that value is
/// not *strictly* better than the current node's, or when the current node
/// has no neighbors. Success only if the walk ends on the goal; stopping at a
/// non-goal local optimum is a normal not-found result, even when a longer
/// improving path exists elsewhere. No backtracking, no restarts.
pub fn hill_climbing(
    cx: &SearchContext,
    start: NodeId,
    goal: NodeId,
) -> Result<Option<FoundPath>, SearchError> {
    let graph = &cx.graph;
    let mut tracker = ResourceTracker::new(cx.limits);

    let mut current = start;
    let mut nodes: Vec<NodeId> = vec![current];

    while current != goal {
        tracker.bump_steps("hill_climbing", 1)?;

        let neighbors = graph.neighbors(current);
        if neighbors.is_empty() {
            return Ok(None);
        }

        // First neighbor wins ties.
        let mut next = neighbors[0].to;
        let mut next_h = graph.heuristic(next)?;
        for edge in &neighbors[1..] {
            let h = graph.heuristic(edge.to)?;
            if h < next_h {
                next_h = h;
                next = edge.to;
            }
        }

        if next_h >= graph.heuristic(current)? {
            break;
        }

        current = next;
        nodes.push(current);
    }

    if current == goal {
        let cost = graph.path_cost(&nodes)?;
        Ok(Some(FoundPath { nodes, cost }))
    } else {
        Ok(None)
    }
}
