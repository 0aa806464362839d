//! Beam search.

use log::debug;

use crate::context::{SearchContext, SearchError};
use crate::graph::NodeId;
use crate::path::{FoundPath, PathArena, PathId};
use crate::search::resources::ResourceTracker;

/// Width-bounded best-first search ordered by raw heuristic value.
///
/// Each round expands every frontier member; a member whose node *is* the
/// goal returns its path before any expansion. Candidates that would revisit
/// a node already on their own path are rejected (cycle prevention is
/// per-path, not global). Survivors are sorted ascending by the heuristic of
/// the candidate node (not by path cost or g+h), with a stable sort so
/// equal heuristics keep generation (FIFO) order, then truncated to `width`.
///
/// Incomplete by design: a width smaller than the branching factor can throw
/// away the only path to the goal. That trade-off is the point of the
/// strategy and is preserved as-is.
pub fn beam(
    cx: &SearchContext,
    start: NodeId,
    goal: NodeId,
    width: usize,
) -> Result<Option<FoundPath>, SearchError> {
    if width == 0 {
        return Err(SearchError::InvalidQuery {
            reason: "beam width must be >= 1".to_string(),
        });
    }

    let graph = &cx.graph;
    let mut tracker = ResourceTracker::new(cx.limits);

    let mut arena = PathArena::new();
    let root = arena.root(start);
    tracker.bump_path_entries("beam", 1)?;

    // (heuristic of node, generation seq, node, path)
    let mut frontier: Vec<(f64, u64, NodeId, PathId)> = vec![(0.0, 0, start, root)];
    let mut seq: u64 = 0;

    while !frontier.is_empty() {
        let mut candidates: Vec<(f64, u64, NodeId, PathId)> = Vec::new();

        for &(_, _, node, path) in &frontier {
            tracker.bump_steps("beam", 1)?;

            if node == goal {
                let nodes = arena.materialize(path);
                let cost = graph.path_cost(&nodes)?;
                return Ok(Some(FoundPath { nodes, cost }));
            }

            let neighbors = graph.neighbors(node);
            tracker.try_reserve_vec("beam", "candidates", &mut candidates, neighbors.len())?;
            for edge in neighbors {
                if arena.contains(path, edge.to) {
                    continue;
                }
                let extended = arena.extend(path, edge.to);
                tracker.bump_path_entries("beam", 1)?;
                tracker.bump_frontier("beam", 1)?;
                candidates.push((graph.heuristic(edge.to)?, seq, edge.to, extended));
                seq += 1;
            }
        }

        // Stable on the (h, seq) key: equal heuristics stay FIFO.
        candidates.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
        if candidates.len() > width {
            debug!(
                "beam: truncating {} candidates to width {}",
                candidates.len(),
                width
            );
            candidates.truncate(width);
        }

        frontier = candidates;
    }

    Ok(None)
}
