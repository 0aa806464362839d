//! Reference shortest path (Dijkstra).
//!
//! Ground truth for the optimality claims of the other strategies: tests
//! compare A* and branch-and-bound costs against this oracle. Requires the
//! model's non-negative weights; needs no heuristics.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::context::{SearchContext, SearchError};
use crate::graph::NodeId;
use crate::path::{FoundPath, PathArena};
use crate::search::frontier::MinQueue;
use crate::search::resources::ResourceTracker;

/// True minimum-weight path from `start` to `goal`, or `None` when they are
/// disconnected.
pub fn oracle(
    cx: &SearchContext,
    start: NodeId,
    goal: NodeId,
) -> Result<Option<FoundPath>, SearchError> {
    let graph = &cx.graph;
    let mut tracker = ResourceTracker::new(cx.limits);

    let mut arena = PathArena::new();
    let mut queue = MinQueue::new();
    let mut closed: FxHashSet<NodeId> = FxHashSet::default();
    let mut dist: FxHashMap<NodeId, f64> = FxHashMap::default();

    dist.insert(start, 0.0);
    let root = arena.root(start);
    tracker.bump_path_entries("oracle", 1)?;
    queue.push(0.0, 0.0, 0.0, start, root);

    while let Some(entry) = queue.pop() {
        if entry.node == goal {
            return Ok(Some(FoundPath {
                nodes: arena.materialize(entry.path),
                cost: entry.cost,
            }));
        }

        if closed.contains(&entry.node) {
            continue;
        }
        closed.insert(entry.node);
        tracker.bump_steps("oracle", 1)?;

        for edge in graph.neighbors(entry.node) {
            if closed.contains(&edge.to) {
                continue;
            }
            let new_cost = entry.cost + edge.weight;
            let improves = match dist.get(&edge.to) {
                Some(&known) => new_cost < known,
                None => true,
            };
            if !improves {
                continue;
            }
            dist.insert(edge.to, new_cost);

            let extended = arena.extend(entry.path, edge.to);
            tracker.bump_path_entries("oracle", 1)?;
            tracker.bump_frontier("oracle", 1)?;
            queue.push(new_cost, 0.0, new_cost, edge.to, extended);
        }
    }

    Ok(None)
}
