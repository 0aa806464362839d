//! A* search.

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::context::{SearchContext, SearchError};
use crate::graph::NodeId;
use crate::path::{FoundPath, PathArena};
use crate::search::frontier::MinQueue;
use crate::search::resources::ResourceTracker;

/// A* over non-negative weights.
///
/// Queue key is (g + h, g, insertion seq); g is accumulated cost from the
/// start, h the heuristic of the entry's node. A closed set skips popped
/// nodes that were already expanded with a better cost, and a best-known-cost
/// map admits a neighbor push only when it improves (or first establishes)
/// that neighbor's cost. The first time the goal is popped its path is
/// returned; with an admissible heuristic that cost is optimal, with an
/// inadmissible one it may not be; either way the search terminates.
///
/// Every visited node must carry a heuristic; a missing one surfaces as
/// [`SearchError::MissingHeuristic`].
pub fn a_star(
    cx: &SearchContext,
    start: NodeId,
    goal: NodeId,
) -> Result<Option<FoundPath>, SearchError> {
    let graph = &cx.graph;
    let mut tracker = ResourceTracker::new(cx.limits);

    let mut arena = PathArena::new();
    let mut queue = MinQueue::new();
    let mut closed: FxHashSet<NodeId> = FxHashSet::default();
    let mut best_cost: FxHashMap<NodeId, f64> = FxHashMap::default();

    best_cost.insert(start, 0.0);
    let root = arena.root(start);
    tracker.bump_path_entries("a_star", 1)?;
    queue.push(graph.heuristic(start)?, 0.0, 0.0, start, root);

    while let Some(entry) = queue.pop() {
        if entry.node == goal {
            debug!(
                "a_star: goal popped at cost {} after {} steps",
                entry.cost,
                tracker.counts().steps
            );
            return Ok(Some(FoundPath {
                nodes: arena.materialize(entry.path),
                cost: entry.cost,
            }));
        }

        if closed.contains(&entry.node) {
            continue;
        }
        closed.insert(entry.node);
        tracker.bump_steps("a_star", 1)?;

        for edge in graph.neighbors(entry.node) {
            let new_cost = entry.cost + edge.weight;
            let improves = match best_cost.get(&edge.to) {
                Some(&known) => new_cost < known,
                None => true,
            };
            if !improves {
                continue;
            }
            best_cost.insert(edge.to, new_cost);

            let f = new_cost + graph.heuristic(edge.to)?;
            let extended = arena.extend(entry.path, edge.to);
            tracker.bump_path_entries("a_star", 1)?;
            tracker.bump_frontier("a_star", 1)?;
            queue.push(f, new_cost, new_cost, edge.to, extended);
        }
    }

    Ok(None)
}
