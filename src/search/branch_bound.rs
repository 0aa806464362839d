//! Branch-and-bound family, plus greedy best-first.
//!
//! Shared discipline for the three branch-and-bound variants:
//! - priority queue over partial paths; cycle prevention is per-path only, so
//!   the same node may sit in many queued paths at once (no closed set)
//! - a scalar `best_cost` bound, +∞ until the goal is first popped, tightened
//!   on every strictly cheaper goal pop
//! - any popped entry whose raw accumulated cost is >= `best_cost` is pruned
//!   unexpanded; the bound test always uses raw g even when the queue is
//!   ordered by g + h
//!
//! The cost of that discipline is combinatorial: the number of paths explored
//! before the bound tightens grows with the number of simple paths, which is
//! why every variant runs under the tracker's budgets.

use log::debug;

use crate::context::{SearchContext, SearchError};
use crate::graph::NodeId;
use crate::path::{FoundPath, PathArena, PathId};
use crate::search::frontier::MinQueue;
use crate::search::resources::ResourceTracker;

/// Plain branch-and-bound: queue ordered strictly by accumulated path cost,
/// no heuristic anywhere. Returns the globally optimal path for non-negative
/// weights once the queue is exhausted.
pub fn branch_and_bound(
    cx: &SearchContext,
    start: NodeId,
    goal: NodeId,
) -> Result<Option<FoundPath>, SearchError> {
    bounded_search(cx, start, goal, false, None)
}

/// Branch-and-bound ordered by g + h(node); the pruning test still compares
/// raw g against the bound. An A*-style search without a closed set: it can
/// revisit cost-equivalent subpaths, trading time and memory for simplicity,
/// and is optimal under the same admissibility conditions as A*.
pub fn branch_and_bound_heuristic(
    cx: &SearchContext,
    start: NodeId,
    goal: NodeId,
) -> Result<Option<FoundPath>, SearchError> {
    bounded_search(cx, start, goal, true, None)
}

/// Heuristic branch-and-bound with a "good enough, stop early" policy: the
/// moment the goal is popped with cost <= `exit_bound`, that path is returned
/// without exhausting the queue or verifying optimality. `None` means no
/// bound (+∞), which degenerates to returning the first path found. If a
/// finite bound is never met, exhaustion falls back to the best path found.
pub fn branch_and_bound_greedy_exit(
    cx: &SearchContext,
    start: NodeId,
    goal: NodeId,
    exit_bound: Option<f64>,
) -> Result<Option<FoundPath>, SearchError> {
    if let Some(b) = exit_bound {
        if b.is_nan() || b < 0.0 {
            return Err(SearchError::InvalidQuery {
                reason: format!("exit bound must be non-negative, got {b}"),
            });
        }
    }
    bounded_search(cx, start, goal, true, Some(exit_bound.unwrap_or(f64::INFINITY)))
}

fn bounded_search(
    cx: &SearchContext,
    start: NodeId,
    goal: NodeId,
    use_heuristic: bool,
    exit_bound: Option<f64>,
) -> Result<Option<FoundPath>, SearchError> {
    let graph = &cx.graph;
    let mut tracker = ResourceTracker::new(cx.limits);

    let mut arena = PathArena::new();
    let mut queue = MinQueue::new();

    let root = arena.root(start);
    tracker.bump_path_entries("branch_bound", 1)?;
    let root_key = if use_heuristic {
        graph.heuristic(start)?
    } else {
        0.0
    };
    queue.push(root_key, 0.0, 0.0, start, root);

    let mut best: Option<(PathId, f64)> = None;
    let mut best_cost = f64::INFINITY;

    while let Some(entry) = queue.pop() {
        if entry.node == goal {
            if let Some(eb) = exit_bound {
                if entry.cost <= eb {
                    debug!("branch_bound: greedy exit at cost {}", entry.cost);
                    return Ok(Some(FoundPath {
                        nodes: arena.materialize(entry.path),
                        cost: entry.cost,
                    }));
                }
            }
            if entry.cost < best_cost {
                debug!(
                    "branch_bound: bound tightened {} -> {}",
                    best_cost, entry.cost
                );
                best_cost = entry.cost;
                best = Some((entry.path, entry.cost));
            }
        }

        // Bound test on raw accumulated cost, never on the ordering key.
        if entry.cost >= best_cost {
            continue;
        }
        tracker.bump_steps("branch_bound", 1)?;

        for edge in graph.neighbors(entry.node) {
            if arena.contains(entry.path, edge.to) {
                continue;
            }
            let new_cost = entry.cost + edge.weight;
            let key = if use_heuristic {
                new_cost + graph.heuristic(edge.to)?
            } else {
                new_cost
            };
            let extended = arena.extend(entry.path, edge.to);
            tracker.bump_path_entries("branch_bound", 1)?;
            tracker.bump_frontier("branch_bound", 1)?;
            queue.push(key, new_cost, new_cost, edge.to, extended);
        }
    }

    Ok(best.map(|(path, cost)| FoundPath {
        nodes: arena.materialize(path),
        cost,
    }))
}

/// Greedy best-first search: the queue is ordered purely by the heuristic of
/// the entry's node; path cost never enters the ordering key. The first path
/// to pop the goal wins and its true accumulated weight is reported as cost.
/// Not optimal even with an admissible heuristic, by design.
pub fn greedy_best_first(
    cx: &SearchContext,
    start: NodeId,
    goal: NodeId,
) -> Result<Option<FoundPath>, SearchError> {
    let graph = &cx.graph;
    let mut tracker = ResourceTracker::new(cx.limits);

    let mut arena = PathArena::new();
    let mut queue = MinQueue::new();

    let root = arena.root(start);
    tracker.bump_path_entries("greedy_best_first", 1)?;
    queue.push(graph.heuristic(start)?, 0.0, 0.0, start, root);

    while let Some(entry) = queue.pop() {
        if entry.node == goal {
            return Ok(Some(FoundPath {
                nodes: arena.materialize(entry.path),
                cost: entry.cost,
            }));
        }
        tracker.bump_steps("greedy_best_first", 1)?;

        for edge in graph.neighbors(entry.node) {
            if arena.contains(entry.path, edge.to) {
                continue;
            }
            let extended = arena.extend(entry.path, edge.to);
            tracker.bump_path_entries("greedy_best_first", 1)?;
            tracker.bump_frontier("greedy_best_first", 1)?;
            queue.push(
                graph.heuristic(edge.to)?,
                0.0,
                entry.cost + edge.weight,
                edge.to,
                extended,
            );
        }
    }

    Ok(None)
}
