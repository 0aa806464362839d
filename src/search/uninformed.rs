//! Uninformed strategies: breadth-first, depth-first, bidirectional.
//!
//! None of these consult heuristics. Neighbor enumeration order is adjacency
//! insertion order throughout, so results are deterministic for a fixed build
//! sequence.

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::context::{SearchContext, SearchError};
use crate::graph::{Graph, NodeId};
use crate::path::{FoundPath, PathArena, PathId};
use crate::search::resources::ResourceTracker;

/// Breadth-first search over *partial paths*.
///
/// The queue holds whole paths rather than nodes, and a node is closed only
/// after all its neighbors have been enqueued, so the same node may sit in
/// several in-flight paths before it is closed. The first path whose tip is
/// the goal is shortest by edge count (paths leave the FIFO queue in
/// non-decreasing length order). The extra path copies relative to node-only
/// BFS are a memory/time cost, bounded by the tracker, not a correctness
/// defect; the arena keeps each enqueue O(1).
pub fn breadth_first(
    cx: &SearchContext,
    start: NodeId,
    goal: NodeId,
) -> Result<Option<FoundPath>, SearchError> {
    let graph = &cx.graph;
    let mut tracker = ResourceTracker::new(cx.limits);

    if start == goal {
        return Ok(Some(FoundPath {
            nodes: vec![start],
            cost: 0.0,
        }));
    }

    let mut arena = PathArena::new();
    let mut queue: VecDeque<PathId> = VecDeque::new();
    let mut visited: FxHashSet<NodeId> = FxHashSet::default();

    queue.push_back(arena.root(start));
    tracker.bump_path_entries("bfs", 1)?;

    while let Some(path) = queue.pop_front() {
        let node = arena.tip(path);
        if visited.contains(&node) {
            continue;
        }
        tracker.bump_steps("bfs", 1)?;

        for edge in graph.neighbors(node) {
            let extended = arena.extend(path, edge.to);
            tracker.bump_path_entries("bfs", 1)?;
            tracker.bump_frontier("bfs", 1)?;
            queue.push_back(extended);

            if edge.to == goal {
                let nodes = arena.materialize(extended);
                let cost = graph.path_cost(&nodes)?;
                return Ok(Some(FoundPath { nodes, cost }));
            }
        }

        visited.insert(node);
    }

    Ok(None)
}

/// Depth-first search.
///
/// Descends along the first unvisited neighbor in adjacency order, with a
/// visited set shared across the whole search. Returns the first path
/// reaching the goal; not shortest. The descent runs on an explicit frame
/// stack (node, next neighbor index), so a deep chain costs heap entries
/// under the tracker's budgets, never call-stack frames.
pub fn depth_first(
    cx: &SearchContext,
    start: NodeId,
    goal: NodeId,
) -> Result<Option<FoundPath>, SearchError> {
    let graph = &cx.graph;
    let mut tracker = ResourceTracker::new(cx.limits);
    let mut visited: FxHashSet<NodeId> = FxHashSet::default();

    // The stack is exactly the current path; `idx` is the next neighbor of
    // `node` left to try.
    let mut stack: Vec<(NodeId, usize)> = vec![(start, 0)];
    visited.insert(start);
    tracker.bump_steps("dfs", 1)?;

    if start == goal {
        return Ok(Some(FoundPath {
            nodes: vec![start],
            cost: 0.0,
        }));
    }

    while let Some(&(node, idx)) = stack.last() {
        let neighbors = graph.neighbors(node);
        let Some(edge) = neighbors.get(idx) else {
            stack.pop();
            continue;
        };
        if let Some(top) = stack.last_mut() {
            top.1 += 1;
        }

        if visited.contains(&edge.to) {
            continue;
        }
        visited.insert(edge.to);
        tracker.bump_steps("dfs", 1)?;
        tracker.bump_frontier("dfs", 1)?;
        stack.push((edge.to, 0));

        if edge.to == goal {
            let nodes: Vec<NodeId> = stack.iter().map(|&(n, _)| n).collect();
            let cost = graph.path_cost(&nodes)?;
            return Ok(Some(FoundPath { nodes, cost }));
        }
    }

    Ok(None)
}

/// Bidirectional search.
///
/// Two FIFO frontiers, one per endpoint, each with a parent map recording how
/// a node was first reached from its side. Every outer round pops and expands
/// exactly one node from the start side, then one from the goal side; the
/// sides are not depth-synchronized. A neighbor already recorded by the other
/// side is a meeting point; the result is always oriented start-to-goal no
/// matter which side discovered it.
pub fn bidirectional(
    cx: &SearchContext,
    start: NodeId,
    goal: NodeId,
) -> Result<Option<FoundPath>, SearchError> {
    let graph = &cx.graph;
    let mut tracker = ResourceTracker::new(cx.limits);

    if start == goal {
        return Ok(Some(FoundPath {
            nodes: vec![start],
            cost: 0.0,
        }));
    }

    let mut start_queue: VecDeque<NodeId> = VecDeque::from([start]);
    let mut goal_queue: VecDeque<NodeId> = VecDeque::from([goal]);
    let mut start_parents: FxHashMap<NodeId, Option<NodeId>> = FxHashMap::default();
    let mut goal_parents: FxHashMap<NodeId, Option<NodeId>> = FxHashMap::default();
    start_parents.insert(start, None);
    goal_parents.insert(goal, None);

    while !(start_queue.is_empty() && goal_queue.is_empty()) {
        if let Some(meeting) = expand_side(
            graph,
            &mut tracker,
            &mut start_queue,
            &mut start_parents,
            &goal_parents,
        )? {
            return finish(graph, &start_parents, &goal_parents, meeting).map(Some);
        }

        if let Some(meeting) = expand_side(
            graph,
            &mut tracker,
            &mut goal_queue,
            &mut goal_parents,
            &start_parents,
        )? {
            return finish(graph, &start_parents, &goal_parents, meeting).map(Some);
        }
    }

    Ok(None)
}

fn expand_side(
    graph: &Graph,
    tracker: &mut ResourceTracker,
    queue: &mut VecDeque<NodeId>,
    parents: &mut FxHashMap<NodeId, Option<NodeId>>,
    other_parents: &FxHashMap<NodeId, Option<NodeId>>,
) -> Result<Option<NodeId>, SearchError> {
    let Some(current) = queue.pop_front() else {
        return Ok(None);
    };
    tracker.bump_steps("bidirectional", 1)?;

    for edge in graph.neighbors(current) {
        if parents.contains_key(&edge.to) {
            continue;
        }
        parents.insert(edge.to, Some(current));
        tracker.bump_frontier("bidirectional", 1)?;
        queue.push_back(edge.to);

        if other_parents.contains_key(&edge.to) {
            return Ok(Some(edge.to));
        }
    }

    Ok(None)
}

/// Concatenate both parent chains: start-side chain reversed, then the
/// goal-side chain forward, skipping the meeting node's duplicate.
fn finish(
    graph: &Graph,
    start_parents: &FxHashMap<NodeId, Option<NodeId>>,
    goal_parents: &FxHashMap<NodeId, Option<NodeId>>,
    meeting: NodeId,
) -> Result<FoundPath, SearchError> {
    let mut nodes: Vec<NodeId> = Vec::new();

    let mut cur = Some(meeting);
    while let Some(n) = cur {
        nodes.push(n);
        cur = start_parents[&n];
    }
    nodes.reverse();

    let mut cur = goal_parents[&meeting];
    while let Some(n) = cur {
        nodes.push(n);
        cur = goal_parents[&n];
    }

    let cost = graph.path_cost(&nodes)?;
    Ok(FoundPath { nodes, cost })
}
