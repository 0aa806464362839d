//! Minimax evaluation.
//!
//! A node with an assigned score returns it directly: the leaf check runs
//! before children are consulted, so a scored node with outgoing edges is
//! still terminal. Otherwise children are evaluated recursively with the
//! opposing role, in insertion order, and the maximum (maximizing role) or
//! minimum (minimizing role) of their values is returned.
//!
//! The model is a directed graph, not a checked DAG: an on-current-path guard
//! turns a cycle into [`SearchError::MalformedGameTree`] instead of unbounded
//! recursion, and a childless scoreless node is the same error rather than an
//! empty max/min. Recursion depth is bounded by `max_depth` so a valid but
//! very deep tree surfaces `LimitExceeded` instead of exhausting the call
//! stack.

use rustc_hash::FxHashSet;

use crate::context::{SearchContext, SearchError};
use crate::game::GameTree;
use crate::graph::NodeId;
use crate::search::resources::ResourceTracker;
use crate::solve::Role;

pub fn minimax(cx: &SearchContext, root: NodeId, role: Role) -> Result<f64, SearchError> {
    let mut tracker = ResourceTracker::new(cx.limits);
    let mut on_path: FxHashSet<NodeId> = FxHashSet::default();
    evaluate(&cx.game, &mut tracker, &mut on_path, root, 0, role)
}

fn evaluate(
    game: &GameTree,
    tracker: &mut ResourceTracker,
    on_path: &mut FxHashSet<NodeId>,
    node: NodeId,
    depth: u64,
    role: Role,
) -> Result<f64, SearchError> {
    tracker.check_depth("minimax", depth)?;
    tracker.bump_steps("minimax", 1)?;

    if let Some(score) = game.score(node) {
        return Ok(score);
    }

    if !on_path.insert(node) {
        return Err(SearchError::MalformedGameTree {
            node: game.name(node).to_string(),
            reason: "cycle on the evaluation path",
        });
    }

    let children = game.children(node);
    if children.is_empty() {
        on_path.remove(&node);
        return Err(SearchError::MalformedGameTree {
            node: game.name(node).to_string(),
            reason: "internal node with no children and no score",
        });
    }

    let mut value = match role {
        Role::Maximizing => f64::NEG_INFINITY,
        Role::Minimizing => f64::INFINITY,
    };
    for &child in children {
        let v = evaluate(game, tracker, on_path, child, depth + 1, role.other())?;
        value = match role {
            Role::Maximizing => value.max(v),
            Role::Minimizing => value.min(v),
        };
    }

    on_path.remove(&node);
    Ok(value)
}
