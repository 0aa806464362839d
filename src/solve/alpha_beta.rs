//! Alpha-beta pruning.
//!
//! Same recursion as [`crate::solve::minimax`], carrying an (alpha, beta)
//! window. A maximizing node raises alpha to its best child value and skips
//! the remaining children once beta <= alpha (beta cutoff); a minimizing node
//! lowers beta symmetrically (alpha cutoff). The returned value is identical
//! to minimax for the same tree and root; only the visit count differs, and
//! that depends on child insertion order (no move-ordering heuristic).

use rustc_hash::FxHashSet;

use crate::context::{SearchContext, SearchError};
use crate::game::GameTree;
use crate::graph::NodeId;
use crate::search::resources::ResourceTracker;
use crate::solve::Role;

pub fn alpha_beta(cx: &SearchContext, root: NodeId, role: Role) -> Result<f64, SearchError> {
    let mut tracker = ResourceTracker::new(cx.limits);
    let mut on_path: FxHashSet<NodeId> = FxHashSet::default();
    evaluate(
        &cx.game,
        &mut tracker,
        &mut on_path,
        root,
        0,
        f64::NEG_INFINITY,
        f64::INFINITY,
        role,
    )
}

#[allow(clippy::too_many_arguments)]
fn evaluate(
    game: &GameTree,
    tracker: &mut ResourceTracker,
    on_path: &mut FxHashSet<NodeId>,
    node: NodeId,
    depth: u64,
    mut alpha: f64,
    mut beta: f64,
    role: Role,
) -> Result<f64, SearchError> {
    tracker.check_depth("alpha_beta", depth)?;
    tracker.bump_steps("alpha_beta", 1)?;

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
        let v = evaluate(game, tracker, on_path, child, depth + 1, alpha, beta, role.other())?;
        match role {
            Role::Maximizing => {
                value = value.max(v);
                alpha = alpha.max(v);
            }
            Role::Minimizing => {
                value = value.min(v);
                beta = beta.min(v);
            }
        }
        if beta <= alpha {
            break;
        }
    }

    on_path.remove(&node);
    Ok(value)
}
