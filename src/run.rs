//! Dispatch layer: the core-facing contract for external front ends.
//!
//! A front end (form UI, CLI, test harness) populates the
//! [`SearchContext`], builds a [`Request`] naming a strategy and its
//! endpoints, and receives an [`Outcome`]. Both sides of the contract are
//! serde types so they can cross a JSON boundary unchanged.

use serde::{Deserialize, Serialize};

use crate::context::{SearchContext, SearchError};
use crate::path::FoundPath;
use crate::search::astar::a_star;
use crate::search::beam::beam;
use crate::search::branch_bound::{
    branch_and_bound, branch_and_bound_greedy_exit, branch_and_bound_heuristic, greedy_best_first,
};
use crate::search::hill::hill_climbing;
use crate::search::oracle::oracle;
use crate::search::uninformed::{bidirectional, breadth_first, depth_first};
use crate::solve::{alpha_beta, minimax, Role};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStrategy {
    BreadthFirst,
    DepthFirst,
    Bidirectional,
    AStar,
    Oracle,
    Beam { width: usize },
    HillClimbing,
    BranchAndBound,
    BranchAndBoundHeuristic,
    BranchAndBoundGreedyExit { exit_bound: Option<f64> },
    GreedyBestFirst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStrategy {
    Minimax,
    AlphaBeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Request {
    /// Path query over the undirected weighted graph.
    Path {
        strategy: PathStrategy,
        start: String,
        goal: String,
    },
    /// Game-tree evaluation from `root`, maximizing role at the root.
    Game { strategy: GameStrategy, root: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    /// Node names start-to-goal inclusive, plus accumulated edge-weight cost.
    Path { nodes: Vec<String>, cost: f64 },
    /// Disconnected endpoints or exhausted search. A normal result, not an
    /// error.
    NotFound,
    /// Scalar game value from a game-tree strategy.
    Value { value: f64 },
}

/// Resolve names, validate parameters, dispatch, and map the result.
pub fn run(cx: &SearchContext, request: &Request) -> Result<Outcome, SearchError> {
    match request {
        Request::Path {
            strategy,
            start,
            goal,
        } => {
            let start = cx.graph.resolve(start)?;
            let goal = cx.graph.resolve(goal)?;

            let found: Option<FoundPath> = match *strategy {
                PathStrategy::BreadthFirst => breadth_first(cx, start, goal)?,
                PathStrategy::DepthFirst => depth_first(cx, start, goal)?,
                PathStrategy::Bidirectional => bidirectional(cx, start, goal)?,
                PathStrategy::AStar => a_star(cx, start, goal)?,
                PathStrategy::Oracle => oracle(cx, start, goal)?,
                PathStrategy::Beam { width } => beam(cx, start, goal, width)?,
                PathStrategy::HillClimbing => hill_climbing(cx, start, goal)?,
                PathStrategy::BranchAndBound => branch_and_bound(cx, start, goal)?,
                PathStrategy::BranchAndBoundHeuristic => {
                    branch_and_bound_heuristic(cx, start, goal)?
                }
                PathStrategy::BranchAndBoundGreedyExit { exit_bound } => {
                    branch_and_bound_greedy_exit(cx, start, goal, exit_bound)?
                }
                PathStrategy::GreedyBestFirst => greedy_best_first(cx, start, goal)?,
            };

            Ok(match found {
                Some(p) => Outcome::Path {
                    nodes: cx.graph.names(&p.nodes),
                    cost: p.cost,
                },
                None => Outcome::NotFound,
            })
        }

        Request::Game { strategy, root } => {
            let root = cx.game.resolve(root)?;
            let value = match strategy {
                GameStrategy::Minimax => minimax(cx, root, Role::Maximizing)?,
                GameStrategy::AlphaBeta => alpha_beta(cx, root, Role::Maximizing)?,
            };
            Ok(Outcome::Value { value })
        }
    }
}
