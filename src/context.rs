//! Search context: the caller-owned state every strategy runs against.
//!
//! The context bundles:
//! - the pathfinding [`Graph`](crate::graph::Graph) and its heuristics
//! - the directed [`GameTree`](crate::game::GameTree)
//! - explicit budgets via [`ResourceLimits`]
//!
//! There is no process-wide store: the caller builds a context, mutates it
//! between runs, and passes it by shared reference into each strategy call.
//! The borrow checker enforces that nothing mutates it mid-search.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::GameTree;
use crate::graph::Graph;

#[derive(Debug, Clone, Default)]
pub struct SearchContext {
    pub graph: Graph,
    pub game: GameTree,
    pub limits: ResourceLimits,
}

impl SearchContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: ResourceLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
/// Search budgets used to bound memory/time consumption.
///
/// Several strategies (plain branch-and-bound, BFS/DFS on highly connected
/// graphs) have running time proportional to the number of simple paths, so
/// every expansion loop bumps a counter. The limits are not exact byte
/// bounds, but correlate strongly with allocation size:
/// - `max_steps`: generic loop-iteration / node-visit guard
/// - `max_frontier_entries`: queue/heap pushes admitted over a whole run
/// - `max_path_entries`: partial-path arena entries admitted over a run
/// - `max_depth`: recursion depth for the game-tree evaluators; the default
///   keeps valid deep trees well inside an 8 MiB call stack
pub struct ResourceLimits {
    pub max_steps: u64,
    pub max_frontier_entries: u64,
    pub max_path_entries: u64,
    pub max_depth: u64,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_steps: 50_000_000,
            max_frontier_entries: 10_000_000,
            max_path_entries: 10_000_000,
            max_depth: 10_000,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Running counters tracked during a search.
pub struct ResourceCounts {
    pub steps: u64,
    pub frontier_entries: u64,
    pub path_entries: u64,
}

#[derive(Debug)]
/// Structured errors returned by model mutation and search routines.
///
/// "Not found" (disconnected endpoints, exhausted frontier) is a normal
/// result, not an error: path strategies return `Ok(None)` for it.
pub enum SearchError {
    /// A start/goal/root name is not present in the model.
    UnknownNode { name: String },
    /// A heuristic-driven strategy visited a node with no heuristic value.
    MissingHeuristic { node: String },
    /// Negative edge weights are unsupported; rejected at insertion.
    NegativeWeight { a: String, b: String, weight: f64 },
    /// A NaN or infinite weight/heuristic/score was supplied at insertion.
    NonFiniteValue {
        what: &'static str,
        node: String,
        value: f64,
    },
    /// Game-tree evaluation reached a childless scoreless node, or a cycle on
    /// the current evaluation path.
    MalformedGameTree {
        node: String,
        reason: &'static str,
    },
    /// A strategy parameter is out of range (e.g. beam width 0).
    InvalidQuery { reason: String },
    /// A configured resource limit was exceeded.
    LimitExceeded {
        stage: &'static str,
        metric: &'static str,
        limit: u64,
        observed: u64,
        counts: ResourceCounts,
    },
    /// A `try_reserve` allocation failed for a large structure.
    AllocationFailed {
        stage: &'static str,
        structure: &'static str,
        counts: ResourceCounts,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::UnknownNode { name } => write!(f, "unknown node: {name}"),
            SearchError::MissingHeuristic { node } => {
                write!(f, "no heuristic value for node {node}")
            }
            SearchError::NegativeWeight { a, b, weight } => {
                write!(f, "negative weight {weight} on edge {a} - {b}")
            }
            SearchError::NonFiniteValue { what, node, value } => {
                write!(f, "non-finite {what} {value} for {node}")
            }
            SearchError::MalformedGameTree { node, reason } => {
                write!(f, "malformed game tree at {node}: {reason}")
            }
            SearchError::InvalidQuery { reason } => write!(f, "invalid query: {reason}"),
            SearchError::LimitExceeded {
                stage,
                metric,
                limit,
                observed,
                counts,
            } => write!(
                f,
                "limit exceeded at {stage}: {metric} (limit={limit}, observed={observed}); \
                 counts(steps={}, frontier_entries={}, path_entries={})",
                counts.steps, counts.frontier_entries, counts.path_entries
            ),
            SearchError::AllocationFailed {
                stage,
                structure,
                counts,
            } => write!(
                f,
                "allocation failed at {stage} for {structure}; \
                 counts(steps={}, frontier_entries={}, path_entries={})",
                counts.steps, counts.frontier_entries, counts.path_entries
            ),
        }
    }
}

impl std::error::Error for SearchError {}
