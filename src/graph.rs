//! Weighted undirected graph for pathfinding problems.
//!
//! Node identifiers are caller-supplied strings, interned to dense [`NodeId`]
//! indices on first insertion. Adjacency lists keep insertion order, which is
//! the neighbor-enumeration order every strategy relies on for deterministic
//! results.
//!
//! Attribute typing happens at insertion time: weights must be finite and
//! non-negative, heuristics must be finite. Searches can therefore order raw
//! `f64` values with `total_cmp` without re-validating.

use rustc_hash::FxHashMap;

use crate::context::SearchError;

pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub to: NodeId,
    pub weight: f64,
}

#[derive(Debug, Clone)]
struct NodeRecord {
    name: String,
    /// Estimated remaining cost to a goal. Absent unless supplied at insertion.
    heuristic: Option<f64>,
    adj: Vec<Edge>,
}

/// Weighted undirected graph with per-node optional heuristic annotations.
///
/// The graph is mutated only by the external caller between searches; every
/// strategy takes it by shared reference and never modifies it.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<NodeRecord>,
    index: FxHashMap<String, NodeId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Intern `name`, creating the node if it does not exist yet.
    pub fn add_node(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(NodeRecord {
            name: name.to_string(),
            heuristic: None,
            adj: Vec::new(),
        });
        self.index.insert(name.to_string(), id);
        id
    }

    /// Intern `name` and attach a heuristic value to it.
    ///
    /// Re-adding a node overwrites its heuristic (matching the interactive
    /// entry model this library serves).
    pub fn add_node_with_heuristic(&mut self, name: &str, h: f64) -> Result<NodeId, SearchError> {
        if !h.is_finite() {
            return Err(SearchError::NonFiniteValue {
                what: "heuristic",
                node: name.to_string(),
                value: h,
            });
        }
        let id = self.add_node(name);
        self.nodes[id].heuristic = Some(h);
        Ok(id)
    }

    /// Add an undirected edge, creating missing endpoints.
    ///
    /// Negative and non-finite weights are rejected here so that no search
    /// ever observes them. Re-adding an edge overwrites its weight in both
    /// directions.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: f64) -> Result<(), SearchError> {
        if !weight.is_finite() {
            return Err(SearchError::NonFiniteValue {
                what: "edge weight",
                node: format!("{a} - {b}"),
                value: weight,
            });
        }
        if weight < 0.0 {
            return Err(SearchError::NegativeWeight {
                a: a.to_string(),
                b: b.to_string(),
                weight,
            });
        }

        let ia = self.add_node(a);
        let ib = self.add_node(b);
        Self::link(&mut self.nodes, ia, ib, weight);
        if ia != ib {
            Self::link(&mut self.nodes, ib, ia, weight);
        }
        Ok(())
    }

    fn link(nodes: &mut [NodeRecord], from: NodeId, to: NodeId, weight: f64) {
        if let Some(e) = nodes[from].adj.iter_mut().find(|e| e.to == to) {
            e.weight = weight;
        } else {
            nodes[from].adj.push(Edge { to, weight });
        }
    }

    /// Resolve a caller-supplied name to its interned id.
    pub fn resolve(&self, name: &str) -> Result<NodeId, SearchError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| SearchError::UnknownNode {
                name: name.to_string(),
            })
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id].name
    }

    /// Neighbors in insertion order.
    pub fn neighbors(&self, id: NodeId) -> &[Edge] {
        &self.nodes[id].adj
    }

    /// Heuristic lookup. Visiting a node without one is a precondition
    /// violation for heuristic-driven strategies, never silently defaulted.
    pub fn heuristic(&self, id: NodeId) -> Result<f64, SearchError> {
        self.nodes[id]
            .heuristic
            .ok_or_else(|| SearchError::MissingHeuristic {
                node: self.nodes[id].name.clone(),
            })
    }

    /// Sum of edge weights along a node sequence.
    ///
    /// Callers pass sequences produced by a search, so consecutive nodes are
    /// adjacent by construction; a non-adjacent pair indicates caller misuse
    /// and is surfaced as `InvalidQuery`.
    pub fn path_cost(&self, nodes: &[NodeId]) -> Result<f64, SearchError> {
        let mut cost = 0.0;
        for pair in nodes.windows(2) {
            let edge = self.nodes[pair[0]]
                .adj
                .iter()
                .find(|e| e.to == pair[1])
                .ok_or_else(|| SearchError::InvalidQuery {
                    reason: format!(
                        "path step {} -> {} is not an edge",
                        self.nodes[pair[0]].name, self.nodes[pair[1]].name
                    ),
                })?;
            cost += edge.weight;
        }
        Ok(cost)
    }

    /// Node names for a materialized id sequence.
    pub fn names(&self, nodes: &[NodeId]) -> Vec<String> {
        nodes.iter().map(|&id| self.nodes[id].name.clone()).collect()
    }
}
