//! Directed game-tree model for adversarial evaluation.
//!
//! A node is a *leaf* iff it carries an assigned score; evaluators check the
//! score before consulting children, so a scored node with outgoing edges is
//! still treated as terminal. The structure is a plain directed graph: it is
//! not required to be acyclic, and the evaluators in [`crate::solve`] carry an
//! on-current-path guard that turns a cycle into an explicit error instead of
//! unbounded recursion.

use rustc_hash::FxHashMap;

use crate::context::SearchError;
use crate::graph::NodeId;

#[derive(Debug, Clone)]
struct GameNode {
    name: String,
    score: Option<f64>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct GameTree {
    nodes: Vec<GameNode>,
    index: FxHashMap<String, NodeId>,
}

impl GameTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Intern `name`, creating an (internal, scoreless) node if missing.
    pub fn add_node(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(GameNode {
            name: name.to_string(),
            score: None,
            children: Vec::new(),
        });
        self.index.insert(name.to_string(), id);
        id
    }

    /// Intern `name` as a leaf with the given terminal score.
    pub fn add_leaf(&mut self, name: &str, score: f64) -> Result<NodeId, SearchError> {
        if !score.is_finite() {
            return Err(SearchError::NonFiniteValue {
                what: "leaf score",
                node: name.to_string(),
                value: score,
            });
        }
        let id = self.add_node(name);
        self.nodes[id].score = Some(score);
        Ok(id)
    }

    /// Add a directed parent -> child edge, creating missing endpoints.
    /// Children keep insertion order; duplicate edges are ignored.
    pub fn add_edge(&mut self, parent: &str, child: &str) {
        let p = self.add_node(parent);
        let c = self.add_node(child);
        if !self.nodes[p].children.contains(&c) {
            self.nodes[p].children.push(c);
        }
    }

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

    pub fn score(&self, id: NodeId) -> Option<f64> {
        self.nodes[id].score
    }

    /// Children in insertion order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }
}
