//! Parent-pointer path arena.
//!
//! BFS, beam search and the branch-and-bound family all keep *partial paths*
//! in their frontiers, and several of them may hold the same node in many
//! in-flight paths at once. Copying a node list per enqueue makes every push
//! O(path length); the arena stores each extension as a (node, parent) pair
//! instead, so prefixes are shared structurally and a push is O(1). Ordering
//! semantics are unchanged: an arena id stands for exactly the node sequence
//! the original would have copied.

use crate::graph::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(usize);

#[derive(Debug, Clone, Copy)]
struct PathEntry {
    node: NodeId,
    parent: Option<PathId>,
}

#[derive(Debug, Clone, Default)]
pub struct PathArena {
    entries: Vec<PathEntry>,
}

impl PathArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Start a fresh single-node path.
    pub fn root(&mut self, node: NodeId) -> PathId {
        self.push_entry(node, None)
    }

    /// Extend `parent` by one node.
    pub fn extend(&mut self, parent: PathId, node: NodeId) -> PathId {
        self.push_entry(node, Some(parent))
    }

    fn push_entry(&mut self, node: NodeId, parent: Option<PathId>) -> PathId {
        let id = PathId(self.entries.len());
        self.entries.push(PathEntry { node, parent });
        id
    }

    /// Last node of the path.
    pub fn tip(&self, id: PathId) -> NodeId {
        self.entries[id.0].node
    }

    /// Whether `node` already occurs on this path (per-path cycle check).
    pub fn contains(&self, id: PathId, node: NodeId) -> bool {
        let mut cur = Some(id);
        while let Some(p) = cur {
            let e = self.entries[p.0];
            if e.node == node {
                return true;
            }
            cur = e.parent;
        }
        false
    }

    /// Reconstruct the start-to-tip node sequence.
    pub fn materialize(&self, id: PathId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut cur = Some(id);
        while let Some(p) = cur {
            let e = self.entries[p.0];
            out.push(e.node);
            cur = e.parent;
        }
        out.reverse();
        out
    }
}

/// A completed search result: node sequence (start to goal, inclusive) and
/// accumulated edge-weight cost.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundPath {
    pub nodes: Vec<NodeId>,
    pub cost: f64,
}
