//! Priority-queue plumbing shared by the heap-driven strategies.
//!
//! `std::collections::BinaryHeap` is a max-heap and `f64` is not `Ord`, so
//! the entry type implements a reversed total order over keys that are
//! guaranteed finite at insertion into the model. The ordering is:
//!
//! 1. `primary` ascending (f, g, or h depending on the strategy)
//! 2. `secondary` ascending (g for A*-style keys, otherwise 0)
//! 3. insertion sequence ascending, so equal-priority entries pop FIFO
//!
//! The explicit sequence number is the documented tie-break: results are
//! reproducible regardless of heap internals.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::NodeId;
use crate::path::PathId;

#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub primary: f64,
    pub secondary: f64,
    /// Accumulated edge-weight cost, carried for reporting; never part of
    /// the ordering unless a strategy also uses it as a key.
    pub cost: f64,
    pub seq: u64,
    pub node: NodeId,
    pub path: PathId,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: the smallest key is the greatest heap element.
        other
            .primary
            .total_cmp(&self.primary)
            .then_with(|| other.secondary.total_cmp(&self.secondary))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Min-heap over [`Entry`] handing out FIFO sequence numbers.
#[derive(Debug, Default)]
pub struct MinQueue {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl MinQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn push(&mut self, primary: f64, secondary: f64, cost: f64, node: NodeId, path: PathId) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            primary,
            secondary,
            cost,
            seq,
            node,
            path,
        });
    }

    pub fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }
}
