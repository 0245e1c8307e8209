//! Min-ordered open set for the A* driver.
//! Decrease-key is lazy: an improved node is pushed again and the older,
//! more expensive entry is dropped by the driver when it is popped after the
//! node was closed.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::nodes::NodeId;

/// Ordering key. Fields compare in declaration order: lowest estimated total
/// first, then the entry closest to the goal, then the earliest insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierEntry {
    pub total: u32,
    pub heuristic: u32,
    seq: u64,
    pub node: NodeId,
}

#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    next_seq: u64,
    peak_len: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: NodeId, total: u32, heuristic: u32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(FrontierEntry { total, heuristic, seq, node }));
        self.peak_len = self.peak_len.max(self.heap.len());
    }

    /// Remove the cheapest entry, or `None` once the frontier is exhausted.
    pub fn pop_min(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier reached, stale entries included.
    pub fn peak_len(&self) -> usize {
        self.peak_len
    }
}
