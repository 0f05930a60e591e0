//! Open list ordered by estimated total cost.
//!
//! Entries are keyed by `(f_cost, insertion_seq)`. Equal `f_cost` entries
//! come out in the order they went in.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use waypoint_core::Cost;

use crate::node::NodeId;

/// The frontier ordering key.
///
/// Lower `f_cost` first, then older `seq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: Cost,
    pub seq: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(self.seq.cmp(&other.seq))
    }
}

/// A frontier entry: a node plus its ordering key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pub key: FrontierKey,
    pub node: NodeId,
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-priority frontier over arena nodes.
///
/// `BinaryHeap` is a max-heap, so entries are stored under `Reverse`.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    next_seq: u64,
    high_water: usize,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `node` with priority `f_cost`.
    pub fn insert(&mut self, node: NodeId, f_cost: Cost) {
        let key = FrontierKey {
            f_cost,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.heap.push(Reverse(FrontierEntry { key, node }));
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// The best entry, without removing it.
    pub fn peek_min(&self) -> Option<&FrontierEntry> {
        self.heap.peek().map(|Reverse(entry)| entry)
    }

    /// Remove and return the best entry.
    pub fn pop_min(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier has reached.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
