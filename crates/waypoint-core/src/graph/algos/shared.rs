use std::cmp::Ordering;

use crate::graph::types::{NodeId, Weight};

/// Priority queue entry, wrapped in `Reverse` to make `BinaryHeap` a min-heap.
///
/// `priority` orders the heap (distance for Dijkstra, f-score for A*);
/// `cost` is the path cost known when the entry was pushed, which lets a
/// search recognize stale entries. Equal priorities fall back to node ID so
/// pops are deterministic.
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub node_id: NodeId,
    pub priority: Weight,
    pub cost: Weight,
}

impl HeapEntry {
    pub fn new(node_id: NodeId, priority: Weight, cost: Weight) -> Self {
        Self {
            node_id,
            priority,
            cost,
        }
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.node_id.cmp(&other.node_id))
    }
}
