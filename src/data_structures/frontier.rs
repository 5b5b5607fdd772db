// Sample code pulled (and modified) from: https://doc.rust-lang.org/nightly/std/collections/binary_heap/index.html#examples

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::node_registry::NodeId;

/// An entry in the open set.
#[derive(Debug, Copy, Clone)]
pub struct FrontierEntry {
    pub node: NodeId,
    /// g_score of the node at the time it was pushed
    pub g_score: f64,
    /// f_score of the node at the time it was pushed
    pub f_score: f64,
    sequence: u64,
}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Notice that we flip the ordering on costs.
        // Ties go to whichever entry was pushed first.
        other
            .f_score
            .total_cmp(&self.f_score)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Min-priority open set keyed on f_score.
///
/// Entries are never updated in place: a relaxed node is pushed again, and the
/// older entry becomes stale. Callers detect stale entries by comparing the
/// entry's g_score against the node's current one.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    pushed: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            pushed: 0,
        }
    }

    pub fn push(&mut self, node: NodeId, g_score: f64, f_score: f64) {
        self.heap.push(FrontierEntry {
            node,
            g_score,
            f_score,
            sequence: self.pushed,
        });
        self.pushed += 1;
    }

    /// Removes the entry with the lowest f_score.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
