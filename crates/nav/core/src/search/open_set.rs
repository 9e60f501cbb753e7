use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::geometry::GridKey;

/// Min-heap of frontier cells keyed by f-score.
///
/// Equal f-scores pop in insertion order so a query always explores the
/// same cells in the same order. A cell may be queued more than once when a
/// cheaper route to it turns up; the search discards the stale copies by
/// checking its closed set on pop.
#[derive(Default)]
pub(crate) struct OpenSet {
    heap: BinaryHeap<OpenEntry>,
    next_seq: u64,
}

impl OpenSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, key: GridKey, f_score: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(OpenEntry { f_score, seq, key });
    }

    pub(crate) fn pop(&mut self) -> Option<GridKey> {
        self.heap.pop().map(|entry| entry.key)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

struct OpenEntry {
    f_score: f64,
    seq: u64,
    key: GridKey,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap is a max-heap.
        other
            .f_score
            .total_cmp(&self.f_score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
