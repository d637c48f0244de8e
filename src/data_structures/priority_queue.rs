use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

use ordered_float::OrderedFloat;

/// Min-priority frontier keyed by tentative distance.
///
/// Decrease-key is done by pushing the vertex again; callers skip stale entries
/// on extraction. Entries with equal keys come out in ascending vertex order.
#[derive(Debug)]
pub struct MinFrontier<V>
where
    V: Copy + Ord + Debug,
{
    heap: BinaryHeap<Reverse<(OrderedFloat<f64>, V)>>,
}

impl<V> MinFrontier<V>
where
    V: Copy + Ord + Debug,
{
    pub fn new() -> Self {
        MinFrontier {
            heap: BinaryHeap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinFrontier {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn push(&mut self, vertex: V, key: f64) {
        self.heap.push(Reverse((OrderedFloat(key), vertex)));
    }

    /// Removes the entry with the smallest key
    pub fn pop(&mut self) -> Option<(V, f64)> {
        self.heap
            .pop()
            .map(|Reverse((OrderedFloat(key), vertex))| (vertex, key))
    }
}

impl<V> Default for MinFrontier<V>
where
    V: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
