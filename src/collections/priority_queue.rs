//! Min-priority queue keyed by an `f64` priority.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Heap slot ordered by priority, then by insertion sequence.
///
/// The sequence keeps pops stable for equal priorities, so runs over the
/// same input make the same choices.
#[derive(Debug, Clone)]
struct HeapEntry<T> {
    priority: f64,
    sequence: u64,
    item: T,
}

impl<T> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for HeapEntry<T> {}

impl<T> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for HeapEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.sequence.cmp(&other.sequence))
    }
}

/// Queue that always yields the item with the smallest priority.
///
/// Items are never re-prioritized in place; algorithms push a fresh entry
/// and skip stale ones when popped.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Reverse<HeapEntry<T>>>,
    next_sequence: u64,
}

impl<T> PriorityQueue<T> {
    /// Create a new, empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    /// Create an empty queue with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    /// Insert an item with the given priority.
    pub fn push(&mut self, item: T, priority: f64) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Reverse(HeapEntry {
            priority,
            sequence,
            item,
        }));
    }

    /// Remove and return the item with the smallest priority.
    pub fn pop(&mut self) -> Option<T> {
        self.pop_with_priority().map(|(item, _)| item)
    }

    /// Remove and return the smallest item together with its priority.
    pub fn pop_with_priority(&mut self) -> Option<(T, f64)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.item, entry.priority))
    }

    /// Priority of the item `pop` would return next.
    pub fn peek_priority(&self) -> Option<f64> {
        self.heap.peek().map(|Reverse(entry)| entry.priority)
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
