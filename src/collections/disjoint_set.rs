//! Union-find over arbitrary hashable elements.

use std::collections::HashMap;
use std::hash::Hash;

/// Disjoint-set forest with union by rank and path compression.
#[derive(Debug, Clone)]
pub struct DisjointSet<T> {
    /// Element -> slot in `parent` / `rank`.
    slots: HashMap<T, usize>,
    parent: Vec<usize>,
    rank: Vec<u8>,
    /// Number of distinct sets.
    sets: usize,
}

impl<T: Eq + Hash> DisjointSet<T> {
    /// Create a new, empty forest.
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
            parent: Vec::new(),
            rank: Vec::new(),
            sets: 0,
        }
    }

    /// Add `item` as a singleton set. Returns false if it was already known.
    pub fn make_set(&mut self, item: T) -> bool {
        if self.slots.contains_key(&item) {
            return false;
        }
        let slot = self.parent.len();
        self.slots.insert(item, slot);
        self.parent.push(slot);
        self.rank.push(0);
        self.sets += 1;
        true
    }

    /// Representative slot of the set containing `item`.
    pub fn find(&mut self, item: &T) -> Option<usize> {
        let slot = *self.slots.get(item)?;
        Some(self.find_slot(slot))
    }

    fn find_slot(&mut self, slot: usize) -> usize {
        let mut root = slot;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Path compression
        let mut current = slot;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// Returns true if two distinct sets were merged, false if they were
    /// already joined or either element is unknown.
    pub fn union(&mut self, a: &T, b: &T) -> bool {
        let (Some(ra), Some(rb)) = (self.find(a), self.find(b)) else {
            return false;
        };
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        self.sets -= 1;
        true
    }

    /// True when both elements are known and share a set.
    pub fn connected(&mut self, a: &T, b: &T) -> bool {
        match (self.find(a), self.find(b)) {
            (Some(ra), Some(rb)) => ra == rb,
            _ => false,
        }
    }

    /// Number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

impl<T: Eq + Hash> Default for DisjointSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FromIterator<T> for DisjointSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.make_set(item);
        }
        set
    }
}
