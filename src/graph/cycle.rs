//! Cycle detection.

use std::collections::HashSet;
use std::hash::Hash;

use crate::types::{Direction, GraphKind};

use super::Graph;

impl<V: Clone + Eq + Hash + Ord> Graph<V> {
    /// True if the graph contains a cycle. Self-loops count.
    ///
    /// Directed graphs look for an edge back to a vertex still on the DFS
    /// path. Undirected graphs look for an edge to an already visited vertex
    /// other than the one the search arrived from.
    pub fn has_cycle(&self) -> bool {
        let found = match self.kind() {
            GraphKind::Directed => self.has_cycle_directed(),
            GraphKind::Undirected => self.has_cycle_undirected(),
        };
        if found {
            log::debug!("cycle detected in {} graph", self.kind());
        }
        found
    }

    fn has_cycle_directed(&self) -> bool {
        let mut visited: HashSet<V> = HashSet::new();
        let mut on_path: HashSet<V> = HashSet::new();

        for root in self.vertices() {
            if !visited.insert(root.clone()) {
                continue;
            }
            on_path.insert(root.clone());
            let neighbors = self.adjacent(&root, Direction::Outbound);
            let mut stack = vec![(root, neighbors, 0usize)];

            while let Some((v, neighbors, next)) = stack.last_mut() {
                let Some(n) = neighbors.get(*next).cloned() else {
                    on_path.remove(&*v);
                    stack.pop();
                    continue;
                };
                *next += 1;
                if on_path.contains(&n) {
                    return true;
                }
                if visited.insert(n.clone()) {
                    on_path.insert(n.clone());
                    let neighbors = self.adjacent(&n, Direction::Outbound);
                    stack.push((n, neighbors, 0));
                }
            }
        }
        false
    }

    fn has_cycle_undirected(&self) -> bool {
        let mut visited: HashSet<V> = HashSet::new();

        for root in self.vertices() {
            if !visited.insert(root.clone()) {
                continue;
            }
            let neighbors = self.adjacent(&root, Direction::Both);
            // (vertex, parent, neighbors, next); the root has no parent, so
            // any visited neighbor of it closes a cycle, self-loops included.
            let mut stack: Vec<(V, Option<V>, Vec<V>, usize)> = vec![(root, None, neighbors, 0)];

            while let Some((v, parent, neighbors, next)) = stack.last_mut() {
                let Some(n) = neighbors.get(*next).cloned() else {
                    stack.pop();
                    continue;
                };
                *next += 1;
                if visited.insert(n.clone()) {
                    let parent = Some(v.clone());
                    let neighbors = self.adjacent(&n, Direction::Both);
                    stack.push((n, parent, neighbors, 0));
                } else if parent.as_ref() != Some(&n) {
                    return true;
                }
            }
        }
        false
    }
}
