//! Topological ordering of directed acyclic graphs.

use std::collections::HashSet;
use std::hash::Hash;

use crate::graph::Graph;
use crate::types::{Direction, GraphError, GraphKind, GraphResult};

impl<V: Clone + Eq + Hash + Ord> Graph<V> {
    /// Order the vertices so that for every edge `u -> v`, `u` comes before
    /// `v`.
    ///
    /// Fails with `NotApplicable` on undirected graphs and `CycleDetected`
    /// as soon as the search meets an edge back onto its own path.
    pub fn topological_sort(&self) -> GraphResult<Vec<V>, V> {
        self.require_kind(GraphKind::Directed, "topological_sort")?;

        let mut visited: HashSet<V> = HashSet::new();
        let mut on_path: HashSet<V> = HashSet::new();
        let mut finished: Vec<V> = Vec::with_capacity(self.num_vertices());

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
                    finished.push(v.clone());
                    stack.pop();
                    continue;
                };
                *next += 1;
                if on_path.contains(&n) {
                    log::debug!("topological sort aborted: cycle through an on-path vertex");
                    return Err(GraphError::CycleDetected);
                }
                if visited.insert(n.clone()) {
                    on_path.insert(n.clone());
                    let neighbors = self.adjacent(&n, Direction::Outbound);
                    stack.push((n, neighbors, 0));
                }
            }
        }

        // Post-order lists every vertex after its descendants.
        finished.reverse();
        Ok(finished)
    }
}
