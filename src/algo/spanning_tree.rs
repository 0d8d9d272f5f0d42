//! Minimum spanning trees (forests, for disconnected graphs).

use std::collections::HashSet;
use std::hash::Hash;

use crate::collections::{DisjointSet, PriorityQueue};
use crate::graph::Graph;
use crate::types::{Edge, GraphKind, GraphResult};

impl<V: Clone + Eq + Hash + Ord> Graph<V> {
    /// Minimum spanning forest with Kruskal's algorithm.
    ///
    /// Returns a new undirected graph holding every vertex and only the
    /// forest edges. Fails with `NotApplicable` on directed graphs.
    pub fn kruskal(&self) -> GraphResult<Graph<V>, V> {
        self.require_kind(GraphKind::Undirected, "kruskal")?;
        let mut forest = self.empty_forest()?;

        // `edges` yields each undirected edge once; the stable sort keeps
        // equal weights in (from, to) order.
        let mut edges = self.edges();
        edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

        let mut sets: DisjointSet<V> = self.vertex_iter().cloned().collect();
        for Edge { from, to, weight } in edges {
            if sets.union(&from, &to) {
                forest.add_edge(from, to, weight)?;
            }
        }

        log::debug!(
            "kruskal kept {} edges, total weight {}",
            forest.num_edges(),
            forest.total_weight()
        );
        Ok(forest)
    }

    /// Minimum spanning forest with Prim's algorithm.
    ///
    /// Grows one tree per connected component from its smallest vertex.
    /// Fails with `NotApplicable` on directed graphs.
    pub fn prim(&self) -> GraphResult<Graph<V>, V> {
        self.require_kind(GraphKind::Undirected, "prim")?;
        let mut forest = self.empty_forest()?;
        let mut visited: HashSet<V> = HashSet::new();

        for start in self.vertices() {
            if !visited.insert(start.clone()) {
                continue;
            }

            let mut frontier: PriorityQueue<(V, V)> = PriorityQueue::new();
            self.push_frontier(&start, &visited, &mut frontier);

            while let Some(((from, to), weight)) = frontier.pop_with_priority() {
                if !visited.insert(to.clone()) {
                    continue;
                }
                self.push_frontier(&to, &visited, &mut frontier);
                forest.add_edge(from, to, weight)?;
            }
        }

        log::debug!(
            "prim kept {} edges, total weight {}",
            forest.num_edges(),
            forest.total_weight()
        );
        Ok(forest)
    }

    /// Undirected graph with every vertex of `self` and no edges.
    fn empty_forest(&self) -> GraphResult<Graph<V>, V> {
        let mut forest = Graph::undirected();
        forest.add_vertices(self.vertex_iter().cloned())?;
        Ok(forest)
    }

    fn push_frontier(&self, v: &V, visited: &HashSet<V>, frontier: &mut PriorityQueue<(V, V)>) {
        for (n, weight) in self.explicit_edges(v) {
            if !visited.contains(n) {
                frontier.push((v.clone(), n.clone()), weight);
            }
        }
    }
}
