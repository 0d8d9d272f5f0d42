//! Connected and strongly connected components.

use std::collections::HashSet;
use std::hash::Hash;
use std::ops::ControlFlow;

use crate::types::{Direction, GraphKind, GraphResult};

use super::Graph;

impl<V: Clone + Eq + Hash + Ord> Graph<V> {
    /// Direction used for component searches: outbound for directed graphs.
    fn component_direction(&self) -> Direction {
        match self.kind() {
            GraphKind::Directed => Direction::Outbound,
            GraphKind::Undirected => Direction::Both,
        }
    }

    /// Vertices reachable from `v`.
    ///
    /// For undirected graphs this is the connected component of `v`. For
    /// directed graphs it is the set reachable along outbound edges, which
    /// is a superset of the strong component; use
    /// [`Graph::strongly_connected_components`] for the latter.
    pub fn connected_component(&self, v: &V) -> GraphResult<Vec<V>, V> {
        self.depth_first_search(v, self.component_direction())
    }

    /// Partition of the vertex set into components.
    ///
    /// Vertices are seeded in ascending order. On directed graphs a vertex
    /// belongs to the first component whose seed reaches it.
    pub fn connected_components(&self) -> Vec<Vec<V>> {
        let direction = self.component_direction();
        let mut visited: HashSet<V> = HashSet::new();
        let mut components = Vec::new();

        for v in self.vertices() {
            if visited.contains(&v) {
                continue;
            }
            let mut component = Vec::new();
            let _ = self.dfs_from(&v, direction, &mut visited, &mut |x: &V| {
                component.push(x.clone());
                ControlFlow::Continue(())
            });
            components.push(component);
        }

        log::trace!("found {} components", components.len());
        components
    }

    /// Strongly connected components (Kosaraju).
    ///
    /// The first pass records DFS finishing order along outbound edges, the
    /// second collects components along inbound edges in reverse finishing
    /// order. Undirected graphs return their connected components.
    pub fn strongly_connected_components(&self) -> Vec<Vec<V>> {
        if self.kind() == GraphKind::Undirected {
            return self.connected_components();
        }

        let finished = self.finishing_order(Direction::Outbound);

        let mut assigned: HashSet<V> = HashSet::new();
        let mut components = Vec::new();
        for v in finished.iter().rev() {
            if assigned.contains(v) {
                continue;
            }
            let mut component = Vec::new();
            let _ = self.dfs_from(v, Direction::Outbound.reversed(), &mut assigned, &mut |x: &V| {
                component.push(x.clone());
                ControlFlow::Continue(())
            });
            component.sort();
            components.push(component);
        }

        log::trace!("found {} strongly connected components", components.len());
        components
    }

    /// Vertices in DFS post-order over the whole graph.
    fn finishing_order(&self, direction: Direction) -> Vec<V> {
        let mut visited: HashSet<V> = HashSet::new();
        let mut order = Vec::with_capacity(self.num_vertices());

        for root in self.vertices() {
            if !visited.insert(root.clone()) {
                continue;
            }
            let neighbors = self.adjacent(&root, direction);
            let mut stack = vec![(root, neighbors, 0usize)];

            while let Some((v, neighbors, next)) = stack.last_mut() {
                if let Some(n) = neighbors.get(*next).cloned() {
                    *next += 1;
                    if visited.insert(n.clone()) {
                        let neighbors = self.adjacent(&n, direction);
                        stack.push((n, neighbors, 0));
                    }
                } else {
                    order.push(v.clone());
                    stack.pop();
                }
            }
        }
        order
    }
}
