//! Bounded neighborhood search.

use std::collections::HashMap;
use std::hash::Hash;

use crate::collections::Queue;
use crate::types::{Direction, GraphError, GraphResult};

use super::Graph;

impl<V: Clone + Eq + Hash + Ord> Graph<V> {
    /// Vertices between `minimum_distance` and `order` hops from `v`,
    /// both inclusive, in ascending order.
    ///
    /// `v` itself is included only when `minimum_distance` is zero. The
    /// direction is ignored for undirected graphs.
    pub fn neighborhood(
        &self,
        v: &V,
        order: usize,
        minimum_distance: usize,
        direction: Direction,
    ) -> GraphResult<Vec<V>, V> {
        if order < minimum_distance {
            return Err(GraphError::InvalidArgument {
                arg: format!("order = {}", order),
                reason: format!(
                    "order must be greater than or equal to minimum_distance ({})",
                    minimum_distance
                ),
            });
        }
        self.require_vertex(v)?;

        let mut distances: HashMap<V, usize> = HashMap::new();
        let mut result = Vec::new();
        let mut queue = Queue::new();
        distances.insert(v.clone(), 0);
        queue.enqueue((v.clone(), 0usize));

        while let Some((current, distance)) = queue.dequeue() {
            if distance >= minimum_distance {
                result.push(current.clone());
            }
            // Nothing past `order` can qualify.
            if distance == order {
                continue;
            }
            for n in self.adjacent(&current, direction) {
                if !distances.contains_key(&n) {
                    distances.insert(n.clone(), distance + 1);
                    queue.enqueue((n, distance + 1));
                }
            }
        }

        result.sort();
        Ok(result)
    }
}
