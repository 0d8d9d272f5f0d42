//! Graph traversal algorithms (DFS, BFS) driven by a visitor callback.
//!
//! Both traversals keep their own work list instead of recursing, so very
//! long chains cannot exhaust the call stack.

use std::collections::HashSet;
use std::hash::Hash;
use std::ops::ControlFlow;

use crate::collections::Queue;
use crate::types::{Direction, GraphResult};

use super::Graph;

/// One vertex on the DFS work stack with the neighbors still to try.
struct Frame<V> {
    neighbors: Vec<V>,
    next: usize,
}

impl<V: Clone + Eq + Hash + Ord> Graph<V> {
    /// Pre-order depth-first traversal from `start`.
    ///
    /// `visitor` runs on each vertex before its neighbors are explored.
    /// Returning `ControlFlow::Break` stops the traversal at once.
    pub fn depth_first_visit<F>(&self, start: &V, direction: Direction, mut visitor: F) -> GraphResult<(), V>
    where
        F: FnMut(&V) -> ControlFlow<()>,
    {
        self.require_vertex(start)?;
        let mut visited: HashSet<V> = HashSet::new();
        let _ = self.dfs_from(start, direction, &mut visited, &mut visitor);
        Ok(())
    }

    /// Level-order breadth-first traversal from `start`.
    ///
    /// Same contract as [`Graph::depth_first_visit`].
    pub fn breadth_first_visit<F>(&self, start: &V, direction: Direction, mut visitor: F) -> GraphResult<(), V>
    where
        F: FnMut(&V) -> ControlFlow<()>,
    {
        self.require_vertex(start)?;

        let mut visited: HashSet<V> = HashSet::new();
        let mut queue = Queue::new();
        visited.insert(start.clone());
        queue.enqueue(start.clone());

        while let Some(current) = queue.dequeue() {
            if visitor(&current).is_break() {
                return Ok(());
            }
            for n in self.adjacent(&current, direction) {
                if visited.insert(n.clone()) {
                    queue.enqueue(n);
                }
            }
        }
        Ok(())
    }

    /// Vertices reachable from `start`, in depth-first pre-order.
    pub fn depth_first_search(&self, start: &V, direction: Direction) -> GraphResult<Vec<V>, V> {
        let mut result = Vec::new();
        self.depth_first_visit(start, direction, |v| {
            result.push(v.clone());
            ControlFlow::Continue(())
        })?;
        Ok(result)
    }

    /// Vertices reachable from `start`, in breadth-first order.
    pub fn breadth_first_search(&self, start: &V, direction: Direction) -> GraphResult<Vec<V>, V> {
        let mut result = Vec::new();
        self.breadth_first_visit(start, direction, |v| {
            result.push(v.clone());
            ControlFlow::Continue(())
        })?;
        Ok(result)
    }

    /// Explicit-stack DFS sharing `visited` with the caller.
    ///
    /// Vertices already in `visited` are neither reported nor expanded, which
    /// lets component searches partition the vertex set.
    pub(crate) fn dfs_from<F>(
        &self,
        start: &V,
        direction: Direction,
        visited: &mut HashSet<V>,
        visitor: &mut F,
    ) -> ControlFlow<()>
    where
        F: FnMut(&V) -> ControlFlow<()>,
    {
        if visited.contains(start) {
            return ControlFlow::Continue(());
        }
        visitor(start)?;
        visited.insert(start.clone());

        let mut stack = vec![Frame {
            neighbors: self.adjacent(start, direction),
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(n) = frame.neighbors.get(frame.next).cloned() else {
                stack.pop();
                continue;
            };
            frame.next += 1;
            if visited.contains(&n) {
                continue;
            }
            visitor(&n)?;
            visited.insert(n.clone());
            stack.push(Frame {
                neighbors: self.adjacent(&n, direction),
                next: 0,
            });
        }
        ControlFlow::Continue(())
    }
}
