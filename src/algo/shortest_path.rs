//! Shortest-path algorithms.
//!
//! All of them follow explicit edges only: outbound edges on directed
//! graphs, every edge on undirected ones. Relaxation uses strict `<`, so
//! among equal-weight alternatives the first one found is kept.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::collections::{PriorityQueue, Queue};
use crate::graph::Graph;
use crate::types::{GraphError, GraphResult, PathResult};

/// Shortest paths from one source, keyed by destination.
pub type PathMap<V> = HashMap<V, PathResult<V>>;

/// Shortest paths between every ordered pair, keyed by source then
/// destination.
pub type AllPairsPaths<V> = HashMap<V, PathMap<V>>;

impl<V: Clone + Eq + Hash + Ord> Graph<V> {
    /// Single-source shortest paths with Dijkstra's algorithm.
    ///
    /// Weights must be non-negative; this is not checked. Every vertex gets
    /// an entry, unreachable ones with an infinite distance and no path.
    pub fn dijkstra(&self, source: &V) -> GraphResult<PathMap<V>, V> {
        self.require_vertex(source)?;
        log::trace!("dijkstra over {} vertices", self.num_vertices());

        let mut dist = self.initial_distances(source);
        let mut prev: HashMap<V, V> = HashMap::new();
        let mut settled: HashSet<V> = HashSet::new();
        let mut queue = PriorityQueue::new();
        queue.push(source.clone(), 0.0);

        while let Some(u) = queue.pop() {
            if !settled.insert(u.clone()) {
                continue;
            }
            let du = distance_of(&dist, &u);
            for (v, weight) in self.explicit_edges(&u) {
                let alt = du + weight;
                if alt < distance_of(&dist, v) {
                    dist.insert(v.clone(), alt);
                    prev.insert(v.clone(), u.clone());
                    queue.push(v.clone(), alt);
                }
            }
        }

        Ok(self.collect_paths(source, &dist, &prev))
    }

    /// Single-source shortest paths with the Bellman-Ford algorithm.
    ///
    /// Handles negative weights. A negative cycle reachable from `source`
    /// fails with `NegativeCycle`, carrying a cycle recovered from the
    /// predecessor chain.
    pub fn bellman_ford(&self, source: &V) -> GraphResult<PathMap<V>, V> {
        self.require_vertex(source)?;

        let vertices = self.vertices();
        let mut dist = self.initial_distances(source);
        let mut prev: HashMap<V, V> = HashMap::new();

        for _ in 1..vertices.len() {
            let mut changed = false;
            for u in &vertices {
                let du = distance_of(&dist, u);
                if du == f64::INFINITY {
                    continue;
                }
                for (v, weight) in self.explicit_edges(u) {
                    let alt = du + weight;
                    if alt < distance_of(&dist, v) {
                        dist.insert(v.clone(), alt);
                        prev.insert(v.clone(), u.clone());
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }

        for u in &vertices {
            let du = distance_of(&dist, u);
            if du == f64::INFINITY {
                continue;
            }
            for (v, weight) in self.explicit_edges(u) {
                if du + weight < distance_of(&dist, v) {
                    prev.insert(v.clone(), u.clone());
                    let cycle = negative_cycle(&prev, v, vertices.len());
                    log::debug!("bellman-ford found a negative cycle of {} vertices", cycle.len());
                    return Err(GraphError::NegativeCycle { cycle });
                }
            }
        }

        Ok(self.collect_paths(source, &dist, &prev))
    }

    /// All-pairs shortest paths with the Floyd-Warshall algorithm.
    ///
    /// Fails with `NegativeCycle` when any vertex can reach itself at
    /// negative cost.
    pub fn floyd_warshall(&self) -> GraphResult<AllPairsPaths<V>, V> {
        let vertices = self.vertices();
        let n = vertices.len();
        let index: HashMap<&V, usize> = vertices.iter().enumerate().map(|(i, v)| (v, i)).collect();
        log::trace!("floyd-warshall over {} vertices", n);

        let mut dist = vec![vec![f64::INFINITY; n]; n];
        let mut next: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];
        for (i, row) in dist.iter_mut().enumerate() {
            row[i] = 0.0;
        }
        for (i, u) in vertices.iter().enumerate() {
            for (v, weight) in self.explicit_edges(u) {
                let Some(&j) = index.get(v) else {
                    continue;
                };
                // A non-negative self-loop never beats staying put.
                if weight < dist[i][j] {
                    dist[i][j] = weight;
                    next[i][j] = Some(j);
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                if dist[i][k] == f64::INFINITY {
                    continue;
                }
                for j in 0..n {
                    if dist[k][j] == f64::INFINITY {
                        continue;
                    }
                    let alt = dist[i][k] + dist[k][j];
                    if alt < dist[i][j] {
                        dist[i][j] = alt;
                        next[i][j] = next[i][k];
                    }
                }
            }
        }

        if let Some(i) = (0..n).find(|&i| dist[i][i] < 0.0) {
            let cycle = next_hop_cycle(&next, i)
                .into_iter()
                .map(|k| vertices[k].clone())
                .collect::<Vec<V>>();
            log::debug!("floyd-warshall found a negative cycle of {} vertices", cycle.len());
            return Err(GraphError::NegativeCycle { cycle });
        }

        let mut results: AllPairsPaths<V> = HashMap::with_capacity(n);
        for (i, u) in vertices.iter().enumerate() {
            let mut row: PathMap<V> = HashMap::with_capacity(n);
            for (j, v) in vertices.iter().enumerate() {
                let path = next_hop_path(&next, i, j)
                    .map(|hops| hops.into_iter().map(|k| vertices[k].clone()).collect());
                row.insert(v.clone(), PathResult::new(dist[i][j], path));
            }
            results.insert(u.clone(), row);
        }
        Ok(results)
    }

    /// Shortest path from `source` to `target` with the A* algorithm.
    ///
    /// `heuristic` estimates the remaining cost to `target` and must never
    /// overestimate it for the result to be optimal. An unreachable target
    /// is not an error: the result has an infinite distance and no path.
    pub fn a_star<F>(&self, source: &V, target: &V, mut heuristic: F) -> GraphResult<PathResult<V>, V>
    where
        F: FnMut(&V) -> f64,
    {
        self.require_vertex(source)?;
        self.require_vertex(target)?;

        let mut g_score: HashMap<V, f64> = HashMap::new();
        let mut prev: HashMap<V, V> = HashMap::new();
        let mut closed: HashSet<V> = HashSet::new();
        let mut open = PriorityQueue::new();
        g_score.insert(source.clone(), 0.0);
        open.push(source.clone(), heuristic(source));

        while let Some(current) = open.pop() {
            if &current == target {
                return Ok(PathResult::new(
                    distance_of(&g_score, target),
                    reconstruct_path(&prev, source, target),
                ));
            }
            if !closed.insert(current.clone()) {
                continue;
            }

            let g_current = distance_of(&g_score, &current);
            for (neighbor, weight) in self.explicit_edges(&current) {
                if closed.contains(neighbor) {
                    continue;
                }
                let tentative = g_current + weight;
                if tentative < distance_of(&g_score, neighbor) {
                    prev.insert(neighbor.clone(), current.clone());
                    g_score.insert(neighbor.clone(), tentative);
                    open.push(neighbor.clone(), tentative + heuristic(neighbor));
                }
            }
        }

        log::debug!("a* exhausted the open set without reaching the target");
        Ok(PathResult::unreachable())
    }

    /// Hop-count shortest paths from `source`; every edge counts as 1.
    pub fn bfs_shortest_path(&self, source: &V) -> GraphResult<PathMap<V>, V> {
        self.require_vertex(source)?;

        let mut dist = self.initial_distances(source);
        let mut prev: HashMap<V, V> = HashMap::new();
        let mut queue = Queue::new();
        queue.enqueue(source.clone());

        while let Some(u) = queue.dequeue() {
            let du = distance_of(&dist, &u);
            for (v, _) in self.explicit_edges(&u) {
                if distance_of(&dist, v) == f64::INFINITY {
                    dist.insert(v.clone(), du + 1.0);
                    prev.insert(v.clone(), u.clone());
                    queue.enqueue(v.clone());
                }
            }
        }

        Ok(self.collect_paths(source, &dist, &prev))
    }

    /// Infinite distance everywhere except the source.
    fn initial_distances(&self, source: &V) -> HashMap<V, f64> {
        let mut dist: HashMap<V, f64> = self
            .vertex_iter()
            .map(|v| (v.clone(), f64::INFINITY))
            .collect();
        dist.insert(source.clone(), 0.0);
        dist
    }

    fn collect_paths(&self, source: &V, dist: &HashMap<V, f64>, prev: &HashMap<V, V>) -> PathMap<V> {
        self.vertex_iter()
            .map(|v| {
                let distance = distance_of(dist, v);
                let path = if distance == f64::INFINITY {
                    None
                } else {
                    reconstruct_path(prev, source, v)
                };
                (v.clone(), PathResult::new(distance, path))
            })
            .collect()
    }
}

fn distance_of<V: Eq + Hash>(dist: &HashMap<V, f64>, v: &V) -> f64 {
    dist.get(v).copied().unwrap_or(f64::INFINITY)
}

/// Walk the predecessor map back from `target` to `source`.
///
/// Returns `None` when the chain breaks off or revisits a vertex before
/// reaching `source`.
pub(crate) fn reconstruct_path<V: Clone + Eq + Hash>(
    prev: &HashMap<V, V>,
    source: &V,
    target: &V,
) -> Option<Vec<V>> {
    if source == target {
        return Some(vec![source.clone()]);
    }

    let mut path = vec![target.clone()];
    let mut seen: HashSet<&V> = HashSet::from([target]);
    let mut current = target;
    while current != source {
        current = prev.get(current)?;
        if !seen.insert(current) {
            return None;
        }
        path.push(current.clone());
    }
    path.reverse();
    Some(path)
}

/// Recover a cycle from a predecessor map after a relaxation into `from`
/// proved one exists.
///
/// Stepping back `steps` times (the vertex count) lands on the cycle
/// itself; the cycle is then read off in edge order.
fn negative_cycle<V: Clone + Eq + Hash>(prev: &HashMap<V, V>, from: &V, steps: usize) -> Vec<V> {
    let mut current = from;
    for _ in 0..steps {
        match prev.get(current) {
            Some(p) => current = p,
            None => break,
        }
    }

    let start = current;
    let mut cycle = vec![start.clone()];
    let mut seen: HashSet<&V> = HashSet::from([start]);
    let mut cursor = prev.get(start);
    while let Some(p) = cursor {
        if p == start || !seen.insert(p) {
            break;
        }
        cycle.push(p.clone());
        cursor = prev.get(p);
    }
    cycle.reverse();
    cycle
}

/// Follow next hops from `i` to `j`. `None` if `j` is unreachable or the
/// hops loop.
fn next_hop_path(next: &[Vec<Option<usize>>], i: usize, j: usize) -> Option<Vec<usize>> {
    if i == j {
        return Some(vec![i]);
    }
    next[i][j]?;

    let mut path = vec![i];
    let mut seen = HashSet::from([i]);
    let mut current = i;
    while current != j {
        current = next[current][j]?;
        if !seen.insert(current) {
            return None;
        }
        path.push(current);
    }
    Some(path)
}

/// Best-effort cycle through `i` read from the next-hop matrix.
fn next_hop_cycle(next: &[Vec<Option<usize>>], i: usize) -> Vec<usize> {
    let mut cycle = vec![i];
    let mut current = i;
    for _ in 0..next.len() {
        match next[current][i] {
            Some(k) if k == i => return cycle,
            Some(k) if !cycle.contains(&k) => {
                cycle.push(k);
                current = k;
            }
            _ => break,
        }
    }
    vec![i]
}
