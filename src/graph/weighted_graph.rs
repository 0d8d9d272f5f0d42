//! Core graph structure: vertices keyed by value, each owning an explicit
//! and an implicit weight map.
//!
//! Every edge `a -> b` lives in `a`'s explicit map. Directed graphs record
//! the reverse reference in `b`'s implicit map (inbound edges); undirected
//! graphs store the edge again in `b`'s explicit map and never touch the
//! implicit one.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::types::{Direction, Edge, GraphError, GraphKind, GraphResult};

/// Edge weights attached to a single vertex.
#[derive(Debug, Clone)]
pub(crate) struct Adjacency<V> {
    /// Outbound edges (directed) or all incident edges (undirected).
    pub(crate) explicit: HashMap<V, f64>,
    /// Inbound edges. Always empty for undirected graphs.
    pub(crate) implicit: HashMap<V, f64>,
}

impl<V> Adjacency<V> {
    fn new() -> Self {
        Self {
            explicit: HashMap::new(),
            implicit: HashMap::new(),
        }
    }
}

impl<V: Eq + Hash> PartialEq for Adjacency<V> {
    fn eq(&self, other: &Self) -> bool {
        self.explicit == other.explicit && self.implicit == other.implicit
    }
}

/// A directed or undirected weighted graph over vertex values `V`.
///
/// The key set of the adjacency map is the vertex set, so every vertex has
/// exactly one adjacency record.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    kind: GraphKind,
    adjacency: HashMap<V, Adjacency<V>>,
}

impl<V> Graph<V> {
    /// Create a new empty graph of the given kind.
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            adjacency: HashMap::new(),
        }
    }

    /// Create a new empty directed graph.
    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    /// Create a new empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    /// The kind fixed at construction.
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// True if edges carry a direction.
    pub fn is_directed(&self) -> bool {
        self.kind.is_directed()
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// True when the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl<V: Clone + Eq + Hash + Ord> Graph<V> {
    /// Build a graph from a list of weighted edges, inserting endpoints as
    /// they appear.
    pub fn from_edges<I, E>(kind: GraphKind, edges: I) -> GraphResult<Self, V>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<V>>,
    {
        let mut graph = Self::new(kind);
        for edge in edges {
            let Edge { from, to, weight } = edge.into();
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Add a vertex with no edges.
    pub fn add_vertex(&mut self, v: V) -> GraphResult<(), V> {
        if self.adjacency.contains_key(&v) {
            return Err(GraphError::DuplicateVertex(v));
        }
        self.adjacency.insert(v, Adjacency::new());
        Ok(())
    }

    /// Add vertices in order, stopping at the first failure.
    ///
    /// Vertices added before the failure stay in the graph.
    pub fn add_vertices<I>(&mut self, vertices: I) -> GraphResult<(), V>
    where
        I: IntoIterator<Item = V>,
    {
        for v in vertices {
            self.add_vertex(v)?;
        }
        Ok(())
    }

    /// Remove a vertex and every edge touching it.
    pub fn remove_vertex(&mut self, v: &V) -> GraphResult<(), V> {
        let record = self
            .adjacency
            .remove(v)
            .ok_or_else(|| GraphError::MissingVertex(v.clone()))?;

        for n in record.explicit.keys().chain(record.implicit.keys()) {
            if let Some(neighbor) = self.adjacency.get_mut(n) {
                neighbor.explicit.remove(v);
                neighbor.implicit.remove(v);
            }
        }

        log::trace!(
            "removed vertex with {} explicit and {} implicit edges",
            record.explicit.len(),
            record.implicit.len()
        );
        Ok(())
    }

    /// Add an edge from `a` to `b`, inserting either endpoint if missing.
    ///
    /// Fails with `DuplicateEdge` before touching the graph if the edge, or
    /// for undirected graphs its mirror, already exists.
    pub fn add_edge(&mut self, a: V, b: V, weight: f64) -> GraphResult<(), V> {
        if self.has_edge(&a, &b) {
            return Err(GraphError::DuplicateEdge { from: a, to: b });
        }
        if self.kind == GraphKind::Undirected && self.has_edge(&b, &a) {
            return Err(GraphError::DuplicateEdge { from: b, to: a });
        }

        self.adjacency
            .entry(a.clone())
            .or_insert_with(Adjacency::new)
            .explicit
            .insert(b.clone(), weight);

        let mirror = self.adjacency.entry(b).or_insert_with(Adjacency::new);
        match self.kind {
            GraphKind::Directed => mirror.implicit.insert(a, weight),
            GraphKind::Undirected => mirror.explicit.insert(a, weight),
        };
        Ok(())
    }

    /// Remove the edge from `a` to `b` together with its mirror entry.
    pub fn remove_edge(&mut self, a: &V, b: &V) -> GraphResult<(), V> {
        self.require_vertex(a)?;
        self.require_vertex(b)?;

        let weight = self
            .adjacency
            .get_mut(a)
            .and_then(|record| record.explicit.remove(b))
            .ok_or_else(|| GraphError::MissingEdge {
                from: a.clone(),
                to: b.clone(),
            })?;

        let mirror = match self.kind {
            GraphKind::Directed => self
                .adjacency
                .get_mut(b)
                .and_then(|record| record.implicit.remove(a)),
            // A self-loop shares its single entry with its mirror.
            GraphKind::Undirected if a == b => Some(weight),
            GraphKind::Undirected => self
                .adjacency
                .get_mut(b)
                .and_then(|record| record.explicit.remove(a)),
        };

        mirror.map(|_| ()).ok_or_else(|| GraphError::MissingEdge {
            from: b.clone(),
            to: a.clone(),
        })
    }

    /// Vertices adjacent to `v` in the given direction.
    pub fn neighbors(&self, v: &V, direction: Direction) -> GraphResult<Vec<V>, V> {
        Ok(self
            .weighted_neighbors(v, direction)?
            .into_iter()
            .map(|(n, _)| n)
            .collect())
    }

    /// Adjacent vertices with the weight of the connecting edge.
    ///
    /// For `Direction::Both` on a directed graph, a vertex that is both an
    /// outbound and an inbound neighbor reports the outbound weight.
    pub fn weighted_neighbors(&self, v: &V, direction: Direction) -> GraphResult<Vec<(V, f64)>, V> {
        let record = self
            .adjacency
            .get(v)
            .ok_or_else(|| GraphError::MissingVertex(v.clone()))?;

        let mut result: Vec<(V, f64)> = match (self.kind, direction) {
            (GraphKind::Undirected, _) | (GraphKind::Directed, Direction::Outbound) => {
                record.explicit.iter().map(|(n, w)| (n.clone(), *w)).collect()
            }
            (GraphKind::Directed, Direction::Inbound) => {
                record.implicit.iter().map(|(n, w)| (n.clone(), *w)).collect()
            }
            (GraphKind::Directed, Direction::Both) => {
                let mut merged = record.explicit.clone();
                for (n, w) in &record.implicit {
                    merged.entry(n.clone()).or_insert(*w);
                }
                merged.into_iter().collect()
            }
        };
        result.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(result)
    }

    /// Check if the vertex is present.
    pub fn has_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    /// Check if the explicit edge `a -> b` is present.
    pub fn has_edge(&self, a: &V, b: &V) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|record| record.explicit.contains_key(b))
    }

    /// Weight of the edge `a -> b`.
    pub fn edge_weight(&self, a: &V, b: &V) -> GraphResult<f64, V> {
        self.require_vertex(a)?;
        self.require_vertex(b)?;
        self.adjacency
            .get(a)
            .and_then(|record| record.explicit.get(b))
            .copied()
            .ok_or_else(|| GraphError::MissingEdge {
                from: a.clone(),
                to: b.clone(),
            })
    }

    /// Number of edges. Undirected edges are counted once.
    pub fn num_edges(&self) -> usize {
        let stored: usize = self.adjacency.values().map(|r| r.explicit.len()).sum();
        match self.kind {
            GraphKind::Directed => stored,
            GraphKind::Undirected => {
                // Self-loops occupy one slot instead of two.
                let loops = self
                    .adjacency
                    .iter()
                    .filter(|(v, r)| r.explicit.contains_key(*v))
                    .count();
                (stored + loops) / 2
            }
        }
    }

    /// Number of edges incident to `v` in an undirected graph.
    pub fn degree(&self, v: &V) -> GraphResult<usize, V> {
        self.require_kind(GraphKind::Undirected, "degree")?;
        Ok(self.record(v)?.explicit.len())
    }

    /// Number of edges pointing at `v` in a directed graph.
    pub fn in_degree(&self, v: &V) -> GraphResult<usize, V> {
        self.require_kind(GraphKind::Directed, "in_degree")?;
        Ok(self.record(v)?.implicit.len())
    }

    /// Number of edges leaving `v` in a directed graph.
    pub fn out_degree(&self, v: &V) -> GraphResult<usize, V> {
        self.require_kind(GraphKind::Directed, "out_degree")?;
        Ok(self.record(v)?.explicit.len())
    }

    /// All vertices in ascending order.
    pub fn vertices(&self) -> Vec<V> {
        let mut vertices: Vec<V> = self.adjacency.keys().cloned().collect();
        vertices.sort();
        vertices
    }

    /// All edges ordered by `(from, to)`.
    ///
    /// Undirected edges appear once, with `from <= to`.
    pub fn edges(&self) -> Vec<Edge<V>> {
        let mut edges: Vec<Edge<V>> = self
            .adjacency
            .iter()
            .flat_map(|(from, record)| {
                record
                    .explicit
                    .iter()
                    .map(move |(to, weight)| (from, to, *weight))
            })
            .filter(|(from, to, _)| self.kind == GraphKind::Directed || from <= to)
            .map(|(from, to, weight)| Edge::new(from.clone(), to.clone(), weight))
            .collect();
        edges.sort_by(|a, b| a.from.cmp(&b.from).then_with(|| a.to.cmp(&b.to)));
        edges
    }

    /// Sum of all edge weights, each undirected edge counted once.
    pub fn total_weight(&self) -> f64 {
        self.edges().iter().map(|e| e.weight).sum()
    }

    /// Explicit edges leaving `v`, in map order. Empty for unknown vertices.
    pub(crate) fn explicit_edges<'a>(&'a self, v: &V) -> impl Iterator<Item = (&'a V, f64)> + 'a {
        self.adjacency
            .get(v)
            .into_iter()
            .flat_map(|record| record.explicit.iter().map(|(n, w)| (n, *w)))
    }

    /// Sorted neighbor list used by the traversals. Empty for unknown vertices.
    pub(crate) fn adjacent(&self, v: &V, direction: Direction) -> Vec<V> {
        self.neighbors(v, direction).unwrap_or_default()
    }

    /// Iterate over vertices in map order.
    pub(crate) fn vertex_iter(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    pub(crate) fn require_vertex(&self, v: &V) -> GraphResult<(), V> {
        if self.adjacency.contains_key(v) {
            Ok(())
        } else {
            Err(GraphError::MissingVertex(v.clone()))
        }
    }

    pub(crate) fn require_kind(&self, kind: GraphKind, operation: &'static str) -> GraphResult<(), V> {
        if self.kind == kind {
            Ok(())
        } else {
            Err(GraphError::NotApplicable {
                operation,
                kind: self.kind,
            })
        }
    }

    fn record(&self, v: &V) -> GraphResult<&Adjacency<V>, V> {
        self.adjacency
            .get(v)
            .ok_or_else(|| GraphError::MissingVertex(v.clone()))
    }

    #[cfg(test)]
    pub(crate) fn implicit_weight(&self, v: &V, n: &V) -> Option<f64> {
        self.adjacency.get(v).and_then(|r| r.implicit.get(n)).copied()
    }
}

impl<V: Eq + Hash> PartialEq for Graph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.adjacency == other.adjacency
    }
}

impl<V: Clone + Eq + Hash + Ord + fmt::Display> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edges = self.edges();
        if edges.is_empty() {
            return write!(f, "{{ }}");
        }
        write!(f, "{{ ")?;
        for (i, edge) in edges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {})", edge.from, edge.to)?;
        }
        write!(f, " }}")
    }
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::directed()
    }
}
