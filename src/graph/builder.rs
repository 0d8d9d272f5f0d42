//! Fluent API for building Graph instances.

use std::hash::Hash;

use crate::types::{Edge, GraphKind, GraphResult};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Vertices and edges are recorded as given and validated all at once by
/// [`GraphBuilder::build`], so the first duplicate reported is the first one
/// added.
#[derive(Debug, Clone)]
pub struct GraphBuilder<V> {
    kind: GraphKind,
    vertices: Vec<V>,
    edges: Vec<Edge<V>>,
}

impl<V: Clone + Eq + Hash + Ord> GraphBuilder<V> {
    /// Create a new builder for a directed graph.
    pub fn new() -> Self {
        Self::with_kind(GraphKind::Directed)
    }

    /// Create a new builder for a graph of a specific kind.
    pub fn with_kind(kind: GraphKind) -> Self {
        Self {
            kind,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Switch the graph being built to undirected.
    pub fn undirected(mut self) -> Self {
        self.kind = GraphKind::Undirected;
        self
    }

    /// Switch the graph being built to directed.
    pub fn directed(mut self) -> Self {
        self.kind = GraphKind::Directed;
        self
    }

    /// Add an isolated vertex.
    pub fn vertex(mut self, v: V) -> Self {
        self.vertices.push(v);
        self
    }

    /// Add several isolated vertices.
    pub fn vertices<I: IntoIterator<Item = V>>(mut self, vertices: I) -> Self {
        self.vertices.extend(vertices);
        self
    }

    /// Add a weighted edge.
    pub fn edge(mut self, from: V, to: V, weight: f64) -> Self {
        self.edges.push(Edge::new(from, to, weight));
        self
    }

    /// Add an edge of weight 1.
    pub fn link(self, from: V, to: V) -> Self {
        self.edge(from, to, 1.0)
    }

    /// Add a path `v0 -> v1 -> ... -> vn` of unit-weight edges.
    pub fn path<I: IntoIterator<Item = V>>(mut self, vertices: I) -> Self {
        let mut iter = vertices.into_iter();
        if let Some(mut prev) = iter.next() {
            let mut linked = false;
            for next in iter {
                self.edges.push(Edge::new(prev, next.clone(), 1.0));
                prev = next;
                linked = true;
            }
            if !linked {
                self.vertices.push(prev);
            }
        }
        self
    }

    /// Build the final graph.
    pub fn build(self) -> GraphResult<Graph<V>, V> {
        let mut graph = Graph::new(self.kind);
        graph.add_vertices(self.vertices)?;
        for edge in self.edges {
            graph.add_edge(edge.from, edge.to, edge.weight)?;
        }
        log::trace!(
            "built {} graph with {} vertices and {} edges",
            graph.kind(),
            graph.num_vertices(),
            graph.num_edges()
        );
        Ok(graph)
    }
}

impl<V: Clone + Eq + Hash + Ord> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
