//! Graph kinds, traversal directions and the transient edge struct.

use serde::Serialize;

/// Whether edges of a graph carry a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GraphKind {
    /// Edges run from source to target only.
    Directed,
    /// Every edge is stored once per endpoint.
    Undirected,
}

impl GraphKind {
    /// Return a human-readable name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::Undirected => "undirected",
        }
    }

    /// True for [`GraphKind::Directed`].
    pub fn is_directed(&self) -> bool {
        matches!(self, Self::Directed)
    }
}

impl std::fmt::Display for GraphKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Which adjacency a neighbor query follows.
///
/// Undirected graphs ignore the direction entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Follow outgoing edges (source -> target).
    Outbound,
    /// Follow incoming edges (target <- source).
    Inbound,
    /// Follow edges in both directions.
    #[default]
    Both,
}

impl Direction {
    /// The opposite direction; `Both` maps to itself.
    pub fn reversed(self) -> Self {
        match self {
            Self::Outbound => Self::Inbound,
            Self::Inbound => Self::Outbound,
            Self::Both => Self::Both,
        }
    }
}

/// A weighted relationship between two vertices, produced by enumeration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge<V> {
    /// Origin of the edge.
    pub from: V,
    /// Destination of the edge.
    pub to: V,
    /// Edge weight.
    pub weight: f64,
}

impl<V> Edge<V> {
    /// Create a new edge.
    pub fn new(from: V, to: V, weight: f64) -> Self {
        Self { from, to, weight }
    }
}

impl<V> From<(V, V, f64)> for Edge<V> {
    fn from((from, to, weight): (V, V, f64)) -> Self {
        Self::new(from, to, weight)
    }
}
