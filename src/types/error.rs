//! Error types for the graph library.

use thiserror::Error;

use super::GraphKind;

/// All errors that graph operations can return.
///
/// Vertex values are carried inside the error so callers can tell which
/// vertex or edge an operation tripped over.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError<V> {
    /// A referenced vertex is not part of the graph.
    #[error("missing vertex: {0:?}")]
    MissingVertex(V),

    /// A referenced edge is not part of the graph.
    #[error("missing edge ({from:?} -> {to:?})")]
    MissingEdge { from: V, to: V },

    /// The vertex is already part of the graph.
    #[error("duplicate vertex: {0:?}")]
    DuplicateVertex(V),

    /// The edge is already part of the graph.
    #[error("duplicate edge ({from:?} -> {to:?})")]
    DuplicateEdge { from: V, to: V },

    /// The operation is not defined for this kind of graph.
    #[error("{operation} is not defined for {kind} graphs")]
    NotApplicable {
        operation: &'static str,
        kind: GraphKind,
    },

    /// The graph contains a cycle where an acyclic graph is required.
    #[error("cycle detected in graph")]
    CycleDetected,

    /// A negative-weight cycle makes shortest paths undefined.
    #[error("negative cycle detected: {cycle:?}")]
    NegativeCycle { cycle: Vec<V> },

    /// A parameter violated a precondition.
    #[error("invalid argument: {arg} ({reason})")]
    InvalidArgument { arg: String, reason: String },
}

/// Convenience result type for graph operations.
pub type GraphResult<T, V> = Result<T, GraphError<V>>;
