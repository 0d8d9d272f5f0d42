//! In-memory graph structure and its traversal-based queries.

pub mod builder;
pub mod components;
pub mod cycle;
pub mod neighborhood;
pub mod traversal;
pub mod weighted_graph;

pub use builder::GraphBuilder;
pub use weighted_graph::Graph;
