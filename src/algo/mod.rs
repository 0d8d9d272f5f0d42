//! Ordering, shortest-path and spanning-tree algorithms on [`Graph`].
//!
//! [`Graph`]: crate::graph::Graph

pub mod shortest_path;
pub mod spanning_tree;
pub mod topological;

pub use shortest_path::{AllPairsPaths, PathMap};
