//! Supporting collections used by the graph algorithms.

pub mod disjoint_set;
pub mod priority_queue;
pub mod queue;

pub use disjoint_set::DisjointSet;
pub use priority_queue::PriorityQueue;
pub use queue::Queue;
