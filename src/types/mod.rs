//! All data types for the weighted graph library.

pub mod edge;
pub mod error;
pub mod path;

pub use edge::{Direction, Edge, GraphKind};
pub use error::{GraphError, GraphResult};
pub use path::PathResult;

/// Tolerance used when comparing accumulated weights.
pub const WEIGHT_EPSILON: f64 = 1e-4;
