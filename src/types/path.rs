//! Result of a shortest-path computation.

use serde::Serialize;

/// Distance and route from a source to one destination.
///
/// An unreachable destination has an infinite distance and no path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult<V> {
    /// Total weight of the path.
    pub distance: f64,
    /// Vertices from source to destination, inclusive.
    pub path: Option<Vec<V>>,
}

impl<V> PathResult<V> {
    /// Create a result for a reachable destination.
    pub fn new(distance: f64, path: Option<Vec<V>>) -> Self {
        Self { distance, path }
    }

    /// The result for a destination that cannot be reached.
    pub fn unreachable() -> Self {
        Self {
            distance: f64::INFINITY,
            path: None,
        }
    }

    /// True when the destination has a finite distance.
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}
