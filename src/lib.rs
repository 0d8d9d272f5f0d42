//! Weighted graphs: directed or undirected, over any hashable, ordered
//! vertex value.
//!
//! A [`Graph`] stores every edge in an explicit weight map on its source
//! vertex. Directed graphs also record each edge in an implicit (inbound)
//! map on the target; undirected graphs store the edge on both endpoints.
//! On top of that storage sit traversals, components, cycle detection,
//! topological sort, shortest paths and minimum spanning trees.
//!
//! ```
//! use weighted_graph::{Graph, GraphKind};
//!
//! let mut g = Graph::new(GraphKind::Directed);
//! g.add_edge("a", "b", 4.0).unwrap();
//! g.add_edge("b", "c", 1.0).unwrap();
//!
//! let paths = g.dijkstra(&"a").unwrap();
//! assert_eq!(paths[&"c"].distance, 5.0);
//! assert_eq!(g.topological_sort().unwrap(), vec!["a", "b", "c"]);
//! ```

pub mod algo;
pub mod collections;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use algo::{AllPairsPaths, PathMap};
pub use collections::{DisjointSet, PriorityQueue, Queue};
pub use graph::{Graph, GraphBuilder};
pub use types::{Direction, Edge, GraphError, GraphKind, GraphResult, PathResult, WEIGHT_EPSILON};
