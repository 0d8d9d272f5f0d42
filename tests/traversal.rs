//! Traversal tests: DFS/BFS, components, cycles, topological sort and
//! bounded neighborhoods.

use std::collections::HashSet;
use std::ops::ControlFlow;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use weighted_graph::{Direction, Graph, GraphBuilder, GraphError, GraphKind};

// ==================== Helper ====================

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Undirected K3,3: {a, b, c} fully connected to {x, y, z}.
fn utility_graph() -> Graph<&'static str> {
    let mut g = Graph::undirected();
    for left in ["a", "b", "c"] {
        for right in ["x", "y", "z"] {
            g.add_edge(left, right, 0.0).unwrap();
        }
    }
    g
}

fn sorted<T: Ord>(mut items: Vec<T>) -> Vec<T> {
    items.sort();
    items
}

/// Random DAG: edges only run from lower to higher numbers.
fn random_dag(n: u32, density: f64, seed: u64) -> Graph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = Graph::directed();
    g.add_vertices(0..n).unwrap();
    for a in 0..n {
        for b in (a + 1)..n {
            if rng.gen_bool(density) {
                g.add_edge(a, b, 1.0).unwrap();
            }
        }
    }
    g
}

// ==================== DFS / BFS Tests ====================

#[test]
fn test_depth_first_search_pre_order() {
    init_logger();
    let g = GraphBuilder::new()
        .link(1, 2)
        .link(1, 3)
        .link(2, 4)
        .link(3, 5)
        .build()
        .unwrap();

    assert_eq!(
        g.depth_first_search(&1, Direction::Outbound).unwrap(),
        vec![1, 2, 4, 3, 5]
    );
    assert_eq!(g.depth_first_search(&3, Direction::Outbound).unwrap(), vec![3, 5]);
    assert_eq!(
        sorted(g.depth_first_search(&4, Direction::Inbound).unwrap()),
        vec![1, 2, 4]
    );
}

#[test]
fn test_breadth_first_search_level_order() {
    let g = GraphBuilder::new()
        .link(1, 2)
        .link(1, 3)
        .link(2, 4)
        .link(3, 5)
        .link(4, 6)
        .build()
        .unwrap();

    let order = g.breadth_first_search(&1, Direction::Outbound).unwrap();
    assert_eq!(order, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_visit_stops_immediately() {
    let g = utility_graph();

    let mut seen = Vec::new();
    g.depth_first_visit(&"a", Direction::Both, |v| {
        seen.push(*v);
        if seen.len() == 2 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })
    .unwrap();
    assert_eq!(seen.len(), 2);

    let mut seen = Vec::new();
    g.breadth_first_visit(&"a", Direction::Both, |v| {
        seen.push(*v);
        ControlFlow::Break(())
    })
    .unwrap();
    assert_eq!(seen, vec!["a"]);
}

#[test]
fn test_visit_missing_start() {
    let g = utility_graph();
    assert_eq!(
        g.depth_first_search(&"q", Direction::Both),
        Err(GraphError::MissingVertex("q"))
    );
    assert_eq!(
        g.breadth_first_search(&"q", Direction::Both),
        Err(GraphError::MissingVertex("q"))
    );
}

#[test]
fn test_deep_chain_does_not_overflow() {
    let n = 200_000u32;
    let g = GraphBuilder::new().path(0..n).build().unwrap();

    assert_eq!(g.depth_first_search(&0, Direction::Outbound).unwrap().len(), n as usize);
    assert!(!g.has_cycle());
    assert_eq!(g.topological_sort().unwrap(), (0..n).collect::<Vec<_>>());
    assert_eq!(g.strongly_connected_components().len(), n as usize);

    let u = GraphBuilder::new().undirected().path(0..n).build().unwrap();
    assert!(!u.has_cycle());
    assert_eq!(u.connected_components().len(), 1);
}

// ==================== Component Tests ====================

#[test]
fn test_utility_graph_component() {
    let g = utility_graph();
    assert_eq!(
        sorted(g.connected_component(&"a").unwrap()),
        vec!["a", "b", "c", "x", "y", "z"]
    );
}

#[test]
fn test_connected_components_partition() {
    let mut g = utility_graph();
    g.add_edge("p", "q", 1.0).unwrap();
    g.add_vertex("solo").unwrap();

    let components: Vec<Vec<&str>> = g.connected_components().into_iter().map(sorted).collect();
    assert_eq!(components.len(), 3);
    assert!(components.contains(&vec!["a", "b", "c", "x", "y", "z"]));
    assert!(components.contains(&vec!["p", "q"]));
    assert!(components.contains(&vec!["solo"]));
}

#[test]
fn test_directed_component_is_forward_reachability() {
    let g = GraphBuilder::new().link(1, 2).link(2, 3).link(4, 2).build().unwrap();

    assert_eq!(sorted(g.connected_component(&1).unwrap()), vec![1, 2, 3]);
    assert_eq!(sorted(g.connected_component(&3).unwrap()), vec![3]);

    // Every vertex lands in exactly one component.
    let components = g.connected_components();
    let mut all: Vec<u32> = components.iter().flatten().copied().collect();
    all.sort();
    assert_eq!(all, vec![1, 2, 3, 4]);
}

#[test]
fn test_strongly_connected_components() {
    let g = GraphBuilder::new()
        .path([1, 2, 3, 1])
        .link(3, 4)
        .path([4, 5, 4])
        .link(6, 5)
        .build()
        .unwrap();

    let mut components = g.strongly_connected_components();
    components.sort();
    assert_eq!(components, vec![vec![1, 2, 3], vec![4, 5], vec![6]]);
}

#[test]
fn test_strongly_connected_components_undirected() {
    let g = utility_graph();
    let components = g.strongly_connected_components();
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].len(), 6);
}

// ==================== Cycle Tests ====================

#[test]
fn test_directed_three_cycle() {
    let g = GraphBuilder::new().path([1, 2, 3, 1]).build().unwrap();
    assert!(g.has_cycle());
    assert_eq!(g.topological_sort(), Err(GraphError::CycleDetected));
}

#[test]
fn test_directed_acyclic() {
    // Diamond: two routes to the same vertex is not a cycle.
    let g = GraphBuilder::new()
        .link(1, 2)
        .link(1, 3)
        .link(2, 4)
        .link(3, 4)
        .build()
        .unwrap();
    assert!(!g.has_cycle());
}

#[test]
fn test_directed_self_loop_is_cycle() {
    let g = GraphBuilder::new().link(1, 2).link(2, 2).build().unwrap();
    assert!(g.has_cycle());
}

#[test]
fn test_undirected_cycles() {
    let tree = GraphBuilder::new()
        .undirected()
        .link(1, 2)
        .link(1, 3)
        .link(3, 4)
        .build()
        .unwrap();
    assert!(!tree.has_cycle());

    let triangle = GraphBuilder::new().undirected().path([1, 2, 3, 1]).build().unwrap();
    assert!(triangle.has_cycle());

    let root_loop = GraphBuilder::new().undirected().link(1, 1).link(1, 2).build().unwrap();
    assert!(root_loop.has_cycle());

    let inner_loop = GraphBuilder::new().undirected().link(1, 2).link(2, 2).build().unwrap();
    assert!(inner_loop.has_cycle());

    assert!(utility_graph().has_cycle());
}

#[test]
fn test_empty_graph_has_no_cycle() {
    assert!(!Graph::<u8>::directed().has_cycle());
    assert!(!Graph::<u8>::undirected().has_cycle());
}

// ==================== Topological Sort Tests ====================

#[test]
fn test_topological_sort_dependencies() {
    let g = GraphBuilder::new()
        .vertex(0)
        .link(1, 0)
        .link(2, 1)
        .link(3, 2)
        .link(3, 1)
        .build()
        .unwrap();

    assert_eq!(g.topological_sort().unwrap(), vec![3, 2, 1, 0]);
}

#[test]
fn test_topological_sort_undirected() {
    let g = utility_graph();
    assert!(matches!(
        g.topological_sort(),
        Err(GraphError::NotApplicable {
            kind: GraphKind::Undirected,
            ..
        })
    ));
}

#[test]
fn test_topological_sort_respects_every_edge() {
    for seed in 0..10 {
        let g = random_dag(30, 0.15, seed);
        let order = g.topological_sort().unwrap();
        assert_eq!(order.len(), 30);

        let position: std::collections::HashMap<u32, usize> =
            order.iter().enumerate().map(|(i, v)| (*v, i)).collect();
        for edge in g.edges() {
            assert!(position[&edge.from] < position[&edge.to]);
        }
    }
}

#[test]
fn test_topological_sort_detects_added_back_edge() {
    let mut g = random_dag(20, 0.2, 3);
    g.add_edge(19, 0, 1.0).unwrap();
    g.add_edge(0, 19, 1.0).ok();

    assert!(g.has_cycle());
    assert_eq!(g.topological_sort(), Err(GraphError::CycleDetected));
}

// ==================== Neighborhood Tests ====================

#[test]
fn test_neighborhood_utility_graph() {
    let g = utility_graph();
    assert_eq!(
        g.neighborhood(&"a", 1, 1, Direction::Both).unwrap(),
        vec!["x", "y", "z"]
    );
    assert_eq!(
        g.neighborhood(&"a", 1, 0, Direction::Both).unwrap(),
        vec!["a", "x", "y", "z"]
    );
    assert_eq!(g.neighborhood(&"a", 2, 2, Direction::Both).unwrap(), vec!["b", "c"]);
    assert_eq!(g.neighborhood(&"a", 0, 0, Direction::Both).unwrap(), vec!["a"]);
}

#[test]
fn test_neighborhood_disconnected() {
    let mut g = Graph::undirected();
    g.add_vertices(["a", "b", "c"]).unwrap();
    assert!(g.neighborhood(&"a", 1, 1, Direction::Both).unwrap().is_empty());
}

#[test]
fn test_neighborhood_directed() {
    let g = GraphBuilder::new().path([1, 2, 3, 4]).link(5, 1).build().unwrap();

    assert_eq!(g.neighborhood(&1, 2, 1, Direction::Outbound).unwrap(), vec![2, 3]);
    assert_eq!(g.neighborhood(&3, 5, 1, Direction::Inbound).unwrap(), vec![1, 2, 5]);
    assert_eq!(g.neighborhood(&2, 1, 1, Direction::Both).unwrap(), vec![1, 3]);
}

#[test]
fn test_neighborhood_invalid_arguments() {
    let g = utility_graph();
    assert!(matches!(
        g.neighborhood(&"a", 1, 2, Direction::Both),
        Err(GraphError::InvalidArgument { .. })
    ));
    assert_eq!(
        g.neighborhood(&"q", 1, 0, Direction::Both),
        Err(GraphError::MissingVertex("q"))
    );
}

#[test]
fn test_neighborhood_matches_bfs_hops() {
    let g = random_dag(25, 0.1, 11);
    let hops = g.bfs_shortest_path(&0).unwrap();
    let within: HashSet<u32> = g
        .neighborhood(&0, 3, 1, Direction::Outbound)
        .unwrap()
        .into_iter()
        .collect();

    for (v, result) in hops {
        let expected = result.distance >= 1.0 && result.distance <= 3.0;
        assert_eq!(within.contains(&v), expected, "vertex {}", v);
    }
}
