//! 100K vertex performance demo.
//!
//! Uses `Graph::from_edges` for bulk construction.

use std::time::Instant;

use weighted_graph::*;

fn main() -> GraphResult<(), u32> {
    let vertex_count = 100_000u32;
    let edges_per_vertex = 3u32;

    println!("Creating graph with {} vertices...", vertex_count);
    let start = Instant::now();

    let mut edges = Vec::with_capacity((vertex_count * edges_per_vertex) as usize);
    for i in 0..vertex_count {
        for j in 1..=edges_per_vertex {
            let target = (i + j * 7) % vertex_count;
            let weight = 1.0 + ((i + j) % 10) as f64;
            edges.push(Edge::new(i, target, weight));
        }
    }

    let graph = Graph::from_edges(GraphKind::Directed, edges)?;
    println!(
        "  Graph built in {:?} ({} vertices, {} edges)",
        start.elapsed(),
        graph.num_vertices(),
        graph.num_edges()
    );

    // Traversal
    let start = Instant::now();
    let order = graph.breadth_first_search(&0, Direction::Outbound)?;
    println!("  BFS reached {} vertices in {:?}", order.len(), start.elapsed());

    // Single-source shortest paths
    let start = Instant::now();
    let paths = graph.dijkstra(&0)?;
    let reachable = paths.values().filter(|p| p.is_reachable()).count();
    let farthest = paths
        .values()
        .filter(|p| p.is_reachable())
        .map(|p| p.distance)
        .fold(0.0, f64::max);
    println!(
        "  Dijkstra: {} reachable, farthest at {} in {:?}",
        reachable,
        farthest,
        start.elapsed()
    );

    // Components
    let start = Instant::now();
    let components = graph.strongly_connected_components();
    println!(
        "  {} strongly connected components in {:?}",
        components.len(),
        start.elapsed()
    );

    // Spanning forest over the undirected view
    let start = Instant::now();
    let forward = graph.edges().into_iter().filter(|e| e.from < e.to);
    let undirected = Graph::from_edges(GraphKind::Undirected, forward)?;
    let forest = undirected.kruskal()?;
    println!(
        "  Kruskal kept {} edges (weight {}) in {:?}",
        forest.num_edges(),
        forest.total_weight(),
        start.elapsed()
    );

    println!("Done!");
    Ok(())
}
