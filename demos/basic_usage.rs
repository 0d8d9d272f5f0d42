//! Basic build -> traverse -> query flow.

use std::ops::ControlFlow;

use weighted_graph::*;

fn main() -> GraphResult<(), &'static str> {
    // Build a small road network
    let roads = GraphBuilder::new()
        .undirected()
        .edge("home", "bakery", 2.0)
        .edge("home", "park", 5.0)
        .edge("bakery", "park", 1.5)
        .edge("park", "office", 3.0)
        .edge("bakery", "office", 7.0)
        .vertex("island")
        .build()?;

    println!("Roads: {}", roads);
    println!(
        "{} vertices, {} edges, total length {}",
        roads.num_vertices(),
        roads.num_edges(),
        roads.total_weight()
    );

    // Shortest distances from home
    let paths = roads.dijkstra(&"home")?;
    for place in roads.vertices() {
        let result = &paths[&place];
        match &result.path {
            Some(path) => println!("  {} -> {:?} ({})", place, path, result.distance),
            None => println!("  {} is unreachable", place),
        }
    }

    // Walk until the office shows up
    roads.breadth_first_visit(&"home", Direction::Both, |v| {
        println!("  visiting {}", v);
        if *v == "office" {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })?;

    // Cheapest way to connect every reachable place
    let tree = roads.prim()?;
    println!("Spanning forest: {} (length {})", tree, tree.total_weight());

    // Build order for a small set of tasks
    let tasks = GraphBuilder::new()
        .link("fetch", "compile")
        .link("compile", "test")
        .link("compile", "package")
        .link("test", "release")
        .link("package", "release")
        .build()?;
    println!("Task order: {:?}", tasks.topological_sort()?);

    Ok(())
}
