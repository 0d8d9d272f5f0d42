//! Criterion benchmarks for weighted graphs.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use weighted_graph::{Direction, Graph, GraphKind};

/// Random graph with `edges_per_vertex` outgoing edges per vertex.
fn make_random_graph(kind: GraphKind, vertex_count: u32, edges_per_vertex: usize) -> Graph<u32> {
    let mut rng = rand::thread_rng();
    let mut graph = Graph::new(kind);
    graph.add_vertices(0..vertex_count).unwrap();

    for v in 0..vertex_count {
        for _ in 0..edges_per_vertex {
            let target = rng.gen_range(0..vertex_count);
            if target != v && !graph.has_edge(&v, &target) {
                graph.add_edge(v, target, rng.gen_range(1.0..10.0)).unwrap();
            }
        }
    }

    graph
}

/// Layered DAG: every edge runs from a lower to a higher vertex.
fn make_dag(vertex_count: u32, edges_per_vertex: u32) -> Graph<u32> {
    let mut graph = Graph::directed();
    graph.add_vertices(0..vertex_count).unwrap();
    for v in 0..vertex_count {
        for j in 1..=edges_per_vertex {
            let target = v + j * 7;
            if target < vertex_count {
                graph.add_edge(v, target, 1.0).unwrap();
            }
        }
    }
    graph
}

fn bench_add_edge(c: &mut Criterion) {
    let mut graph = make_random_graph(GraphKind::Directed, 10_000, 3);

    c.bench_function("add_edge_to_10k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let src = rng.gen_range(0..10_000u32);
            let tgt = rng.gen_range(0..10_000u32);
            let _ = graph.add_edge(src, tgt, 0.5);
        })
    });
}

fn bench_breadth_first_search(c: &mut Criterion) {
    let graph = make_random_graph(GraphKind::Directed, 100_000, 3);

    c.bench_function("bfs_100k", |b| {
        b.iter(|| {
            let _ = graph.breadth_first_search(&0, Direction::Outbound);
        })
    });
}

fn bench_dijkstra(c: &mut Criterion) {
    let graph = make_random_graph(GraphKind::Directed, 10_000, 5);

    c.bench_function("dijkstra_10k", |b| {
        b.iter(|| {
            let _ = graph.dijkstra(&0);
        })
    });
}

fn bench_bellman_ford(c: &mut Criterion) {
    let graph = make_random_graph(GraphKind::Directed, 1_000, 5);

    c.bench_function("bellman_ford_1k", |b| {
        b.iter(|| {
            let _ = graph.bellman_ford(&0);
        })
    });
}

fn bench_floyd_warshall(c: &mut Criterion) {
    let graph = make_random_graph(GraphKind::Directed, 200, 5);

    c.bench_function("floyd_warshall_200", |b| {
        b.iter(|| {
            let _ = graph.floyd_warshall();
        })
    });
}

fn bench_spanning_tree(c: &mut Criterion) {
    let graph = make_random_graph(GraphKind::Undirected, 10_000, 4);

    c.bench_function("kruskal_10k", |b| {
        b.iter(|| {
            let _ = graph.kruskal();
        })
    });
    c.bench_function("prim_10k", |b| {
        b.iter(|| {
            let _ = graph.prim();
        })
    });
}

fn bench_topological_sort(c: &mut Criterion) {
    let graph = make_dag(100_000, 3);

    c.bench_function("topological_sort_100k", |b| {
        b.iter(|| {
            let _ = graph.topological_sort();
        })
    });
}

fn bench_strongly_connected_components(c: &mut Criterion) {
    let graph = make_random_graph(GraphKind::Directed, 100_000, 2);

    c.bench_function("scc_100k", |b| {
        b.iter(|| {
            let _ = graph.strongly_connected_components();
        })
    });
}

criterion_group!(
    benches,
    bench_add_edge,
    bench_breadth_first_search,
    bench_dijkstra,
    bench_bellman_ford,
    bench_floyd_warshall,
    bench_spanning_tree,
    bench_topological_sort,
    bench_strongly_connected_components,
);
criterion_main!(benches);
