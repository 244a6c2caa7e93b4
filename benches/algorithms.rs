//! Benchmarks for the graph algorithms on random `G(n,p)` graphs
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use propgraph::{algo::*, gens::*, prelude::*};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

const SIZES: [usize; 3] = [1_000, 10_000, 50_000];
const AVG_DEG: f64 = 8.0;

fn weighted_graph(n: usize, directed: bool) -> Graph<(), usize, u32> {
    let rng = &mut Pcg64Mcg::seed_from_u64(n as u64);
    Graph::gnp_with(rng, directed, n, AVG_DEG / n as f64, |r| {
        r.random_range(1..100)
    })
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for n in SIZES {
        let graph = weighted_graph(n, true);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("bfs", n), &graph, |b, g| {
            b.iter(|| g.bfs(black_box(0)).count())
        });
        group.bench_with_input(BenchmarkId::new("dfs", n), &graph, |b, g| {
            b.iter(|| g.dfs(black_box(0)).count())
        });
    }

    group.finish();
}

fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_paths");
    group.sample_size(20);

    for n in SIZES {
        let graph = weighted_graph(n, true);
        group.throughput(Throughput::Elements(graph.edge_count() as u64));

        group.bench_with_input(BenchmarkId::new("dijkstra", n), &graph, |b, g| {
            b.iter(|| g.dijkstra(black_box(&0), |w| *w as u64))
        });

        if n <= 10_000 {
            group.bench_with_input(BenchmarkId::new("bellman_ford", n), &graph, |b, g| {
                b.iter(|| g.bellman_ford(black_box(&0), |w| *w as i64))
            });
        }
    }

    group.finish();
}

fn bench_structure(c: &mut Criterion) {
    let mut group = c.benchmark_group("structure");

    for n in SIZES {
        let directed = weighted_graph(n, true);
        let undirected = weighted_graph(n, false);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("kosaraju", n), &directed, |b, g| {
            b.iter(|| g.kosaraju_scc().len())
        });
        group.bench_with_input(BenchmarkId::new("directed_cycle", n), &directed, |b, g| {
            b.iter(|| g.has_cycle())
        });
        group.bench_with_input(BenchmarkId::new("bipartite", n), &undirected, |b, g| {
            b.iter(|| g.is_bipartite())
        });
    }

    group.finish();
}

fn bench_max_flow(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_flow");
    group.sample_size(10);

    for n in [200, 1_000] {
        let graph = weighted_graph(n, true);
        group.bench_with_input(BenchmarkId::new("edmonds_karp", n), &graph, |b, g| {
            b.iter(|| g.max_flow(black_box(&0), black_box(&(n - 1)), |c| *c as u64))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_traversal,
    bench_shortest_paths,
    bench_structure,
    bench_max_flow
);
criterion_main!(benches);
