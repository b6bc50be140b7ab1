use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use prim_mst::graph::{minimum_spanning_tree_with, FrontierStrategy, Graph, MstConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_graph(n: usize, edges_per_vertex: usize) -> Graph<i64> {
    let mut rng = StdRng::seed_from_u64(12345);
    let mut graph = Graph::new(n);
    for v in 1..n {
        let u = rng.gen_range(0..v);
        graph.add_edge(u, v, rng.gen_range(0..1000)).unwrap();
    }
    for _ in 0..n * edges_per_vertex {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        graph.add_edge(u, v, rng.gen_range(0..1000)).unwrap();
    }
    graph
}

fn bench_prim(c: &mut Criterion) {
    let mut group = c.benchmark_group("prim");
    let sizes = [100, 1_000, 10_000];

    for &size in &sizes {
        let graph = generate_graph(size, 4);
        for strategy in [FrontierStrategy::BinaryHeap, FrontierStrategy::LinearScan] {
            // Quadratic scan gets too slow past this size
            if strategy == FrontierStrategy::LinearScan && size > 1_000 {
                continue;
            }
            let config = MstConfig::default().with_strategy(strategy);
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", strategy), size),
                &graph,
                |b, graph| b.iter(|| minimum_spanning_tree_with(black_box(graph), &config)),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_prim);
criterion_main!(benches);
