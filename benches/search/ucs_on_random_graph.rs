use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use ucs_core::{
    graph::node_index, search::uniform_cost::UniformCostSearch,
    util::test_graphs::generate_random_graph,
};

criterion_group!(benches, criterion_benchmark, by_graph_size);
criterion_main!(benches);

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let g = generate_random_graph(&mut rng, 10_000, 40_000, 100);

    c.bench_with_input(
        BenchmarkId::new("ucs_on_random_graph", stringify!(10_000)),
        &g,
        |b, g| {
            let mut ucs = UniformCostSearch::new(g);
            b.iter(|| {
                ucs.search(black_box(node_index(0)), black_box(node_index(9_999)))
                    .unwrap();
            })
        },
    );
}

fn by_graph_size(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);

    let mut group = c.benchmark_group("ucs_by_graph_size");
    for size in [1_000, 2_000, 4_000, 8_000].iter() {
        let g = generate_random_graph(&mut rng, *size, size * 4, 100);
        let goal = node_index(rng.gen_range(0..*size));
        group.throughput(criterion::Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &g, |b, g| {
            let mut ucs = UniformCostSearch::new(g);
            b.iter(|| ucs.search(node_index(0), goal).unwrap());
        });
    }
    group.finish();
}
