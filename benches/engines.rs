use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use conformal_sampler::{
    ConformalPointFactory, EngineConfig, generate_points_parallel, generate_points_sequential,
};

fn bench_engines(c: &mut Criterion) {
    let config = EngineConfig::default();
    let factory = ConformalPointFactory::default();
    let shared_factory = Arc::new(factory);

    let mut group = c.benchmark_group("generate_points");
    group.sample_size(20);

    for count in [1_000usize, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("sequential", count), &count, |b, &count| {
            b.iter(|| generate_points_sequential(count, &factory, &config))
        });

        group.bench_with_input(BenchmarkId::new("parallel", count), &count, |b, &count| {
            b.iter(|| {
                generate_points_parallel(count, Arc::clone(&shared_factory), &config)
                    .expect("worker pool should start")
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_engines);
criterion_main!(benches);
