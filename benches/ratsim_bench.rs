//! Criterion benchmarks for the breeding simulation.
//!
//! Measures initialization cost and the full seeded generation loop.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratsim::{populate, SimConfig, SimRunner};

fn bench_populate(c: &mut Criterion) {
    let mut group = c.benchmark_group("populate");
    for count in [20, 200, 2000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| {
                let pop = populate(count, 200.0, 600.0, 300.0, &mut rng).unwrap();
                black_box(pop)
            });
        });
    }
    group.finish();
}

fn bench_full_run(c: &mut Criterion) {
    c.bench_function("full_run_standard_config", |b| {
        let config = SimConfig::default().with_seed(42);
        b.iter(|| {
            let result = SimRunner::run(black_box(&config)).unwrap();
            black_box(result)
        });
    });

    c.bench_function("full_run_short", |b| {
        let config = SimConfig::default().with_generation_limit(50).with_seed(42);
        b.iter(|| {
            let result = SimRunner::run(black_box(&config)).unwrap();
            black_box(result)
        });
    });
}

criterion_group!(benches, bench_populate, bench_full_run);
criterion_main!(benches);
