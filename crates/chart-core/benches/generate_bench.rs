// File: crates/chart-core/benches/generate_bench.rs
// Summary: Synthetic walk generation throughput.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ratechart_core::{generate, generate_with, GeneratorParams, SeededRandom, TimeZoneMode};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.bench_function("default_local", |b| {
        let mut rng = SeededRandom::new(42);
        b.iter(|| black_box(generate(&mut rng)));
    });
    group.bench_function("utc_50k", |b| {
        let params = GeneratorParams { count: 50_000, zone: TimeZoneMode::Utc, ..GeneratorParams::default() };
        let mut rng = SeededRandom::new(42);
        b.iter(|| black_box(generate_with(&mut rng, &params)));
    });
    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
