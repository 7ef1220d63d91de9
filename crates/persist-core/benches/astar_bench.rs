//! Criterion benchmarks for the optimal-cycle reduction driver.
//! Focus sizes: n in {4, 8, 16, 24} for an n x n random cubical grid.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p persist-core

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use persist_core::config::ReductionConfig;
use persist_core::filtration::CubicalFiltration;
use persist_core::reduction::run_reduction;

fn random_grid(n: usize, seed: u64) -> CubicalFiltration {
    let mut rng = StdRng::seed_from_u64(seed);
    let values: Vec<f64> = (0..n * n).map(|_| rng.gen::<f64>()).collect();
    CubicalFiltration::from_grid(&[n, n], &values).unwrap()
}

fn bench_reduction(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduction");
    for &n in &[4usize, 8, 16, 24] {
        group.bench_with_input(BenchmarkId::new("astar", n), &n, |b, &n| {
            let config = ReductionConfig::default();
            b.iter_batched(
                || random_grid(n, 43),
                |grid| {
                    let _res = run_reduction(&grid, &config).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_reduction);
criterion_main!(benches);
