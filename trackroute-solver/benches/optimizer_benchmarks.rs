//! Criterion benchmarks for the ordering strategies.
//!
//! Measures each strategy across waypoint counts (10, 25, 50) laid out on a
//! deterministic spiral. The genetic optimizer runs with a fixed seed so
//! timings are comparable between runs.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package trackroute-solver
//! ```

#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use trackroute_core::{Optimizer, RoutePlanner};
use trackroute_core::test_support::spiral;
use trackroute_solver::{GeneticConfig, Strategy};

/// Waypoint counts to benchmark.
const PROBLEM_SIZES: &[u32] = &[10, 25, 50];

/// Seed shared by every genetic run.
const BENCHMARK_SEED: u64 = 0x5EED;

fn bench_strategies(c: &mut Criterion) {
    let genetic = GeneticConfig {
        seed: Some(BENCHMARK_SEED),
        ..GeneticConfig::default()
    };

    for strategy in Strategy::ALL {
        let mut group = c.benchmark_group(strategy.as_str());
        if strategy == Strategy::Genetic {
            group.sample_size(10);
        }
        let optimizer = strategy.optimizer(genetic, RoutePlanner::default());

        for &size in PROBLEM_SIZES {
            let waypoints = spiral(size);
            group.throughput(Throughput::Elements(u64::from(size)));
            group.bench_with_input(BenchmarkId::new("waypoints", size), &waypoints, |b, w| {
                b.iter(|| {
                    #[expect(
                        clippy::let_underscore_must_use,
                        reason = "Benchmarking ordering performance, result is intentionally discarded"
                    )]
                    let _ = black_box(optimizer.optimize(w));
                });
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
