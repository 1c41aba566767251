//! Criterion benchmarks for the ripeness resolver.
//!
//! Benchmarks:
//!   - lookup hit on the last entry of a large config
//!   - lookup miss across a large config
//!   - lookup hit on the shipped four-seed defaults
//!
//! Run with: cargo bench -p instant_crops --bench resolve_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use instant_crops::config::{RipenessConfig, SeedPolicy, CURRENT_VERSION};
use instant_crops::ripeness::decide_ripeness;

fn large_config(entries: usize) -> RipenessConfig {
    RipenessConfig {
        version: CURRENT_VERSION.to_string(),
        seeds: (0..entries)
            .map(|i| SeedPolicy {
                item_short_name: format!("seed.crop{i}"),
                ripen_in_planter: i % 2 == 0,
                ripen_in_ground: i % 3 == 0,
            })
            .collect(),
    }
}

fn bench_decide_ripeness(c: &mut Criterion) {
    let mut group = c.benchmark_group("decide_ripeness");

    let config = large_config(1000);
    group.bench_function("hit_last_of_1000", |b| {
        b.iter(|| decide_ripeness(black_box("seed.crop999"), black_box(false), &config));
    });
    group.bench_function("miss_of_1000", |b| {
        b.iter(|| decide_ripeness(black_box("seed.unknown"), black_box(true), &config));
    });

    let defaults = RipenessConfig::default();
    group.bench_function("hit_defaults", |b| {
        b.iter(|| decide_ripeness(black_box("seed.corn"), black_box(false), &defaults));
    });

    group.finish();
}

criterion_group!(benches, bench_decide_ripeness);
criterion_main!(benches);
