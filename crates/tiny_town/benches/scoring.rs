mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tiny_town::prelude::{resolve, standard, Registry, ScoreConfig, ScoreManager};

fn score_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoring/score");
    let registry = Registry::new(standard().expect("standard set")).expect("unique names");
    let manager = ScoreManager::new(ScoreConfig::default(), &registry);

    for &size in &[4usize, 8, 16] {
        for &ratio in &[0.5f32, 1.0] {
            let grid = common::random_board(size, &registry, ratio, 0xBADC0DE ^ size as u64);
            group.throughput(common::elements_throughput(size * size));

            let id = format!("{size}x{size}/{:.0}%", ratio * 100.0);
            group.bench_with_input(BenchmarkId::from_parameter(id), &grid, |b, g| {
                b.iter(|| black_box(manager.score(g)));
            });
        }
    }

    group.finish();
}

fn feeding_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoring/feeding");
    let registry = Registry::new(standard().expect("standard set")).expect("unique names");

    for &size in &[4usize, 16] {
        let grid = common::random_board(size, &registry, 1.0, 0xFEED);
        group.throughput(common::elements_throughput(size * size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, g| {
            b.iter(|| black_box(resolve(g, &registry)));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = score_benches, feeding_benches
}
criterion_main!(benches);
