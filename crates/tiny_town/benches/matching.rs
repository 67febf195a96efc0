mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tiny_town::prelude::{find_matches, standard, Pattern, Registry};

fn variant_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("matching/variants");

    for text in [
        "wood stone",
        "_ wheat / brick glass",
        "_ brick _ / wheat wood stone / _ brick _",
        "wheat _ _ wood / stone wood glass brick",
    ] {
        let pattern: Pattern = text.parse().expect("valid pattern");
        group.bench_with_input(BenchmarkId::from_parameter(text), &pattern, |b, p| {
            b.iter(|| black_box(p.variants()));
        });
    }

    group.finish();
}

fn find_matches_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("matching/find_matches");
    let registry = Registry::new(standard().expect("standard set")).expect("unique names");

    for &size in &[4usize, 8, 16] {
        let grid = common::random_board(size, &registry, 0.0, 0xC0FFEE);
        group.throughput(common::elements_throughput(size * size));

        group.bench_with_input(BenchmarkId::new("resources_only", size), &size, |b, _| {
            b.iter(|| black_box(find_matches(&grid, &registry)));
        });

        let mixed = common::random_board(size, &registry, 0.25, 0xFACEFEED);
        group.bench_with_input(BenchmarkId::new("mixed", size), &size, |b, _| {
            b.iter(|| black_box(find_matches(&mixed, &registry)));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = variant_benches, find_matches_benches
}
criterion_main!(benches);
