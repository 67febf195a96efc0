use std::time::Duration;

use criterion::{Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tiny_town::prelude::{Grid, Registry, Resource};

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

/// A board of `size`×`size` cells filled with resources and, at `building_ratio`,
/// random buildings from `registry`.
#[allow(dead_code)]
pub fn random_board(size: usize, registry: &Registry, building_ratio: f32, seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let ids: Vec<_> = registry.iter().map(|d| d.id().clone()).collect();
    let mut grid = Grid::with_size(size).expect("non-zero size");

    for cell in grid.cells().collect::<Vec<_>>() {
        if !ids.is_empty() && rng.random::<f32>() < building_ratio {
            let id = ids[rng.random_range(0..ids.len())].clone();
            grid.place_building(cell, id).expect("empty cell");
        } else {
            let res = Resource::ALL[rng.random_range(0..Resource::ALL.len())];
            grid.place(cell, res).expect("empty cell");
        }
    }
    grid
}
