use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tiny_town::prelude::*;
use tiny_town_examples::{init_tracing, render_board, render_score};
use tracing::{debug, info};

/// Builds the first match that can be built, on its first consumed cell.
fn build_first(grid: &mut Grid, registry: &Registry, choice: Resource) -> Option<BuildingId> {
    for m in find_matches(grid, registry) {
        let Some(target) = m
            .cells()
            .into_iter()
            .find(|&c| grid.tile(c).is_some_and(|t| t.resource().is_some()))
        else {
            continue;
        };
        match build(grid, registry, &m, target, Some(choice)) {
            Ok(()) => return Some(m.building),
            Err(err) => debug!("Cannot build {}: {}", m.building, err),
        }
    }
    None
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let seed = std::env::args()
        .nth(1)
        .map(|s| s.parse::<u64>())
        .transpose()?
        .unwrap_or(2025);
    let mut rng = StdRng::seed_from_u64(seed);

    let registry = deck(&[
        "Cottage",
        "Farm",
        "Well",
        "Chapel",
        "Tavern",
        "Theater",
        "Factory",
        "Trading Post",
        "Cathedral of Caterina",
    ])?;

    let mut grid = Grid::new();
    let mut turn = 0;
    loop {
        let empty: Vec<Cell> = grid
            .iter()
            .filter(|(_, t)| t.is_empty())
            .map(|(c, _)| c)
            .collect();
        if empty.is_empty() {
            break;
        }
        turn += 1;

        let cell = empty[rng.random_range(0..empty.len())];
        let resource = Resource::ALL[rng.random_range(0..Resource::ALL.len())];
        grid.place(cell, resource)?;
        debug!("Turn {}: {} at {}", turn, resource, cell);

        while let Some(built) = build_first(&mut grid, &registry, resource) {
            info!("Turn {}: built {}", turn, built);
        }
    }

    let manager = ScoreManager::try_new(ScoreConfig::new().with_finishing_rank(1), &registry)?;
    let result = manager.score(&grid);

    print!("{}", render_board(&grid));
    println!();
    print!("{}", render_score(&result));
    info!("Seed {} finished after {} turns.", seed, turn);

    Ok(())
}
