use tiny_town::prelude::*;
use tiny_town_examples::{init_tracing, render_board, render_score};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let registry = deck(&[
        "Cottage",
        "Farm",
        "Well",
        "Chapel",
        "Tavern",
        "Theater",
        "Warehouse",
        "Barrett Castle",
    ])?;

    // Farm in the corner, cottages around a well, a chapel and two taverns.
    let mut grid = Grid::new();
    let layout = [
        (0, 0, "farm"),
        (0, 1, "cottage"),
        (1, 0, "cottage"),
        (1, 1, "well"),
        (1, 2, "cottage"),
        (2, 1, "cottage"),
        (2, 2, "chapel"),
        (3, 0, "tavern"),
        (3, 3, "tavern"),
        (0, 3, "barrett castle"),
        (2, 3, "warehouse"),
    ];
    for (row, col, id) in layout {
        grid.place_building(Cell::new(row, col), id)?;
    }
    stash(&mut grid, &registry, Cell::new(2, 3), Resource::Glass)?;
    grid.place(Cell::new(3, 1), Resource::Wood)?;

    let manager = ScoreManager::try_new(ScoreConfig::new(), &registry)?;
    let mut sink = FnSink::new(|event| match event {
        ScoreEvent::BuildingFed { cell, building, source } => {
            info!("{building} at {cell} fed from {source:?}")
        }
        ScoreEvent::BuildingStarved { cell, building, .. } => info!("{building} at {cell} starved"),
        ScoreEvent::SetScored { building, count, points } => {
            info!("{count} x {building} scored {points} as a set")
        }
        _ => {}
    });
    let result = manager.score_with_events(&grid, &mut sink);

    print!("{}", render_board(&grid));
    println!();
    print!("{}", render_score(&result));

    Ok(())
}
