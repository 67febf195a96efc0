use tiny_town::prelude::*;
use tiny_town_examples::{init_tracing, render_board, render_matches};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let registry = Registry::new(standard()?)?;

    let mut grid = Grid::new();
    let resources = [
        [Some(Resource::Wheat), Some(Resource::Wheat), Some(Resource::Stone), None],
        [Some(Resource::Wood), Some(Resource::Wood), Some(Resource::Wood), Some(Resource::Stone)],
        [Some(Resource::Brick), Some(Resource::Glass), Some(Resource::Glass), None],
        [None, Some(Resource::Wheat), Some(Resource::Brick), Some(Resource::Brick)],
    ];
    for (row, line) in resources.iter().enumerate() {
        for (col, res) in line.iter().enumerate() {
            if let Some(res) = res {
                grid.place(Cell::new(row, col), *res)?;
            }
        }
    }
    // A trading post stands in for any resource.
    grid.place_building(Cell::new(3, 0), "trading post")?;

    let matches = find_matches(&grid, &registry);

    print!("{}", render_board(&grid));
    println!();
    println!("{} match(es):", matches.len());
    print!("{}", render_matches(&matches));

    Ok(())
}
