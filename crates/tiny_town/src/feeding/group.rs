//! Feeding the largest connected group of cottages.
use crate::catalog::Registry;
use crate::feeding::{Feeder, FoodTarget};
use crate::grid::regions::{connected_regions, largest};
use crate::grid::{Cell, Grid};

/// Offers food to every cell of the largest 4-connected group of cottage-class buildings.
///
/// Ties go to the group found first in a row-major scan. The feeder's own position is
/// irrelevant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupFeeding;

impl Feeder for GroupFeeding {
    fn feed(&self, _at: Cell, grid: &Grid, registry: &Registry) -> Vec<FoodTarget> {
        let regions = connected_regions(
            grid,
            |cell| {
                grid.building_at(cell)
                    .is_some_and(|id| registry.is_cottage_class(id))
            },
            |_, _| true,
        );
        largest(&regions)
            .map(|region| region.iter().copied().map(FoodTarget::Cell).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BuildingDef, Category, COTTAGE};

    fn registry() -> Registry {
        Registry::new(vec![
            BuildingDef::parse("Cottage", Category::Blue, "_ wheat / brick glass").unwrap(),
            BuildingDef::parse("Barrett Castle", Category::Monument, "wheat stone")
                .unwrap()
                .counting_as(COTTAGE),
            BuildingDef::parse("Greenhouse", Category::Red, "wheat glass / wood wood").unwrap(),
        ])
        .unwrap()
    }

    fn cells(targets: &[FoodTarget]) -> Vec<Cell> {
        let mut out: Vec<Cell> = targets
            .iter()
            .filter_map(|t| match t {
                FoodTarget::Cell(c) => Some(*c),
                FoodTarget::Pool => None,
            })
            .collect();
        out.sort();
        out
    }

    #[test]
    fn feeds_largest_group_including_aliases() {
        let mut grid = Grid::new();
        grid.place_building(Cell::new(0, 0), "cottage").unwrap();
        grid.place_building(Cell::new(2, 1), "cottage").unwrap();
        grid.place_building(Cell::new(2, 2), "barrett castle").unwrap();
        grid.place_building(Cell::new(3, 2), "cottage").unwrap();
        grid.place_building(Cell::new(3, 3), "greenhouse").unwrap();

        let targets = GroupFeeding.feed(Cell::new(3, 3), &grid, &registry());
        assert_eq!(
            cells(&targets),
            vec![Cell::new(2, 1), Cell::new(2, 2), Cell::new(3, 2)]
        );
    }

    #[test]
    fn ties_go_to_first_group_in_scan_order() {
        let mut grid = Grid::new();
        grid.place_building(Cell::new(0, 2), "cottage").unwrap();
        grid.place_building(Cell::new(0, 3), "cottage").unwrap();
        grid.place_building(Cell::new(3, 0), "cottage").unwrap();
        grid.place_building(Cell::new(3, 1), "cottage").unwrap();

        let targets = GroupFeeding.feed(Cell::new(1, 1), &grid, &registry());
        assert_eq!(cells(&targets), vec![Cell::new(0, 2), Cell::new(0, 3)]);
    }

    #[test]
    fn no_cottages_means_no_food() {
        let mut grid = Grid::new();
        grid.place_building(Cell::new(1, 1), "greenhouse").unwrap();
        assert!(GroupFeeding.feed(Cell::new(1, 1), &grid, &registry()).is_empty());
    }
}
