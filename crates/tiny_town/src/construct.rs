//! Construction: turning a match into a building, and warehouse storage.
//!
//! Every operation validates before it writes, so a rejected call leaves the grid as it
//! was.
use tracing::debug;

use crate::catalog::{BuildingDef, Registry};
use crate::error::{Error, Result};
use crate::grid::{Cell, CellMeta, Grid, Resource};
use crate::matcher::{slot_matches, Match};

/// Builds the matched building on `target`.
///
/// The resources under the match's required slots are consumed; buildings standing in
/// for a resource stay where they are, so `target` must be one of the consumed cells.
/// A window covered only by stand-in buildings consumes all of them instead.
/// `choice` names the resource kept by buildings with [`crate::catalog::Effect::StoreResource`].
pub fn build(
    grid: &mut Grid,
    registry: &Registry,
    matched: &Match,
    target: Cell,
    choice: Option<Resource>,
) -> Result<()> {
    let def = registry
        .get(&matched.building)
        .ok_or_else(|| Error::UnknownBuilding(matched.building.to_string()))?;

    if def.is_monument() {
        if let Some((_, existing)) = grid
            .buildings()
            .find(|(_, id)| registry.get(id).is_some_and(BuildingDef::is_monument))
        {
            return Err(Error::MonumentAlreadyBuilt(existing.to_string()));
        }
    }

    let cells = matched.cells();
    for &cell in &cells {
        if !grid.contains(cell) {
            return Err(Error::OutOfBounds {
                row: cell.row,
                col: cell.col,
            });
        }
    }
    let fits = matched.pattern.required().all(|(r, c, res)| {
        slot_matches(
            grid,
            registry,
            Cell::new(matched.row + r, matched.col + c),
            Some(res),
        )
    });
    if !fits {
        return Err(Error::Other(format!(
            "{} no longer fits at {}",
            def.name(),
            matched.origin()
        )));
    }

    let mut consumed: Vec<Cell> = cells
        .iter()
        .copied()
        .filter(|&c| grid.tile(c).is_some_and(|t| t.resource().is_some()))
        .collect();
    if consumed.is_empty() {
        consumed = cells;
    }

    let before = grid.buildings().count();
    let meta = def
        .effect()
        .map(|e| e.initial_metadata(def.name(), before, choice))
        .transpose()?
        .flatten();

    grid.construct_building(&consumed, target, def.id().clone())?;
    if let Some(meta) = meta {
        grid.set_metadata(target, meta)?;
    }
    debug!("Built {} at {} from {} cell(s).", def.name(), target, consumed.len());
    Ok(())
}

/// Parks `resource` in the storage building at `cell`.
pub fn stash(grid: &mut Grid, registry: &Registry, cell: Cell, resource: Resource) -> Result<()> {
    let id = grid.building_at(cell).ok_or(Error::NotABuilding {
        row: cell.row,
        col: cell.col,
    })?;
    let capacity = registry
        .get(id)
        .and_then(BuildingDef::effect)
        .and_then(|e| e.storage_capacity())
        .ok_or(Error::NotStorage {
            row: cell.row,
            col: cell.col,
        })?;

    let held = grid.metadata(cell).map_or(0, |m| m.stored.len());
    if held >= capacity {
        return Err(Error::StorageFull {
            row: cell.row,
            col: cell.col,
        });
    }

    match grid.metadata_mut(cell) {
        Some(meta) => meta.stored.push(resource),
        None => grid.set_metadata(
            cell,
            CellMeta {
                stored: vec![resource],
                ..CellMeta::default()
            },
        )?,
    }
    Ok(())
}

/// Removes one `resource` from the storage building at `cell`.
pub fn take(grid: &mut Grid, cell: Cell, resource: Resource) -> Result<()> {
    if grid.building_at(cell).is_none() {
        return Err(Error::NotABuilding {
            row: cell.row,
            col: cell.col,
        });
    }
    let meta = grid.metadata_mut(cell).ok_or(Error::NotStorage {
        row: cell.row,
        col: cell.col,
    })?;
    let index = meta
        .stored
        .iter()
        .position(|&r| r == resource)
        .ok_or_else(|| Error::Other(format!("no {resource} stored at {cell}")))?;
    meta.stored.remove(index);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{deck, Category, Effect};
    use crate::grid::BuildingId;
    use crate::matcher::matches_for;

    fn registry() -> Registry {
        deck(&[
            "Cottage",
            "Well",
            "Factory",
            "Trading Post",
            "Warehouse",
            "Shrine of the Elder Tree",
            "Fort Ironweed",
        ])
        .unwrap()
    }

    fn first_match(grid: &Grid, registry: &Registry, name: &str) -> Match {
        matches_for(registry.get_by_name(name).unwrap(), grid, registry)
            .into_iter()
            .next()
            .expect("a match")
    }

    fn place_all(grid: &mut Grid, cells: &[(usize, usize, Resource)]) {
        for &(r, c, res) in cells {
            grid.place(Cell::new(r, c), res).unwrap();
        }
    }

    #[test]
    fn builds_cottage_and_consumes_resources() {
        let registry = registry();
        let mut grid = Grid::new();
        place_all(
            &mut grid,
            &[
                (0, 1, Resource::Wheat),
                (1, 0, Resource::Brick),
                (1, 1, Resource::Glass),
                (0, 0, Resource::Stone),
            ],
        );
        let m = first_match(&grid, &registry, "cottage");
        build(&mut grid, &registry, &m, Cell::new(1, 1), None).unwrap();

        assert_eq!(grid.building_at(Cell::new(1, 1)), Some(&BuildingId::new("cottage")));
        assert!(grid.tile(Cell::new(0, 1)).unwrap().is_empty());
        assert!(grid.tile(Cell::new(1, 0)).unwrap().is_empty());
        assert_eq!(grid.tile(Cell::new(0, 0)).unwrap().resource(), Some(Resource::Stone));
    }

    #[test]
    fn invalid_target_leaves_grid_untouched() {
        let registry = registry();
        let mut grid = Grid::new();
        place_all(&mut grid, &[(0, 0, Resource::Wood), (0, 1, Resource::Stone)]);
        let before = grid.clone();
        let m = first_match(&grid, &registry, "well");

        let err = build(&mut grid, &registry, &m, Cell::new(2, 2), None).unwrap_err();
        assert_eq!(err, Error::InvalidBuildTarget { row: 2, col: 2 });
        assert_eq!(grid, before);
    }

    #[test]
    fn stale_match_is_rejected() {
        let registry = registry();
        let mut grid = Grid::new();
        place_all(&mut grid, &[(0, 0, Resource::Wood), (0, 1, Resource::Stone)]);
        let m = first_match(&grid, &registry, "well");
        grid.clear(&[Cell::new(0, 1)]).unwrap();

        assert!(matches!(
            build(&mut grid, &registry, &m, Cell::new(0, 0), None),
            Err(Error::Other(_))
        ));
    }

    #[test]
    fn trading_post_is_not_consumed() {
        let registry = registry();
        let mut grid = Grid::new();
        grid.place_building(Cell::new(0, 0), "trading post").unwrap();
        grid.place(Cell::new(0, 1), Resource::Stone).unwrap();
        let m = first_match(&grid, &registry, "well");

        assert_eq!(
            build(&mut grid, &registry, &m, Cell::new(0, 0), None),
            Err(Error::InvalidBuildTarget { row: 0, col: 0 })
        );
        build(&mut grid, &registry, &m, Cell::new(0, 1), None).unwrap();
        assert_eq!(grid.building_at(Cell::new(0, 0)), Some(&BuildingId::new("trading post")));
        assert_eq!(grid.building_at(Cell::new(0, 1)), Some(&BuildingId::new("well")));
    }

    #[test]
    fn well_over_two_trading_posts_replaces_them() {
        let registry = registry();
        let mut grid = Grid::new();
        grid.place_building(Cell::new(0, 0), "trading post").unwrap();
        grid.place_building(Cell::new(0, 1), "trading post").unwrap();

        let found = matches_for(registry.get_by_name("well").unwrap(), &grid, &registry);
        assert_eq!(found.len(), 2);
        for m in &found {
            for target in m.cells() {
                let mut board = grid.clone();
                build(&mut board, &registry, m, target, None).unwrap();
                assert_eq!(board.building_at(target), Some(&BuildingId::new("well")));
                assert_eq!(board.buildings().count(), 1);
            }
        }
    }

    #[test]
    fn factory_requires_and_keeps_a_resource_choice() {
        let registry = registry();
        let mut grid = Grid::new();
        place_all(
            &mut grid,
            &[
                (0, 0, Resource::Wood),
                (1, 0, Resource::Brick),
                (1, 1, Resource::Stone),
                (1, 2, Resource::Stone),
                (1, 3, Resource::Brick),
            ],
        );
        let before = grid.clone();
        let m = first_match(&grid, &registry, "factory");

        assert_eq!(
            build(&mut grid, &registry, &m, Cell::new(1, 0), None),
            Err(Error::MissingResourceChoice("Factory".into()))
        );
        assert_eq!(grid, before);

        build(&mut grid, &registry, &m, Cell::new(1, 0), Some(Resource::Glass)).unwrap();
        assert_eq!(
            grid.metadata(Cell::new(1, 0)).and_then(|m| m.stored_resource),
            Some(Resource::Glass)
        );
    }

    #[test]
    fn shrine_freezes_score_from_buildings_already_built() {
        let registry = registry();
        let mut grid = Grid::new();
        grid.place_building(Cell::new(3, 0), "well").unwrap();
        grid.place_building(Cell::new(3, 1), "well").unwrap();
        place_all(
            &mut grid,
            &[
                (0, 1, Resource::Brick),
                (1, 0, Resource::Wheat),
                (1, 1, Resource::Stone),
                (1, 2, Resource::Glass),
            ],
        );
        let m = first_match(&grid, &registry, "shrine of the elder tree");
        build(&mut grid, &registry, &m, Cell::new(1, 1), None).unwrap();
        assert_eq!(
            grid.metadata(Cell::new(1, 1)).and_then(|m| m.saved_score),
            Some(3)
        );
    }

    #[test]
    fn second_monument_is_rejected() {
        let registry = registry();
        let mut grid = Grid::new();
        grid.place_building(Cell::new(3, 3), "shrine of the elder tree").unwrap();
        place_all(
            &mut grid,
            &[
                (0, 0, Resource::Wheat),
                (0, 2, Resource::Brick),
                (1, 0, Resource::Stone),
                (1, 1, Resource::Wood),
                (1, 2, Resource::Stone),
            ],
        );
        let m = first_match(&grid, &registry, "fort ironweed");
        assert_eq!(
            build(&mut grid, &registry, &m, Cell::new(1, 1), None),
            Err(Error::MonumentAlreadyBuilt("shrine of the elder tree".into()))
        );
    }

    #[test]
    fn unknown_building_is_rejected() {
        let registry = registry();
        let mut grid = Grid::new();
        grid.place(Cell::new(0, 0), Resource::Wood).unwrap();
        let m = Match {
            row: 0,
            col: 0,
            pattern: "wood".parse().unwrap(),
            building: BuildingId::new("ghost"),
        };
        assert_eq!(
            build(&mut grid, &registry, &m, Cell::new(0, 0), None),
            Err(Error::UnknownBuilding("ghost".into()))
        );
    }

    #[test]
    fn warehouse_stores_up_to_capacity() {
        let registry = registry();
        let mut grid = Grid::new();
        grid.place_building(Cell::new(0, 0), "warehouse").unwrap();
        grid.place_building(Cell::new(0, 1), "well").unwrap();

        for res in [Resource::Wood, Resource::Glass, Resource::Wood] {
            stash(&mut grid, &registry, Cell::new(0, 0), res).unwrap();
        }
        assert_eq!(
            stash(&mut grid, &registry, Cell::new(0, 0), Resource::Stone),
            Err(Error::StorageFull { row: 0, col: 0 })
        );
        assert_eq!(
            stash(&mut grid, &registry, Cell::new(0, 1), Resource::Stone),
            Err(Error::NotStorage { row: 0, col: 1 })
        );
        assert_eq!(
            stash(&mut grid, &registry, Cell::new(2, 2), Resource::Stone),
            Err(Error::NotABuilding { row: 2, col: 2 })
        );

        take(&mut grid, Cell::new(0, 0), Resource::Wood).unwrap();
        assert_eq!(
            grid.metadata(Cell::new(0, 0)).unwrap().stored,
            vec![Resource::Glass, Resource::Wood]
        );
        assert!(take(&mut grid, Cell::new(0, 0), Resource::Brick).is_err());
        assert_eq!(
            take(&mut grid, Cell::new(0, 1), Resource::Wood),
            Err(Error::NotStorage { row: 0, col: 1 })
        );
    }

    #[test]
    fn storage_effect_is_driven_by_definition() {
        let registry = Registry::new(vec![BuildingDef::parse("Silo", Category::Black, "wheat")
            .unwrap()
            .with_effect(Effect::Storage { capacity: 1 })])
        .unwrap();
        let mut grid = Grid::new();
        grid.place_building(Cell::new(1, 1), "silo").unwrap();
        stash(&mut grid, &registry, Cell::new(1, 1), Resource::Wheat).unwrap();
        assert!(stash(&mut grid, &registry, Cell::new(1, 1), Resource::Wheat).is_err());
    }
}
