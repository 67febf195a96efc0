//! Pattern matching: every placement of every building variant on the current board.
//!
//! Each distinct rotate/flip variant of a building's pattern is slid over the grid. A
//! window matches when every slot matches its cell; see [`slot_matches`]. Matches are
//! produced fresh on every call and are not deduplicated: two variants passing at the
//! same origin are both reported.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{BuildingDef, Pattern, Registry, Slot};
use crate::grid::{BuildingId, Cell, Grid, Tile};

/// One valid placement of a building variant.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Match {
    /// Top-left row of the window.
    pub row: usize,
    /// Top-left column of the window.
    pub col: usize,
    /// The variant that matched.
    pub pattern: Pattern,
    pub building: BuildingId,
}

impl Match {
    pub fn origin(&self) -> Cell {
        Cell::new(self.row, self.col)
    }

    /// Board cells under the variant's required slots, row-major.
    pub fn cells(&self) -> Vec<Cell> {
        self.pattern
            .required()
            .map(|(r, c, _)| Cell::new(self.row + r, self.col + c))
            .collect()
    }

    /// Whether `cell` lies under one of the required slots.
    pub fn covers(&self, cell: Cell) -> bool {
        cell.row >= self.row
            && cell.col >= self.col
            && self
                .pattern
                .slot(cell.row - self.row, cell.col - self.col)
                .is_some()
    }
}

/// Whether the value at `cell` satisfies `slot`.
///
/// A wildcard slot always matches. A required resource matches the same resource, any
/// building with the wildcard effect, or a building whose metadata holds that resource.
pub fn slot_matches(grid: &Grid, registry: &Registry, cell: Cell, slot: Slot) -> bool {
    let Some(required) = slot else {
        return true;
    };
    let exact = grid.tile(cell).and_then(Tile::resource) == Some(required);
    let wildcard = grid
        .building_at(cell)
        .and_then(|id| registry.get(id))
        .and_then(BuildingDef::effect)
        .is_some_and(|e| e.is_wildcard());
    let stored = grid.metadata(cell).and_then(|m| m.stored_resource) == Some(required);
    exact || wildcard || stored
}

/// Top-left cells at which `pattern` matches `grid` as-is (no variants).
pub fn match_pattern(pattern: &Pattern, grid: &Grid, registry: &Registry) -> Vec<Cell> {
    let size = grid.size();
    let (h, w) = (pattern.height(), pattern.width());
    if h > size || w > size {
        return Vec::new();
    }

    let mut origins = Vec::new();
    for row in 0..=size - h {
        for col in 0..=size - w {
            let fits = (0..h).all(|r| {
                (0..w).all(|c| {
                    slot_matches(grid, registry, Cell::new(row + r, col + c), pattern.slot(r, c))
                })
            });
            if fits {
                origins.push(Cell::new(row, col));
            }
        }
    }
    origins
}

/// Every placement of every variant of `def`.
pub fn matches_for(def: &BuildingDef, grid: &Grid, registry: &Registry) -> Vec<Match> {
    def.variants()
        .iter()
        .flat_map(|variant| {
            match_pattern(variant, grid, registry)
                .into_iter()
                .map(move |origin| Match {
                    row: origin.row,
                    col: origin.col,
                    pattern: variant.clone(),
                    building: def.id().clone(),
                })
        })
        .collect()
}

/// Every placement of every building in `registry`, in registry order.
pub fn find_matches(grid: &Grid, registry: &Registry) -> Vec<Match> {
    let matches: Vec<Match> = registry
        .iter()
        .flat_map(|def| matches_for(def, grid, registry))
        .collect();
    debug!(
        "Found {} match(es) across {} building definition(s).",
        matches.len(),
        registry.len()
    );
    matches
}
