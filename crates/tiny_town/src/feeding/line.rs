//! Feeding along the feeder's row and column.
use crate::catalog::Registry;
use crate::feeding::{Feeder, FoodTarget};
use crate::grid::{Cell, Grid};

/// Offers food to every other cell sharing the feeder's row or column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineFeeding;

impl Feeder for LineFeeding {
    fn feed(&self, at: Cell, grid: &Grid, _registry: &Registry) -> Vec<FoodTarget> {
        let size = grid.size();
        let row = (0..size)
            .filter(|&c| c != at.col)
            .map(|c| Cell::new(at.row, c));
        let col = (0..size)
            .filter(|&r| r != at.row)
            .map(|r| Cell::new(r, at.col));
        row.chain(col).map(FoodTarget::Cell).collect()
    }
}
