//! Feeding the eight cells around the feeder.
use crate::catalog::Registry;
use crate::feeding::{Feeder, FoodTarget};
use crate::grid::{Cell, Grid};

/// Offers food to every orthogonal and diagonal neighbour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdjacentFeeding;

impl Feeder for AdjacentFeeding {
    fn feed(&self, at: Cell, grid: &Grid, _registry: &Registry) -> Vec<FoodTarget> {
        at.surrounding(grid.size()).map(FoodTarget::Cell).collect()
    }
}
