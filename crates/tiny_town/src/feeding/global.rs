//! Pooled feeding not tied to any cell.
use crate::catalog::Registry;
use crate::feeding::{Feeder, FoodTarget};
use crate::grid::{Cell, Grid};

/// Adds `amount` units to the global food pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalFeeding {
    pub amount: u32,
}

impl GlobalFeeding {
    pub fn new(amount: u32) -> Self {
        Self { amount }
    }
}

impl Feeder for GlobalFeeding {
    fn feed(&self, _at: Cell, _grid: &Grid, _registry: &Registry) -> Vec<FoodTarget> {
        vec![FoodTarget::Pool; self.amount as usize]
    }
}
