//! Scoring strategies and the four-pass score manager.
//!
//! A [`Scorer`] is a pure function of a read-only [`ScoreContext`]: the board, the
//! building's own cell, board-wide occupancy counts and the feeding outcome. Per-building
//! scorers run once per instance in the score pass. Board-scoped scorers are skipped
//! there and applied once per identity from the final count in the set pass.
use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::catalog::{BuildingDef, Registry};
use crate::feeding::FeedingOutcome;
use crate::grid::{BuildingId, Cell, Grid};

pub mod adjacency;
pub mod board;
pub mod fixed;
pub mod lines;
pub mod manager;
pub mod monument;
pub mod sets;

pub use adjacency::{AdjacentAny, AdjacentCategory, AdjacentCount, AvoidCategory, FedNeighbors};
pub use board::{FedCottages, GlobalUnique, LargestGroup, MissingTypes, UnfedCottages};
pub use fixed::Fixed;
pub use lines::{CenterCount, Corners, Isolation, LineCount, LineUnique};
pub use manager::{score, ScoreConfig, ScoreManager, ScoreResult};
pub use monument::{FinishingRank, SavedScore};
pub use sets::{OddEvenSet, SetTable};

/// When a scorer is evaluated.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScoreScope {
    /// Once per building instance in the score pass.
    #[default]
    PerBuilding,
    /// Once per identity, from the occupancy count, in the set pass.
    Board,
}

/// Trait for scorer capabilities.
pub trait Scorer: fmt::Debug + Send + Sync {
    fn score(&self, ctx: &ScoreContext<'_>) -> i32;

    fn scope(&self) -> ScoreScope {
        ScoreScope::PerBuilding
    }

    /// Whole-board points for `count` instances. Only called for [`ScoreScope::Board`].
    fn score_set(&self, count: usize) -> i32 {
        let _ = count;
        0
    }
}

/// Read-only view handed to a [`Scorer`] for one building instance.
#[derive(Debug, Clone, Copy)]
pub struct ScoreContext<'a> {
    pub grid: &'a Grid,
    /// Cell of the building being scored.
    pub cell: Cell,
    pub building: &'a BuildingDef,
    /// Board-wide count of every known identifier.
    pub counts: &'a BTreeMap<BuildingId, usize>,
    pub feeding: &'a FeedingOutcome,
    pub registry: &'a Registry,
    /// 1-based finishing position, when known.
    pub finishing_rank: Option<u32>,
}

impl<'a> ScoreContext<'a> {
    pub fn id(&self) -> &'a BuildingId {
        self.building.id()
    }

    pub fn fed(&self) -> bool {
        self.feeding.is_fed(self.cell)
    }

    pub fn count(&self, id: &BuildingId) -> usize {
        self.counts.get(id).copied().unwrap_or(0)
    }

    /// Whether `cell` holds another instance of this building's identity.
    pub fn is_same(&self, cell: Cell) -> bool {
        cell != self.cell && self.grid.building_at(cell) == Some(self.id())
    }

    /// Registry-known buildings orthogonally adjacent to this one.
    pub fn neighbors(&self) -> impl Iterator<Item = (Cell, &'a BuildingId)> + '_ {
        let grid = self.grid;
        let registry = self.registry;
        self.cell
            .orthogonal(grid.size())
            .filter_map(move |c| grid.building_at(c).map(|id| (c, id)))
            .filter(move |(_, id)| registry.contains(id))
    }

    /// Every other cell in this building's row and column.
    pub fn line_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let at = self.cell;
        let size = self.grid.size();
        let row = (0..size)
            .filter(move |&c| c != at.col)
            .map(move |c| Cell::new(at.row, c));
        let col = (0..size)
            .filter(move |&r| r != at.row)
            .map(move |r| Cell::new(r, at.col));
        row.chain(col)
    }

    /// Position of this instance among all cells of its identity in row-major order.
    pub fn instance_rank(&self) -> usize {
        let id = self.id();
        self.grid
            .buildings()
            .take_while(|(c, _)| *c != self.cell)
            .filter(|(_, other)| *other == id)
            .count()
    }
}

/// Counts every registry-known identifier on the board.
pub fn occupancy(grid: &Grid, registry: &Registry) -> BTreeMap<BuildingId, usize> {
    let mut counts = BTreeMap::new();
    for (_, id) in grid.buildings() {
        if registry.contains(id) {
            *counts.entry(id.clone()).or_insert(0) += 1;
        }
    }
    counts
}
