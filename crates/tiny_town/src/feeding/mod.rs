//! Feeding strategies: which cells (or how much pooled food) a feeder building provides.
//!
//! A [`Feeder`] only proposes targets. Whether anything living at a target actually eats
//! is decided by [`resolve`], which runs the scan and feed passes of the score pipeline.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::catalog::Registry;
use crate::grid::{Cell, Grid};

pub mod adjacent;
pub mod global;
pub mod group;
pub mod line;
pub mod resolve;

pub use adjacent::AdjacentFeeding;
pub use global::GlobalFeeding;
pub use group::GroupFeeding;
pub use line::LineFeeding;
pub use resolve::{resolve, FeedingOutcome, FoodSource};

/// Where one unit of food goes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FoodTarget {
    /// One unit added to the board-wide pool.
    Pool,
    /// Food offered to whatever occupies the cell.
    Cell(Cell),
}

/// Trait for feeder capabilities.
pub trait Feeder: fmt::Debug + Send + Sync {
    fn feed(&self, at: Cell, grid: &Grid, registry: &Registry) -> Vec<FoodTarget>;
}
