#![forbid(unsafe_code)]
//! tiny_town: pattern matching and multi-pass scoring for a grid-based town-building puzzle.
//!
//! Modules:
//! - grid: the board, its cell values and per-cell metadata
//! - catalog: building definitions, patterns with symmetry variants, the registry and standard set
//! - matcher: every placement of every building variant on a board
//! - construct: building from a match, warehouse storage
//! - feeding: feeder strategies and the scan/feed passes
//! - scoring: scorer strategies and the four-pass score manager
//! - events: observing a score run
pub mod catalog;
pub mod construct;
pub mod error;
pub mod events;
pub mod feeding;
pub mod grid;
pub mod matcher;
pub mod scoring;

/// Convenient re-exports for common types. Import with `use tiny_town::prelude::*;`.
pub mod prelude {
    pub use crate::catalog::{
        deck, standard, BuildingDef, Category, Effect, Pattern, Registry, Slot, COTTAGE,
    };
    pub use crate::construct::{build, stash, take};
    pub use crate::error::{Error, Result};
    pub use crate::events::{EventSink, FnSink, MultiSink, ScoreEvent, ScoreEventKind, VecSink};
    pub use crate::feeding::{
        resolve, AdjacentFeeding, Feeder, FeedingOutcome, FoodSource, FoodTarget, GlobalFeeding,
        GroupFeeding, LineFeeding,
    };
    pub use crate::grid::{BuildingId, Cell, CellMeta, Grid, Resource, Tile, GRID_SIZE};
    pub use crate::matcher::{find_matches, match_pattern, matches_for, slot_matches, Match};
    pub use crate::scoring::{
        score, ScoreConfig, ScoreContext, ScoreManager, ScoreResult, ScoreScope, Scorer,
    };
}
