//! Scores driven by the building's row, column, or fixed board regions.
use std::collections::BTreeSet;

use crate::scoring::{ScoreContext, Scorer};

/// One point per distinct known building identity elsewhere in the row and column.
///
/// Other instances of the scorer's own identity in those lines count as one more identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineUnique;

impl Scorer for LineUnique {
    fn score(&self, ctx: &ScoreContext<'_>) -> i32 {
        let distinct: BTreeSet<_> = ctx
            .line_cells()
            .filter_map(|c| ctx.grid.building_at(c))
            .filter(|id| ctx.registry.contains(id))
            .collect();
        distinct.len() as i32
    }
}

/// `base` plus one per other instance of the same identity in the row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCount {
    pub base: i32,
}

impl LineCount {
    pub fn new(base: i32) -> Self {
        Self { base }
    }
}

impl Scorer for LineCount {
    fn score(&self, ctx: &ScoreContext<'_>) -> i32 {
        self.base + ctx.line_cells().filter(|&c| ctx.is_same(c)).count() as i32
    }
}

/// Flat `points` only if no other instance of the same identity shares the row or column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Isolation {
    pub points: i32,
}

impl Isolation {
    pub fn new(points: i32) -> Self {
        Self { points }
    }
}

impl Scorer for Isolation {
    fn score(&self, ctx: &ScoreContext<'_>) -> i32 {
        if ctx.line_cells().any(|c| ctx.is_same(c)) {
            0
        } else {
            self.points
        }
    }
}

/// One point plus one per other instance of the same identity on a center cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CenterCount;

impl Scorer for CenterCount {
    fn score(&self, ctx: &ScoreContext<'_>) -> i32 {
        let size = ctx.grid.size();
        let others = ctx
            .grid
            .cells()
            .filter(|&c| c.is_center(size) && ctx.is_same(c))
            .count();
        1 + others as i32
    }
}

/// `points` per instance of the same identity, this one included, sitting on a corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corners {
    pub points: i32,
}

impl Corners {
    pub fn new(points: i32) -> Self {
        Self { points }
    }
}

impl Scorer for Corners {
    fn score(&self, ctx: &ScoreContext<'_>) -> i32 {
        let size = ctx.grid.size();
        let id = ctx.id();
        let cornered = ctx
            .grid
            .buildings()
            .filter(|&(c, other)| other == id && c.is_corner(size))
            .count();
        cornered as i32 * self.points
    }
}
