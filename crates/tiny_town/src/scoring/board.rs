//! Scores computed from board-wide aggregates, independent of the building's position.
use crate::grid::regions::{connected_regions, largest};
use crate::grid::BuildingId;
use crate::scoring::{ScoreContext, Scorer};

/// One point per identity that occurs exactly once on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlobalUnique;

impl Scorer for GlobalUnique {
    fn score(&self, ctx: &ScoreContext<'_>) -> i32 {
        ctx.counts.values().filter(|&&n| n == 1).count() as i32
    }
}

/// One point plus the size of the largest 4-connected region of a single identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LargestGroup;

impl Scorer for LargestGroup {
    fn score(&self, ctx: &ScoreContext<'_>) -> i32 {
        let grid = ctx.grid;
        let regions = connected_regions(
            grid,
            |c| grid.building_at(c).is_some_and(|id| ctx.registry.contains(id)),
            |a, b| grid.building_at(a) == grid.building_at(b),
        );
        1 + largest(&regions).map_or(0, <[_]>::len) as i32
    }
}

/// `points` per listed identity absent from the board.
///
/// An empty list stands for every non-monument building of the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTypes {
    pub names: Vec<BuildingId>,
    pub points: i32,
}

impl MissingTypes {
    pub fn new<I, S>(names: I, points: i32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names.into_iter().map(BuildingId::new).collect(),
            points,
        }
    }

    /// Counts against the registry's own non-monument buildings.
    pub fn deck(points: i32) -> Self {
        Self {
            names: Vec::new(),
            points,
        }
    }
}

impl Scorer for MissingTypes {
    fn score(&self, ctx: &ScoreContext<'_>) -> i32 {
        let missing = if self.names.is_empty() {
            ctx.registry
                .iter()
                .filter(|d| !d.is_monument() && ctx.count(d.id()) == 0)
                .count()
        } else {
            self.names.iter().filter(|n| ctx.count(n) == 0).count()
        };
        missing as i32 * self.points
    }
}

/// `points` per fed cottage, castles counting double.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FedCottages {
    pub points: i32,
}

impl FedCottages {
    pub fn new(points: i32) -> Self {
        Self { points }
    }
}

impl Scorer for FedCottages {
    fn score(&self, ctx: &ScoreContext<'_>) -> i32 {
        ctx.feeding.fed_cottages as i32 * self.points
    }
}

/// `points` per cottage-class building that went unfed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnfedCottages {
    pub points: i32,
}

impl UnfedCottages {
    pub fn new(points: i32) -> Self {
        Self { points }
    }
}

impl Scorer for UnfedCottages {
    fn score(&self, ctx: &ScoreContext<'_>) -> i32 {
        let unfed = ctx
            .grid
            .buildings()
            .filter(|(c, id)| ctx.registry.is_cottage_class(id) && !ctx.feeding.is_fed(*c))
            .count();
        unfed as i32 * self.points
    }
}
