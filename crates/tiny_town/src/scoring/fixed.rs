//! Constant scores.
use crate::scoring::{ScoreContext, Scorer};

/// A constant number of points, optionally only when the building is fed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixed {
    pub points: i32,
    pub requires_fed: bool,
}

impl Fixed {
    pub fn new(points: i32) -> Self {
        Self {
            points,
            requires_fed: false,
        }
    }

    /// Scores `points` only when the building's feed cost was met.
    pub fn when_fed(points: i32) -> Self {
        Self {
            points,
            requires_fed: true,
        }
    }
}

impl Scorer for Fixed {
    fn score(&self, ctx: &ScoreContext<'_>) -> i32 {
        if self.requires_fed && !ctx.fed() {
            0
        } else {
            self.points
        }
    }
}
