//! Monument scores that do not depend on the current board layout.
use crate::scoring::{ScoreContext, Scorer};

/// Returns the score frozen into the cell's metadata at construction, or zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SavedScore;

impl Scorer for SavedScore {
    fn score(&self, ctx: &ScoreContext<'_>) -> i32 {
        ctx.grid
            .metadata(ctx.cell)
            .and_then(|m| m.saved_score)
            .unwrap_or(0)
    }
}

/// Points looked up by 1-based finishing rank; zero when the rank is unknown or off the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishingRank {
    pub table: Vec<i32>,
}

impl FinishingRank {
    pub fn new(table: impl Into<Vec<i32>>) -> Self {
        Self {
            table: table.into(),
        }
    }
}

impl Default for FinishingRank {
    fn default() -> Self {
        Self::new([12, 9, 6, 3])
    }
}

impl Scorer for FinishingRank {
    fn score(&self, ctx: &ScoreContext<'_>) -> i32 {
        ctx.finishing_rank
            .and_then(|rank| rank.checked_sub(1))
            .and_then(|i| self.table.get(i as usize))
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BuildingDef, Category, Registry};
    use crate::grid::{Cell, CellMeta};
    use crate::scoring::test_support::{board, score_at, score_at_rank};

    fn registry() -> Registry {
        Registry::new(vec![
            BuildingDef::parse("Shrine of the Elder Tree", Category::Monument, "brick stone")
                .unwrap()
                .with_scorer(SavedScore),
            BuildingDef::parse("Starloom Assembly", Category::Monument, "glass wheat")
                .unwrap()
                .with_scorer(FinishingRank::default()),
        ])
        .unwrap()
    }

    #[test]
    fn shrine_reads_frozen_score() {
        let registry = registry();
        let mut grid = board(&[(1, 1, "shrine of the elder tree")]);
        assert_eq!(score_at(&grid, &registry, Cell::new(1, 1)), 0);

        grid.set_metadata(Cell::new(1, 1), CellMeta::frozen(5)).unwrap();
        assert_eq!(score_at(&grid, &registry, Cell::new(1, 1)), 5);
    }

    #[test]
    fn starloom_uses_finishing_rank() {
        let registry = registry();
        let grid = board(&[(0, 0, "starloom assembly")]);
        let at = Cell::new(0, 0);
        assert_eq!(score_at_rank(&grid, &registry, at, None), 0);
        assert_eq!(score_at_rank(&grid, &registry, at, Some(1)), 12);
        assert_eq!(score_at_rank(&grid, &registry, at, Some(4)), 3);
        assert_eq!(score_at_rank(&grid, &registry, at, Some(5)), 0);
        assert_eq!(score_at_rank(&grid, &registry, at, Some(0)), 0);
    }
}
