//! Scores that depend on how many instances of an identity exist.
use crate::scoring::{ScoreContext, ScoreScope, Scorer};

/// Whole-set totals for an even number of instances, indexed by `count / 2 - 1`.
const EVEN_TOTALS: [i32; 3] = [5, 15, 26];
/// Points per instance beyond the last tabled even count.
const EVEN_STEP: i32 = 5;

/// Almshouse-style set: even counts score a growing total, odd counts cost a point each.
///
/// The total is spread over the instances so that the per-instance scores sum to it
/// exactly: every instance receives `total / count`, and the first `total % count`
/// instances in row-major order receive one extra point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OddEvenSet;

impl OddEvenSet {
    /// Total for `count` instances.
    pub fn total(count: usize) -> i32 {
        if count == 0 {
            return 0;
        }
        if count % 2 == 1 {
            return -(count as i32);
        }
        let pairs = count / 2;
        match EVEN_TOTALS.get(pairs - 1) {
            Some(&total) => total,
            None => {
                let last = EVEN_TOTALS.len() * 2;
                EVEN_TOTALS[EVEN_TOTALS.len() - 1] + EVEN_STEP * (count - last) as i32
            }
        }
    }

    /// Share of the total owed to the instance at `rank` among `count`.
    pub fn share(count: usize, rank: usize) -> i32 {
        if count == 0 {
            return 0;
        }
        let total = Self::total(count);
        let k = count as i32;
        let extra = if (rank as i32) < total.rem_euclid(k) { 1 } else { 0 };
        total.div_euclid(k) + extra
    }
}

impl Scorer for OddEvenSet {
    fn score(&self, ctx: &ScoreContext<'_>) -> i32 {
        Self::share(ctx.count(ctx.id()), ctx.instance_rank())
    }
}

/// Tavern-style set: one whole-board lookup by instance count, capped at the table end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetTable {
    pub table: Vec<i32>,
}

impl SetTable {
    pub fn new(table: impl Into<Vec<i32>>) -> Self {
        Self {
            table: table.into(),
        }
    }
}

impl Default for SetTable {
    fn default() -> Self {
        Self::new([0, 2, 5, 9, 14, 20])
    }
}

impl Scorer for SetTable {
    fn score(&self, _ctx: &ScoreContext<'_>) -> i32 {
        0
    }

    fn scope(&self) -> ScoreScope {
        ScoreScope::Board
    }

    fn score_set(&self, count: usize) -> i32 {
        let Some(last) = self.table.len().checked_sub(1) else {
            return 0;
        };
        self.table[count.min(last)]
    }
}
