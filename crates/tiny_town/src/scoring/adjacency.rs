//! Scores driven by orthogonal neighbours.
use crate::catalog::Category;
use crate::grid::BuildingId;
use crate::scoring::{ScoreContext, Scorer};

fn ids<I, S>(targets: I) -> Vec<BuildingId>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    targets.into_iter().map(BuildingId::new).collect()
}

/// `points` per orthogonal neighbour that is, or counts as, one of `targets`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacentCount {
    pub targets: Vec<BuildingId>,
    pub points: i32,
}

impl AdjacentCount {
    pub fn new<I, S>(targets: I, points: i32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            targets: ids(targets),
            points,
        }
    }
}

impl Scorer for AdjacentCount {
    fn score(&self, ctx: &ScoreContext<'_>) -> i32 {
        let hits = ctx
            .neighbors()
            .filter(|(_, id)| ctx.registry.is_any(id, &self.targets))
            .count();
        hits as i32 * self.points
    }
}

/// Flat `points` once if any orthogonal neighbour is, or counts as, one of `targets`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacentAny {
    pub targets: Vec<BuildingId>,
    pub points: i32,
}

impl AdjacentAny {
    pub fn new<I, S>(targets: I, points: i32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            targets: ids(targets),
            points,
        }
    }
}

impl Scorer for AdjacentAny {
    fn score(&self, ctx: &ScoreContext<'_>) -> i32 {
        if ctx
            .neighbors()
            .any(|(_, id)| ctx.registry.is_any(id, &self.targets))
        {
            self.points
        } else {
            0
        }
    }
}

/// Flat `points` once if any orthogonal neighbour belongs to one of `categories`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacentCategory {
    pub categories: Vec<Category>,
    pub points: i32,
}

impl AdjacentCategory {
    pub fn new(categories: impl Into<Vec<Category>>, points: i32) -> Self {
        Self {
            categories: categories.into(),
            points,
        }
    }
}

impl Scorer for AdjacentCategory {
    fn score(&self, ctx: &ScoreContext<'_>) -> i32 {
        let touching = ctx.neighbors().any(|(_, id)| {
            ctx.registry
                .category_of(id)
                .is_some_and(|c| self.categories.contains(&c))
        });
        if touching {
            self.points
        } else {
            0
        }
    }
}

/// Flat `points` unless an orthogonal neighbour belongs to one of `categories`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvoidCategory {
    pub categories: Vec<Category>,
    pub points: i32,
}

impl AvoidCategory {
    pub fn new(categories: impl Into<Vec<Category>>, points: i32) -> Self {
        Self {
            categories: categories.into(),
            points,
        }
    }
}

impl Scorer for AvoidCategory {
    fn score(&self, ctx: &ScoreContext<'_>) -> i32 {
        let touching = ctx.neighbors().any(|(_, id)| {
            ctx.registry
                .category_of(id)
                .is_some_and(|c| self.categories.contains(&c))
        });
        if touching {
            0
        } else {
            self.points
        }
    }
}

/// Flat `points` when at least `min` orthogonal neighbours are fed cottage-class buildings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FedNeighbors {
    pub min: usize,
    pub points: i32,
}

impl FedNeighbors {
    pub fn new(min: usize, points: i32) -> Self {
        Self { min, points }
    }
}

impl Scorer for FedNeighbors {
    fn score(&self, ctx: &ScoreContext<'_>) -> i32 {
        let fed = ctx
            .neighbors()
            .filter(|(cell, id)| ctx.registry.is_cottage_class(id) && ctx.feeding.is_fed(*cell))
            .count();
        if fed >= self.min {
            self.points
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BuildingDef, Registry, COTTAGE};
    use crate::feeding::GlobalFeeding;
    use crate::grid::Cell;
    use crate::scoring::test_support::{board, score_at};

    fn registry() -> Registry {
        Registry::new(vec![
            BuildingDef::parse("Cottage", Category::Blue, "_ wheat / brick glass")
                .unwrap()
                .with_feed_cost(1),
            BuildingDef::parse("Barrett Castle", Category::Monument, "wheat stone")
                .unwrap()
                .with_feed_cost(1)
                .counting_as(COTTAGE),
            BuildingDef::parse("Farm", Category::Red, "wheat wheat / wood wood")
                .unwrap()
                .with_feeder(GlobalFeeding::new(1)),
            BuildingDef::parse("Factory", Category::Black, "wood brick").unwrap(),
            BuildingDef::parse("Well", Category::Gray, "wood stone")
                .unwrap()
                .with_scorer(AdjacentCount::new([COTTAGE], 1)),
            BuildingDef::parse("Fountain", Category::Gray, "wood glass")
                .unwrap()
                .with_scorer(AdjacentAny::new(["fountain"], 2)),
            BuildingDef::parse("Bakery", Category::Yellow, "wheat brick")
                .unwrap()
                .with_scorer(AdjacentCategory::new([Category::Red, Category::Black], 3)),
            BuildingDef::parse("Abbey", Category::Orange, "glass brick")
                .unwrap()
                .with_scorer(AvoidCategory::new([Category::Black], 3)),
            BuildingDef::parse("Temple", Category::Orange, "glass stone")
                .unwrap()
                .with_scorer(FedNeighbors::new(2, 4)),
        ])
        .unwrap()
    }

    #[test]
    fn well_counts_cottage_class_neighbours() {
        let grid = board(&[
            (1, 1, "well"),
            (0, 1, "cottage"),
            (1, 0, "barrett castle"),
            (2, 2, "cottage"),
            (1, 2, "ghost"),
        ]);
        assert_eq!(score_at(&grid, &registry(), Cell::new(1, 1)), 2);
    }

    #[test]
    fn fountain_scores_once_next_to_another_fountain() {
        let registry = registry();
        let grid = board(&[(1, 1, "fountain"), (0, 1, "fountain"), (1, 0, "fountain")]);
        assert_eq!(score_at(&grid, &registry, Cell::new(1, 1)), 2);
        let lonely = board(&[(1, 1, "fountain"), (2, 2, "fountain")]);
        assert_eq!(score_at(&lonely, &registry, Cell::new(1, 1)), 0);
    }

    #[test]
    fn bakery_needs_a_red_or_black_neighbour() {
        let registry = registry();
        assert_eq!(
            score_at(&board(&[(0, 0, "bakery"), (0, 1, "farm")]), &registry, Cell::new(0, 0)),
            3
        );
        assert_eq!(
            score_at(&board(&[(0, 0, "bakery"), (1, 0, "factory")]), &registry, Cell::new(0, 0)),
            3
        );
        assert_eq!(
            score_at(&board(&[(0, 0, "bakery"), (1, 1, "farm")]), &registry, Cell::new(0, 0)),
            0
        );
    }

    #[test]
    fn abbey_scores_away_from_black_buildings() {
        let registry = registry();
        assert_eq!(
            score_at(&board(&[(0, 0, "abbey"), (1, 1, "factory")]), &registry, Cell::new(0, 0)),
            3
        );
        assert_eq!(
            score_at(&board(&[(0, 0, "abbey"), (0, 1, "factory")]), &registry, Cell::new(0, 0)),
            0
        );
    }

    #[test]
    fn temple_needs_two_fed_cottage_neighbours() {
        let registry = registry();
        let one_fed = board(&[
            (1, 1, "temple"),
            (0, 1, "cottage"),
            (1, 0, "cottage"),
            (3, 3, "farm"),
        ]);
        assert_eq!(score_at(&one_fed, &registry, Cell::new(1, 1)), 0);

        let two_fed = board(&[
            (1, 1, "temple"),
            (0, 1, "cottage"),
            (1, 0, "cottage"),
            (3, 3, "farm"),
            (3, 2, "farm"),
        ]);
        assert_eq!(score_at(&two_fed, &registry, Cell::new(1, 1)), 4);
    }
}
