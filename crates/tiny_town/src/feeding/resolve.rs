//! Scan and feed passes: collect food from every feeder, then let buildings eat.
use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::catalog::Registry;
use crate::events::{EventSink, ScoreEvent, ScoreEventKind};
use crate::feeding::FoodTarget;
use crate::grid::{Cell, Grid};

/// How a building got its food.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FoodSource {
    /// A feeder targeted the building's own cell.
    Positional,
    /// Units drawn from the global pool.
    Pool { units: u32 },
}

/// Food state after the feed pass.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedingOutcome {
    /// Cells targeted by at least one positional feeder.
    pub positional: BTreeSet<Cell>,
    /// Units added to the global pool by all feeders.
    pub pool_produced: u32,
    /// Units left in the pool once every building has eaten.
    pub pool_remaining: u32,
    /// Buildings whose feed cost was met.
    pub fed: BTreeSet<Cell>,
    /// Sum of cottage weights over fed cottage-class buildings.
    pub fed_cottages: u32,
}

impl FeedingOutcome {
    pub fn is_fed(&self, cell: Cell) -> bool {
        self.fed.contains(&cell)
    }
}

/// Runs the scan and feed passes over `grid`.
///
/// Buildings eat in row-major order. Positional food at a building's own cell is used
/// first and never touches the pool; otherwise the whole feed cost must be available in
/// the pool. Identifiers missing from `registry` produce and eat nothing.
pub fn resolve(grid: &Grid, registry: &Registry) -> FeedingOutcome {
    resolve_with_events(grid, registry, &mut ())
}

pub(crate) fn resolve_with_events(
    grid: &Grid,
    registry: &Registry,
    sink: &mut dyn EventSink,
) -> FeedingOutcome {
    let mut outcome = FeedingOutcome::default();

    for (cell, id) in grid.buildings() {
        let Some(feeder) = registry.get(id).and_then(|def| def.feeder()) else {
            continue;
        };
        let mut pooled = 0u32;
        let mut positional = 0usize;
        for target in feeder.feed(cell, grid, registry) {
            match target {
                FoodTarget::Pool => pooled += 1,
                FoodTarget::Cell(at) => {
                    positional += 1;
                    outcome.positional.insert(at);
                }
            }
        }
        outcome.pool_produced += pooled;
        trace!("{} at {} produced {} pooled, {} positional", id, cell, pooled, positional);
        if sink.wants(ScoreEventKind::FoodProduced) {
            sink.send(ScoreEvent::FoodProduced {
                cell,
                building: id.clone(),
                pooled,
                positional,
            });
        }
    }

    let mut pool = outcome.pool_produced;
    for (cell, id) in grid.buildings() {
        let Some(def) = registry.get(id) else {
            continue;
        };
        let cost = def.feed_cost();
        if cost == 0 {
            continue;
        }

        let source = if outcome.positional.contains(&cell) {
            Some(FoodSource::Positional)
        } else if pool >= cost {
            pool -= cost;
            Some(FoodSource::Pool { units: cost })
        } else {
            None
        };

        match source {
            Some(source) => {
                outcome.fed.insert(cell);
                outcome.fed_cottages += def.cottage_weight();
                trace!("{} at {} fed ({:?})", id, cell, source);
                if sink.wants(ScoreEventKind::BuildingFed) {
                    sink.send(ScoreEvent::BuildingFed {
                        cell,
                        building: id.clone(),
                        source,
                    });
                }
            }
            None => {
                trace!("{} at {} starved (needs {}, pool {})", id, cell, cost, pool);
                if sink.wants(ScoreEventKind::BuildingStarved) {
                    sink.send(ScoreEvent::BuildingStarved {
                        cell,
                        building: id.clone(),
                        cost,
                    });
                }
            }
        }
    }
    outcome.pool_remaining = pool;

    outcome
}
