//! Four-pass score pipeline over one board.
//!
//! 1. Scan: every feeder produces pooled or positional food.
//! 2. Feed: buildings with a feed cost eat, positional food first, then the pool.
//! 3. Score: per-building scorers run and storage buildings are charged.
//! 4. Sets: board-scoped scorers are applied once per identity.
//!
//! The empty-cell penalty is subtracted last unless a waiving building is on the board.
//! Every call recomputes from scratch and never mutates the grid.
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::Registry;
use crate::error::{Error, Result};
use crate::events::{EventSink, ScoreEvent, ScoreEventKind};
use crate::feeding::resolve::resolve_with_events;
use crate::feeding::FeedingOutcome;
use crate::grid::{BuildingId, Grid};
use crate::scoring::{occupancy, ScoreContext, ScoreScope};

/// Configuration for scoring a board.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreConfig {
    /// Points subtracted per cell without a building.
    pub empty_cell_penalty: i32,
    /// 1-based finishing position for end-of-game scorers.
    pub finishing_rank: Option<u32>,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            empty_cell_penalty: 1,
            finishing_rank: None,
        }
    }
}

impl ScoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the points subtracted per empty cell.
    pub fn with_empty_cell_penalty(mut self, penalty: i32) -> Self {
        self.empty_cell_penalty = penalty;
        self
    }

    /// Sets the finishing rank used by end-of-game scorers.
    pub fn with_finishing_rank(mut self, rank: u32) -> Self {
        self.finishing_rank = Some(rank);
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.empty_cell_penalty < 0 {
            return Err(Error::InvalidConfig(
                "empty_cell_penalty must be >= 0".into(),
            ));
        }
        if self.finishing_rank == Some(0) {
            return Err(Error::InvalidConfig("finishing_rank is 1-based".into()));
        }
        Ok(())
    }
}

/// Result of scoring a board.
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreResult {
    /// Sum of the breakdown minus the empty-cell penalty.
    pub total: i32,
    /// Points per building identity, including identities that scored zero.
    pub breakdown: BTreeMap<BuildingId, i32>,
    /// Cells counted towards the empty-cell penalty.
    pub penalty_count: usize,
    /// Food state after the feed pass.
    pub feeding: FeedingOutcome,
}

impl ScoreResult {
    /// Points attributed to `id`, or zero.
    pub fn points_for(&self, id: &BuildingId) -> i32 {
        self.breakdown.get(id).copied().unwrap_or(0)
    }
}

pub struct ScoreManager<'a> {
    /// Score configuration applied to every board.
    pub config: ScoreConfig,
    /// Definitions of the active deck.
    pub registry: &'a Registry,
}

impl<'a> ScoreManager<'a> {
    pub fn try_new(config: ScoreConfig, registry: &'a Registry) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, registry })
    }

    pub fn new(config: ScoreConfig, registry: &'a Registry) -> Self {
        debug_assert!(
            config.empty_cell_penalty >= 0,
            "empty_cell_penalty must be >= 0"
        );
        debug_assert!(
            config.finishing_rank != Some(0),
            "finishing_rank is 1-based"
        );

        Self { config, registry }
    }

    /// Scores `grid`.
    pub fn score(&self, grid: &Grid) -> ScoreResult {
        score_internal(grid, self.registry, &self.config, &mut ())
    }

    pub fn score_with_events(&self, grid: &Grid, sink: &mut dyn EventSink) -> ScoreResult {
        score_internal(grid, self.registry, &self.config, sink)
    }
}

/// Scores `grid` with the default configuration.
pub fn score(grid: &Grid, registry: &Registry) -> ScoreResult {
    score_internal(grid, registry, &ScoreConfig::default(), &mut ())
}

fn score_internal(
    grid: &Grid,
    registry: &Registry,
    config: &ScoreConfig,
    sink: &mut dyn EventSink,
) -> ScoreResult {
    if sink.wants(ScoreEventKind::ScoreStarted) {
        sink.send(ScoreEvent::ScoreStarted {
            config: config.clone(),
            buildings: grid.buildings().count(),
        });
    }

    let counts = occupancy(grid, registry);
    let feeding = resolve_with_events(grid, registry, sink);
    debug!(
        "Fed {} building(s); pool {} of {} left.",
        feeding.fed.len(),
        feeding.pool_remaining,
        feeding.pool_produced
    );

    let mut breakdown: BTreeMap<BuildingId, i32> = BTreeMap::new();
    let mut waived_by: Option<BuildingId> = None;

    for (cell, id) in grid.buildings() {
        let Some(def) = registry.get(id) else {
            debug!("Skipping unknown building '{}' at {}.", id, cell);
            if sink.wants(ScoreEventKind::Skipped) {
                sink.send(ScoreEvent::Skipped {
                    cell,
                    building: id.clone(),
                });
            }
            continue;
        };

        let entry = breakdown.entry(id.clone()).or_insert(0);

        if let Some(scorer) = def.scorer() {
            if scorer.scope() == ScoreScope::PerBuilding {
                let ctx = ScoreContext {
                    grid,
                    cell,
                    building: def,
                    counts: &counts,
                    feeding: &feeding,
                    registry,
                    finishing_rank: config.finishing_rank,
                };
                let points = scorer.score(&ctx);
                *entry += points;
                if sink.wants(ScoreEventKind::BuildingScored) {
                    sink.send(ScoreEvent::BuildingScored {
                        cell,
                        building: id.clone(),
                        points,
                    });
                }
            }
        }

        let Some(effect) = def.effect() else {
            continue;
        };
        if effect.storage_capacity().is_some() {
            let stored = grid.metadata(cell).map_or(0, |m| m.stored.len());
            *entry -= stored as i32;
            if stored > 0 && sink.wants(ScoreEventKind::StorageCharged) {
                sink.send(ScoreEvent::StorageCharged {
                    cell,
                    building: id.clone(),
                    stored,
                });
            }
        }
        if effect.waives_empty_penalty() && waived_by.is_none() {
            waived_by = Some(id.clone());
        }
    }

    for (id, &count) in &counts {
        let Some(scorer) = registry.get(id).and_then(|d| d.scorer()) else {
            continue;
        };
        if scorer.scope() != ScoreScope::Board {
            continue;
        }
        let points = scorer.score_set(count);
        *breakdown.entry(id.clone()).or_insert(0) += points;
        if sink.wants(ScoreEventKind::SetScored) {
            sink.send(ScoreEvent::SetScored {
                building: id.clone(),
                count,
                points,
            });
        }
    }

    let penalty_count = if waived_by.is_some() {
        0
    } else {
        grid.unbuilt_cells()
    };
    let penalty = penalty_count as i32 * config.empty_cell_penalty;
    if sink.wants(ScoreEventKind::PenaltyApplied) {
        sink.send(ScoreEvent::PenaltyApplied {
            empty_cells: penalty_count,
            points: penalty,
            waived_by: waived_by.clone(),
        });
    }

    let total = breakdown.values().sum::<i32>() - penalty;
    info!(
        "Scored board: total {} over {} identities, {} penalised cell(s).",
        total,
        breakdown.len(),
        penalty_count
    );

    let result = ScoreResult {
        total,
        breakdown,
        penalty_count,
        feeding,
    };

    if sink.wants(ScoreEventKind::ScoreFinished) {
        sink.send(ScoreEvent::ScoreFinished {
            result: result.clone(),
        });
    }

    result
}
