//! Event types and sinks for observing score evaluations.
//!
//! This module defines [`ScoreEvent`] and a set of sinks and adapters to emit, collect,
//! or forward events while a board is scored via
//! [`crate::scoring::ScoreManager::score_with_events`].
use crate::feeding::FoodSource;
use crate::grid::{BuildingId, Cell};
use crate::scoring::{ScoreConfig, ScoreResult};

/// Describes events emitted while scoring a board.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum ScoreEvent {
    /// Emitted before the first pass.
    ScoreStarted {
        /// The configuration used.
        config: ScoreConfig,
        /// Number of building cells on the board.
        buildings: usize,
    },

    /// Emitted when a feeder has produced its food.
    FoodProduced {
        cell: Cell,
        building: BuildingId,
        /// Units added to the global pool.
        pooled: u32,
        /// Cells offered positional food.
        positional: usize,
    },

    /// Emitted when a building's feed cost was met.
    BuildingFed {
        cell: Cell,
        building: BuildingId,
        source: FoodSource,
    },

    /// Emitted when a building could not eat.
    BuildingStarved {
        cell: Cell,
        building: BuildingId,
        /// Units it needed.
        cost: u32,
    },

    /// Emitted after a per-building scorer ran.
    BuildingScored {
        cell: Cell,
        building: BuildingId,
        points: i32,
    },

    /// Emitted when a storage building is charged for what it holds.
    StorageCharged {
        cell: Cell,
        building: BuildingId,
        /// Resources held, one point each.
        stored: usize,
    },

    /// Emitted when a whole-board set table was applied.
    SetScored {
        building: BuildingId,
        count: usize,
        points: i32,
    },

    /// Emitted once the empty-cell penalty is known.
    PenaltyApplied {
        /// Cells counted towards the penalty.
        empty_cells: usize,
        /// Points subtracted from the total.
        points: i32,
        /// Building that waived the penalty, if any.
        waived_by: Option<BuildingId>,
    },

    /// Emitted for a building identifier missing from the registry.
    Skipped { cell: Cell, building: BuildingId },

    /// Emitted when scoring finishes.
    ScoreFinished {
        /// Final result.
        result: ScoreResult,
    },
}

/// Discriminant of [`ScoreEvent`] used to filter what a sink receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreEventKind {
    ScoreStarted,
    FoodProduced,
    BuildingFed,
    BuildingStarved,
    BuildingScored,
    StorageCharged,
    SetScored,
    PenaltyApplied,
    Skipped,
    ScoreFinished,
}

impl ScoreEvent {
    pub fn kind(&self) -> ScoreEventKind {
        match self {
            ScoreEvent::ScoreStarted { .. } => ScoreEventKind::ScoreStarted,
            ScoreEvent::FoodProduced { .. } => ScoreEventKind::FoodProduced,
            ScoreEvent::BuildingFed { .. } => ScoreEventKind::BuildingFed,
            ScoreEvent::BuildingStarved { .. } => ScoreEventKind::BuildingStarved,
            ScoreEvent::BuildingScored { .. } => ScoreEventKind::BuildingScored,
            ScoreEvent::StorageCharged { .. } => ScoreEventKind::StorageCharged,
            ScoreEvent::SetScored { .. } => ScoreEventKind::SetScored,
            ScoreEvent::PenaltyApplied { .. } => ScoreEventKind::PenaltyApplied,
            ScoreEvent::Skipped { .. } => ScoreEventKind::Skipped,
            ScoreEvent::ScoreFinished { .. } => ScoreEventKind::ScoreFinished,
        }
    }
}

/// A generic event sink that accepts [`ScoreEvent`]s.
pub trait EventSink {
    /// Whether events of `kind` should be built and sent at all.
    #[inline]
    fn wants(&self, _kind: ScoreEventKind) -> bool {
        true
    }

    fn send(&mut self, event: ScoreEvent);

    fn send_many<I>(&mut self, events: I)
    where
        Self: Sized,
        I: IntoIterator<Item = ScoreEvent>,
    {
        for e in events {
            self.send(e);
        }
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn wants(&self, _kind: ScoreEventKind) -> bool {
        false
    }

    #[inline]
    fn send(&mut self, _event: ScoreEvent) {}
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(ScoreEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(ScoreEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(ScoreEvent),
{
    #[inline]
    fn send(&mut self, event: ScoreEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects events in a `Vec`, optionally only some kinds.
#[derive(Default)]
pub struct VecSink {
    events: Vec<ScoreEvent>,
    only: Option<Vec<ScoreEventKind>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            events: Vec::with_capacity(cap),
            only: None,
        }
    }

    /// Collects only events whose kind is listed.
    pub fn only(kinds: &[ScoreEventKind]) -> Self {
        Self {
            events: Vec::new(),
            only: Some(kinds.to_vec()),
        }
    }

    pub fn into_inner(self) -> Vec<ScoreEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[ScoreEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    fn wants(&self, kind: ScoreEventKind) -> bool {
        self.only.as_ref().is_none_or(|kinds| kinds.contains(&kind))
    }

    #[inline]
    fn send(&mut self, event: ScoreEvent) {
        if self.wants(event.kind()) {
            self.events.push(event);
        }
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn into_inner(self) -> Vec<S> {
        self.sinks
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn wants(&self, kind: ScoreEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }

    fn send(&mut self, event: ScoreEvent) {
        let kind = event.kind();
        let targets: Vec<usize> = (0..self.sinks.len())
            .filter(|&i| self.sinks[i].wants(kind))
            .collect();
        let Some((&last, rest)) = targets.split_last() else {
            return;
        };
        for &i in rest {
            self.sinks[i].send(event.clone());
        }
        self.sinks[last].send(event);
    }
}
