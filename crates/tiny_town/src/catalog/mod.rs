//! Building catalog: definitions, the per-game registry, and the standard building set.
//!
//! A [`BuildingDef`] is immutable once built. It carries a placement [`Pattern`] (with its
//! symmetry variants precomputed), feeding cost, alias list, and up to three optional
//! capabilities: a [`Feeder`], a [`Scorer`] and an [`Effect`].
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::feeding::Feeder;
use crate::grid::{BuildingId, CellMeta, Resource};
use crate::scoring::Scorer;

pub mod pattern;
pub mod registry;
pub mod standard;

pub use pattern::{Pattern, Slot};
pub use registry::Registry;
pub use standard::{deck, standard};

/// Identifier every cottage-class building resolves to.
pub const COTTAGE: &str = "cottage";

/// Colour class of a building.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Blue,
    Red,
    Gray,
    Orange,
    Green,
    Yellow,
    Black,
    Monument,
}

/// Side effects a building has on matching, storage, construction or the empty-cell penalty.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// The building satisfies any resource slot of a pattern laid over it.
    ResourceWildcard,
    /// Empty cells are not penalised while the building is on the board.
    WaiveEmptyPenalty,
    /// Holds up to `capacity` resources, each costing a point at scoring time.
    Storage { capacity: usize },
    /// Remembers a resource named at construction.
    StoreResource,
    /// Freezes a score at construction, indexed by the number of buildings already built.
    FreezeScore { table: Vec<i32> },
}

impl Effect {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Effect::ResourceWildcard)
    }

    pub fn waives_empty_penalty(&self) -> bool {
        matches!(self, Effect::WaiveEmptyPenalty)
    }

    pub fn storage_capacity(&self) -> Option<usize> {
        match self {
            Effect::Storage { capacity } => Some(*capacity),
            _ => None,
        }
    }

    /// Metadata to attach when a building with this effect is constructed.
    pub(crate) fn initial_metadata(
        &self,
        building: &str,
        buildings_before: usize,
        choice: Option<Resource>,
    ) -> Result<Option<CellMeta>> {
        match self {
            Effect::StoreResource => choice
                .map(|r| Some(CellMeta::holding(r)))
                .ok_or_else(|| Error::MissingResourceChoice(building.to_owned())),
            Effect::Storage { .. } => Ok(Some(CellMeta::default())),
            Effect::FreezeScore { table } => {
                let score = table
                    .get(buildings_before.min(table.len().saturating_sub(1)))
                    .copied()
                    .unwrap_or(0);
                Ok(Some(CellMeta::frozen(score)))
            }
            Effect::ResourceWildcard | Effect::WaiveEmptyPenalty => Ok(None),
        }
    }
}

/// Immutable description of one building type.
#[derive(Clone)]
pub struct BuildingDef {
    name: String,
    id: BuildingId,
    category: Category,
    pattern: Pattern,
    variants: Vec<Pattern>,
    feed_cost: u32,
    counts_as: Vec<BuildingId>,
    cottages: u32,
    monument: bool,
    feeder: Option<Arc<dyn Feeder>>,
    scorer: Option<Arc<dyn Scorer>>,
    effect: Option<Effect>,
}

impl BuildingDef {
    /// Creates a definition, rejecting patterns without a single required resource.
    pub fn new(name: impl Into<String>, category: Category, pattern: Pattern) -> Result<Self> {
        let name = name.into();
        if pattern.is_blank() {
            return Err(Error::InvalidPattern(format!(
                "building '{name}' has no resource slots"
            )));
        }
        let id = BuildingId::new(&name);
        let variants = pattern.variants();
        Ok(Self {
            name,
            id,
            category,
            pattern,
            variants,
            feed_cost: 0,
            counts_as: Vec::new(),
            cottages: 0,
            monument: category == Category::Monument,
            feeder: None,
            scorer: None,
            effect: None,
        })
    }

    /// Parses `pattern` and creates the definition.
    pub fn parse(name: impl Into<String>, category: Category, pattern: &str) -> Result<Self> {
        Self::new(name, category, pattern.parse()?)
    }

    pub fn with_feed_cost(mut self, cost: u32) -> Self {
        self.feed_cost = cost;
        self
    }

    /// Adds an identifier this building also counts as in neighbour checks.
    pub fn counting_as(mut self, id: impl Into<BuildingId>) -> Self {
        self.counts_as.push(id.into());
        self
    }

    /// Number of cottages this building is worth when fed.
    pub fn with_cottages(mut self, cottages: u32) -> Self {
        self.cottages = cottages;
        self
    }

    pub fn as_monument(mut self) -> Self {
        self.monument = true;
        self
    }

    pub fn with_feeder<F: Feeder + 'static>(mut self, feeder: F) -> Self {
        self.feeder = Some(Arc::new(feeder));
        self
    }

    pub fn with_scorer<S: Scorer + 'static>(mut self, scorer: S) -> Self {
        self.scorer = Some(Arc::new(scorer));
        self
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Display name as authored.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &BuildingId {
        &self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Distinct rotate/flip variants of [`BuildingDef::pattern`].
    pub fn variants(&self) -> &[Pattern] {
        &self.variants
    }

    pub fn feed_cost(&self) -> u32 {
        self.feed_cost
    }

    pub fn counts_as(&self) -> &[BuildingId] {
        &self.counts_as
    }

    pub fn is_monument(&self) -> bool {
        self.monument
    }

    pub fn feeder(&self) -> Option<&dyn Feeder> {
        self.feeder.as_deref()
    }

    pub fn scorer(&self) -> Option<&dyn Scorer> {
        self.scorer.as_deref()
    }

    pub fn effect(&self) -> Option<&Effect> {
        self.effect.as_ref()
    }

    /// Whether this building is `target` or counts as it.
    pub fn is_a(&self, target: &BuildingId) -> bool {
        &self.id == target || self.counts_as.contains(target)
    }

    pub fn is_cottage_class(&self) -> bool {
        self.is_a(&BuildingId::new(COTTAGE))
    }

    /// Cottages credited when this building is fed; at least one for cottage-class buildings.
    pub fn cottage_weight(&self) -> u32 {
        if self.is_cottage_class() {
            self.cottages.max(1)
        } else {
            0
        }
    }
}

impl fmt::Debug for BuildingDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildingDef")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("pattern", &self.pattern.to_string())
            .field("feed_cost", &self.feed_cost)
            .field("counts_as", &self.counts_as)
            .field("monument", &self.monument)
            .field("feeder", &self.feeder)
            .field("scorer", &self.scorer)
            .field("effect", &self.effect)
            .finish()
    }
}
