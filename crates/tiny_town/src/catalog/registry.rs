//! Registry of the building definitions active in one game.
//!
//! Look-ups are by case-insensitive name. The registry preserves definition order so
//! scans and whole-board scoring visit buildings deterministically.
use std::collections::HashMap;

use tracing::warn;

use crate::catalog::{BuildingDef, Category};
use crate::error::{Error, Result};
use crate::grid::BuildingId;

/// Ordered collection of [`BuildingDef`]s.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    defs: Vec<BuildingDef>,
    index: HashMap<BuildingId, usize>,
}

impl Registry {
    /// Creates a registry, rejecting duplicate names.
    pub fn new(defs: Vec<BuildingDef>) -> Result<Self> {
        let mut index = HashMap::with_capacity(defs.len());
        for (i, def) in defs.iter().enumerate() {
            if index.insert(def.id().clone(), i).is_some() {
                return Err(Error::DuplicateBuilding(def.name().to_owned()));
            }
        }
        Ok(Self { defs, index })
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BuildingDef> {
        self.defs.iter()
    }

    pub fn get(&self, id: &BuildingId) -> Option<&BuildingDef> {
        self.index.get(id).map(|&i| &self.defs[i])
    }

    /// Looks up a definition by display name in any letter case.
    pub fn get_by_name(&self, name: &str) -> Option<&BuildingDef> {
        self.get(&BuildingId::new(name))
    }

    pub fn contains(&self, id: &BuildingId) -> bool {
        self.index.contains_key(id)
    }

    pub fn category_of(&self, id: &BuildingId) -> Option<Category> {
        self.get(id).map(BuildingDef::category)
    }

    /// Whether `id` is `target` or an alias of it. Unknown identifiers only match themselves.
    pub fn is_a(&self, id: &BuildingId, target: &BuildingId) -> bool {
        match self.get(id) {
            Some(def) => def.is_a(target),
            None => id == target,
        }
    }

    /// Whether `id` is, or counts as, any of `targets`.
    pub fn is_any(&self, id: &BuildingId, targets: &[BuildingId]) -> bool {
        targets.iter().any(|t| self.is_a(id, t))
    }

    pub fn is_cottage_class(&self, id: &BuildingId) -> bool {
        self.get(id).is_some_and(BuildingDef::is_cottage_class)
    }

    /// The first monument in the registry.
    pub fn monument(&self) -> Option<&BuildingDef> {
        self.defs.iter().find(|d| d.is_monument())
    }

    /// Reports whether the registry holds exactly one monument, warning otherwise.
    pub fn check_deck(&self) -> bool {
        let monuments: Vec<&str> = self
            .defs
            .iter()
            .filter(|d| d.is_monument())
            .map(BuildingDef::name)
            .collect();
        match monuments.len() {
            1 => true,
            0 => {
                warn!("Deck has no monument.");
                false
            }
            _ => {
                warn!("Deck has {} monuments: {:?}.", monuments.len(), monuments);
                false
            }
        }
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a BuildingDef;
    type IntoIter = std::slice::Iter<'a, BuildingDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.defs.iter()
    }
}
