//! Cell values and canonical building identifiers.
use std::borrow::Borrow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grid::Resource;

/// Canonical, case-normalized building name used as a cell value and registry key.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BuildingId(String);

impl BuildingId {
    /// Normalizes `name` by trimming and lower-casing it.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BuildingId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for BuildingId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl Borrow<str> for BuildingId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The single value held by a grid cell.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tile {
    #[default]
    Empty,
    Resource(Resource),
    Building(BuildingId),
}

impl Tile {
    pub fn is_empty(&self) -> bool {
        matches!(self, Tile::Empty)
    }

    pub fn resource(&self) -> Option<Resource> {
        match self {
            Tile::Resource(r) => Some(*r),
            _ => None,
        }
    }

    pub fn building(&self) -> Option<&BuildingId> {
        match self {
            Tile::Building(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Empty => f.write_str("."),
            Tile::Resource(r) => write!(f, "{r}"),
            Tile::Building(id) => write!(f, "[{id}]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn building_ids_are_case_normalized() {
        assert_eq!(BuildingId::new("  Trading Post "), BuildingId::new("trading post"));
        assert_eq!(BuildingId::new("COTTAGE").as_str(), "cottage");
    }

    #[test]
    fn tile_accessors_expose_the_single_value() {
        let tile = Tile::Resource(Resource::Glass);
        assert_eq!(tile.resource(), Some(Resource::Glass));
        assert!(tile.building().is_none());
        assert!(!tile.is_empty());
        assert!(Tile::default().is_empty());
    }
}
