//! Per-cell metadata attached to stateful buildings.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grid::Resource;

/// Open record kept alongside a building cell.
///
/// Only cells holding a building carry metadata; clearing the cell drops it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellMeta {
    /// Resource named when the building was constructed. Satisfies pattern slots
    /// requiring the same resource.
    pub stored_resource: Option<Resource>,
    /// Resources parked in a storage building.
    pub stored: Vec<Resource>,
    /// Score frozen at construction time.
    pub saved_score: Option<i32>,
}

impl CellMeta {
    pub fn holding(resource: Resource) -> Self {
        Self {
            stored_resource: Some(resource),
            ..Self::default()
        }
    }

    pub fn frozen(score: i32) -> Self {
        Self {
            saved_score: Some(score),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stored_resource.is_none() && self.stored.is_empty() && self.saved_score.is_none()
    }
}
