//! Resource tokens that players drop onto the grid.
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the five resource tags a cell or pattern slot can hold.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Resource {
    Wood,
    Wheat,
    Brick,
    Glass,
    Stone,
}

impl Resource {
    /// All resources in a stable order.
    pub const ALL: [Resource; 5] = [
        Resource::Wood,
        Resource::Wheat,
        Resource::Brick,
        Resource::Glass,
        Resource::Stone,
    ];

    /// Lower-case name used by the textual pattern and board forms.
    pub const fn name(self) -> &'static str {
        match self {
            Resource::Wood => "wood",
            Resource::Wheat => "wheat",
            Resource::Brick => "brick",
            Resource::Glass => "glass",
            Resource::Stone => "stone",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Resource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Resource::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| Error::Other(format!("unknown resource '{needle}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Wheat".parse::<Resource>(), Ok(Resource::Wheat));
        assert_eq!(" STONE ".parse::<Resource>(), Ok(Resource::Stone));
        assert!("gold".parse::<Resource>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for resource in Resource::ALL {
            assert_eq!(resource.to_string().parse::<Resource>(), Ok(resource));
        }
    }
}
