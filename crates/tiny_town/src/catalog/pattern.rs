//! Placement patterns and their rotate/flip variants.
//!
//! A [`Pattern`] is a rectangular template of [`Slot`]s. Its textual form lists rows
//! separated by `/` and slots separated by whitespace, with `_` marking a wildcard slot:
//!
//! ```
//! use tiny_town::catalog::Pattern;
//!
//! let cottage: Pattern = "_ wheat / brick glass".parse().unwrap();
//! assert_eq!((cottage.height(), cottage.width()), (2, 2));
//! assert_eq!(cottage.variants().len(), 8);
//! ```
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::grid::Resource;

/// A pattern slot: a required resource, or `None` for a don't-care slot.
pub type Slot = Option<Resource>;

/// Rectangular resource template.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<Slot>>", into = "Vec<Vec<Slot>>")
)]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pattern {
    rows: Vec<Vec<Slot>>,
}

impl TryFrom<Vec<Vec<Slot>>> for Pattern {
    type Error = Error;

    fn try_from(rows: Vec<Vec<Slot>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<Pattern> for Vec<Vec<Slot>> {
    fn from(pattern: Pattern) -> Self {
        pattern.rows
    }
}

impl Pattern {
    /// Creates a pattern, rejecting empty or ragged input.
    pub fn new(rows: Vec<Vec<Slot>>) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(Error::InvalidPattern("pattern has no slots".into()));
        }
        if rows.iter().any(|row| row.len() != width) {
            return Err(Error::InvalidPattern(
                "pattern rows must all have the same width".into(),
            ));
        }
        Ok(Self { rows })
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn rows(&self) -> &[Vec<Slot>] {
        &self.rows
    }

    pub fn slot(&self, row: usize, col: usize) -> Slot {
        self.rows.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Required (non-wildcard) slots as `(row, col, resource)` in row-major order.
    pub fn required(&self) -> impl Iterator<Item = (usize, usize, Resource)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(c, slot)| slot.map(|res| (r, c, res)))
        })
    }

    /// Whether every slot is a wildcard.
    pub fn is_blank(&self) -> bool {
        self.required().next().is_none()
    }

    /// Rotates 90° clockwise; an h×w pattern becomes w×h.
    pub fn rotated_cw(&self) -> Pattern {
        let h = self.height();
        let w = self.width();
        let rows = (0..w)
            .map(|i| (0..h).map(|j| self.rows[h - 1 - j][i]).collect())
            .collect();
        Pattern { rows }
    }

    /// Mirrors left to right.
    pub fn flipped(&self) -> Pattern {
        let rows = self
            .rows
            .iter()
            .map(|row| row.iter().rev().copied().collect())
            .collect();
        Pattern { rows }
    }

    /// Distinct rotate/flip variants, starting with the pattern itself.
    ///
    /// Order is the four rotations followed by the four rotations of the mirror image,
    /// with structural duplicates removed.
    pub fn variants(&self) -> Vec<Pattern> {
        let mut seen: HashSet<Pattern> = HashSet::with_capacity(8);
        let mut out = Vec::with_capacity(8);
        for base in [self.clone(), self.flipped()] {
            let mut current = base;
            for _ in 0..4 {
                let next = current.rotated_cw();
                if seen.insert(current.clone()) {
                    out.push(current);
                }
                current = next;
            }
        }
        out
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .split('/')
            .map(|row| {
                row.split_whitespace()
                    .map(|token| {
                        if token == "_" || token.eq_ignore_ascii_case("empty") {
                            Ok(None)
                        } else {
                            token.parse::<Resource>().map(Some).map_err(|_| {
                                Error::InvalidPattern(format!("unknown slot '{token}' in '{s}'"))
                            })
                        }
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Pattern::new(rows)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|slot| slot.map_or("_", Resource::name))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        f.write_str(&rows.join(" / "))
    }
}
