//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! rejected grid mutations, malformed patterns and catalogs, invalid configuration,
//! and construction-time effect failures. Matching and scoring never fail.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    OccupiedCell { row: usize, col: usize },

    #[error("cell ({row}, {col}) is not one of the matched pattern cells")]
    InvalidBuildTarget { row: usize, col: usize },

    #[error("cell ({row}, {col}) does not hold a building")]
    NotABuilding { row: usize, col: usize },

    #[error("building at ({row}, {col}) cannot store resources")]
    NotStorage { row: usize, col: usize },

    #[error("building at ({row}, {col}) has no free storage")]
    StorageFull { row: usize, col: usize },

    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("duplicate building '{0}'")]
    DuplicateBuilding(String),

    #[error("unknown building '{0}'")]
    UnknownBuilding(String),

    #[error("monument '{0}' is already built")]
    MonumentAlreadyBuilt(String),

    #[error("building '{0}' needs a resource choice")]
    MissingResourceChoice(String),

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_string_uses_other_variant() {
        let err: Error = String::from("boom").into();
        matches!(err, Error::Other(_))
            .then_some(())
            .expect("expected Other variant");
    }

    #[test]
    fn grid_errors_name_the_cell() {
        let err = Error::OccupiedCell { row: 1, col: 3 };
        assert_eq!(err.to_string(), "cell (1, 3) is already occupied");
    }
}
