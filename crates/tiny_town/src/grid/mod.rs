//! Grid model: a fixed square board of cell values plus sparse per-cell metadata.
//!
//! The grid is the only mutable state in the engine. [`Grid::place`], [`Grid::clear`]
//! and [`Grid::construct_building`] validate every input before writing, so a rejected
//! call leaves the board untouched.
use std::collections::BTreeMap;
use std::fmt;

use glam::IVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub mod meta;
pub mod regions;
pub mod resource;
pub mod tile;

pub use meta::CellMeta;
pub use resource::Resource;
pub use tile::{BuildingId, Tile};

/// Side length of the standard board.
pub const GRID_SIZE: usize = 4;

/// Orthogonal neighbour offsets (x = column, y = row): north, east, south, west.
const ORTHOGONAL: [IVec2; 4] = [IVec2::NEG_Y, IVec2::X, IVec2::Y, IVec2::NEG_X];

/// The eight surrounding offsets in row-major order.
const NEIGHBORHOOD: [IVec2; 8] = [
    IVec2::new(-1, -1),
    IVec2::new(0, -1),
    IVec2::new(1, -1),
    IVec2::new(-1, 0),
    IVec2::new(1, 0),
    IVec2::new(-1, 1),
    IVec2::new(0, 1),
    IVec2::new(1, 1),
];

/// Location of a single grid cell.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Moves by `delta` (x = column, y = row), returning `None` when leaving a `size`×`size` board.
    pub fn offset(self, delta: IVec2, size: usize) -> Option<Cell> {
        let col = self.col as i64 + i64::from(delta.x);
        let row = self.row as i64 + i64::from(delta.y);
        let limit = size as i64;
        if (0..limit).contains(&row) && (0..limit).contains(&col) {
            Some(Cell::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Up to four orthogonal neighbours, clipped to the board.
    pub fn orthogonal(self, size: usize) -> impl Iterator<Item = Cell> {
        ORTHOGONAL
            .into_iter()
            .filter_map(move |d| self.offset(d, size))
    }

    /// Up to eight orthogonal and diagonal neighbours, clipped to the board.
    pub fn surrounding(self, size: usize) -> impl Iterator<Item = Cell> {
        NEIGHBORHOOD
            .into_iter()
            .filter_map(move |d| self.offset(d, size))
    }

    /// Whether the cell sits on one of the four board corners.
    pub fn is_corner(self, size: usize) -> bool {
        let last = size.saturating_sub(1);
        (self.row == 0 || self.row == last) && (self.col == 0 || self.col == last)
    }

    /// Whether the cell sits in the central 2×2 block of an even-sized board.
    pub fn is_center(self, size: usize) -> bool {
        let lo = (size / 2).saturating_sub(1);
        let hi = size / 2;
        size >= 2 && (lo..=hi).contains(&self.row) && (lo..=hi).contains(&self.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Square board of [`Tile`]s with sparse [`CellMeta`] records.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridParts", into = "GridParts"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    tiles: Vec<Tile>,
    meta: BTreeMap<Cell, CellMeta>,
}

/// Unchecked grid contents, as stored on disk.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridParts {
    pub size: usize,
    /// Row-major cell values, `size * size` of them.
    pub tiles: Vec<Tile>,
    pub meta: Vec<(Cell, CellMeta)>,
}

impl TryFrom<GridParts> for Grid {
    type Error = Error;

    fn try_from(parts: GridParts) -> Result<Self> {
        let mut grid = Grid::with_size(parts.size)?;
        if parts.tiles.len() != parts.size * parts.size {
            return Err(Error::InvalidConfig(format!(
                "expected {} tiles for a {}x{} grid, found {}",
                parts.size * parts.size,
                parts.size,
                parts.size,
                parts.tiles.len()
            )));
        }
        grid.tiles = parts.tiles;
        for (cell, meta) in parts.meta {
            grid.set_metadata(cell, meta)?;
        }
        Ok(grid)
    }
}

impl From<Grid> for GridParts {
    fn from(grid: Grid) -> Self {
        Self {
            size: grid.size,
            tiles: grid.tiles,
            meta: grid.meta.into_iter().collect(),
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates an empty standard 4×4 board.
    pub fn new() -> Self {
        Self {
            size: GRID_SIZE,
            tiles: vec![Tile::Empty; GRID_SIZE * GRID_SIZE],
            meta: BTreeMap::new(),
        }
    }

    /// Creates an empty `size`×`size` board.
    pub fn with_size(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidConfig("grid size must be > 0".into()));
        }
        Ok(Self {
            size,
            tiles: vec![Tile::Empty; size * size],
            meta: BTreeMap::new(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Returns the value at `cell`, or `None` outside the board.
    pub fn tile(&self, cell: Cell) -> Option<&Tile> {
        self.index(cell).map(|i| &self.tiles[i])
    }

    /// Returns the building identifier at `cell`, if any.
    pub fn building_at(&self, cell: Cell) -> Option<&BuildingId> {
        self.tile(cell).and_then(Tile::building)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Cell::new(row, col)))
    }

    /// All cells with their values in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &Tile)> + '_ {
        self.cells().zip(self.tiles.iter())
    }

    /// Building cells with their identifiers in row-major order.
    pub fn buildings(&self) -> impl Iterator<Item = (Cell, &BuildingId)> + '_ {
        self.iter()
            .filter_map(|(cell, tile)| tile.building().map(|id| (cell, id)))
    }

    /// Number of cells that do not hold a building.
    pub fn unbuilt_cells(&self) -> usize {
        self.tiles.iter().filter(|t| t.building().is_none()).count()
    }

    /// Writes a resource onto an empty cell.
    pub fn place(&mut self, cell: Cell, resource: Resource) -> Result<()> {
        let index = self.check_empty(cell)?;
        self.tiles[index] = Tile::Resource(resource);
        Ok(())
    }

    /// Writes a building identifier directly onto an empty cell.
    pub fn place_building(&mut self, cell: Cell, id: impl Into<BuildingId>) -> Result<()> {
        let index = self.check_empty(cell)?;
        self.tiles[index] = Tile::Building(id.into());
        Ok(())
    }

    /// Resets every listed cell to empty and drops its metadata.
    pub fn clear(&mut self, cells: &[Cell]) -> Result<()> {
        let indices = cells
            .iter()
            .map(|&cell| self.check(cell))
            .collect::<Result<Vec<_>>>()?;
        for (cell, index) in cells.iter().zip(indices) {
            self.tiles[index] = Tile::Empty;
            self.meta.remove(cell);
        }
        Ok(())
    }

    /// Consumes the matched pattern cells and places `id` on `target`, which must be one of them.
    pub fn construct_building(
        &mut self,
        pattern_cells: &[Cell],
        target: Cell,
        id: impl Into<BuildingId>,
    ) -> Result<()> {
        let target_index = self.check(target)?;
        for &cell in pattern_cells {
            self.check(cell)?;
        }
        if !pattern_cells.contains(&target) {
            return Err(Error::InvalidBuildTarget {
                row: target.row,
                col: target.col,
            });
        }

        self.clear(pattern_cells)?;
        self.tiles[target_index] = Tile::Building(id.into());
        Ok(())
    }

    pub fn metadata(&self, cell: Cell) -> Option<&CellMeta> {
        self.meta.get(&cell)
    }

    /// Attaches metadata to a building cell, replacing any previous record.
    pub fn set_metadata(&mut self, cell: Cell, meta: CellMeta) -> Result<()> {
        self.check(cell)?;
        if self.building_at(cell).is_none() {
            return Err(Error::NotABuilding {
                row: cell.row,
                col: cell.col,
            });
        }
        self.meta.insert(cell, meta);
        Ok(())
    }

    pub(crate) fn metadata_mut(&mut self, cell: Cell) -> Option<&mut CellMeta> {
        self.meta.get_mut(&cell)
    }

    /// Independent copy of the board and its metadata.
    pub fn snapshot(&self) -> Grid {
        self.clone()
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell).then(|| cell.row * self.size + cell.col)
    }

    fn check(&self, cell: Cell) -> Result<usize> {
        self.index(cell).ok_or(Error::OutOfBounds {
            row: cell.row,
            col: cell.col,
        })
    }

    fn check_empty(&self, cell: Cell) -> Result<usize> {
        let index = self.check(cell)?;
        if !self.tiles[index].is_empty() {
            return Err(Error::OccupiedCell {
                row: cell.row,
                col: cell.col,
            });
        }
        Ok(index)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            let line: Vec<String> = (0..self.size)
                .map(|col| self.tiles[row * self.size + col].to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
