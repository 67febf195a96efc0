//! Orthogonally connected regions of cells.
use std::collections::{HashSet, VecDeque};

use crate::grid::{Cell, Grid};

/// Flood-fills the board into 4-connected regions.
///
/// Seeds are visited in row-major order, so regions come out in encounter order. A cell
/// joins a region when `include` accepts it and `joined` links it to the neighbour it
/// was reached from.
pub fn connected_regions<I, J>(grid: &Grid, mut include: I, mut joined: J) -> Vec<Vec<Cell>>
where
    I: FnMut(Cell) -> bool,
    J: FnMut(Cell, Cell) -> bool,
{
    let size = grid.size();
    let mut visited: HashSet<Cell> = HashSet::new();
    let mut regions = Vec::new();

    for seed in grid.cells() {
        if visited.contains(&seed) || !include(seed) {
            continue;
        }
        visited.insert(seed);

        let mut region = Vec::new();
        let mut queue = VecDeque::from([seed]);
        while let Some(cell) = queue.pop_front() {
            region.push(cell);
            for next in cell.orthogonal(size) {
                if !visited.contains(&next) && include(next) && joined(cell, next) {
                    visited.insert(next);
                    queue.push_back(next);
                }
            }
        }
        regions.push(region);
    }

    regions
}

/// Largest region; ties go to the one found first.
pub fn largest(regions: &[Vec<Cell>]) -> Option<&[Cell]> {
    let mut best: Option<&[Cell]> = None;
    for region in regions {
        if best.is_none_or(|b| region.len() > b.len()) {
            best = Some(region);
        }
    }
    best
}
