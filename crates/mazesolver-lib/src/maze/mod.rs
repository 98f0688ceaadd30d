//! Maze generation over a [`Grid`].
//!
//! Two strategies are provided:
//! - [`carve_dfs`] - randomized depth-first carving that yields a perfect maze
//!   (passages form a tree) and always connects start to end
//! - [`random_fill`] - independent per-cell walls with a fixed probability;
//!   this can produce an unsolvable layout, in which case searching reports
//!   `NotFound`
//!
//! Both leave the adjacency cache stale; call
//! [`Grid::recompute_adjacency`] before searching.

mod generator;

pub use generator::{select_generator, DfsCarver, MazeGenerator, RandomFill};

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;

use crate::cell::Cell;
use crate::error::{EndpointProblem, Error, Result};
use crate::grid::Grid;

/// Wall probability used by [`random_fill`] when none is given.
pub const DEFAULT_FILL_PROBABILITY: f64 = 0.3;

/// Supported maze generation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MazeStrategy {
    /// Randomized depth-first carving (perfect maze).
    #[default]
    Dfs,
    /// Independent random walls.
    RandomFill,
}

impl fmt::Display for MazeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            MazeStrategy::Dfs => "dfs",
            MazeStrategy::RandomFill => "random-fill",
        };
        f.write_str(value)
    }
}

fn check_endpoints(grid: &Grid, start: Cell, end: Cell) -> Result<()> {
    grid.checked_index(start)?;
    grid.checked_index(end)?;
    if start == end {
        return Err(EndpointProblem::Identical(start).into());
    }
    Ok(())
}

/// Carve a perfect maze rooted at `start`, then make sure `end` joins it.
///
/// Every cell except `start` is walled first. A blocked interior cell is
/// carved only when all of its neighbours other than the carving cell are
/// still blocked, so no carve step can close a loop. `end` is never carved
/// during the walk; it is force-unblocked afterwards and, when it does not
/// touch the carved tree, linked to it by the shortest corridor of walls.
pub fn carve_dfs<R: Rng + ?Sized>(
    grid: &mut Grid,
    start: Cell,
    end: Cell,
    rng: &mut R,
) -> Result<()> {
    check_endpoints(grid, start, end)?;

    grid.fill(true);
    let carved = carve_tree(grid, start, end, rng)?;

    grid.set_blocked(end, false)?;
    let corridor = corridor_to_open(grid, end, false).or_else(|| {
        tracing::warn!(
            %end,
            "end cell has no interior route to the maze; linking through the border"
        );
        corridor_to_open(grid, end, true)
    });
    let linked = corridor.as_ref().map(Vec::len).unwrap_or_default();
    for cell in corridor.into_iter().flatten() {
        grid.set_blocked(cell, false)?;
    }

    tracing::debug!(%start, %end, carved, linked, "dfs maze carved");
    Ok(())
}

/// Depth-first walk from `root`, never entering `skip`. Returns the number
/// of open cells in the tree.
fn carve_tree<R: Rng + ?Sized>(
    grid: &mut Grid,
    root: Cell,
    skip: Cell,
    rng: &mut R,
) -> Result<usize> {
    grid.set_blocked(root, false)?;
    let size = grid.size();
    let mut stack = vec![root];
    let mut carved = 1usize;
    while let Some(&current) = stack.last() {
        let candidates: Vec<Cell> = current
            .orthogonal(size)
            .filter(|&next| next != root && next != skip && is_carvable(grid, next, current))
            .collect();
        match candidates.choose(rng) {
            Some(&next) => {
                grid.set_blocked(next, false)?;
                stack.push(next);
                carved += 1;
            }
            None => {
                stack.pop();
            }
        }
    }
    Ok(carved)
}

fn is_carvable(grid: &Grid, next: Cell, from: Cell) -> bool {
    !grid.is_border(next)
        && grid.blocked_unchecked(next)
        && next
            .orthogonal(grid.size())
            .all(|around| around == from || grid.blocked_unchecked(around))
}

/// Shortest run of blocked cells joining `end` to any open cell.
///
/// Returns an empty corridor when `end` already touches an open cell and
/// `None` when no open cell can be reached.
fn corridor_to_open(grid: &Grid, end: Cell, allow_border: bool) -> Option<Vec<Cell>> {
    let mut parents: HashMap<Cell, Cell> = HashMap::new();
    let mut seen = HashSet::from([end]);
    let mut queue = VecDeque::from([end]);

    while let Some(current) = queue.pop_front() {
        for next in current.orthogonal(grid.size()) {
            if !seen.insert(next) {
                continue;
            }
            if !grid.blocked_unchecked(next) {
                let mut corridor = Vec::new();
                let mut cell = current;
                while let Some(&previous) = parents.get(&cell) {
                    corridor.push(cell);
                    cell = previous;
                }
                return Some(corridor);
            }
            if allow_border || !grid.is_border(next) {
                parents.insert(next, current);
                queue.push_back(next);
            }
        }
    }
    None
}

/// Wall each interior cell independently with probability `probability`.
///
/// The border is walled and `start`/`end` are left free. There is no
/// solvability guarantee.
pub fn random_fill<R: Rng + ?Sized>(
    grid: &mut Grid,
    start: Cell,
    end: Cell,
    probability: f64,
    rng: &mut R,
) -> Result<()> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(Error::InvalidProbability { value: probability });
    }
    check_endpoints(grid, start, end)?;

    let size = grid.size();
    let mut walls = 0usize;
    for row in 0..size {
        for col in 0..size {
            let cell = Cell::new(row, col);
            let blocked = if cell == start || cell == end {
                false
            } else if grid.is_border(cell) {
                true
            } else {
                let wall = rng.random_bool(probability);
                walls += usize::from(wall);
                wall
            };
            grid.set_blocked(cell, blocked)?;
        }
    }

    tracing::debug!(%start, %end, probability, walls, "random maze filled");
    Ok(())
}
