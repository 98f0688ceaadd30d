//! Common test utilities and grid fixtures.
//!
//! Provides a brute-force breadth-first reference search and helpers to
//! build grids from ASCII art or from a seeded random wall pattern.

use std::collections::{HashMap, VecDeque};

use mazesolver_lib::{Cell, Grid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Build a grid from rows of `#` (wall) and `.` (free).
///
/// The art fully describes every cell, border included, and adjacency is
/// recomputed before returning.
#[allow(dead_code)]
pub fn grid_from_ascii(rows: &[&str]) -> Grid {
    let size = rows.len();
    let mut grid = Grid::new(size).expect("valid size");
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), size, "ascii grid must be square");
        for (col, ch) in line.chars().enumerate() {
            grid.set_blocked(Cell::new(row, col), ch == '#')
                .expect("cell in bounds");
        }
    }
    grid.recompute_adjacency();
    grid
}

/// Random interior walls with a walled border; `start`/`end` stay free.
#[allow(dead_code)]
pub fn random_grid(size: usize, density: f64, seed: u64, start: Cell, end: Cell) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::new(size).expect("valid size");
    for row in 1..size - 1 {
        for col in 1..size - 1 {
            let cell = Cell::new(row, col);
            let wall = cell != start && cell != end && rng.random_bool(density);
            grid.set_blocked(cell, wall).expect("cell in bounds");
        }
    }
    grid.recompute_adjacency();
    grid
}

/// Shortest unit-cost distance by breadth-first search over free cells,
/// ignoring the adjacency cache.
#[allow(dead_code)]
pub fn bfs_distance(grid: &Grid, start: Cell, end: Cell) -> Option<usize> {
    let size = grid.size();
    let mut distance: HashMap<Cell, usize> = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        let here = distance[&current];
        if current == end {
            return Some(here);
        }
        let candidates = [
            (current.row + 1 < size).then(|| Cell::new(current.row + 1, current.col)),
            current.row.checked_sub(1).map(|r| Cell::new(r, current.col)),
            (current.col + 1 < size).then(|| Cell::new(current.row, current.col + 1)),
            current.col.checked_sub(1).map(|c| Cell::new(current.row, c)),
        ];
        for next in candidates.into_iter().flatten() {
            if grid.is_blocked(next).expect("in bounds") || distance.contains_key(&next) {
                continue;
            }
            distance.insert(next, here + 1);
            queue.push_back(next);
        }
    }
    None
}
