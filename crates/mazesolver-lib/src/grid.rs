use crate::cell::Cell;
use crate::error::{Error, Result};

/// Side length used when the caller does not choose one.
pub const DEFAULT_GRID_SIZE: usize = 30;

/// Square grid of free/wall cells with a cached orthogonal adjacency.
///
/// The adjacency cache is rebuilt only by [`Grid::recompute_adjacency`].
/// Mutating a blocked flag marks the cache stale and the search refuses to
/// run over a stale grid.
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    blocked: Vec<bool>,
    adjacency: Vec<Vec<Cell>>,
    stale: bool,
}

impl Grid {
    /// Create an `n`x`n` grid with a blocked border and a free interior.
    ///
    /// The adjacency cache is built before returning.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidGridSize { size, min: 1 });
        }
        let mut grid = Self {
            size,
            blocked: vec![false; size * size],
            adjacency: vec![Vec::new(); size * size],
            stale: true,
        };
        grid.wall_border();
        grid.recompute_adjacency();
        Ok(grid)
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// True for cells on the outermost ring.
    pub fn is_border(&self, cell: Cell) -> bool {
        let last = self.size - 1;
        cell.row == 0 || cell.col == 0 || cell.row == last || cell.col == last
    }

    /// Iterate all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.len()).map(move |index| self.cell_at(index))
    }

    pub fn is_blocked(&self, cell: Cell) -> Result<bool> {
        let index = self.checked_index(cell)?;
        Ok(self.blocked[index])
    }

    /// Set the blocked flag of `cell`. Setting the current value is a no-op.
    pub fn set_blocked(&mut self, cell: Cell, blocked: bool) -> Result<()> {
        let index = self.checked_index(cell)?;
        if self.blocked[index] != blocked {
            self.blocked[index] = blocked;
            self.stale = true;
        }
        Ok(())
    }

    /// Restore the freshly created layout: blocked border, free interior.
    pub fn clear(&mut self) {
        self.fill(false);
        self.wall_border();
    }

    pub(crate) fn fill(&mut self, blocked: bool) {
        self.blocked.iter_mut().for_each(|b| *b = blocked);
        self.stale = true;
    }

    /// Whether the adjacency cache reflects the current blocked flags.
    pub fn adjacency_is_current(&self) -> bool {
        !self.stale
    }

    /// Rebuild every neighbour list from the current blocked flags.
    pub fn recompute_adjacency(&mut self) {
        for index in 0..self.len() {
            let cell = self.cell_at(index);
            let neighbors = if self.blocked[index] {
                Vec::new()
            } else {
                cell.orthogonal(self.size)
                    .filter(|next| !self.blocked[self.index(*next)])
                    .collect()
            };
            self.adjacency[index] = neighbors;
        }
        self.stale = false;
        tracing::trace!(size = self.size, "grid adjacency rebuilt");
    }

    /// Cached free neighbours of `cell` in down, up, right, left order.
    ///
    /// Reflects the grid as of the last [`Grid::recompute_adjacency`].
    pub fn neighbors(&self, cell: Cell) -> Result<&[Cell]> {
        let index = self.checked_index(cell)?;
        Ok(&self.adjacency[index])
    }

    pub(crate) fn neighbors_unchecked(&self, cell: Cell) -> &[Cell] {
        &self.adjacency[self.index(cell)]
    }

    pub(crate) fn blocked_unchecked(&self, cell: Cell) -> bool {
        self.blocked[self.index(cell)]
    }

    pub(crate) fn checked_index(&self, cell: Cell) -> Result<usize> {
        if self.in_bounds(cell) {
            Ok(self.index(cell))
        } else {
            Err(Error::OutOfBounds {
                cell,
                size: self.size,
            })
        }
    }

    fn index(&self, cell: Cell) -> usize {
        cell.row * self.size + cell.col
    }

    fn cell_at(&self, index: usize) -> Cell {
        Cell::new(index / self.size, index % self.size)
    }

    fn wall_border(&mut self) {
        for index in 0..self.len() {
            if self.is_border(self.cell_at(index)) {
                self.blocked[index] = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_walls_the_border() {
        let grid = Grid::new(4).unwrap();
        let blocked: Vec<bool> = grid.cells().map(|c| grid.is_blocked(c).unwrap()).collect();
        assert_eq!(
            blocked,
            vec![
                true, true, true, true, //
                true, false, false, true, //
                true, false, false, true, //
                true, true, true, true,
            ]
        );
        assert!(grid.adjacency_is_current());
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(
            Grid::new(0),
            Err(Error::InvalidGridSize { size: 0, .. })
        ));
    }

    #[test]
    fn out_of_bounds_is_reported() {
        let mut grid = Grid::new(3).unwrap();
        let err = grid.set_blocked(Cell::new(3, 0), true).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { size: 3, .. }));
        assert!(grid.is_blocked(Cell::new(0, 9)).is_err());
        assert!(grid.neighbors(Cell::new(9, 9)).is_err());
    }

    #[test]
    fn unchanged_flag_keeps_adjacency_current() {
        let mut grid = Grid::new(5).unwrap();
        grid.set_blocked(Cell::new(2, 2), false).unwrap();
        assert!(grid.adjacency_is_current());
        grid.set_blocked(Cell::new(2, 2), true).unwrap();
        assert!(!grid.adjacency_is_current());
    }

    #[test]
    fn neighbors_follow_down_up_right_left() {
        let grid = Grid::new(5).unwrap();
        assert_eq!(
            grid.neighbors(Cell::new(2, 2)).unwrap(),
            &[
                Cell::new(3, 2),
                Cell::new(1, 2),
                Cell::new(2, 3),
                Cell::new(2, 1)
            ]
        );
        // corner of the interior only sees interior cells
        assert_eq!(
            grid.neighbors(Cell::new(1, 1)).unwrap(),
            &[Cell::new(2, 1), Cell::new(1, 2)]
        );
        assert!(grid.neighbors(Cell::new(0, 0)).unwrap().is_empty());
    }

    #[test]
    fn clear_restores_initial_layout() {
        let mut grid = Grid::new(4).unwrap();
        grid.set_blocked(Cell::new(1, 1), true).unwrap();
        grid.set_blocked(Cell::new(0, 1), false).unwrap();
        grid.clear();
        assert!(!grid.is_blocked(Cell::new(1, 1)).unwrap());
        assert!(grid.is_blocked(Cell::new(0, 1)).unwrap());
    }
}
