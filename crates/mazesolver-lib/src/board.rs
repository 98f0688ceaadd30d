//! Editable board: a [`Grid`] plus the start and end designations.
//!
//! Roles are kept separate from the topology. A cell is a wall or free in the
//! grid; start and end are tracked here and are always free. Transient search
//! state (open, closed, path) never lives on the board.

use rand::RngCore;
use serde::Serialize;

use crate::cell::Cell;
use crate::error::{Endpoint, EndpointProblem, Result};
use crate::grid::Grid;
use crate::maze::MazeGenerator;
use crate::observer::{CancelSignal, SearchObserver};
use crate::search::{search, SearchOptions, SearchOutcome};

/// Editing role of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellRole {
    Free,
    Wall,
    Start,
    End,
}

#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    start: Option<Cell>,
    end: Option<Cell>,
}

impl Board {
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            grid: Grid::new(size)?,
            start: None,
            end: None,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Option<Cell> {
        self.start
    }

    pub fn end(&self) -> Option<Cell> {
        self.end
    }

    pub fn role(&self, cell: Cell) -> Result<CellRole> {
        let blocked = self.grid.is_blocked(cell)?;
        Ok(if self.start == Some(cell) {
            CellRole::Start
        } else if self.end == Some(cell) {
            CellRole::End
        } else if blocked {
            CellRole::Wall
        } else {
            CellRole::Free
        })
    }

    /// Primary-button painting: start first, then end, then walls.
    ///
    /// Painting over the current start or end leaves it untouched.
    pub fn paint(&mut self, cell: Cell) -> Result<CellRole> {
        self.grid.checked_index(cell)?;
        if self.start.is_none() && self.end != Some(cell) {
            self.place_start(cell)?;
        } else if self.end.is_none() && self.start != Some(cell) {
            self.place_end(cell)?;
        } else if self.start != Some(cell) && self.end != Some(cell) {
            self.place_wall(cell)?;
        }
        self.role(cell)
    }

    /// Secondary-button erase: drop any role and free the cell.
    ///
    /// Border cells fall back to walls, matching a fresh grid.
    pub fn erase(&mut self, cell: Cell) -> Result<()> {
        self.grid.checked_index(cell)?;
        self.release(cell);
        let blocked = self.grid.is_border(cell);
        self.grid.set_blocked(cell, blocked)
    }

    /// Move the start to `cell`, freeing it and dropping a conflicting end.
    pub fn place_start(&mut self, cell: Cell) -> Result<()> {
        self.grid.set_blocked(cell, false)?;
        if self.end == Some(cell) {
            self.end = None;
        }
        self.start = Some(cell);
        Ok(())
    }

    /// Move the end to `cell`, freeing it and dropping a conflicting start.
    pub fn place_end(&mut self, cell: Cell) -> Result<()> {
        self.grid.set_blocked(cell, false)?;
        if self.start == Some(cell) {
            self.start = None;
        }
        self.end = Some(cell);
        Ok(())
    }

    /// Wall `cell`, dropping any start/end role it had.
    pub fn place_wall(&mut self, cell: Cell) -> Result<()> {
        self.grid.set_blocked(cell, true)?;
        self.release(cell);
        Ok(())
    }

    /// Reset to a fresh grid with no endpoints.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.start = None;
        self.end = None;
    }

    /// Both endpoints, or the first missing one as an error.
    pub fn endpoints(&self) -> Result<(Cell, Cell)> {
        let start = self
            .start
            .ok_or(EndpointProblem::Unset(Endpoint::Start))?;
        let end = self.end.ok_or(EndpointProblem::Unset(Endpoint::End))?;
        Ok((start, end))
    }

    /// Replace the walls with a generated layout and refresh adjacency.
    pub fn generate_maze(
        &mut self,
        generator: &dyn MazeGenerator,
        rng: &mut dyn RngCore,
    ) -> Result<()> {
        let (start, end) = self.endpoints()?;
        generator.generate(&mut self.grid, start, end, rng)?;
        self.grid.recompute_adjacency();
        tracing::debug!(strategy = %generator.strategy(), "board maze generated");
        Ok(())
    }

    /// Refresh adjacency if needed and search from start to end.
    pub fn solve<O, C>(
        &mut self,
        observer: &mut O,
        cancel: &C,
        options: &SearchOptions,
    ) -> Result<SearchOutcome>
    where
        O: SearchObserver + ?Sized,
        C: CancelSignal + ?Sized,
    {
        let (start, end) = self.endpoints()?;
        if !self.grid.adjacency_is_current() {
            self.grid.recompute_adjacency();
        }
        search(&self.grid, start, end, observer, cancel, options)
    }

    fn release(&mut self, cell: Cell) {
        if self.start == Some(cell) {
            self.start = None;
        }
        if self.end == Some(cell) {
            self.end = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn paint_sequence_sets_start_end_then_walls() {
        let mut board = Board::new(6).unwrap();
        assert_eq!(board.paint(Cell::new(1, 1)).unwrap(), CellRole::Start);
        assert_eq!(board.paint(Cell::new(1, 1)).unwrap(), CellRole::Start);
        assert_eq!(board.paint(Cell::new(4, 4)).unwrap(), CellRole::End);
        assert_eq!(board.paint(Cell::new(2, 2)).unwrap(), CellRole::Wall);
        assert_eq!(board.paint(Cell::new(4, 4)).unwrap(), CellRole::End);
    }

    #[test]
    fn erase_drops_roles_and_rewalls_border() {
        let mut board = Board::new(6).unwrap();
        board.place_start(Cell::new(0, 2)).unwrap();
        assert_eq!(board.role(Cell::new(0, 2)).unwrap(), CellRole::Start);

        board.erase(Cell::new(0, 2)).unwrap();
        assert_eq!(board.start(), None);
        assert_eq!(board.role(Cell::new(0, 2)).unwrap(), CellRole::Wall);

        board.place_wall(Cell::new(2, 2)).unwrap();
        board.erase(Cell::new(2, 2)).unwrap();
        assert_eq!(board.role(Cell::new(2, 2)).unwrap(), CellRole::Free);
    }

    #[test]
    fn new_role_replaces_conflicting_role() {
        let mut board = Board::new(6).unwrap();
        board.place_start(Cell::new(1, 1)).unwrap();
        board.place_end(Cell::new(1, 1)).unwrap();
        assert_eq!(board.start(), None);
        assert_eq!(board.end(), Some(Cell::new(1, 1)));

        board.place_wall(Cell::new(1, 1)).unwrap();
        assert_eq!(board.end(), None);
        assert_eq!(board.role(Cell::new(1, 1)).unwrap(), CellRole::Wall);
    }

    #[test]
    fn moving_start_leaves_previous_cell_free() {
        let mut board = Board::new(6).unwrap();
        board.place_start(Cell::new(1, 1)).unwrap();
        board.place_start(Cell::new(2, 3)).unwrap();
        assert_eq!(board.role(Cell::new(1, 1)).unwrap(), CellRole::Free);
        assert_eq!(board.start(), Some(Cell::new(2, 3)));
    }

    #[test]
    fn endpoints_report_missing_roles() {
        let mut board = Board::new(6).unwrap();
        let err = board.endpoints().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidEndpoints {
                problem: EndpointProblem::Unset(Endpoint::Start)
            }
        ));
        board.place_start(Cell::new(1, 1)).unwrap();
        let err = board.endpoints().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidEndpoints {
                problem: EndpointProblem::Unset(Endpoint::End)
            }
        ));
    }

    #[test]
    fn clear_drops_endpoints() {
        let mut board = Board::new(6).unwrap();
        board.paint(Cell::new(1, 1)).unwrap();
        board.paint(Cell::new(4, 4)).unwrap();
        board.paint(Cell::new(2, 2)).unwrap();
        board.clear();
        assert!(board.endpoints().is_err());
        assert_eq!(board.role(Cell::new(2, 2)).unwrap(), CellRole::Free);
    }
}
