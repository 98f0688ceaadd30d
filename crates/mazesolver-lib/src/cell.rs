use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// A grid position identified by `(row, col)`.
///
/// Cells are plain coordinates. They carry no search state and have no total
/// order; priority queues break ties with an insertion sequence instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Map a pointer position in pixels to the cell underneath it.
    ///
    /// Returns `None` for negative coordinates or a zero cell size. The
    /// result may still lie outside a particular grid; callers check bounds.
    pub fn from_pointer(x: i64, y: i64, cell_size: u32) -> Option<Self> {
        if cell_size == 0 || x < 0 || y < 0 {
            return None;
        }
        let size = i64::from(cell_size);
        Some(Self::new((y / size) as usize, (x / size) as usize))
    }

    /// Orthogonal neighbours that stay within a `size`x`size` grid, in
    /// down, up, right, left order.
    pub(crate) fn orthogonal(self, size: usize) -> impl Iterator<Item = Cell> {
        let Cell { row, col } = self;
        let down = (row + 1 < size).then(|| Cell::new(row + 1, col));
        let up = row.checked_sub(1).map(|r| Cell::new(r, col));
        let right = (col + 1 < size).then(|| Cell::new(row, col + 1));
        let left = col.checked_sub(1).map(|c| Cell::new(row, c));
        [down, up, right, left].into_iter().flatten()
    }

    /// True when `other` is exactly one orthogonal step away.
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Raised when a `row,col` string cannot be parsed into a [`Cell`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected a cell as `row,col`, got `{input}`")]
pub struct ParseCellError {
    input: String,
}

impl FromStr for Cell {
    type Err = ParseCellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseCellError {
            input: s.to_string(),
        };
        let (row, col) = s.split_once(',').ok_or_else(invalid)?;
        let row = row.trim().parse().map_err(|_| invalid())?;
        let col = col.trim().parse().map_err(|_| invalid())?;
        Ok(Cell::new(row, col))
    }
}
