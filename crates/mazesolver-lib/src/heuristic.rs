use crate::cell::Cell;

/// Path cost in unit steps.
pub type Cost = u32;

/// Manhattan distance between two cells.
///
/// Admissible and consistent for orthogonal unit-cost movement, which keeps
/// A* optimal.
pub fn estimate(a: Cell, b: Cell) -> Cost {
    (a.row.abs_diff(b.row) + a.col.abs_diff(b.col)) as Cost
}
