use std::collections::HashMap;

use serde::Serialize;

use crate::cell::Cell;
use crate::observer::SearchObserver;

/// Route recovered from a predecessor map.
///
/// `steps` runs backward from the end cell to the cell adjacent to the
/// start; the start itself is excluded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub start: Cell,
    pub end: Cell,
    pub steps: Vec<Cell>,
}

impl Route {
    /// Number of cells walked, which equals the unit-cost path length.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Cells in travel order, start first and end last.
    pub fn forward(&self) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(self.steps.len() + 1);
        cells.push(self.start);
        cells.extend(self.steps.iter().rev().copied());
        cells
    }

    /// Whether each consecutive pair of cells is one orthogonal step apart.
    pub fn is_contiguous(&self) -> bool {
        self.forward()
            .windows(2)
            .all(|pair| pair[0].is_adjacent(pair[1]))
    }
}

/// Walk `came_from` backward from `end` until a cell without predecessor.
///
/// Each walked cell is reported through [`SearchObserver::on_path_step`] in
/// backward order.
pub fn reconstruct<O: SearchObserver + ?Sized>(
    came_from: &HashMap<Cell, Cell>,
    end: Cell,
    observer: &mut O,
) -> Route {
    let mut steps = Vec::new();
    let mut current = end;
    while let Some(&previous) = came_from.get(&current) {
        steps.push(current);
        observer.on_path_step(current);
        current = previous;
    }
    Route {
        start: current,
        end,
        steps,
    }
}
