//! Incremental A* over a [`Grid`].
//!
//! Every search owns a fresh [`SearchState`]; nothing is written back to the
//! grid, so the same grid can be searched repeatedly. The open queue orders
//! entries by estimated total cost and then by insertion sequence, which
//! makes the expansion order fully reproducible for a given grid.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::{Duration, Instant};

use crate::cell::Cell;
use crate::error::{Endpoint, EndpointProblem, Error, Result};
use crate::grid::Grid;
use crate::heuristic::{estimate, Cost};
use crate::observer::{CancelSignal, Never, NoopObserver, SearchObserver, SearchProgress};
use crate::path::{reconstruct, Route};

/// Expansions between two [`SearchObserver::on_tick`] calls by default.
pub const DEFAULT_CADENCE: usize = 10;

/// Tuning knobs that do not affect the search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Call `on_tick` every `cadence` expansions; `0` disables ticks.
    pub cadence: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            cadence: DEFAULT_CADENCE,
        }
    }
}

/// Counters gathered during one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Nodes popped and expanded.
    pub expansions: usize,
    /// Cells that received a predecessor, plus the start cell.
    pub discovered: usize,
    pub elapsed: Duration,
}

/// Result of a search call that ran to completion or was stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found { route: Route, stats: SearchStats },
    NotFound { stats: SearchStats },
    Cancelled { stats: SearchStats },
}

impl SearchOutcome {
    pub fn stats(&self) -> &SearchStats {
        match self {
            SearchOutcome::Found { stats, .. }
            | SearchOutcome::NotFound { stats }
            | SearchOutcome::Cancelled { stats } => stats,
        }
    }

    pub fn route(&self) -> Option<&Route> {
        match self {
            SearchOutcome::Found { route, .. } => Some(route),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }
}

/// Queue entry ordered by estimate, then by insertion sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenEntry {
    estimate: Cost,
    sequence: u64,
    cell: Cell,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap; cells never compare.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-call bookkeeping. Missing scores mean "infinite".
struct SearchState {
    g_score: HashMap<Cell, Cost>,
    f_score: HashMap<Cell, Cost>,
    came_from: HashMap<Cell, Cell>,
    frontier: HashSet<Cell>,
    queue: BinaryHeap<OpenEntry>,
    sequence: u64,
}

impl SearchState {
    fn new(start: Cell, end: Cell) -> Self {
        let start_estimate = estimate(start, end);
        let mut state = Self {
            g_score: HashMap::from([(start, 0)]),
            f_score: HashMap::from([(start, start_estimate)]),
            came_from: HashMap::new(),
            frontier: HashSet::from([start]),
            queue: BinaryHeap::new(),
            sequence: 0,
        };
        state.queue.push(OpenEntry {
            estimate: start_estimate,
            sequence: 0,
            cell: start,
        });
        state
    }

    fn g(&self, cell: Cell) -> Cost {
        self.g_score.get(&cell).copied().unwrap_or(Cost::MAX)
    }

    fn push(&mut self, cell: Cell, estimate: Cost) {
        self.sequence += 1;
        self.queue.push(OpenEntry {
            estimate,
            sequence: self.sequence,
            cell,
        });
    }

    /// Pop the best live entry, discarding superseded duplicates.
    fn pop(&mut self) -> Option<Cell> {
        while let Some(entry) = self.queue.pop() {
            let live = self.frontier.contains(&entry.cell)
                && self.f_score.get(&entry.cell) == Some(&entry.estimate);
            if live {
                self.frontier.remove(&entry.cell);
                return Some(entry.cell);
            }
        }
        None
    }

    fn stats(&self, expansions: usize, started: Instant) -> SearchStats {
        SearchStats {
            expansions,
            discovered: self.came_from.len() + 1,
            elapsed: started.elapsed(),
        }
    }
}

/// Check the search preconditions without running a search.
pub fn validate_endpoints(grid: &Grid, start: Cell, end: Cell) -> Result<()> {
    grid.checked_index(start)?;
    grid.checked_index(end)?;
    if start == end {
        return Err(EndpointProblem::Identical(start).into());
    }
    if grid.blocked_unchecked(start) {
        return Err(EndpointProblem::Blocked(Endpoint::Start, start).into());
    }
    if grid.blocked_unchecked(end) {
        return Err(EndpointProblem::Blocked(Endpoint::End, end).into());
    }
    if !grid.adjacency_is_current() {
        return Err(Error::StaleAdjacency);
    }
    Ok(())
}

/// Run A* from `start` to `end` with unit step cost.
///
/// The grid must not change for the duration of the call. Observer events
/// are delivered in algorithm order; `cancel` is polled once per popped
/// node.
pub fn search<O, C>(
    grid: &Grid,
    start: Cell,
    end: Cell,
    observer: &mut O,
    cancel: &C,
    options: &SearchOptions,
) -> Result<SearchOutcome>
where
    O: SearchObserver + ?Sized,
    C: CancelSignal + ?Sized,
{
    validate_endpoints(grid, start, end)?;
    tracing::debug!(%start, %end, size = grid.size(), "starting A* search");

    let started = Instant::now();
    let mut state = SearchState::new(start, end);
    let mut expansions = 0usize;

    loop {
        if cancel.is_cancelled() {
            let stats = state.stats(expansions, started);
            tracing::debug!(expansions, "search cancelled");
            return Ok(SearchOutcome::Cancelled { stats });
        }

        let Some(current) = state.pop() else {
            break;
        };

        if current == end {
            let route = reconstruct(&state.came_from, end, observer);
            let stats = state.stats(expansions, started);
            tracing::debug!(
                expansions,
                path_length = route.len(),
                "search reached end cell"
            );
            return Ok(SearchOutcome::Found { route, stats });
        }

        let tentative = state.g(current).saturating_add(1);
        for &next in grid.neighbors_unchecked(current) {
            if tentative < state.g(next) {
                let next_estimate = tentative.saturating_add(estimate(next, end));
                state.came_from.insert(next, current);
                state.g_score.insert(next, tentative);
                state.f_score.insert(next, next_estimate);
                if state.frontier.insert(next) {
                    state.push(next, next_estimate);
                    observer.on_frontier(next);
                } else {
                    // lazy decrease-key: the older entry is skipped on pop
                    state.push(next, next_estimate);
                }
            }
        }

        if current != start {
            observer.on_visit(current);
        }

        expansions += 1;
        tracing::trace!(cell = %current, expansions, "expanded");
        if options.cadence > 0 && expansions % options.cadence == 0 {
            observer.on_tick(&SearchProgress {
                expansions,
                frontier: state.frontier.len(),
                current,
            });
        }
    }

    let stats = state.stats(expansions, started);
    tracing::debug!(expansions, "open set exhausted without reaching end cell");
    Ok(SearchOutcome::NotFound { stats })
}

/// Search without observation or cancellation, returning only the route.
pub fn find_path(grid: &Grid, start: Cell, end: Cell) -> Result<Option<Route>> {
    let outcome = search(
        grid,
        start,
        end,
        &mut NoopObserver,
        &Never,
        &SearchOptions::default(),
    )?;
    Ok(match outcome {
        SearchOutcome::Found { route, .. } => Some(route),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{CancelToken, TraceRecorder};

    fn open_grid(size: usize) -> Grid {
        Grid::new(size).unwrap()
    }

    #[test]
    fn queue_prefers_lower_estimate_then_earlier_insertion() {
        let mut heap = BinaryHeap::new();
        heap.push(OpenEntry {
            estimate: 5,
            sequence: 1,
            cell: Cell::new(9, 9),
        });
        heap.push(OpenEntry {
            estimate: 4,
            sequence: 3,
            cell: Cell::new(1, 1),
        });
        heap.push(OpenEntry {
            estimate: 4,
            sequence: 2,
            cell: Cell::new(8, 8),
        });
        let order: Vec<u64> = std::iter::from_fn(|| heap.pop().map(|e| e.sequence)).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn corridor_example_has_length_four() {
        let grid = open_grid(5);
        let route = find_path(&grid, Cell::new(1, 1), Cell::new(3, 3))
            .unwrap()
            .expect("route exists");
        assert_eq!(route.len(), 4);
        assert_eq!(route.steps[0], Cell::new(3, 3));
        assert!(route.is_contiguous());
    }

    #[test]
    fn start_is_never_reported_as_visited() {
        let grid = open_grid(6);
        let mut recorder = TraceRecorder::new();
        let outcome = search(
            &grid,
            Cell::new(1, 1),
            Cell::new(4, 4),
            &mut recorder,
            &Never,
            &SearchOptions::default(),
        )
        .unwrap();
        assert!(outcome.is_found());
        assert!(!recorder.visits().contains(&Cell::new(1, 1)));
        assert!(!recorder.frontier().contains(&Cell::new(1, 1)));
    }

    #[test]
    fn rejects_identical_and_blocked_endpoints() {
        let grid = open_grid(5);
        let same = find_path(&grid, Cell::new(2, 2), Cell::new(2, 2)).unwrap_err();
        assert!(matches!(
            same,
            Error::InvalidEndpoints {
                problem: EndpointProblem::Identical(_)
            }
        ));

        let wall = find_path(&grid, Cell::new(0, 0), Cell::new(2, 2)).unwrap_err();
        assert!(matches!(
            wall,
            Error::InvalidEndpoints {
                problem: EndpointProblem::Blocked(Endpoint::Start, _)
            }
        ));

        let outside = find_path(&grid, Cell::new(1, 1), Cell::new(7, 1)).unwrap_err();
        assert!(matches!(outside, Error::OutOfBounds { .. }));
    }

    #[test]
    fn stale_adjacency_is_rejected() {
        let mut grid = open_grid(5);
        grid.set_blocked(Cell::new(2, 2), true).unwrap();
        let err = find_path(&grid, Cell::new(1, 1), Cell::new(3, 3)).unwrap_err();
        assert!(matches!(err, Error::StaleAdjacency));
    }

    #[test]
    fn cancelled_before_first_pop() {
        let grid = open_grid(8);
        let token = CancelToken::new();
        token.cancel();
        let outcome = search(
            &grid,
            Cell::new(1, 1),
            Cell::new(6, 6),
            &mut NoopObserver,
            &token,
            &SearchOptions::default(),
        )
        .unwrap();
        assert!(matches!(outcome, SearchOutcome::Cancelled { .. }));
        assert_eq!(outcome.stats().expansions, 0);
        assert!(outcome.route().is_none());
    }

    #[test]
    fn ticks_follow_cadence() {
        let grid = open_grid(12);
        let mut recorder = TraceRecorder::new();
        let outcome = search(
            &grid,
            Cell::new(1, 1),
            Cell::new(10, 10),
            &mut recorder,
            &Never,
            &SearchOptions { cadence: 1 },
        )
        .unwrap();
        assert_eq!(recorder.ticks, outcome.stats().expansions);

        let mut silent = TraceRecorder::new();
        search(
            &grid,
            Cell::new(1, 1),
            Cell::new(10, 10),
            &mut silent,
            &Never,
            &SearchOptions { cadence: 0 },
        )
        .unwrap();
        assert_eq!(silent.ticks, 0);
        assert_eq!(silent.events, recorder.events);
    }
}
