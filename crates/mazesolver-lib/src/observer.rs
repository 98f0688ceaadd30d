//! Search event notifications and cooperative cancellation.
//!
//! A presentation layer receives [`SearchEvent`]s through a
//! [`SearchObserver`] and gets a periodic [`SearchObserver::on_tick`] at the
//! configured cadence, which is where it repaints and polls its own input.
//! Cancellation is polled once per popped node through a [`CancelSignal`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::cell::Cell;

/// State transition emitted while searching or reconstructing a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "cell", rename_all = "snake_case")]
pub enum SearchEvent {
    /// Cell entered the open set.
    Frontier(Cell),
    /// Cell was expanded and closed.
    Visit(Cell),
    /// Cell belongs to the reconstructed route.
    PathStep(Cell),
}

impl SearchEvent {
    pub fn cell(self) -> Cell {
        match self {
            SearchEvent::Frontier(cell) | SearchEvent::Visit(cell) | SearchEvent::PathStep(cell) => {
                cell
            }
        }
    }
}

/// Progress snapshot handed to [`SearchObserver::on_tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchProgress {
    pub expansions: usize,
    pub frontier: usize,
    pub current: Cell,
}

/// Receives search transitions in algorithm order.
pub trait SearchObserver {
    fn on_frontier(&mut self, _cell: Cell) {}
    fn on_visit(&mut self, _cell: Cell) {}
    fn on_path_step(&mut self, _cell: Cell) {}
    fn on_tick(&mut self, _progress: &SearchProgress) {}

    fn notify(&mut self, event: SearchEvent) {
        match event {
            SearchEvent::Frontier(cell) => self.on_frontier(cell),
            SearchEvent::Visit(cell) => self.on_visit(cell),
            SearchEvent::PathStep(cell) => self.on_path_step(cell),
        }
    }
}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn on_frontier(&mut self, cell: Cell) {
        (**self).on_frontier(cell);
    }
    fn on_visit(&mut self, cell: Cell) {
        (**self).on_visit(cell);
    }
    fn on_path_step(&mut self, cell: Cell) {
        (**self).on_path_step(cell);
    }
    fn on_tick(&mut self, progress: &SearchProgress) {
        (**self).on_tick(progress);
    }
}

pub struct NoopObserver;
impl SearchObserver for NoopObserver {}

/// Records every event, for golden traces and tests.
#[derive(Debug, Clone, Default)]
pub struct TraceRecorder {
    pub events: Vec<SearchEvent>,
    pub ticks: usize,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cells in the order they were closed.
    pub fn visits(&self) -> Vec<Cell> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SearchEvent::Visit(cell) => Some(*cell),
                _ => None,
            })
            .collect()
    }

    /// Cells in the order they were opened.
    pub fn frontier(&self) -> Vec<Cell> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SearchEvent::Frontier(cell) => Some(*cell),
                _ => None,
            })
            .collect()
    }
}

impl SearchObserver for TraceRecorder {
    fn on_frontier(&mut self, cell: Cell) {
        self.events.push(SearchEvent::Frontier(cell));
    }
    fn on_visit(&mut self, cell: Cell) {
        self.events.push(SearchEvent::Visit(cell));
    }
    fn on_path_step(&mut self, cell: Cell) {
        self.events.push(SearchEvent::PathStep(cell));
    }
    fn on_tick(&mut self, _progress: &SearchProgress) {
        self.ticks += 1;
    }
}

/// Adapts a closure over [`SearchEvent`] into an observer.
pub struct FnObserver<F>(pub F);

impl<F: FnMut(SearchEvent)> SearchObserver for FnObserver<F> {
    fn on_frontier(&mut self, cell: Cell) {
        (self.0)(SearchEvent::Frontier(cell));
    }
    fn on_visit(&mut self, cell: Cell) {
        (self.0)(SearchEvent::Visit(cell));
    }
    fn on_path_step(&mut self, cell: Cell) {
        (self.0)(SearchEvent::PathStep(cell));
    }
}

/// Cooperative stop request polled by the search loop.
pub trait CancelSignal {
    fn is_cancelled(&self) -> bool;
}

impl<C: CancelSignal + ?Sized> CancelSignal for &C {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

impl CancelSignal for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

/// Signal that never fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl CancelSignal for Never {
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Shared flag a collaborator flips to stop an in-flight search.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }
}

impl CancelSignal for CancelToken {
    fn is_cancelled(&self) -> bool {
        self.flag.is_cancelled()
    }
}

/// Fires once a wall-clock budget has elapsed.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    pub fn after(budget: Duration) -> Self {
        Self {
            at: Instant::now() + budget,
        }
    }
}

impl CancelSignal for Deadline {
    fn is_cancelled(&self) -> bool {
        Instant::now() >= self.at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_clones_share_the_flag() {
        let token = CancelToken::new();
        let handle = token.clone();
        assert!(!token.is_cancelled());
        handle.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn zero_deadline_fires_immediately() {
        assert!(Deadline::after(Duration::ZERO).is_cancelled());
        assert!(!Deadline::after(Duration::from_secs(3600)).is_cancelled());
    }

    #[test]
    fn fn_observer_forwards_events() {
        let mut seen = Vec::new();
        {
            let mut observer = FnObserver(|event| seen.push(event));
            observer.notify(SearchEvent::Frontier(Cell::new(1, 2)));
            observer.on_visit(Cell::new(3, 4));
        }
        assert_eq!(
            seen,
            vec![
                SearchEvent::Frontier(Cell::new(1, 2)),
                SearchEvent::Visit(Cell::new(3, 4))
            ]
        );
    }

    #[test]
    fn events_serialize_with_tag() {
        let json = serde_json::to_string(&SearchEvent::PathStep(Cell::new(2, 5))).unwrap();
        assert_eq!(json, r#"{"event":"path_step","cell":{"row":2,"col":5}}"#);
    }
}
