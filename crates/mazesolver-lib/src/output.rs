use serde::Serialize;

use crate::cell::Cell;
use crate::error::Result;
use crate::search::SearchOutcome;

/// Final state of a solve request.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    Found,
    NotFound,
    Cancelled,
}

impl SolveStatus {
    /// Human-readable label shown in textual renderings.
    pub fn label(self) -> &'static str {
        match self {
            SolveStatus::Found => "found",
            SolveStatus::NotFound => "no path",
            SolveStatus::Cancelled => "cancelled",
        }
    }
}

/// Presentation metadata derived from a [`SearchOutcome`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SolveSummary {
    pub status: SolveStatus,
    pub start: Cell,
    pub end: Cell,
    /// Route in travel order including both endpoints; empty without a route.
    pub path: Vec<Cell>,
    pub path_length: usize,
    pub cells_visited: usize,
    pub expansions: usize,
    pub elapsed_ms: f64,
}

impl SolveSummary {
    pub fn from_outcome(start: Cell, end: Cell, outcome: &SearchOutcome) -> Self {
        let status = match outcome {
            SearchOutcome::Found { .. } => SolveStatus::Found,
            SearchOutcome::NotFound { .. } => SolveStatus::NotFound,
            SearchOutcome::Cancelled { .. } => SolveStatus::Cancelled,
        };
        let stats = outcome.stats();
        let (path, path_length) = outcome
            .route()
            .map(|route| (route.forward(), route.len()))
            .unwrap_or_default();

        Self {
            status,
            start,
            end,
            path,
            path_length,
            cells_visited: stats.discovered,
            expansions: stats.expansions,
            elapsed_ms: stats.elapsed.as_secs_f64() * 1000.0,
        }
    }

    /// One-line status text in the style of a window caption.
    pub fn caption(&self) -> String {
        match self.status {
            SolveStatus::Found => format!(
                "Time Elapsed: {:.2}s | Cells Visited: {} | Shortest Path: {} Cells",
                self.elapsed_ms / 1000.0,
                self.cells_visited,
                self.path_length
            ),
            SolveStatus::NotFound => "Unable To Find The Target Node!".to_string(),
            SolveStatus::Cancelled => "Search Cancelled".to_string(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::observer::{Never, NoopObserver};
    use crate::search::{search, SearchOptions, SearchStats};

    #[test]
    fn found_summary_includes_forward_path() {
        let grid = Grid::new(5).unwrap();
        let start = Cell::new(1, 1);
        let end = Cell::new(1, 3);
        let outcome = search(
            &grid,
            start,
            end,
            &mut NoopObserver,
            &Never,
            &SearchOptions::default(),
        )
        .unwrap();
        let summary = SolveSummary::from_outcome(start, end, &outcome);

        assert_eq!(summary.status, SolveStatus::Found);
        assert_eq!(summary.path_length, 2);
        assert_eq!(
            summary.path,
            vec![Cell::new(1, 1), Cell::new(1, 2), Cell::new(1, 3)]
        );
        assert!(summary.caption().contains("Shortest Path: 2 Cells"));
    }

    #[test]
    fn not_found_summary_has_no_path() {
        let outcome = SearchOutcome::NotFound {
            stats: SearchStats {
                expansions: 3,
                discovered: 4,
                ..SearchStats::default()
            },
        };
        let summary = SolveSummary::from_outcome(Cell::new(1, 1), Cell::new(3, 3), &outcome);
        assert!(summary.path.is_empty());
        assert_eq!(summary.cells_visited, 4);
        assert_eq!(summary.caption(), "Unable To Find The Target Node!");

        let json = summary.to_json().unwrap();
        assert!(json.contains("\"status\": \"not_found\""));
    }
}
