use std::fmt;

use thiserror::Error;

use crate::cell::Cell;

/// Convenient result alias for the maze solver library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Search exhaustion and cancellation are not errors; they are reported as
/// [`SearchOutcome`](crate::search::SearchOutcome) variants.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a coordinate lies outside the grid.
    #[error("cell {cell} is outside the {size}x{size} grid")]
    OutOfBounds { cell: Cell, size: usize },

    /// Raised when start/end do not satisfy the search preconditions.
    #[error("invalid search endpoints: {problem}")]
    InvalidEndpoints { problem: EndpointProblem },

    /// Raised when blocked flags changed after the last adjacency rebuild.
    #[error("grid adjacency is stale; recompute adjacency before searching")]
    StaleAdjacency,

    /// Raised when constructing a grid with an unusable side length.
    #[error("grid size must be at least {min}, got {size}")]
    InvalidGridSize { size: usize, min: usize },

    /// Raised when the random-fill probability lies outside `[0, 1]`.
    #[error("fill probability must be within [0, 1], got {value}")]
    InvalidProbability { value: f64 },

    /// Wrapper for JSON serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Which search role an endpoint plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::End => f.write_str("end"),
        }
    }
}

/// Reason a pair of endpoints was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointProblem {
    /// The endpoint has not been placed.
    Unset(Endpoint),
    /// Start and end are the same cell.
    Identical(Cell),
    /// The endpoint sits on a wall.
    Blocked(Endpoint, Cell),
}

impl fmt::Display for EndpointProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointProblem::Unset(endpoint) => write!(f, "{endpoint} cell is not set"),
            EndpointProblem::Identical(cell) => {
                write!(f, "start and end are both {cell}")
            }
            EndpointProblem::Blocked(endpoint, cell) => {
                write!(f, "{endpoint} cell {cell} is blocked")
            }
        }
    }
}

impl From<EndpointProblem> for Error {
    fn from(problem: EndpointProblem) -> Self {
        Error::InvalidEndpoints { problem }
    }
}
