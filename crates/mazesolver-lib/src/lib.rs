//! Maze solver library entry points.
//!
//! This crate owns the grid topology, the A* search engine, route
//! reconstruction and maze generation. Presentation layers (the CLI, or any
//! windowed front-end) build a [`Board`] or [`Grid`], feed it user input,
//! and consume search events through a [`SearchObserver`]; they should only
//! depend on the items exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod board;
pub mod cell;
pub mod error;
pub mod grid;
pub mod heuristic;
pub mod maze;
pub mod observer;
pub mod output;
pub mod path;
pub mod search;

pub use board::{Board, CellRole};
pub use cell::{Cell, ParseCellError};
pub use error::{Endpoint, EndpointProblem, Error, Result};
pub use grid::{Grid, DEFAULT_GRID_SIZE};
pub use heuristic::{estimate, Cost};
pub use maze::{
    carve_dfs, random_fill, select_generator, DfsCarver, MazeGenerator, MazeStrategy, RandomFill,
    DEFAULT_FILL_PROBABILITY,
};
pub use observer::{
    CancelSignal, CancelToken, Deadline, FnObserver, Never, NoopObserver, SearchEvent,
    SearchObserver, SearchProgress, TraceRecorder,
};
pub use output::{SolveStatus, SolveSummary};
pub use path::{reconstruct, Route};
pub use search::{
    find_path, search, validate_endpoints, SearchOptions, SearchOutcome, SearchStats,
    DEFAULT_CADENCE,
};
