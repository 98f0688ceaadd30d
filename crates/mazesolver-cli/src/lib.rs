//! Maze solver CLI library.
//!
//! Argument types, command handlers, grid rendering and terminal styling for
//! the `mazesolver-cli` binary.

use clap::{Args, ValueEnum};

use mazesolver_lib::{Cell, MazeStrategy, DEFAULT_CADENCE, DEFAULT_FILL_PROBABILITY};

pub mod animate;
pub mod commands;
pub mod output;
pub mod terminal;

/// Layout applied before solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MazeArg {
    /// Keep the painted walls.
    #[default]
    None,
    /// Randomized depth-first carving.
    Dfs,
    /// Independent random walls.
    Random,
}

impl MazeArg {
    pub fn strategy(self) -> Option<MazeStrategy> {
        match self {
            MazeArg::None => None,
            MazeArg::Dfs => Some(MazeStrategy::Dfs),
            MazeArg::Random => Some(MazeStrategy::RandomFill),
        }
    }
}

/// Generator used by the `maze` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum GeneratorArg {
    #[default]
    Dfs,
    Random,
}

impl From<GeneratorArg> for MazeStrategy {
    fn from(value: GeneratorArg) -> Self {
        match value {
            GeneratorArg::Dfs => MazeStrategy::Dfs,
            GeneratorArg::Random => MazeStrategy::RandomFill,
        }
    }
}

/// Arguments for `solve`.
#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    /// Start cell as `row,col`.
    #[arg(long)]
    pub start: Cell,
    /// End cell as `row,col`.
    #[arg(long)]
    pub end: Cell,
    /// Wall cell as `row,col` (repeatable).
    #[arg(long = "wall", value_name = "ROW,COL")]
    pub walls: Vec<Cell>,
    /// Generate a layout before solving; replaces any painted walls.
    #[arg(long, value_enum, default_value_t = MazeArg::None)]
    pub maze: MazeArg,
    /// Seed for reproducible maze generation.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Wall probability for `--maze random`.
    #[arg(long, default_value_t = DEFAULT_FILL_PROBABILITY)]
    pub fill_probability: f64,
    /// Expansions between progress repaints; 0 disables them.
    #[arg(long, default_value_t = DEFAULT_CADENCE)]
    pub cadence: usize,
    /// Abandon the search after this many milliseconds.
    #[arg(long)]
    pub timeout_ms: Option<u64>,
    /// Repaint the grid on stderr while searching.
    #[arg(long)]
    pub animate: bool,
}

/// Arguments for `maze`.
#[derive(Args, Debug, Clone)]
pub struct MazeArgs {
    /// Start cell as `row,col`.
    #[arg(long)]
    pub start: Cell,
    /// End cell as `row,col`.
    #[arg(long)]
    pub end: Cell,
    #[arg(long, value_enum, default_value_t = GeneratorArg::Dfs)]
    pub maze: GeneratorArg,
    /// Seed for reproducible generation.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Wall probability for `--maze random`.
    #[arg(long, default_value_t = DEFAULT_FILL_PROBABILITY)]
    pub fill_probability: f64,
}
