//! Subcommand handlers.
//!
//! `main.rs` parses arguments and dispatches here; each handler builds a
//! [`mazesolver_lib::Board`], runs the library operation and prints the result.

use anyhow::{Context, Result};
use mazesolver_lib::{
    select_generator, Board, Cell, EndpointProblem, Error as LibError, MazeStrategy,
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::output::OutputFormat;
use crate::terminal::ColorPalette;

pub mod maze;
pub mod solve;

/// Options shared by every subcommand.
#[derive(Debug, Clone, Copy)]
pub struct GlobalOptions {
    pub size: usize,
    pub format: OutputFormat,
    pub no_color: bool,
}

impl GlobalOptions {
    /// Colour is never used for JSON output.
    pub fn palette(&self) -> ColorPalette {
        ColorPalette::detect(self.no_color || self.format == OutputFormat::Json)
    }
}

/// Seeded generator when `seed` is given, otherwise the thread-local one.
pub(crate) fn maze_rng(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    }
}

/// Replace the board walls with a generated layout.
pub(crate) fn generate(
    board: &mut Board,
    strategy: MazeStrategy,
    probability: f64,
    seed: Option<u64>,
) -> Result<()> {
    let generator = select_generator(strategy, probability);
    let mut rng = maze_rng(seed);
    board
        .generate_maze(generator.as_ref(), rng.as_mut())
        .with_context(|| format!("failed to generate {strategy} maze"))?;
    tracing::debug!(%strategy, ?seed, "maze ready");
    Ok(())
}

/// Place both endpoints, refusing a start that equals the end.
pub(crate) fn place_endpoints(board: &mut Board, start: Cell, end: Cell) -> Result<()> {
    if start == end {
        return Err(LibError::from(EndpointProblem::Identical(start)))
            .context("start and end must be different cells");
    }
    board
        .place_start(start)
        .with_context(|| format!("cannot place start at {start}"))?;
    board
        .place_end(end)
        .with_context(|| format!("cannot place end at {end}"))?;
    Ok(())
}
