//! Maze generation strategies behind a common trait.
//!
//! Callers pick a [`MazeGenerator`] through [`select_generator`] so new
//! layouts can be added without touching the board orchestration.

use rand::RngCore;

use crate::cell::Cell;
use crate::error::Result;
use crate::grid::Grid;

use super::{carve_dfs, random_fill, MazeStrategy, DEFAULT_FILL_PROBABILITY};

/// Trait for wall layout strategies.
pub trait MazeGenerator {
    /// The strategy identifier for this generator.
    fn strategy(&self) -> MazeStrategy;

    /// Overwrite the walls of `grid`, keeping `start` and `end` free.
    fn generate(&self, grid: &mut Grid, start: Cell, end: Cell, rng: &mut dyn RngCore)
        -> Result<()>;

    /// Whether every layout this generator produces connects start to end.
    fn guarantees_path(&self) -> bool {
        false
    }
}

/// Randomized depth-first carver producing a perfect maze.
#[derive(Debug, Clone, Copy, Default)]
pub struct DfsCarver;

impl MazeGenerator for DfsCarver {
    fn strategy(&self) -> MazeStrategy {
        MazeStrategy::Dfs
    }

    fn generate(
        &self,
        grid: &mut Grid,
        start: Cell,
        end: Cell,
        rng: &mut dyn RngCore,
    ) -> Result<()> {
        carve_dfs(grid, start, end, rng)
    }

    fn guarantees_path(&self) -> bool {
        true
    }
}

/// Independent random walls with a fixed probability.
#[derive(Debug, Clone, Copy)]
pub struct RandomFill {
    pub probability: f64,
}

impl Default for RandomFill {
    fn default() -> Self {
        Self {
            probability: DEFAULT_FILL_PROBABILITY,
        }
    }
}

impl MazeGenerator for RandomFill {
    fn strategy(&self) -> MazeStrategy {
        MazeStrategy::RandomFill
    }

    fn generate(
        &self,
        grid: &mut Grid,
        start: Cell,
        end: Cell,
        rng: &mut dyn RngCore,
    ) -> Result<()> {
        random_fill(grid, start, end, self.probability, rng)
    }
}

/// Select the generator for a strategy; `probability` only applies to
/// random fill.
pub fn select_generator(strategy: MazeStrategy, probability: f64) -> Box<dyn MazeGenerator> {
    match strategy {
        MazeStrategy::Dfs => Box::new(DfsCarver),
        MazeStrategy::RandomFill => Box::new(RandomFill { probability }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dfs_carver_reports_strategy() {
        let generator = DfsCarver;
        assert_eq!(generator.strategy(), MazeStrategy::Dfs);
        assert!(generator.guarantees_path());
    }

    #[test]
    fn random_fill_defaults_to_thirty_percent() {
        let generator = RandomFill::default();
        assert_eq!(generator.strategy(), MazeStrategy::RandomFill);
        assert!((generator.probability - 0.3).abs() < f64::EPSILON);
        assert!(!generator.guarantees_path());
    }

    #[test]
    fn select_generator_chooses_correct_type() {
        assert_eq!(
            select_generator(MazeStrategy::Dfs, 0.5).strategy(),
            MazeStrategy::Dfs
        );
        assert_eq!(
            select_generator(MazeStrategy::RandomFill, 0.5).strategy(),
            MazeStrategy::RandomFill
        );
    }
}
