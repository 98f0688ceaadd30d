//! `maze`: generate a layout between two cells and print it.

use anyhow::{Context, Result};

use mazesolver_lib::{Board, MazeStrategy};

use crate::commands::{generate, place_endpoints, GlobalOptions};
use crate::output::{Glyphs, GridRenderer, MazeReport, OutputFormat};
use crate::MazeArgs;

pub fn handle_maze(args: &MazeArgs, global: &GlobalOptions) -> Result<()> {
    let strategy = MazeStrategy::from(args.maze);
    let mut board = Board::new(global.size).context("invalid grid size")?;
    place_endpoints(&mut board, args.start, args.end)?;
    generate(&mut board, strategy, args.fill_probability, args.seed)?;

    let grid = board.grid();
    let walls = grid
        .cells()
        .filter(|&cell| grid.is_blocked(cell).unwrap_or(false))
        .count();

    match global.format {
        OutputFormat::Text => {
            let palette = global.palette();
            let renderer = GridRenderer::new(Glyphs::detect(), palette);
            println!("{}", renderer.render(&board, None));
            println!();
            let seed = args
                .seed
                .map(|seed| format!(" | seed {seed}"))
                .unwrap_or_default();
            println!(
                "{}{strategy} maze | {size}x{size} | {walls} walls{seed}{}",
                palette.gray,
                palette.reset,
                size = global.size,
            );
        }
        OutputFormat::Json => {
            let report = MazeReport {
                size: global.size,
                strategy,
                seed: args.seed,
                start: args.start,
                end: args.end,
                walls,
                grid: GridRenderer::plain().rows(&board, None),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
