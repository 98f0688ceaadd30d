//! `solve`: paint a board, optionally generate a maze, and run A*.

use std::io;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use mazesolver_lib::{
    Board, CancelSignal, Deadline, Never, SearchOptions, SearchOutcome, SolveSummary,
};

use crate::animate::Animator;
use crate::commands::{generate, place_endpoints, GlobalOptions};
use crate::output::{summary_lines, Glyphs, GridRenderer, OutputFormat, Overlay, SolveReport};
use crate::SolveArgs;

pub fn handle_solve(args: &SolveArgs, global: &GlobalOptions) -> Result<()> {
    let mut board = prepare_board(args, global.size)?;
    if let Some(strategy) = args.maze.strategy() {
        if !args.walls.is_empty() {
            tracing::warn!(
                walls = args.walls.len(),
                %strategy,
                "generated maze replaces painted walls"
            );
        }
        generate(&mut board, strategy, args.fill_probability, args.seed)?;
    }

    let options = SearchOptions {
        cadence: args.cadence,
    };
    let cancel: Box<dyn CancelSignal> = match args.timeout_ms {
        Some(ms) => Box::new(Deadline::after(Duration::from_millis(ms))),
        None => Box::new(Never),
    };

    let palette = global.palette();
    let renderer = match global.format {
        OutputFormat::Text => GridRenderer::new(Glyphs::detect(), palette),
        OutputFormat::Json => GridRenderer::plain(),
    };

    let (outcome, overlay) = if args.animate && global.format == OutputFormat::Text {
        let mut animator = Animator::new(board.clone(), renderer, io::stderr().lock());
        let outcome = board
            .solve(&mut animator, cancel.as_ref(), &options)
            .context("search failed")?;
        let overlay = animator
            .finish()
            .context("failed to paint search frames")?;
        (outcome, overlay)
    } else {
        let mut overlay = Overlay::new();
        let outcome = board
            .solve(&mut overlay, cancel.as_ref(), &options)
            .context("search failed")?;
        (outcome, overlay)
    };

    if let SearchOutcome::Cancelled { stats } = &outcome {
        tracing::info!(
            expansions = stats.expansions,
            timeout_ms = args.timeout_ms,
            "search cancelled before reaching the end cell"
        );
    }

    let summary = SolveSummary::from_outcome(args.start, args.end, &outcome);
    match global.format {
        OutputFormat::Text => {
            println!("{}", renderer.render(&board, Some(&overlay)));
            println!();
            for line in summary_lines(&summary, &palette) {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            let report = SolveReport {
                summary: &summary,
                size: global.size,
                maze: args.maze.strategy(),
                seed: args.seed,
                grid: renderer.rows(&board, Some(&overlay)),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

/// Board with the painted walls and both endpoints placed.
fn prepare_board(args: &SolveArgs, size: usize) -> Result<Board> {
    let mut board = Board::new(size).context("invalid grid size")?;
    for &wall in &args.walls {
        if wall == args.start || wall == args.end {
            bail!("wall {wall} overlaps the start or end cell");
        }
        board
            .place_wall(wall)
            .with_context(|| format!("cannot place wall at {wall}"))?;
    }
    place_endpoints(&mut board, args.start, args.end)?;
    Ok(board)
}
