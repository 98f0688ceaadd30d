//! Grid rendering and result formatting.
//!
//! The board is drawn one character per cell. Search state (open, closed,
//! route) is layered on top from an [`Overlay`] that records observer events.

use std::collections::HashSet;

use clap::ValueEnum;
use serde::Serialize;

use mazesolver_lib::{
    Board, Cell, CellRole, MazeStrategy, SearchObserver, SolveStatus, SolveSummary,
};

use crate::terminal::{supports_unicode, ColorPalette};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Rendered grid followed by a caption.
    #[default]
    Text,
    /// Machine-readable report.
    Json,
}

/// Characters used for each cell state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub free: char,
    pub wall: char,
    pub start: char,
    pub end: char,
    pub open: char,
    pub closed: char,
    pub path: char,
}

impl Glyphs {
    pub const fn ascii() -> Self {
        Self {
            free: '.',
            wall: '#',
            start: 'S',
            end: 'E',
            open: 'o',
            closed: 'x',
            path: '*',
        }
    }

    pub const fn unicode() -> Self {
        Self {
            free: '·',
            wall: '█',
            start: 'S',
            end: 'E',
            open: '○',
            closed: '•',
            path: '◆',
        }
    }

    pub fn detect() -> Self {
        if supports_unicode() {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Search state recorded from observer events.
#[derive(Debug, Default, Clone)]
pub struct Overlay {
    pub open: HashSet<Cell>,
    pub closed: HashSet<Cell>,
    pub path: HashSet<Cell>,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchObserver for Overlay {
    fn on_frontier(&mut self, cell: Cell) {
        self.open.insert(cell);
    }

    fn on_visit(&mut self, cell: Cell) {
        self.open.remove(&cell);
        self.closed.insert(cell);
    }

    fn on_path_step(&mut self, cell: Cell) {
        self.path.insert(cell);
    }
}

/// Renders a board, optionally with search state, row by row.
#[derive(Debug, Clone, Copy)]
pub struct GridRenderer {
    pub glyphs: Glyphs,
    pub palette: ColorPalette,
}

impl GridRenderer {
    pub fn new(glyphs: Glyphs, palette: ColorPalette) -> Self {
        Self { glyphs, palette }
    }

    /// Plain ASCII renderer, used for JSON reports.
    pub fn plain() -> Self {
        Self::new(Glyphs::ascii(), ColorPalette::plain())
    }

    pub fn rows(&self, board: &Board, overlay: Option<&Overlay>) -> Vec<String> {
        let size = board.grid().size();
        (0..size)
            .map(|row| {
                (0..size)
                    .map(|col| self.cell(board, overlay, Cell::new(row, col)))
                    .collect()
            })
            .collect()
    }

    pub fn render(&self, board: &Board, overlay: Option<&Overlay>) -> String {
        self.rows(board, overlay).join("\n")
    }

    fn cell(&self, board: &Board, overlay: Option<&Overlay>, cell: Cell) -> String {
        let (glyph, color) = match board.role(cell) {
            Ok(CellRole::Start) => (self.glyphs.start, self.palette.start),
            Ok(CellRole::End) => (self.glyphs.end, self.palette.end),
            Ok(CellRole::Wall) => (self.glyphs.wall, self.palette.wall),
            _ => match overlay {
                Some(o) if o.path.contains(&cell) => (self.glyphs.path, self.palette.path),
                Some(o) if o.closed.contains(&cell) => (self.glyphs.closed, self.palette.closed),
                Some(o) if o.open.contains(&cell) => (self.glyphs.open, self.palette.open),
                _ => (self.glyphs.free, ""),
            },
        };
        if color.is_empty() {
            glyph.to_string()
        } else {
            format!("{color}{glyph}{}", self.palette.reset)
        }
    }
}

/// Text lines printed under the grid after a solve.
pub fn summary_lines(summary: &SolveSummary, palette: &ColorPalette) -> Vec<String> {
    let heading = match summary.status {
        SolveStatus::Found => format!(
            "{}Route from {} to {}{}",
            palette.white_bold, summary.start, summary.end, palette.reset
        ),
        SolveStatus::NotFound => format!(
            "{}No route from {} to {}{}",
            palette.white_bold, summary.start, summary.end, palette.reset
        ),
        SolveStatus::Cancelled => format!(
            "{}Search stopped after {} expansions{}",
            palette.white_bold, summary.expansions, palette.reset
        ),
    };
    vec![
        heading,
        format!("{}{}{}", palette.gray, summary.caption(), palette.reset),
    ]
}

/// JSON body for `solve`.
#[derive(Debug, Serialize)]
pub struct SolveReport<'a> {
    #[serde(flatten)]
    pub summary: &'a SolveSummary,
    pub size: usize,
    pub maze: Option<MazeStrategy>,
    pub seed: Option<u64>,
    pub grid: Vec<String>,
}

/// JSON body for `maze`.
#[derive(Debug, Serialize)]
pub struct MazeReport {
    pub size: usize,
    pub strategy: MazeStrategy,
    pub seed: Option<u64>,
    pub start: Cell,
    pub end: Cell,
    pub walls: usize,
    pub grid: Vec<String>,
}
