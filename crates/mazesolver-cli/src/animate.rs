//! Live repainting of a running search.

use std::io::{self, Write};

use mazesolver_lib::{Board, Cell, SearchObserver, SearchProgress};

use crate::output::{GridRenderer, Overlay};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Observer that records search state and repaints a frame on every tick.
///
/// Frames go to `out` (stderr in the CLI) so stdout only carries the final
/// result. The first write error stops further frames and is returned by
/// [`Animator::finish`].
pub struct Animator<W: Write> {
    board: Board,
    renderer: GridRenderer,
    overlay: Overlay,
    out: W,
    frames: usize,
    error: Option<io::Error>,
}

impl<W: Write> Animator<W> {
    /// `board` is a snapshot of the layout being searched.
    pub fn new(board: Board, renderer: GridRenderer, out: W) -> Self {
        Self {
            board,
            renderer,
            overlay: Overlay::new(),
            out,
            frames: 0,
            error: None,
        }
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Paint the final frame and hand back the collected overlay.
    pub fn finish(mut self) -> io::Result<Overlay> {
        self.paint(None);
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.overlay),
        }
    }

    fn paint(&mut self, progress: Option<&SearchProgress>) {
        if self.error.is_some() {
            return;
        }
        let frame = self.renderer.render(&self.board, Some(&self.overlay));
        let result = self.write_frame(&frame, progress);
        match result {
            Ok(()) => self.frames += 1,
            Err(err) => self.error = Some(err),
        }
    }

    fn write_frame(&mut self, frame: &str, progress: Option<&SearchProgress>) -> io::Result<()> {
        let palette = self.renderer.palette;
        if palette.is_plain() {
            writeln!(self.out)?;
        } else {
            write!(self.out, "{CLEAR_SCREEN}")?;
        }
        writeln!(self.out, "{frame}")?;
        if let Some(progress) = progress {
            writeln!(
                self.out,
                "{}Searching... expanded {} | open {} | at {}{}",
                palette.gray, progress.expansions, progress.frontier, progress.current, palette.reset
            )?;
        }
        self.out.flush()
    }
}

impl<W: Write> SearchObserver for Animator<W> {
    fn on_frontier(&mut self, cell: Cell) {
        self.overlay.on_frontier(cell);
    }

    fn on_visit(&mut self, cell: Cell) {
        self.overlay.on_visit(cell);
    }

    fn on_path_step(&mut self, cell: Cell) {
        self.overlay.on_path_step(cell);
    }

    fn on_tick(&mut self, progress: &SearchProgress) {
        self.paint(Some(progress));
    }
}
