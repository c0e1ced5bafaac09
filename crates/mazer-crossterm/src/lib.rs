//! Crossterm terminal renderer for mazer.
//!
//! Provides a [`TerminalRenderer`] that implements [`mazer_core::Observer`],
//! drawing each opened cell and every solver move as it happens, and the
//! plain-text [`text`] rendering shared with file dumps.

pub mod text;

pub use text::{Glyphs, maze_lines, solution_lines, write_maze};

use std::io::{self, Stdout, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor, execute,
    style::Print,
    terminal::{self, ClearType},
};
use log::warn;

use mazer_core::{Grid, Observer, Point};

/// Pauses inserted after each drawn step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Delays {
    pub generate: Duration,
    pub solve: Duration,
}

impl Delays {
    pub fn from_millis(generate: u64, solve: u64) -> Self {
        Self {
            generate: Duration::from_millis(generate),
            solve: Duration::from_millis(solve),
        }
    }
}

/// Animates generation and solving on a terminal.
///
/// Drawing failures never reach the algorithms: the first I/O error is
/// logged and kept (see [`take_error`](Self::take_error)), and cell drawing
/// stops. A cell whose screen position does not fit terminal coordinates is
/// reported the same way.
pub struct TerminalRenderer<W: Write> {
    out: W,
    glyphs: Glyphs,
    delays: Delays,
    current: Option<Point>,
    // lines printed below the maze since the last full draw
    status_lines: u16,
    error: Option<io::Error>,
}

impl TerminalRenderer<Stdout> {
    /// A renderer writing to standard output.
    pub fn stdout(glyphs: Glyphs, delays: Delays) -> Self {
        Self::new(io::stdout(), glyphs, delays)
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Create a renderer over any writer.
    pub fn new(out: W, glyphs: Glyphs, delays: Delays) -> Self {
        Self {
            out,
            glyphs,
            delays,
            current: None,
            status_lines: 0,
            error: None,
        }
    }

    pub fn glyphs(&self) -> &Glyphs {
        &self.glyphs
    }

    /// The underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Clear the screen and draw the whole grid from the top-left corner.
    pub fn draw_maze(&mut self, grid: &Grid) -> io::Result<()> {
        execute!(
            self.out,
            cursor::Hide,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        for line in maze_lines(grid, &self.glyphs) {
            execute!(self.out, Print(line), Print("\r\n"))?;
        }
        self.status_lines = 0;
        self.out.flush()
    }

    /// Print `msg` on the next free line below the maze.
    pub fn status(&mut self, grid: &Grid, msg: &str) {
        let res = self.try_status(grid, msg);
        self.record(res);
    }

    /// Place the player glyph on the solve start.
    pub fn begin_solve(&mut self, start: Point) {
        let glyph = self.glyphs.player.clone();
        self.paint(start, &glyph);
        self.current = Some(start);
    }

    /// Move the cursor below the maze and any status lines, and show it
    /// again.
    pub fn park_cursor(&mut self, grid: &Grid) {
        let res = self.try_park(grid);
        self.record(res);
    }

    /// The first drawing error seen, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Keep the first error; later ones are only logged.
    fn record(&mut self, res: io::Result<()>) {
        if let Err(e) = res {
            warn!("terminal drawing failed: {e}");
            if self.error.is_none() {
                self.error = Some(e);
            }
        }
    }

    /// Draw `glyph` over cell `p`, unless drawing already failed.
    fn paint(&mut self, p: Point, glyph: &str) {
        if self.error.is_some() {
            return;
        }
        let res = self.try_paint(p, glyph);
        self.record(res);
    }

    /// Top-left screen cell of maze cell `p`.
    fn screen_pos(&self, p: Point) -> io::Result<(u16, u16)> {
        let scale = |v: i32, size: usize| -> Option<u16> {
            u16::try_from(v).ok()?.checked_mul(u16::try_from(size).ok()?)
        };
        let col = scale(p.x, self.glyphs.cell_width());
        let row = scale(p.y, usize::from(self.glyphs.cell_height));
        col.zip(row).ok_or_else(|| off_screen(p))
    }

    /// First screen row below the maze and its status lines.
    fn free_row(&self, grid: &Grid) -> io::Result<u16> {
        let below = Point::new(0, grid.height());
        let (_, row) = self.screen_pos(below)?;
        row.checked_add(self.status_lines)
            .ok_or_else(|| off_screen(below))
    }

    fn try_paint(&mut self, p: Point, glyph: &str) -> io::Result<()> {
        let (col, row) = self.screen_pos(p)?;
        for dy in 0..self.glyphs.cell_height {
            let row = row.checked_add(dy).ok_or_else(|| off_screen(p))?;
            execute!(self.out, cursor::MoveTo(col, row), Print(glyph))?;
        }
        self.out.flush()
    }

    fn try_status(&mut self, grid: &Grid, msg: &str) -> io::Result<()> {
        let row = self.free_row(grid)?;
        execute!(self.out, cursor::MoveTo(0, row), Print(msg))?;
        self.status_lines += 1;
        self.out.flush()
    }

    fn try_park(&mut self, grid: &Grid) -> io::Result<()> {
        let row = self.free_row(grid)?;
        execute!(self.out, cursor::MoveTo(0, row), cursor::Show)?;
        self.out.flush()
    }

    /// Repaint the previous position with `left_behind`, then the player at `p`.
    fn step(&mut self, p: Point, left_behind: &str) {
        if let Some(prev) = self.current {
            self.paint(prev, left_behind);
        }
        let player = self.glyphs.player.clone();
        self.paint(p, &player);
        self.current = Some(p);
        pause(self.delays.solve);
    }
}

fn off_screen(p: Point) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("cell {p} lies beyond the addressable terminal area"),
    )
}

fn pause(d: Duration) {
    if !d.is_zero() {
        thread::sleep(d);
    }
}

impl<W: Write> Observer for TerminalRenderer<W> {
    fn on_cell_opened(&mut self, p: Point) {
        let floor = self.glyphs.floor.clone();
        self.paint(p, &floor);
        pause(self.delays.generate);
    }

    fn on_advance(&mut self, p: Point) {
        let trail = self.glyphs.trail.clone();
        self.step(p, &trail);
    }

    fn on_backtrack(&mut self, p: Point) {
        let floor = self.glyphs.floor.clone();
        self.step(p, &floor);
    }
}
