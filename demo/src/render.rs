//! Crossterm rendering of a maze grid, two terminal columns per cell.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use mazeviz_core::{CellKind, Coord, Grid};
use mazeviz_paths::{Observer, StepEvent};

/// Background colour for a cell kind.
pub fn cell_color(kind: CellKind) -> Color {
    let (r, g, b) = match kind {
        CellKind::Empty => (0xff, 0xff, 0xff),
        CellKind::Wall => (0x1a, 0x1a, 0x1a),
        CellKind::Start => (0x4c, 0xaf, 0x50),
        CellKind::End => (0xf4, 0x43, 0x36),
        CellKind::Path => (0x21, 0x96, 0xf3),
        CellKind::Explored => (0xff, 0xe0, 0x82),
        CellKind::Current => (0xff, 0x98, 0x00),
    };
    Color::Rgb { r, g, b }
}

/// Terminal column of the left half of a cell.
fn column(p: Coord) -> io::Result<u16> {
    u16::try_from(p.col * 2).map_err(|_| io::Error::other("grid wider than the terminal"))
}

fn row(p: Coord) -> io::Result<u16> {
    u16::try_from(p.row).map_err(|_| io::Error::other("grid taller than the terminal"))
}

fn queue_cell<W: Write>(out: &mut W, p: Coord, kind: CellKind) -> io::Result<()> {
    queue!(
        out,
        cursor::MoveTo(column(p)?, row(p)?),
        SetBackgroundColor(cell_color(kind)),
        Print("  "),
        ResetColor
    )
}

/// Clear the screen and draw the whole grid followed by a legend.
pub fn draw_grid<W: Write>(out: &mut W, grid: &Grid) -> io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All))?;
    for (p, kind) in grid.iter() {
        queue_cell(out, p, kind)?;
    }
    let legend_row = u16::try_from(grid.rows() + 1).unwrap_or(u16::MAX);
    queue!(out, cursor::MoveTo(0, legend_row))?;
    for kind in [
        CellKind::Start,
        CellKind::End,
        CellKind::Wall,
        CellKind::Explored,
        CellKind::Path,
    ] {
        queue!(
            out,
            SetBackgroundColor(cell_color(kind)),
            Print("  "),
            ResetColor,
            Print(format!(" {kind}  "))
        )?;
    }
    out.flush()
}

/// Move the cursor below the grid and legend.
pub fn park_cursor<W: Write>(out: &mut W, grid: &Grid) -> io::Result<()> {
    let below = u16::try_from(grid.rows() + 3).unwrap_or(u16::MAX);
    queue!(out, cursor::MoveTo(0, below), SetForegroundColor(Color::Reset))?;
    out.flush()
}

/// Observer that paints every event onto its own copy of the grid, redraws
/// the touched cell and then waits for `delay`.
///
/// The observer callback cannot fail, so the first I/O error is kept and
/// later events are ignored; see [`Animator::finish`].
pub struct Animator<W: Write> {
    out: W,
    grid: Grid,
    delay: Duration,
    error: Option<io::Error>,
}

impl<W: Write> Animator<W> {
    pub fn new(out: W, grid: Grid, delay: Duration) -> Self {
        Self {
            out,
            grid,
            delay,
            error: None,
        }
    }

    fn step(&mut self, event: StepEvent) -> io::Result<()> {
        event.paint(&mut self.grid).map_err(io::Error::other)?;
        let kind = self.grid.at(event.coord).unwrap_or(CellKind::Empty);
        queue_cell(&mut self.out, event.coord, kind)?;
        self.out.flush()?;
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(())
    }

    /// Return the painted grid, or the first error hit while drawing.
    pub fn finish(self) -> io::Result<Grid> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.grid),
        }
    }
}

impl<W: Write> Observer for Animator<W> {
    fn observe(&mut self, event: StepEvent) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.step(event) {
            log::warn!("render: {e}");
            self.error = Some(e);
        }
    }
}
