//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Each frame is written as runs of cells. A run covers a stretch of one row
//! that differs from what is already on screen; with nothing on screen every
//! row is a single run. The bytes are queued into a buffer first, so encoding
//! can be tested without a terminal.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Owns stdout and a copy of what the terminal currently shows.
pub struct TerminalRenderer {
    stdout: io::Stdout,
    on_screen: FrameBuffer,
    stale: bool,
    bytes: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            on_screen: FrameBuffer::new(0, 0),
            stale: true,
            bytes: Vec::with_capacity(64 * 1024),
        }
    }

    /// Switch to raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        self.bytes.clear();
        self.bytes.queue(terminal::EnterAlternateScreen)?;
        self.bytes.queue(cursor::Hide)?;
        self.bytes.queue(terminal::DisableLineWrap)?;
        self.stale = true;
        self.flush()
    }

    /// Restore the terminal. Safe to call after a failed `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.bytes.clear();
        self.bytes.queue(ResetColor)?;
        self.bytes.queue(SetAttribute(Attribute::Reset))?;
        self.bytes.queue(terminal::EnableLineWrap)?;
        self.bytes.queue(cursor::Show)?;
        self.bytes.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode().context("failed to disable raw mode")?;
        Ok(())
    }

    /// Repaint everything on the next draw, e.g. after a resize.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Write `fb` to the terminal and keep it as the on-screen copy.
    ///
    /// `fb` comes back holding the previous frame, ready to be drawn over.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let repaint = self.stale
            || self.on_screen.width() != fb.width()
            || self.on_screen.height() != fb.height();
        let shown = if repaint { None } else { Some(&self.on_screen) };

        self.bytes.clear();
        let runs = encode_frame_into(shown, fb, &mut self.bytes)?;
        if runs > 0 {
            self.flush()?;
        }

        std::mem::swap(&mut self.on_screen, fb);
        self.stale = false;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout
            .write_all(&self.bytes)
            .and_then(|()| self.stdout.flush())
            .context("failed to write frame")
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Queue the commands that turn `shown` into `next` and return the number of
/// runs written.
///
/// `None` means the screen content is unknown: it is cleared and every row of
/// `next` is written. `shown` must have the same size as `next`.
pub fn encode_frame_into(
    shown: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<usize> {
    if shown.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut pen = Pen::default();
    let mut runs = 0;
    for y in 0..next.height() {
        let mut from = 0;
        while let Some((start, end)) = next_run(shown, next, y, from) {
            out.queue(cursor::MoveTo(start, y))?;
            for x in start..end {
                pen.print(out, next.get(x, y).unwrap_or_default())?;
            }
            runs += 1;
            from = end;
        }
    }

    if pen.used() {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(runs)
}

/// The next stretch `[start, end)` of row `y` at or after `from` that differs
/// from the screen.
fn next_run(
    shown: Option<&FrameBuffer>,
    next: &FrameBuffer,
    y: u16,
    from: u16,
) -> Option<(u16, u16)> {
    let differs = |x: u16| shown.map_or(true, |s| s.get(x, y) != next.get(x, y));
    let width = next.width();
    let start = (from..width).find(|&x| differs(x))?;
    let end = (start..width).find(|&x| !differs(x)).unwrap_or(width);
    Some((start, end))
}

/// Tracks the style last sent so unchanged styles are not repeated.
#[derive(Default)]
struct Pen {
    style: Option<CellStyle>,
}

impl Pen {
    fn used(&self) -> bool {
        self.style.is_some()
    }

    fn print(&mut self, out: &mut Vec<u8>, cell: Cell) -> Result<()> {
        if self.style != Some(cell.style) {
            let style = cell.style;
            out.queue(SetAttribute(Attribute::Reset))?;
            out.queue(SetForegroundColor(style.fg.into()))?;
            out.queue(SetBackgroundColor(style.bg.into()))?;
            if style.bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                out.queue(SetAttribute(Attribute::Dim))?;
            }
            self.style = Some(style);
        }
        out.queue(Print(cell.ch))?;
        Ok(())
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}
