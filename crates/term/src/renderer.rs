//! TerminalRenderer: flushes a framebuffer to a real terminal.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Switch to raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        encode_enter_into(&mut self.buf)?;
        self.flush_buf()
    }

    /// Restore the terminal. Safe to call after a failed `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        encode_exit_into(&mut self.buf)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a frame, redrawing only rows that changed since the last one.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        match &self.last {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_changed_rows_into(prev, fb, &mut self.buf)?;
            }
            _ => encode_full_into(fb, &mut self.buf)?,
        }
        self.flush_buf()?;
        self.last = Some(fb.clone());
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Line wrap stays off while the game owns the screen, so writing the
/// bottom-right cell never scrolls.
pub fn encode_enter_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::EnterAlternateScreen)?;
    out.queue(cursor::Hide)?;
    out.queue(terminal::DisableLineWrap)?;
    Ok(())
}

pub fn encode_exit_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(terminal::EnableLineWrap)?;
    out.queue(cursor::Show)?;
    out.queue(terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    for y in 0..fb.height() {
        encode_row_into(fb, y, out)?;
    }
    finish_into(out)
}

/// Encode only the rows of `next` that differ from `prev`.
pub fn encode_changed_rows_into(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<()> {
    for y in changed_rows(prev, next) {
        encode_row_into(next, y, out)?;
    }
    finish_into(out)
}

fn encode_row_into(fb: &FrameBuffer, y: u16, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, y))?;
    let mut current: Option<CellStyle> = None;
    for x in 0..fb.width() {
        let cell = fb.get(x, y).unwrap_or_default();
        if current != Some(cell.style) {
            apply_style_into(out, cell.style)?;
            current = Some(cell.style);
        }
        out.queue(Print(cell.ch))?;
    }
    Ok(())
}

fn finish_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn changed_rows<'a>(
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
) -> impl Iterator<Item = u16> + 'a {
    (0..next.height()).filter(move |&y| row_differs(prev, next, y))
}

fn row_differs(prev: &FrameBuffer, next: &FrameBuffer, y: u16) -> bool {
    (0..next.width()).any(|x| prev.get(x, y) != next.get(x, y))
}
