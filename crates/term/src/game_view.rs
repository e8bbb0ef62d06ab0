//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameAction, Piece, PieceKind};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Rejected,
}

/// Message shown under the menu (last action result).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusLine {
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const TITLE: &str = "TETRIS RESERVE";
const EMPTY: &str = "[ empty ]";
// Rows from the title down to the status line.
const CONTENT_HEIGHT: u16 = 18;

/// Renders the queue, the reserve, the action menu and a status line.
pub struct GameView {
    margin_x: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            margin_x: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        status: Option<&StatusLine>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let label = CellStyle::fg(Rgb::new(230, 230, 230)).bold();
        let hint = CellStyle::fg(Rgb::new(140, 140, 150)).dim();
        let value = CellStyle::default();

        let x = self.margin_x;
        let mut y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(CONTENT_HEIGHT) / 2,
            AnchorY::Top => 0,
        };

        fb.put_str(x, y, TITLE, label);
        fb.hline(x, y + 1, TITLE.len() as u16, '─', hint);
        y += 2;

        let end = fb.put_str(x, y, "QUEUE", label);
        fb.put_str(end + 1, y, "(front -> back)", hint);
        self.draw_pieces(fb, x, y + 1, snap.queue.iter().copied());
        y += 3;

        let end = fb.put_str(x, y, "RESERVE", label);
        fb.put_str(end + 1, y, "(top -> bottom)", hint);
        self.draw_pieces(fb, x, y + 1, snap.stack.iter().copied());
        y += 3;

        let counters = format!("next id {}   actions {}", snap.next_id, snap.actions_taken);
        fb.put_str(x, y, &counters, hint);
        y += 2;

        for action in GameAction::ALL {
            self.draw_menu_line(fb, x, y, action.menu_key(), action.describe(), value);
            y += 1;
        }
        self.draw_menu_line(fb, x, y, '0', "Exit", value);
        y += 2;

        if let Some(status) = status {
            let style = match status.kind {
                StatusKind::Info => CellStyle::fg(Rgb::new(240, 220, 80)),
                StatusKind::Success => CellStyle::fg(Rgb::new(100, 220, 120)),
                StatusKind::Rejected => CellStyle::fg(Rgb::new(220, 80, 80)).bold(),
            };
            let end = fb.put_str(x, y, ">> ", style);
            fb.put_str(end, y, &status.text, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        status: Option<&StatusLine>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, status, viewport, &mut fb);
        fb
    }

    fn draw_pieces(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        pieces: impl Iterator<Item = Piece>,
    ) {
        let mut cx = x;
        let mut any = false;
        for piece in pieces {
            any = true;
            cx = fb.put_str(cx, y, &piece.to_string(), piece_style(piece.kind)) + 1;
        }
        if !any {
            fb.put_str(x, y, EMPTY, CellStyle::default().dim());
        }
    }

    fn draw_menu_line(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        key: char,
        text: &str,
        style: CellStyle,
    ) {
        fb.put_char(x + 1, y, key, style.bold());
        fb.put_str(x + 4, y, text, style);
    }
}

fn piece_style(kind: PieceKind) -> CellStyle {
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    };
    CellStyle::fg(fg).bold()
}
