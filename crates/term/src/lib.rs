//! Terminal rendering module.
//!
//! Renders into a simple framebuffer that is flushed to the terminal by
//! [`TerminalRenderer`]. The view code is pure and unit-testable; only the
//! renderer touches the terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetris_reserve_core as core;
pub use tetris_reserve_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, StatusKind, StatusLine, Viewport};
pub use renderer::{encode_changed_rows_into, encode_full_into, TerminalRenderer};
