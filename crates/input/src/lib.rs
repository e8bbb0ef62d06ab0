//! Terminal input module.
//!
//! Maps `crossterm` key events into menu commands: the five
//! [`crate::types::GameAction`]s plus quit.

pub mod map;

pub use tetris_reserve_types as types;

pub use map::{map_key, MenuCommand};
