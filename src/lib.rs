//! Tetris reserve (workspace facade crate).
//!
//! Re-exports the workspace crates as `tetris_reserve::{core,input,term,types}`
//! and holds the driver-side pieces: environment configuration and the
//! action journal.

pub mod config;
pub mod journal;

pub use tetris_reserve_core as core;
pub use tetris_reserve_input as input;
pub use tetris_reserve_term as term;
pub use tetris_reserve_types as types;

pub use config::Config;
pub use journal::{open_or_disable, record_or_disable, ActionJournal, JournalRecord};
