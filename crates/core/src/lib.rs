//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the bounded containers and the game rules that move
//! pieces between them. It has **zero dependencies** on UI or I/O:
//!
//! - **Deterministic**: Same seed produces the same piece sequence
//! - **Bounded**: Containers are fixed-size buffers and never allocate
//! - **Atomic**: Every action either fully applies or is rejected untouched
//!
//! # Module Structure
//!
//! - [`queue`]: 5-slot circular queue of upcoming pieces
//! - [`stack`]: 3-slot reserve stack
//! - [`rng`]: LCG and the piece generator (owns the id counter)
//! - [`actions`]: play, reserve, use-reserved, swap-front, bulk-swap
//! - [`game_state`]: owner of queue, stack and generator for one run
//! - [`snapshot`]: read-only copy for rendering
//!
//! # Example
//!
//! ```
//! use tetris_reserve_core::GameState;
//! use tetris_reserve_types::{ActionError, GameAction};
//!
//! let mut game = GameState::new(12345);
//! assert!(game.queue().is_full());
//!
//! game.apply_action(GameAction::Reserve).unwrap();
//! assert_eq!(game.stack().len(), 1);
//! assert!(game.queue().is_full());
//!
//! // Bulk swap needs a full reserve.
//! assert_eq!(
//!     game.apply_action(GameAction::BulkSwap),
//!     Err(ActionError::StackNotFull)
//! );
//! ```

pub mod actions;
pub mod game_state;
pub mod queue;
pub mod rng;
pub mod snapshot;
pub mod stack;

pub use tetris_reserve_types as types;

// Re-export commonly used types for convenience
pub use actions::{bulk_swap, play, reserve, swap_front, use_reserved};
pub use game_state::GameState;
pub use queue::PieceQueue;
pub use rng::{PieceGenerator, SimpleRng};
pub use snapshot::GameSnapshot;
pub use stack::ReserveStack;
