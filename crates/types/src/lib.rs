//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! They are plain data with no I/O, usable from the core containers, the
//! terminal renderer and the driver alike.
//!
//! # Capacities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Slots in the circular queue of upcoming pieces |
//! | `STACK_CAPACITY` | 3 | Slots in the reserve stack |
//! | `BULK_SWAP_COUNT` | 3 | Pieces exchanged by a bulk swap |
//!
//! # Examples
//!
//! ```
//! use tetris_reserve_types::{GameAction, Piece, PieceKind, QUEUE_CAPACITY};
//!
//! let piece = Piece::new(PieceKind::T, 7);
//! assert_eq!(piece.to_string(), "[T 7]");
//!
//! assert_eq!(GameAction::BulkSwap.menu_key(), '5');
//! assert_eq!(QUEUE_CAPACITY, 5);
//! ```

use std::fmt;

/// Slots in the circular queue of upcoming pieces.
pub const QUEUE_CAPACITY: usize = 5;

/// Slots in the reserve stack.
pub const STACK_CAPACITY: usize = 3;

/// Pieces exchanged between queue and stack by a bulk swap.
pub const BULK_SWAP_COUNT: usize = 3;

/// The four piece labels produced by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// All kinds, in generator index order.
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Single-letter label as shown to the player.
    pub fn letter(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }
}

/// A labelled, uniquely identified piece.
///
/// Pieces are only created by the core piece generator; ids are never reused
/// within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u64,
}

impl Piece {
    pub const fn new(kind: PieceKind, id: u64) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind.letter(), self.id)
    }
}

/// Game actions selectable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Play the piece at the front of the queue
    Play,
    /// Move the front piece onto the reserve stack
    Reserve,
    /// Consume the piece on top of the reserve stack
    UseReserved,
    /// Exchange the queue front with the stack top
    SwapFront,
    /// Exchange the first three queued pieces with the three reserved ones
    BulkSwap,
}

impl GameAction {
    /// All actions, in menu order.
    pub const ALL: [GameAction; 5] = [
        GameAction::Play,
        GameAction::Reserve,
        GameAction::UseReserved,
        GameAction::SwapFront,
        GameAction::BulkSwap,
    ];

    /// Convert to camelCase string (journal records)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Play => "play",
            GameAction::Reserve => "reserve",
            GameAction::UseReserved => "useReserved",
            GameAction::SwapFront => "swapFront",
            GameAction::BulkSwap => "bulkSwap",
        }
    }

    /// Menu key (`'1'..='5'`).
    pub fn menu_key(&self) -> char {
        match self {
            GameAction::Play => '1',
            GameAction::Reserve => '2',
            GameAction::UseReserved => '3',
            GameAction::SwapFront => '4',
            GameAction::BulkSwap => '5',
        }
    }

    /// Menu line description.
    pub fn describe(&self) -> &'static str {
        match self {
            GameAction::Play => "Play the front piece",
            GameAction::Reserve => "Move the front piece to the reserve",
            GameAction::UseReserved => "Use the reserved piece",
            GameAction::SwapFront => "Swap queue front with reserve top",
            GameAction::BulkSwap => "Swap 3 queued <-> 3 reserved",
        }
    }
}

/// Why an action was rejected.
///
/// A rejected action leaves the queue, the stack and the id counter untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ActionError {
    #[error("the piece queue is empty")]
    QueueEmpty,

    #[error("the reserve is full, use a reserved piece first")]
    StackFull,

    #[error("there are no reserved pieces")]
    StackEmpty,

    #[error("the reserve needs {} pieces for a bulk swap", STACK_CAPACITY)]
    StackNotFull,

    #[error("the queue needs at least {} pieces for a bulk swap", BULK_SWAP_COUNT)]
    QueueTooShort,
}

impl ActionError {
    /// Stable identifier (journal records).
    pub fn code(&self) -> &'static str {
        match self {
            ActionError::QueueEmpty => "queue_empty",
            ActionError::StackFull => "stack_full",
            ActionError::StackEmpty => "stack_empty",
            ActionError::StackNotFull => "stack_not_full",
            ActionError::QueueTooShort => "queue_too_short",
        }
    }
}

/// What a successful action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionOutcome {
    Played { played: Piece, replacement: Piece },
    Reserved { reserved: Piece, replacement: Piece },
    Used { used: Piece },
    /// Pieces as they were before the exchange.
    Swapped { from_queue: Piece, from_stack: Piece },
    BulkSwapped { count: usize },
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionOutcome::Played {
                played,
                replacement,
            } => write!(f, "played {played}, {replacement} joined the queue"),
            ActionOutcome::Reserved {
                reserved,
                replacement,
            } => write!(f, "reserved {reserved}, {replacement} joined the queue"),
            ActionOutcome::Used { used } => write!(f, "used reserved piece {used}"),
            ActionOutcome::Swapped {
                from_queue,
                from_stack,
            } => write!(f, "swapped {from_queue} with {from_stack}"),
            ActionOutcome::BulkSwapped { count } => write!(f, "swapped {count} pieces in bulk"),
        }
    }
}
