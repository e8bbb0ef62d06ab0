//! Fixed-capacity reserve stack.

use arrayvec::ArrayVec;

use crate::types::{Piece, STACK_CAPACITY};

/// LIFO stack of at most [`STACK_CAPACITY`] pieces.
///
/// Slot 0 is the bottom; the top is slot `len - 1`. Like [`crate::PieceQueue`],
/// `push` on a full stack and `pop` on an empty one are silent no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReserveStack {
    items: ArrayVec<Piece, STACK_CAPACITY>,
}

impl ReserveStack {
    pub fn new() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    /// Reset to empty.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    /// Push onto the top. Does nothing when full.
    pub fn push(&mut self, piece: Piece) {
        let _ = self.items.try_push(piece);
    }

    /// Pop the top piece. `None` (and no change) when empty.
    pub fn pop(&mut self) -> Option<Piece> {
        self.items.pop()
    }

    pub fn top(&self) -> Option<Piece> {
        self.get(0)
    }

    /// Piece `depth` positions below the top.
    pub fn get(&self, depth: usize) -> Option<Piece> {
        let idx = self.slot_index(depth)?;
        self.items.get(idx).copied()
    }

    /// In-place access to the slot `depth` positions below the top.
    pub fn slot_mut(&mut self, depth: usize) -> Option<&mut Piece> {
        let idx = self.slot_index(depth)?;
        self.items.get_mut(idx)
    }

    /// Pieces from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        self.items.iter().rev().copied()
    }

    /// Index of the top slot, `None` when empty.
    pub fn top_index(&self) -> Option<usize> {
        self.items.len().checked_sub(1)
    }

    fn slot_index(&self, depth: usize) -> Option<usize> {
        self.top_index()?.checked_sub(depth)
    }
}
