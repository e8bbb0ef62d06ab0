//! Fixed-capacity circular queue of upcoming pieces.
//!
//! The queue never grows. `enqueue` on a full queue and `dequeue` on an empty
//! one are silent no-ops; callers that need a reason check the predicates
//! first (see [`crate::actions`]).

use crate::types::{Piece, QUEUE_CAPACITY};

/// FIFO ring buffer of [`QUEUE_CAPACITY`] pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceQueue {
    slots: [Option<Piece>; QUEUE_CAPACITY],
    front: usize,
    back: usize,
    len: usize,
}

impl PieceQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            slots: [None; QUEUE_CAPACITY],
            front: 0,
            back: 0,
            len: 0,
        }
    }

    /// Reset to empty.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == QUEUE_CAPACITY
    }

    /// Append at the back. Does nothing when full.
    pub fn enqueue(&mut self, piece: Piece) {
        if self.is_full() {
            return;
        }
        self.slots[self.back] = Some(piece);
        self.back = (self.back + 1) % QUEUE_CAPACITY;
        self.len += 1;
    }

    /// Remove from the front. `None` (and no change) when empty.
    pub fn dequeue(&mut self) -> Option<Piece> {
        if self.is_empty() {
            return None;
        }
        let piece = self.slots[self.front].take();
        self.front = (self.front + 1) % QUEUE_CAPACITY;
        self.len -= 1;
        piece
    }

    pub fn front(&self) -> Option<Piece> {
        self.get(0)
    }

    /// Piece at `offset` positions behind the front.
    pub fn get(&self, offset: usize) -> Option<Piece> {
        if offset >= self.len {
            return None;
        }
        self.slots[self.slot_index(offset)]
    }

    /// In-place access to the occupied slot `offset` positions behind the front.
    ///
    /// Front, back and length are unaffected by writes through the returned
    /// reference.
    pub fn slot_mut(&mut self, offset: usize) -> Option<&mut Piece> {
        if offset >= self.len {
            return None;
        }
        let idx = self.slot_index(offset);
        self.slots[idx].as_mut()
    }

    /// Pieces from front to back.
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        (0..self.len).filter_map(move |offset| self.slots[self.slot_index(offset)])
    }

    /// Raw front index, in `[0, QUEUE_CAPACITY)`.
    pub fn front_index(&self) -> usize {
        self.front
    }

    /// Raw back index, in `[0, QUEUE_CAPACITY)`.
    pub fn back_index(&self) -> usize {
        self.back
    }

    #[inline(always)]
    fn slot_index(&self, offset: usize) -> usize {
        (self.front + offset) % QUEUE_CAPACITY
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new()
    }
}
