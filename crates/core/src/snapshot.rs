use arrayvec::ArrayVec;

use crate::types::{Piece, QUEUE_CAPACITY, STACK_CAPACITY};

/// Read-only copy of everything the renderer needs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    /// Front to back.
    pub queue: ArrayVec<Piece, QUEUE_CAPACITY>,
    /// Top to bottom.
    pub stack: ArrayVec<Piece, STACK_CAPACITY>,
    pub next_id: u64,
    pub actions_taken: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.queue.clear();
        self.stack.clear();
        self.next_id = 0;
        self.actions_taken = 0;
    }

    pub fn queue_front(&self) -> Option<Piece> {
        self.queue.first().copied()
    }

    pub fn stack_top(&self) -> Option<Piece> {
        self.stack.first().copied()
    }
}
