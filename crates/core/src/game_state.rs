//! Game state management
//!
//! [`GameState`] owns the piece queue, the reserve stack and the piece
//! generator for the whole run and routes [`GameAction`]s to the action
//! functions in [`crate::actions`].

use crate::actions;
use crate::queue::PieceQueue;
use crate::rng::PieceGenerator;
use crate::snapshot::GameSnapshot;
use crate::stack::ReserveStack;
use crate::types::{ActionError, ActionOutcome, GameAction};

#[derive(Debug, Clone)]
pub struct GameState {
    queue: PieceQueue,
    stack: ReserveStack,
    generator: PieceGenerator,
    /// Successful actions so far.
    actions_taken: u32,
}

impl GameState {
    /// Create a game with a full queue and an empty reserve.
    pub fn new(seed: u32) -> Self {
        let mut state = Self {
            queue: PieceQueue::new(),
            stack: ReserveStack::new(),
            generator: PieceGenerator::new(seed),
            actions_taken: 0,
        };
        state.fill_queue();
        state
    }

    fn fill_queue(&mut self) {
        while !self.queue.is_full() {
            self.queue.enqueue(self.generator.generate());
        }
    }

    /// Apply an action. Rejected actions leave the state unchanged.
    pub fn apply_action(&mut self, action: GameAction) -> Result<ActionOutcome, ActionError> {
        let result = match action {
            GameAction::Play => actions::play(&mut self.queue, &mut self.generator),
            GameAction::Reserve => {
                actions::reserve(&mut self.queue, &mut self.stack, &mut self.generator)
            }
            GameAction::UseReserved => actions::use_reserved(&mut self.stack),
            GameAction::SwapFront => actions::swap_front(&mut self.queue, &mut self.stack),
            GameAction::BulkSwap => actions::bulk_swap(&mut self.queue, &mut self.stack),
        };
        if result.is_ok() {
            self.actions_taken = self.actions_taken.wrapping_add(1);
        }
        result
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn stack(&self) -> &ReserveStack {
        &self.stack
    }

    /// Id the next generated piece will get.
    pub fn next_id(&self) -> u64 {
        self.generator.next_id()
    }

    pub fn actions_taken(&self) -> u32 {
        self.actions_taken
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();
        out.queue.extend(self.queue.iter());
        out.stack.extend(self.stack.iter());
        out.next_id = self.generator.next_id();
        out.actions_taken = self.actions_taken;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{QUEUE_CAPACITY, STACK_CAPACITY};

    #[test]
    fn new_game_has_full_queue_and_empty_reserve() {
        let state = GameState::new(12345);
        assert!(state.queue().is_full());
        assert!(state.stack().is_empty());
        assert_eq!(state.next_id(), QUEUE_CAPACITY as u64);
        assert_eq!(
            state.queue().iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![0, 1, 2, 3, 4]
        );
    }

    #[test]
    fn apply_action_dispatches() {
        let mut state = GameState::new(1);
        let front = state.queue().front().unwrap();

        let outcome = state.apply_action(GameAction::Reserve).unwrap();
        assert!(matches!(
            outcome,
            ActionOutcome::Reserved { reserved, .. } if reserved == front
        ));
        assert_eq!(state.stack().top(), Some(front));
        assert_eq!(state.actions_taken(), 1);

        state.apply_action(GameAction::UseReserved).unwrap();
        assert!(state.stack().is_empty());
        assert_eq!(state.actions_taken(), 2);
    }

    #[test]
    fn rejected_action_is_not_counted() {
        let mut state = GameState::new(1);
        assert_eq!(
            state.apply_action(GameAction::UseReserved),
            Err(ActionError::StackEmpty)
        );
        assert_eq!(state.actions_taken(), 0);
        assert_eq!(state.next_id(), 5);
    }

    #[test]
    fn snapshot_orders_queue_front_first_and_stack_top_first() {
        let mut state = GameState::new(9);
        for _ in 0..STACK_CAPACITY {
            state.apply_action(GameAction::Reserve).unwrap();
        }

        let snap = state.snapshot();
        assert_eq!(
            snap.queue.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![3, 4, 5, 6, 7]
        );
        assert_eq!(
            snap.stack.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![2, 1, 0]
        );
        assert_eq!(snap.next_id, 8);
        assert_eq!(snap.actions_taken, 3);
        assert_eq!(snap.queue_front().map(|p| p.id), Some(3));
        assert_eq!(snap.stack_top().map(|p| p.id), Some(2));
    }
}
