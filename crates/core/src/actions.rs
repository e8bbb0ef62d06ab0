//! The five game actions.
//!
//! Each action checks its preconditions before touching anything, so a
//! rejected action leaves queue, stack and generator exactly as they were.
//! Replenishment (generate + enqueue after a removal) keeps a full queue full.

use crate::queue::PieceQueue;
use crate::rng::PieceGenerator;
use crate::stack::ReserveStack;
use crate::types::{ActionError, ActionOutcome, Piece, BULK_SWAP_COUNT};

/// Play the front piece and refill the queue.
pub fn play(
    queue: &mut PieceQueue,
    generator: &mut PieceGenerator,
) -> Result<ActionOutcome, ActionError> {
    let played = queue.dequeue().ok_or(ActionError::QueueEmpty)?;
    let replacement = replenish(queue, generator);
    Ok(ActionOutcome::Played {
        played,
        replacement,
    })
}

/// Move the front piece onto the reserve stack and refill the queue.
pub fn reserve(
    queue: &mut PieceQueue,
    stack: &mut ReserveStack,
    generator: &mut PieceGenerator,
) -> Result<ActionOutcome, ActionError> {
    if stack.is_full() {
        return Err(ActionError::StackFull);
    }
    let reserved = queue.dequeue().ok_or(ActionError::QueueEmpty)?;
    stack.push(reserved);
    let replacement = replenish(queue, generator);
    Ok(ActionOutcome::Reserved {
        reserved,
        replacement,
    })
}

/// Consume the top reserved piece.
pub fn use_reserved(stack: &mut ReserveStack) -> Result<ActionOutcome, ActionError> {
    let used = stack.pop().ok_or(ActionError::StackEmpty)?;
    Ok(ActionOutcome::Used { used })
}

/// Exchange the queue front with the stack top in place.
pub fn swap_front(
    queue: &mut PieceQueue,
    stack: &mut ReserveStack,
) -> Result<ActionOutcome, ActionError> {
    let top = stack.slot_mut(0).ok_or(ActionError::StackEmpty)?;
    let front = queue.slot_mut(0).ok_or(ActionError::QueueEmpty)?;

    let outcome = ActionOutcome::Swapped {
        from_queue: *front,
        from_stack: *top,
    };
    std::mem::swap(front, top);
    Ok(outcome)
}

/// Exchange the first [`BULK_SWAP_COUNT`] queued pieces with the reserve.
///
/// The i-th piece from the queue front pairs with the i-th piece from the
/// stack top.
pub fn bulk_swap(
    queue: &mut PieceQueue,
    stack: &mut ReserveStack,
) -> Result<ActionOutcome, ActionError> {
    if !stack.is_full() {
        return Err(ActionError::StackNotFull);
    }
    if queue.len() < BULK_SWAP_COUNT {
        return Err(ActionError::QueueTooShort);
    }

    for i in 0..BULK_SWAP_COUNT {
        if let (Some(q), Some(s)) = (queue.slot_mut(i), stack.slot_mut(i)) {
            std::mem::swap(q, s);
        }
    }

    Ok(ActionOutcome::BulkSwapped {
        count: BULK_SWAP_COUNT,
    })
}

fn replenish(queue: &mut PieceQueue, generator: &mut PieceGenerator) -> Piece {
    let piece = generator.generate();
    queue.enqueue(piece);
    piece
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, QUEUE_CAPACITY, STACK_CAPACITY};

    fn full_queue(generator: &mut PieceGenerator) -> PieceQueue {
        let mut q = PieceQueue::new();
        while !q.is_full() {
            q.enqueue(generator.generate());
        }
        q
    }

    fn ids_q(q: &PieceQueue) -> Vec<u64> {
        q.iter().map(|p| p.id).collect()
    }

    fn ids_s(s: &ReserveStack) -> Vec<u64> {
        s.iter().map(|p| p.id).collect()
    }

    #[test]
    fn play_keeps_queue_full() {
        let mut gen = PieceGenerator::new(3);
        let mut q = full_queue(&mut gen);
        let front = q.front().unwrap();

        let outcome = play(&mut q, &mut gen).unwrap();
        match outcome {
            ActionOutcome::Played {
                played,
                replacement,
            } => {
                assert_eq!(played, front);
                assert_eq!(replacement.id, 5);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(q.len(), QUEUE_CAPACITY);
        assert_eq!(ids_q(&q), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn play_on_empty_queue_is_rejected() {
        let mut gen = PieceGenerator::new(3);
        let mut q = PieceQueue::new();
        assert_eq!(play(&mut q, &mut gen), Err(ActionError::QueueEmpty));
        assert_eq!(gen.next_id(), 0);
        assert!(q.is_empty());
    }

    #[test]
    fn reserve_moves_front_to_stack() {
        let mut gen = PieceGenerator::new(3);
        let mut q = full_queue(&mut gen);
        let mut s = ReserveStack::new();

        let outcome = reserve(&mut q, &mut s, &mut gen).unwrap();
        assert!(matches!(
            outcome,
            ActionOutcome::Reserved { reserved, replacement }
                if reserved.id == 0 && replacement.id == 5
        ));
        assert_eq!(ids_s(&s), vec![0]);
        assert_eq!(ids_q(&q), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn reserve_on_full_stack_changes_nothing() {
        let mut gen = PieceGenerator::new(3);
        let mut q = full_queue(&mut gen);
        let mut s = ReserveStack::new();
        for _ in 0..STACK_CAPACITY {
            reserve(&mut q, &mut s, &mut gen).unwrap();
        }
        let (q_before, s_before, next_before) = (q.clone(), s.clone(), gen.next_id());

        assert_eq!(
            reserve(&mut q, &mut s, &mut gen),
            Err(ActionError::StackFull)
        );
        assert_eq!(q, q_before);
        assert_eq!(s, s_before);
        assert_eq!(gen.next_id(), next_before);
    }

    #[test]
    fn reserve_on_empty_queue_is_rejected() {
        let mut gen = PieceGenerator::new(3);
        let mut q = PieceQueue::new();
        let mut s = ReserveStack::new();
        assert_eq!(
            reserve(&mut q, &mut s, &mut gen),
            Err(ActionError::QueueEmpty)
        );
        assert!(s.is_empty());
        assert_eq!(gen.next_id(), 0);
    }

    #[test]
    fn use_reserved_pops_top() {
        let mut s = ReserveStack::new();
        s.push(Piece::new(PieceKind::I, 1));
        s.push(Piece::new(PieceKind::L, 2));

        assert_eq!(
            use_reserved(&mut s),
            Ok(ActionOutcome::Used {
                used: Piece::new(PieceKind::L, 2),
            })
        );
        assert_eq!(ids_s(&s), vec![1]);
    }

    #[test]
    fn use_reserved_on_empty_stack_is_rejected() {
        let mut s = ReserveStack::new();
        assert_eq!(use_reserved(&mut s), Err(ActionError::StackEmpty));
    }

    #[test]
    fn swap_front_exchanges_values_only() {
        let mut gen = PieceGenerator::new(3);
        let mut q = full_queue(&mut gen);
        let mut s = ReserveStack::new();
        s.push(Piece::new(PieceKind::O, 100));
        s.push(Piece::new(PieceKind::T, 101));
        let q_front = q.front().unwrap();
        let s_top = s.top().unwrap();

        let outcome = swap_front(&mut q, &mut s).unwrap();
        assert_eq!(
            outcome,
            ActionOutcome::Swapped {
                from_queue: q_front,
                from_stack: s_top,
            }
        );
        assert_eq!(q.front(), Some(s_top));
        assert_eq!(s.top(), Some(q_front));
        assert_eq!(q.len(), QUEUE_CAPACITY);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn swap_front_checks_stack_before_queue() {
        let mut q = PieceQueue::new();
        let mut s = ReserveStack::new();
        assert_eq!(swap_front(&mut q, &mut s), Err(ActionError::StackEmpty));

        s.push(Piece::new(PieceKind::I, 0));
        assert_eq!(swap_front(&mut q, &mut s), Err(ActionError::QueueEmpty));
        assert_eq!(ids_s(&s), vec![0]);
    }

    #[test]
    fn bulk_swap_pairs_front_with_top() {
        let mut gen = PieceGenerator::new(3);
        let mut q = full_queue(&mut gen); // 0..=4
        let mut s = ReserveStack::new();
        s.push(Piece::new(PieceKind::I, 22)); // bottom
        s.push(Piece::new(PieceKind::O, 21));
        s.push(Piece::new(PieceKind::T, 20)); // top

        let (front_before, back_before) = (q.front_index(), q.back_index());
        assert_eq!(
            bulk_swap(&mut q, &mut s),
            Ok(ActionOutcome::BulkSwapped { count: 3 })
        );

        assert_eq!(ids_q(&q), vec![20, 21, 22, 3, 4]);
        assert_eq!(ids_s(&s), vec![0, 1, 2]);
        assert_eq!(
            (q.front_index(), q.back_index()),
            (front_before, back_before)
        );
        assert_eq!(s.top_index(), Some(2));
    }

    #[test]
    fn bulk_swap_requires_full_stack() {
        let mut gen = PieceGenerator::new(3);
        let mut q = full_queue(&mut gen);
        let mut s = ReserveStack::new();
        s.push(Piece::new(PieceKind::I, 50));
        s.push(Piece::new(PieceKind::I, 51));
        let (q_before, s_before) = (q.clone(), s.clone());

        assert_eq!(bulk_swap(&mut q, &mut s), Err(ActionError::StackNotFull));
        assert_eq!(q, q_before);
        assert_eq!(s, s_before);
    }

    #[test]
    fn bulk_swap_requires_three_queued() {
        let mut q = PieceQueue::new();
        q.enqueue(Piece::new(PieceKind::L, 0));
        q.enqueue(Piece::new(PieceKind::L, 1));
        let mut s = ReserveStack::new();
        for id in 10..13 {
            s.push(Piece::new(PieceKind::T, id));
        }

        assert_eq!(bulk_swap(&mut q, &mut s), Err(ActionError::QueueTooShort));
        assert_eq!(ids_q(&q), vec![0, 1]);
        assert_eq!(ids_s(&s), vec![12, 11, 10]);
    }
}
