//! Container tests: bounds, FIFO/LIFO order and wraparound.

use tetris_reserve::core::{PieceQueue, ReserveStack};
use tetris_reserve::types::{Piece, PieceKind, QUEUE_CAPACITY, STACK_CAPACITY};

fn piece(id: u64) -> Piece {
    Piece::new(PieceKind::ALL[(id % 4) as usize], id)
}

// ============== Queue ==============

#[test]
fn test_queue_count_stays_in_bounds() {
    let mut q = PieceQueue::new();
    let mut id = 0;
    // Mixed sequence: bursts of enqueues longer than capacity, then dequeues.
    for round in 0..20 {
        for _ in 0..(round % 7) {
            q.enqueue(piece(id));
            id += 1;
            assert!(q.len() <= QUEUE_CAPACITY);
        }
        for _ in 0..(round % 4) {
            let _ = q.dequeue();
        }
        assert!(q.len() <= QUEUE_CAPACITY);
        assert_eq!(q.is_empty(), q.len() == 0);
        assert_eq!(q.is_full(), q.len() == QUEUE_CAPACITY);
        assert!(q.front_index() < QUEUE_CAPACITY);
        assert!(q.back_index() < QUEUE_CAPACITY);
        assert_eq!(q.iter().count(), q.len());
    }
}

#[test]
fn test_queue_fifo() {
    let mut q = PieceQueue::new();
    let (p1, p2, p3) = (piece(1), piece(2), piece(3));
    q.enqueue(p1);
    q.enqueue(p2);
    q.enqueue(p3);

    assert_eq!(q.dequeue(), Some(p1));
    assert_eq!(q.dequeue(), Some(p2));
    assert_eq!(q.dequeue(), Some(p3));
    assert_eq!(q.dequeue(), None);
}

#[test]
fn test_queue_fifo_survives_wraparound() {
    let mut q = PieceQueue::new();
    let mut expected = std::collections::VecDeque::new();
    for id in 0..37 {
        if q.is_full() {
            assert_eq!(q.dequeue(), expected.pop_front());
        }
        q.enqueue(piece(id));
        expected.push_back(piece(id));
    }
    assert_eq!(q.iter().collect::<Vec<_>>(), Vec::from(expected));
}

// ============== Stack ==============

#[test]
fn test_stack_lifo() {
    let mut s = ReserveStack::new();
    let (p1, p2, p3) = (piece(1), piece(2), piece(3));
    s.push(p1);
    s.push(p2);
    s.push(p3);

    assert_eq!(s.pop(), Some(p3));
    assert_eq!(s.pop(), Some(p2));
    assert_eq!(s.pop(), Some(p1));
    assert_eq!(s.pop(), None);
}

#[test]
fn test_stack_bounds() {
    let mut s = ReserveStack::new();
    assert!(s.is_empty());
    for id in 0..10 {
        s.push(piece(id));
        assert!(s.len() <= STACK_CAPACITY);
    }
    assert!(s.is_full());
    assert_eq!(s.top_index(), Some(STACK_CAPACITY - 1));
    assert_eq!(s.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 1, 0]);

    s.clear();
    assert!(s.is_empty());
    assert_eq!(s.top_index(), None);
}
