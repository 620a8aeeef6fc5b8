#![cfg(test)]

use std::iter;

use super::*;
use crate::collections::contiguous::DynamicArray;
use crate::util::alloc::CountedDrop;

#[test]
fn test_fifo_order() {
    let mut queue = CircularQueue::new();
    assert_eq!(queue.dequeue(), None);
    assert_eq!(queue.peek(), None);

    let mut next_out = 0;
    for value in 0..40 {
        queue.enqueue(value);
        if value % 3 == 0 {
            assert_eq!(queue.dequeue(), Some(next_out));
            next_out += 1;
        }
    }

    while let Some(value) = queue.dequeue() {
        assert_eq!(value, next_out, "The nth dequeue should return the nth value enqueued.");
        next_out += 1;
    }
    assert_eq!(next_out, 40);
    assert_eq!(queue.dequeue(), None);
    assert!(queue.is_empty());
}

#[test]
fn test_wrap_around_without_growing() {
    let mut queue = CircularQueue::with_cap(3);
    for round in 0..10 {
        queue.enqueue(round);
        queue.enqueue(round + 100);
        assert_eq!(queue.peek(), Some(&round));
        assert_eq!(queue.dequeue(), Some(round));
        assert_eq!(queue.dequeue(), Some(round + 100));
    }
    assert_eq!(queue.cap(), 3, "A queue that never fills up shouldn't grow.");
}

#[test]
fn test_full_queue_uses_every_slot() {
    let mut queue = CircularQueue::with_cap(4);
    queue.extend(1..=4);
    assert_eq!(queue.cap(), 4);
    assert_eq!(queue.len(), 4);
    assert_eq!(queue.to_string(), "[4, 1, 2, 3]");
}

#[test]
fn test_growth_preserves_order() {
    let mut queue = CircularQueue::with_cap(4);
    queue.extend(0..4);
    assert_eq!(queue.dequeue(), Some(0));
    assert_eq!(queue.dequeue(), Some(1));
    queue.extend(4..6);

    queue.enqueue(6);
    assert_eq!(queue.cap(), 10);
    assert_eq!((queue.head, queue.tail), (0, 5));
    assert_eq!(queue.to_string(), "[-, 2, 3, 4, 5, 6, -, -, -, -]");

    queue.extend(7..12);
    assert_eq!(queue.cap(), 10);
    queue.enqueue(12);
    assert_eq!(queue.cap(), 15);

    for expected in 2..13 {
        assert_eq!(queue.dequeue(), Some(expected));
    }
    assert_eq!(queue.dequeue(), None);
}

#[test]
fn test_zero_cap() {
    let mut queue = CircularQueue::with_cap(0);
    assert_eq!(queue.to_string(), "[]");
    queue.enqueue('a');
    assert_eq!(queue.cap(), 10);
    assert_eq!(queue.peek(), Some(&'a'));
}

#[test]
fn test_capacity_overflow() {
    assert!(CircularQueue::<u64>::try_with_cap(usize::MAX).is_err());
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut queue: CircularQueue<_> = iter::repeat_with(|| counter.clone()).take(12).collect();

    drop(queue.dequeue());
    assert_eq!(counter.take(), 1);

    drop(queue);
    assert_eq!(counter.take(), 11);
}

#[test]
fn test_josephus() {
    assert_eq!(josephus(5, 1, 2), Ok(DynamicArray::from(&[2, 4, 1, 5, 3][..])));
    assert_eq!(josephus(5, 0, 2), josephus(5, 1, 2), "Counting should start from 1 by default.");
    assert_eq!(josephus(5, 6, 2), josephus(5, 1, 2), "The start should wrap around the circle.");

    assert!(josephus(7, 1, 3).is_ok_and(|order| order == [3, 6, 2, 7, 5, 1, 4]));
    assert!(
        josephus(4, 3, 1).is_ok_and(|order| order == [3, 4, 1, 2]),
        "A step of 1 should eliminate everyone in seating order."
    );

    assert_eq!(josephus(1, 1, 5).map(|order| order.len()), Ok(1));
    assert_eq!(josephus(0, 1, 2), Err(JosephusError::NoParticipants));
    assert_eq!(josephus(3, 1, 0), Err(JosephusError::ZeroStep));
}
