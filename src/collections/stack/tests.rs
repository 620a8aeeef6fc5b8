#![cfg(test)]

use super::brackets::{BracketError, check_brackets, check_brackets_with, is_balanced};
use super::navigation::navigate;
use super::*;
use crate::collections::traits::Stack;
use crate::util::alloc::CountedDrop;

fn round_trip<S: Stack<u32> + Default>() {
    let mut stack = S::default();
    for value in 0..25 {
        stack.push(value);
    }

    for value in [100, 7, 0] {
        let before = stack.len();
        let top = stack.peek().copied();
        stack.push(value);
        assert_eq!(stack.pop(), Ok(value));
        assert_eq!(stack.len(), before);
        assert_eq!(stack.peek().copied(), top);
    }

    while stack.pop().is_ok() {}
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), Err(EmptyContainer));
    assert_eq!(stack.peek(), None);
}

#[test]
fn test_round_trip() {
    round_trip::<ArrayStack<u32>>();
    round_trip::<LinkedStack<u32>>();
}

#[test]
fn test_lifo_order() {
    let mut array: ArrayStack<_> = (1..=3).collect();
    let mut linked: LinkedStack<_> = (1..=3).collect();

    for expected in (1..=3).rev() {
        assert_eq!(array.pop(), Ok(expected));
        assert_eq!(linked.pop(), Ok(expected));
    }
}

#[test]
fn test_modify_top() {
    let mut array = ArrayStack::new();
    let mut linked = LinkedStack::new();
    assert_eq!(array.modify_top('x'), Err(EmptyContainer));
    assert_eq!(linked.modify_top('x'), Err(EmptyContainer));

    array.push('a');
    array.push('b');
    linked.push('a');
    linked.push('b');
    assert_eq!(array.modify_top('c'), Ok('b'));
    assert_eq!(linked.modify_top('c'), Ok('b'));
    assert_eq!(array.peek(), Some(&'c'));
    assert_eq!(linked.peek(), Some(&'c'));
    assert_eq!(array.len(), 2);
    assert_eq!(linked.len(), 2);
}

#[test]
fn test_linked_bottom() {
    let mut stack = LinkedStack::new();
    assert_eq!(stack.bottom(), None);

    stack.push(1);
    assert_eq!(stack.bottom(), Some(&1));
    stack.push(2);
    stack.push(3);
    assert_eq!(stack.bottom(), Some(&1));

    while stack.len() > 1 {
        stack.pop().ok();
    }
    assert_eq!(stack.bottom(), Some(&1));
    assert_eq!(stack.pop(), Ok(1));
    assert_eq!(stack.bottom(), None);

    stack.push(4);
    assert_eq!(stack.bottom(), Some(&4), "An emptied stack should track its new bottom.");
}

#[test]
fn test_linked_bottom_survives_pushes_and_edits() {
    let mut stack = LinkedStack::new();
    stack.push(String::from("first"));
    assert_eq!(stack.modify_top(String::from("bottom")), Ok(String::from("first")));

    for i in 0..100 {
        stack.push(i.to_string());
        assert_eq!(stack.bottom().map(String::as_str), Some("bottom"));
    }
    assert_eq!(stack.modify_top(String::from("top")), Ok(String::from("99")));
    assert_eq!(stack.peek().map(String::as_str), Some("top"));
    assert_eq!(stack.bottom().map(String::as_str), Some("bottom"));
    assert_eq!(stack.walk().count(), 101);
}

#[test]
fn test_array_stack_get_and_cap() {
    let mut stack = ArrayStack::with_cap(2);
    stack.push("a");
    stack.push("b");
    assert_eq!(stack.cap(), 2);
    stack.push("c");
    assert_eq!(stack.cap(), 10);
    assert_eq!(stack.get(0), Some(&"a"));
    assert_eq!(stack.get(2), Some(&"c"));
    assert_eq!(stack.get(3), None);
}

#[test]
fn test_display() {
    let mut array = ArrayStack::with_cap(4);
    let mut linked = LinkedStack::new();
    assert_eq!(linked.to_string(), "{}");

    for value in 1..=3 {
        array.push(value);
        linked.push(value);
    }
    assert_eq!(array.to_string(), "[1, 2, 3, -]");
    assert_eq!(linked.to_string(), "{3,2,1}");
}

#[test]
fn test_linked_drop() {
    let counter = CountedDrop::new(0);
    let mut stack: LinkedStack<_> = std::iter::repeat_with(|| counter.clone()).take(6).collect();

    drop(stack.pop());
    assert_eq!(counter.take(), 1);

    drop(stack);
    assert_eq!(counter.take(), 5);
}

#[test]
fn test_long_linked_drop() {
    let stack: LinkedStack<_> = (0..200_000).collect();
    drop(stack);
}

#[test]
fn test_brackets() {
    assert_eq!(check_brackets("{[()]}"), Ok(()));
    assert_eq!(check_brackets(""), Ok(()));
    assert_eq!(check_brackets("()[]{}"), Ok(()));

    assert_eq!(
        check_brackets("{[(])}"),
        Err(BracketError::Mismatch {
            index: 3,
            expected: ')',
            found: ']'
        })
    );
    assert_eq!(check_brackets("("), Err(BracketError::OddLength { len: 1 }));
    assert_eq!(
        check_brackets(")("),
        Err(BracketError::Unmatched {
            index: 0,
            found: ')'
        })
    );
    assert_eq!(check_brackets("(("), Err(BracketError::Unclosed { count: 2 }));
    assert_eq!(
        check_brackets("(a"),
        Err(BracketError::Unsupported {
            index: 1,
            found: 'a'
        })
    );

    assert!(is_balanced("{()}[]"));
    assert!(!is_balanced("{(})"));
}

#[test]
fn test_brackets_linked_backing() {
    assert_eq!(check_brackets_with::<LinkedStack<char>>("{[()]}"), Ok(()));
    assert!(check_brackets_with::<LinkedStack<char>>("{[(])}").is_err_and(|e| e.is_mismatch()));
}

#[test]
fn test_navigate_back_and_forward() {
    let mut back: ArrayStack<_> = ["a", "b", "c", "d"].into_iter().collect();
    let mut forward = ArrayStack::new();

    assert_eq!(navigate(&mut back, Some(&mut forward), -2), 2);
    assert_eq!(back.peek(), Some(&"b"));
    assert_eq!(forward.peek(), Some(&"c"));

    assert_eq!(navigate(&mut back, Some(&mut forward), 1), 1);
    assert_eq!(back.peek(), Some(&"c"));
    assert_eq!(forward.peek(), Some(&"d"));

    assert_eq!(
        navigate(&mut back, Some(&mut forward), 5),
        1,
        "Moving forward should stop once forward is exhausted."
    );
    assert_eq!(back.peek(), Some(&"d"));
    assert!(forward.is_empty());
}

#[test]
fn test_navigate_keeps_current_page() {
    let mut back: LinkedStack<_> = (1..=3).collect();
    let mut forward = LinkedStack::new();

    assert_eq!(navigate(&mut back, Some(&mut forward), -10), 2);
    assert_eq!(back.len(), 1);
    assert_eq!(back.peek(), Some(&1));
    assert_eq!(forward.peek(), Some(&2));
}

#[test]
fn test_navigate_preconditions() {
    let mut back: ArrayStack<_> = (1..=3).collect();
    let mut forward = ArrayStack::new();

    assert_eq!(navigate(&mut back, Some(&mut forward), 0), 0);
    assert_eq!(navigate(&mut back, None, -1), 0);
    assert_eq!(back.len(), 3);

    let mut single: ArrayStack<_> = [1].into_iter().collect();
    let mut forward: ArrayStack<_> = [2].into_iter().collect();
    assert_eq!(navigate(&mut single, Some(&mut forward), 1), 0);
    assert_eq!(single.len(), 1);
}
