#![cfg(test)]

use std::iter;

use super::*;
use crate::util::alloc::CountedDrop;

fn list_of<const N: usize>(values: [i32; N]) -> DoublyLinkedList<i32> {
    values.into_iter().collect()
}

#[test]
fn test_push_and_pop() {
    let mut list = DoublyLinkedList::new();
    assert_eq!(list.pop_front(), None);
    assert_eq!(list.pop_back(), None);

    list.push_back(2);
    list.push_front(1);
    list.push_back(3);
    list.verify_double_links();
    assert_eq!((list.front(), list.back()), (Some(&1), Some(&3)));

    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_back(), Some(3));
    list.verify_double_links();
    assert_eq!(list.pop_back(), Some(2));
    assert!(list.is_empty());
    assert_eq!(list.to_string(), "{}");
}

#[test]
fn test_singleton() {
    let list = DoublyLinkedList::singleton('x');
    list.verify_double_links();
    assert_eq!(list.len(), 1);
    assert_eq!(list.front(), list.back());
    assert_eq!(list.middle(), Some(&'x'));
}

#[test]
fn test_indexing() {
    let mut list = list_of([10, 20, 30, 40, 50]);

    for (index, expected) in [10, 20, 30, 40, 50].iter().enumerate() {
        assert_eq!(list.get(index), Some(expected));
    }
    assert_eq!(list.get(5), None);
    assert!(list.exists_at(4));
    assert!(!list.exists_at(5));

    if let Some(value) = list.get_mut(3) {
        *value = 41;
    }
    assert_eq!(list.set(0, 11), Ok(10));
    assert_eq!(list.set(5, 0), Err(IndexOutOfBounds { index: 5, len: 5 }));
    assert_eq!(list, list_of([11, 20, 30, 41, 50]));
}

#[test]
fn test_insert() {
    let mut list = list_of([1, 3]);

    assert_eq!(list.insert(1, 2), Ok(()));
    assert_eq!(list.insert(0, 0), Ok(()));
    assert_eq!(list.insert(4, 4), Ok(()), "Inserting at the length should append.");
    assert_eq!(list.insert(3, 25), Ok(()));
    assert_eq!(list.insert(7, 9), Err(IndexOutOfBounds { index: 7, len: 6 }));

    list.verify_double_links();
    assert_eq!(list, list_of([0, 1, 2, 25, 3, 4]));

    let mut empty = DoublyLinkedList::new();
    assert_eq!(empty.insert(1, 'a'), Err(IndexOutOfBounds { index: 1, len: 0 }));
    assert_eq!(empty.insert(0, 'a'), Ok(()));
    assert_eq!(empty.to_string(), "{a}");
}

#[test]
fn test_remove() {
    let mut list = list_of([1, 2, 3, 4, 5]);

    assert_eq!(list.remove(2), Ok(3));
    list.verify_double_links();
    assert_eq!(list.remove(0), Ok(1));
    list.verify_double_links();
    assert_eq!(list.remove(2), Ok(5));
    list.verify_double_links();
    assert_eq!(list.remove(2), Err(IndexOutOfBounds { index: 2, len: 2 }));

    assert_eq!(list, list_of([2, 4]));
    assert_eq!((list.front(), list.back()), (Some(&2), Some(&4)));
}

#[test]
fn test_value_operations() {
    let mut list = list_of([7, 1, 7, 2, 7]);

    assert!(list.contains(&2));
    assert!(!list.contains(&3));
    assert_eq!(list.indices_of(&7), [0, 2, 4]);
    assert!(list.indices_of(&3).is_empty());

    assert_eq!(list.replace_all(&7, 8), 3);
    assert_eq!(list.replace_all(&7, 9), 0);
    assert_eq!(list, list_of([8, 1, 8, 2, 8]));

    assert_eq!(list.remove_all(&8), 3);
    list.verify_double_links();
    assert_eq!(list, list_of([1, 2]));

    assert_eq!(list.remove_all(&1), 1);
    assert_eq!(list.remove_all(&2), 1);
    assert!(list.is_empty());
    assert_eq!(list.remove_all(&2), 0);
}

#[test]
fn test_reversed() {
    let list: DoublyLinkedList<_> = ['a', 'b', 'c'].into_iter().collect();
    let reversed = list.reversed();
    reversed.verify_double_links();
    assert_eq!(reversed.to_string(), "{c,b,a}");
    assert_eq!(list.to_string(), "{a,b,c}", "Reversing shouldn't touch the original list.");

    assert!(DoublyLinkedList::<u8>::new().reversed().is_empty());
}

#[test]
fn test_reversed_in_groups() {
    let list = list_of([1, 2, 3, 4]);
    assert_eq!(list.reversed_in_groups(2), Some(list_of([2, 1, 4, 3])));
    assert_eq!(list.reversed_in_groups(4), Some(list_of([4, 3, 2, 1])));
    assert_eq!(list.reversed_in_groups(1), Some(list.clone()));
    assert_eq!(list.reversed_in_groups(3), None);
    assert_eq!(list.reversed_in_groups(0), None);

    let list = list_of([1, 2, 3, 4, 5, 6]);
    assert_eq!(list.reversed_in_groups(3), Some(list_of([3, 2, 1, 6, 5, 4])));
}

#[test]
fn test_middle() {
    assert_eq!(list_of([1, 2, 3]).middle(), Some(&2));
    assert_eq!(list_of([1, 2, 3, 4, 5, 6, 7]).middle(), Some(&4));
    assert_eq!(list_of([1, 2]).middle(), None);
    assert_eq!(DoublyLinkedList::<i32>::new().middle(), None);
}

#[test]
fn test_has_cycle() {
    let mut list = DoublyLinkedList::new();
    assert!(!list.has_cycle());

    for value in 0..6 {
        list.push_back(value);
        list.insert(0, -value).ok();
        assert!(!list.has_cycle(), "Lists built by their own methods never loop.");
    }

    list.link_tail_to(Some(3));
    assert!(list.has_cycle());
    list.link_tail_to(Some(list.len() - 1));
    assert!(list.has_cycle(), "A tail linked to itself is a cycle too.");
    list.link_tail_to(None);
    assert!(!list.has_cycle());
    list.verify_double_links();
}

#[test]
fn test_display_and_debug() {
    let list = list_of([1, 2, 3]);
    assert_eq!(list.to_string(), "{1,2,3}");
    assert_eq!(format!("{list:?}"), "DoublyLinkedList { contents: [1, 2, 3], len: 3 }");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut list: DoublyLinkedList<_> = iter::repeat_with(|| counter.clone()).take(8).collect();

    drop(list.remove(4));
    assert_eq!(counter.take(), 1);
    drop(list.pop_back());
    assert_eq!(counter.take(), 1);

    drop(list);
    assert_eq!(counter.take(), 6);
}
