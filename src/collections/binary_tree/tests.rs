#![cfg(test)]

use super::*;
use crate::util::alloc::CountedDrop;

fn assert_ordered<T: Ord + std::fmt::Debug>(tree: &SearchTree<T>) {
    let values = tree.in_order();
    assert!(
        values.windows(2).all(|pair| pair[0] < pair[1]),
        "In order traversal should be strictly ascending: {values:?}"
    );
    assert_eq!(values.len(), tree.len());
}

fn sample() -> SearchTree<i32> {
    //         50
    //      /      \
    //    30        70
    //   /  \      /  \
    //  20  40    60  80
    //     /
    //    35
    [50, 30, 70, 20, 40, 60, 80, 35].into_iter().collect()
}

#[test]
fn test_insert_rejects_duplicates() {
    let mut tree = SearchTree::new();
    assert!(tree.insert(5));
    assert!(tree.insert(3));
    assert!(tree.insert(8));
    assert!(!tree.insert(3), "A duplicate value should be rejected.");

    assert_eq!(tree.len(), 3);
    assert_eq!(tree.in_order(), [&3, &5, &8]);
    assert_ordered(&tree);
}

#[test]
fn test_contains() {
    let tree = sample();
    for value in [50, 30, 70, 20, 40, 60, 80, 35] {
        assert!(tree.contains(&value));
    }
    for value in [0, 25, 36, 55, 100] {
        assert!(!tree.contains(&value));
    }
    assert!(!SearchTree::<i32>::new().contains(&0));
}

#[test]
fn test_first_and_last() {
    let tree = sample();
    assert_eq!(tree.first(), Some(&20));
    assert_eq!(tree.last(), Some(&80));

    let single = SearchTree::singleton('m');
    assert_eq!((single.first(), single.last()), (Some(&'m'), Some(&'m')));
    assert_eq!(SearchTree::<u8>::new().first(), None);
}

#[test]
fn test_traversals() {
    let tree = sample();
    assert_eq!(tree.pre_order(), [&50, &30, &20, &40, &35, &70, &60, &80]);
    assert_eq!(tree.in_order(), [&20, &30, &35, &40, &50, &60, &70, &80]);
    assert_eq!(tree.post_order(), [&20, &35, &40, &30, &60, &80, &70, &50]);
    assert_eq!(tree.level_order(), [&50, &30, &70, &20, &40, &60, &80, &35]);

    let empty = SearchTree::<i32>::new();
    assert!(empty.level_order().is_empty());
    assert!(empty.pre_order().is_empty());
}

#[test]
fn test_remove_leaf_and_one_child() {
    let mut tree = sample();

    assert_eq!(
        tree.remove_detailed(&35),
        Removal::Removed {
            position: Position::Left,
            case: RemovalCase::Leaf
        }
    );
    assert_ordered(&tree);

    tree.insert(45);
    assert_eq!(
        tree.remove_detailed(&40),
        Removal::Removed {
            position: Position::Right,
            case: RemovalCase::OneChild
        }
    );
    assert_eq!(tree.pre_order(), [&50, &30, &20, &45, &70, &60, &80]);
    assert_ordered(&tree);
}

#[test]
fn test_remove_two_children_promotes_left_max() {
    let mut tree = sample();

    assert_eq!(
        tree.remove_detailed(&30),
        Removal::Removed {
            position: Position::Left,
            case: RemovalCase::TwoChildren
        }
    );
    // 20 is the greatest value on the left of 30, so it takes 30's place.
    assert_eq!(tree.pre_order(), [&50, &20, &40, &35, &70, &60, &80]);
    assert_eq!(tree.len(), 7);
    assert_ordered(&tree);
}

#[test]
fn test_remove_root() {
    let mut tree = sample();

    assert!(tree.remove(&50));
    assert_eq!(tree.len(), 7, "Removing should decrement the length exactly once.");
    assert_eq!(tree.level_order()[0], &40);
    assert_eq!(tree.in_order(), [&20, &30, &35, &40, &60, &70, &80]);
    assert_ordered(&tree);

    loop {
        let Some(root) = tree.level_order().first().map(|value| **value) else {
            break;
        };
        assert!(tree.remove(&root));
        assert_ordered(&tree);
        assert!(!tree.contains(&root));
    }
    assert!(tree.is_empty());
    assert_eq!(tree.to_string(), "[]");
}

#[test]
fn test_remove_absent() {
    let mut tree = sample();
    assert_eq!(tree.remove_detailed(&99), Removal::Absent);
    assert!(!tree.remove(&36));
    assert_eq!(tree.len(), 8);

    let mut empty = SearchTree::new();
    assert!(!empty.remove(&1));
    assert_eq!(empty.len(), 0);
}

#[test]
fn test_remove_keeps_left_max_subtree() {
    // 10's left subtree has 7 as its greatest value, and 7 has a left child of its own.
    let mut tree: SearchTree<_> = [10, 5, 15, 3, 7, 6].into_iter().collect();

    assert!(tree.remove(&10));
    assert_eq!(tree.pre_order(), [&7, &5, &3, &6, &15]);
    assert_eq!(tree.len(), 5);
    assert!(tree.contains(&6), "The promoted node's child shouldn't be lost.");
}

#[test]
fn test_display_and_debug() {
    let tree: SearchTree<_> = [2, 1, 3].into_iter().collect();
    assert_eq!(tree.to_string(), "[2, 1, 3]");
    assert_eq!(
        format!("{tree:?}"),
        "SearchTree (len: 3)\n┌    ┌    -\n┌    (1)\n┌    └    -\n(2)\n└    ┌    -\n└    (3)\n└    └    -"
    );
}

#[test]
fn test_drop() {
    #[derive(Debug)]
    struct Keyed(u8, CountedDrop);

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }
    impl Eq for Keyed {}
    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    let counter = CountedDrop::new(0);
    let mut tree = SearchTree::new();
    for key in [4, 2, 6, 1, 3] {
        tree.insert(Keyed(key, counter.clone()));
    }

    assert!(!tree.insert(Keyed(4, counter.clone())));
    assert_eq!(counter.take(), 1, "A rejected duplicate should be dropped.");

    assert!(tree.remove(&Keyed(2, counter.clone())));
    assert_eq!(counter.take(), 2, "The removed value and the search key should be dropped.");

    drop(tree);
    assert_eq!(counter.take(), 4);
}
