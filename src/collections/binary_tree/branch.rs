use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, DerefMut};

use tracing::trace;

use super::{Position, Removal, RemovalCase};
use crate::collections::contiguous::DynamicArray;

pub(crate) struct Branch<T: Ord>(pub Option<Box<Node<T>>>);

pub(crate) struct Node<T: Ord> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub value: T,
}

impl<T: Ord> Node<T> {
    pub const fn leaf(value: T) -> Node<T> {
        Node {
            left: Branch(None),
            right: Branch(None),
            value,
        }
    }
}

impl<T: Ord> Branch<T> {
    /// Places `value` in the first empty branch found by descending from here. Returns false
    /// without changing anything if an equal value is already present.
    pub fn insert(&mut self, value: T) -> bool {
        match &mut self.0 {
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => node.left.insert(value),
                Ordering::Greater => node.right.insert(value),
                Ordering::Equal => false,
            },
            None => {
                self.0 = Some(Box::new(Node::leaf(value)));
                true
            },
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        match &self.0 {
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => node.left.contains(value),
                Ordering::Greater => node.right.contains(value),
                Ordering::Equal => true,
            },
            None => false,
        }
    }

    /// Removes the node holding `value` from the subtree rooted here, where `position` is where
    /// this branch hangs off its parent.
    pub fn remove(&mut self, value: &T, position: Position) -> Removal {
        let Some(node) = &mut self.0 else {
            return Removal::Absent;
        };

        let case = match value.cmp(&node.value) {
            Ordering::Less => return node.left.remove(value, Position::Left),
            Ordering::Greater => return node.right.remove(value, Position::Right),
            Ordering::Equal => match (node.left.is_some(), node.right.is_some()) {
                (false, false) => {
                    self.0 = None;
                    RemovalCase::Leaf
                },
                (true, true) => {
                    // The greatest value on the left still orders before everything on the right.
                    if let Some(max) = node.left.take_last() {
                        node.value = max;
                    }
                    RemovalCase::TwoChildren
                },
                (true, false) => {
                    self.0 = node.left.0.take();
                    RemovalCase::OneChild
                },
                (false, true) => {
                    self.0 = node.right.0.take();
                    RemovalCase::OneChild
                },
            },
        };

        trace!(?position, ?case, "removed node from SearchTree");
        Removal::Removed { position, case }
    }

    pub fn first(&self) -> Option<&T> {
        let node = self.0.as_ref()?;
        node.left.first().or(Some(&node.value))
    }

    pub fn last(&self) -> Option<&T> {
        let node = self.0.as_ref()?;
        node.right.last().or(Some(&node.value))
    }

    /// Takes the greatest value out of the subtree rooted here. Its node never has a right child,
    /// so its left child, if any, takes its place.
    pub fn take_last(&mut self) -> Option<T> {
        let node = self.0.as_mut()?;
        if node.right.is_some() {
            return node.right.take_last();
        }

        let Node { left, value, .. } = *self.0.take()?;
        *self = left;
        Some(value)
    }

    pub fn pre_order<'a>(&'a self, out: &mut DynamicArray<&'a T>) {
        if let Some(node) = &self.0 {
            out.push(&node.value);
            node.left.pre_order(out);
            node.right.pre_order(out);
        }
    }

    pub fn in_order<'a>(&'a self, out: &mut DynamicArray<&'a T>) {
        if let Some(node) = &self.0 {
            node.left.in_order(out);
            out.push(&node.value);
            node.right.in_order(out);
        }
    }

    pub fn post_order<'a>(&'a self, out: &mut DynamicArray<&'a T>) {
        if let Some(node) = &self.0 {
            node.left.post_order(out);
            node.right.post_order(out);
            out.push(&node.value);
        }
    }
}

impl<T: Ord> Deref for Branch<T> {
    type Target = Option<Box<Node<T>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Ord> DerefMut for Branch<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: Ord + Debug> Debug for Branch<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n({:?})\n{}",
                format!("{:?}", node.left)
                    .lines()
                    .map(|l| String::from("┌    ") + l)
                    .collect::<DynamicArray<_>>()
                    .join("\n"),
                node.value,
                format!("{:?}", node.right)
                    .lines()
                    .map(|l| String::from("└    ") + l)
                    .collect::<DynamicArray<_>>()
                    .join("\n")
            ),
            None => write!(f, "-"),
        }
    }
}
