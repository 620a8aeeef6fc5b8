use std::fmt::{self, Debug, Display, Formatter};
use std::{iter, mem};
use std::ptr::NonNull;

use crate::collections::traits::Stack;
use crate::util::error::EmptyContainer;
use crate::util::fmt::DebugIter;

type StackLink<T> = Option<NonNull<StackNode<T>>>;

pub(crate) struct StackNode<T> {
    pub value: T,
    pub next: StackLink<T>,
}

/// A [`Stack`] made of singly linked nodes. The stack owns every node through the chain that starts
/// at its top. The bottom node is also reachable through a second pointer, so that it can be
/// inspected without walking the chain.
///
/// Unlike [`ArrayStack`](super::ArrayStack), pushing never reallocates: every push allocates
/// exactly one node and every pop frees one.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `bottom` | `O(1)` |
/// | `modify_top` | `O(1)` |
pub struct LinkedStack<T> {
    pub(crate) top: StackLink<T>,
    pub(crate) bottom: StackLink<T>,
    pub(crate) len: usize,
}

impl<T> LinkedStack<T> {
    /// Creates a new, empty LinkedStack.
    pub const fn new() -> LinkedStack<T> {
        LinkedStack {
            top: None,
            bottom: None,
            len: 0,
        }
    }

    /// Returns a reference to the bottom element of the stack, which was pushed first.
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::stack::LinkedStack;
    /// # use primitive_collections::collections::traits::Stack;
    /// let mut stack = LinkedStack::new();
    /// stack.push(1);
    /// stack.push(2);
    /// assert_eq!(stack.bottom(), Some(&1));
    /// assert_eq!(stack.peek(), Some(&2));
    /// ```
    pub fn bottom(&self) -> Option<&T> {
        Self::node(self.bottom).map(|node| &node.value)
    }

    /// Walks the stack from top to bottom.
    pub(crate) fn walk(&self) -> impl Iterator<Item = &T> + Clone {
        iter::successors(self.top_node(), |node| Self::node(node.next)).map(|node| &node.value)
    }

    fn top_node(&self) -> Option<&StackNode<T>> {
        Self::node(self.top)
    }

    fn node<'a>(link: StackLink<T>) -> Option<&'a StackNode<T>> {
        // SAFETY: Every link was leaked from a Box in push and stays live until pop frees it. Callers
        // bound the returned lifetime by a borrow of the stack.
        link.map(|ptr| unsafe { &*ptr.as_ptr() })
    }
}

impl<T> Stack<T> for LinkedStack<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn push(&mut self, value: T) {
        let node = NonNull::from(Box::leak(Box::new(StackNode {
            value,
            next: self.top,
        })));

        if self.bottom.is_none() {
            self.bottom = Some(node);
        }

        self.top = Some(node);
        self.len += 1;
    }

    fn pop(&mut self) -> Result<T, EmptyContainer> {
        let ptr = self.top.ok_or(EmptyContainer)?;
        // SAFETY: The top node was leaked in push and is unlinked here, so it is freed exactly once.
        let StackNode { value, next } = unsafe { *Box::from_raw(ptr.as_ptr()) };

        self.top = next;
        self.len -= 1;
        if self.top.is_none() {
            self.bottom = None;
        }

        Ok(value)
    }

    fn peek(&self) -> Option<&T> {
        self.top_node().map(|node| &node.value)
    }

    fn modify_top(&mut self, value: T) -> Result<T, EmptyContainer> {
        let ptr = self.top.ok_or(EmptyContainer)?;
        // SAFETY: The top node is live and only reachable through self, which is borrowed mutably.
        let node = unsafe { &mut *ptr.as_ptr() };
        Ok(mem::replace(&mut node.value, value))
    }
}

impl<T> FromIterator<T> for LinkedStack<T> {
    /// Pushes every item in order, leaving the last one on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = LinkedStack::new();
        for item in iter {
            stack.push(item);
        }
        stack
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        while self.pop().is_ok() {}
    }
}

// SAFETY: Every node is owned by exactly one stack and only reached through it, so LinkedStack is
// as thread safe as a Box<T>.
unsafe impl<T: Send> Send for LinkedStack<T> {}
// SAFETY: No interior mutability is reachable through &LinkedStack<T>.
unsafe impl<T: Sync> Sync for LinkedStack<T> {}

impl<T: Debug> Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedStack")
            .field("contents", &DebugIter(self.walk()))
            .field("len", &self.len)
            .finish()
    }
}

/// Renders the stack from top to bottom as `{top,...,bottom}`.
impl<T: Display> Display for LinkedStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, value) in self.walk().enumerate() {
            if index > 0 {
                write!(f, ",")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "}}")
    }
}
