use std::fmt::{self, Debug, Display, Formatter};
use std::iter;
use std::marker::PhantomData;
use std::mem;

use derive_more::IsVariant;

use super::{Length, Link, NodeRef, ONE};
use crate::collections::contiguous::DynamicArray;
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::fmt::DebugIter;
use crate::util::result::ResultExtension;

/// A list with links in both directions.
///
/// The list owns its nodes through their `next` links, while `prev` links only point back at the
/// node that owns them. Both directions are kept symmetric by every operation: following `next`
/// and then `prev` always leads back to the same node, the head has no `prev` and the tail has no
/// `next`.
///
/// Operations that take an index report an index out of range as an [`IndexOutOfBounds`] error
/// rather than panicking.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DoublyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove` | `O(min(i, n-i))` |
/// | `set` | `O(min(i, n-i))` |
/// | `contains` | `O(n)` |
/// | `remove_all` | `O(n)` |
/// | `reversed` | `O(n)` |
pub struct DoublyLinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default, IsVariant)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodeRef<T>,
    pub tail: NodeRef<T>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new DoublyLinkedList with no elements.
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Creates a new DoublyLinkedList containing only `value`.
    pub fn singleton(value: T) -> DoublyLinkedList<T> {
        DoublyLinkedList {
            state: ListState::single(value),
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the DoublyLinkedList.
    pub const fn len(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(contents) => contents.len.get(),
        }
    }

    /// Returns true if the DoublyLinkedList contains no elements.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns true if `index` refers to an element of the list.
    pub const fn exists_at(&self, index: usize) -> bool {
        index < self.len()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(contents) => Some(contents.head.value()),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(contents) => Some(contents.tail.value()),
        }
    }

    /// Adds the provided element to the front of the DoublyLinkedList.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a [`usize`].
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => {
                contents.len = contents.len.incremented().throw();

                let node = NodeRef::new(value, None, Some(contents.head));
                contents.head.set_prev(Some(node));
                contents.head = node;
            },
        }
    }

    /// Adds the provided element to the back of the DoublyLinkedList. The tail is tracked directly,
    /// so this takes constant time.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a [`usize`].
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => {
                contents.len = contents.len.incremented().throw();

                let node = NodeRef::new(value, Some(contents.tail), None);
                contents.tail.set_next(Some(node));
                contents.tail = node;
            },
        }
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = match &self.state {
            Empty => return None,
            Full(contents) => contents.head,
        };
        Some(self.unlink(head))
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = match &self.state {
            Empty => return None,
            Full(contents) => contents.tail,
        };
        Some(self.unlink(tail))
    }

    /// Returns a reference to the element at `index`, if there is one.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.checked_seek(index).ok().map(|node| node.value())
    }

    /// Returns a mutable reference to the element at `index`, if there is one.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.checked_seek(index).ok().map(|node| node.value_mut())
    }

    /// Inserts `value` so that it ends up at `index`, shifting every following element back by one.
    /// An `index` equal to the length of the list appends to it.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index` is greater than the length of the list, in which
    /// case the list is unchanged.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a [`usize`].
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::linked::DoublyLinkedList;
    /// let mut list: DoublyLinkedList<_> = ['a', 'c'].into_iter().collect();
    /// assert!(list.insert(1, 'b').is_ok());
    /// assert!(list.insert(3, 'd').is_ok());
    /// assert!(list.insert(9, 'z').is_err());
    /// assert_eq!(list.to_string(), "{a,b,c,d}");
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let len = self.len();
        if index > len {
            return Err(IndexOutOfBounds { index, len });
        }

        if index == 0 {
            self.push_front(value);
        } else if index == len {
            self.push_back(value);
        } else if let Full(contents) = &mut self.state {
            let next = contents.seek(index);
            contents.len = contents.len.incremented().throw();

            // The node currently at index isn't the head, so it always has a prev.
            let node = NodeRef::new(value, next.prev(), Some(next));
            if let Some(prev) = next.prev() {
                prev.set_next(Some(node));
            }
            next.set_prev(Some(node));
        }
        Ok(())
    }

    /// Replaces the element at `index` with `value`, returning the old value.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if there is no element at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.checked_seek(index)?.value_mut(), value))
    }

    /// Removes the element at `index` and returns it, shifting every following element forward by
    /// one.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if there is no element at `index`.
    pub fn remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        Ok(self.unlink(node))
    }

    /// Returns the middle element of a list with an odd length, found by walking one pointer a
    /// single node at a time and another two nodes at a time until the second reaches the tail.
    /// Lists of even length have no single middle, so [`None`] is returned for them.
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::linked::DoublyLinkedList;
    /// let list: DoublyLinkedList<_> = (1..=5).collect();
    /// assert_eq!(list.middle(), Some(&3));
    ///
    /// let list: DoublyLinkedList<_> = (1..=4).collect();
    /// assert_eq!(list.middle(), None);
    /// ```
    pub fn middle(&self) -> Option<&T> {
        let Full(contents) = &self.state else {
            return None;
        };
        if contents.len.get() % 2 == 0 {
            return None;
        }

        let mut slow = contents.head;
        let mut fast = contents.head;
        while let Some(next) = fast.next().and_then(|node| node.next()) {
            fast = next;
            slow = slow.next()?;
        }
        Some(slow.value())
    }

    /// Checks whether following `next` links from the head ever leads back to an earlier node. One
    /// pointer walks a single node at a time and another two at a time: if the list loops, the
    /// second pointer eventually catches up with the first rather than running off the tail.
    ///
    /// A list is only ever linked by its own methods, so this is always false for a list that
    /// upholds its invariants.
    pub fn has_cycle(&self) -> bool {
        let Full(contents) = &self.state else {
            return false;
        };

        let mut slow = contents.head;
        let mut fast = contents.head;
        while let Some(next) = fast.next().and_then(|node| node.next()) {
            fast = next;
            let Some(step) = slow.next() else {
                return false;
            };
            slow = step;

            if slow == fast {
                return true;
            }
        }
        false
    }

    /// Walks the list from front to back.
    pub(crate) fn walk(&self) -> impl Iterator<Item = &T> + Clone {
        self.walk_nodes().map(|node| node.value())
    }

    /// Walks the nodes of the list from front to back. Bounded by the length of the list, so that
    /// a corrupted tail can't make it run forever.
    pub(crate) fn walk_nodes(&self) -> impl Iterator<Item = NodeRef<T>> + Clone + use<'_, T> {
        let (head, len) = match &self.state {
            Empty => (None, 0),
            Full(contents) => (Some(contents.head), contents.len.get()),
        };
        iter::successors(head, |node| node.next()).take(len)
    }

    /// Unlinks `node` from the list, frees it and returns its value. `node` must belong to this
    /// list.
    pub(crate) fn unlink(&mut self, node: NodeRef<T>) -> T {
        let node = node.take_node();

        match &mut self.state {
            Empty => {},
            Full(contents) => match contents.len.decremented() {
                None => self.state = Empty,
                Some(new_len) => {
                    contents.len = new_len;
                    match node.prev {
                        Some(prev) => prev.set_next(node.next),
                        None => if let Some(next) = node.next {
                            contents.head = next;
                        },
                    }
                    match node.next {
                        Some(next) => next.set_prev(node.prev),
                        None => if let Some(prev) = node.prev {
                            contents.tail = prev;
                        },
                    }
                },
            },
        }

        node.value
    }

    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodeRef<T>, IndexOutOfBounds> {
        match &self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) if index < contents.len.get() => Ok(contents.seek(index)),
            Full(contents) => Err(IndexOutOfBounds {
                index,
                len: contents.len.get(),
            }),
        }
    }

    #[cfg(test)]
    #[allow(clippy::unwrap_used)]
    pub(crate) fn verify_double_links(&self) {
        match &self.state {
            Empty => {},
            Full(contents) => {
                assert!(contents.head.prev().is_none());
                let mut curr = contents.head;
                let mut count = 1;
                while let Some(next) = curr.next() {
                    assert!(next.prev().unwrap() == curr);
                    curr = next;
                    count += 1;
                }
                assert!(contents.tail == curr);
                assert_eq!(count, contents.len.get());
            },
        }
    }

    /// Points the tail's `next` link at the node at `index`, or clears it for [`None`].
    #[cfg(test)]
    pub(crate) fn link_tail_to(&mut self, index: Option<usize>) {
        if let Full(contents) = &self.state {
            contents.tail.set_next(index.map(|i| contents.seek(i)));
        }
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Returns true if any element of the list is equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.walk().any(|item| item == value)
    }

    /// Returns the index of every element equal to `value`, in ascending order.
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::linked::DoublyLinkedList;
    /// let list: DoublyLinkedList<_> = [1, 2, 1, 3, 1].into_iter().collect();
    /// assert_eq!(list.indices_of(&1), [0, 2, 4]);
    /// ```
    pub fn indices_of(&self, value: &T) -> DynamicArray<usize> {
        self.walk()
            .enumerate()
            .filter(|(_, item)| *item == value)
            .map(|(index, _)| index)
            .collect()
    }

    /// Removes every element equal to `value`, returning how many were removed.
    pub fn remove_all(&mut self, value: &T) -> usize {
        let matches: DynamicArray<NodeRef<T>> = self.walk_nodes()
            .filter(|node| node.value() == value)
            .collect();

        for node in matches.iter() {
            drop(self.unlink(*node));
        }
        matches.len()
    }
}

impl<T: PartialEq + Clone> DoublyLinkedList<T> {
    /// Replaces every element equal to `old` with a clone of `new`, returning how many were
    /// replaced.
    pub fn replace_all(&mut self, old: &T, new: T) -> usize {
        let mut count = 0;
        for node in self.walk_nodes() {
            if node.value() == old {
                *node.value_mut() = new.clone();
                count += 1;
            }
        }
        count
    }
}

impl<T: Clone> DoublyLinkedList<T> {
    /// Returns a new list holding the elements of this one in reverse order. The new list is built
    /// by following `prev` links back from the tail.
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::linked::DoublyLinkedList;
    /// let list: DoublyLinkedList<_> = ['a', 'b', 'c'].into_iter().collect();
    /// assert_eq!(list.reversed().to_string(), "{c,b,a}");
    /// ```
    pub fn reversed(&self) -> DoublyLinkedList<T> {
        let tail = match &self.state {
            Empty => None,
            Full(contents) => Some(contents.tail),
        };

        iter::successors(tail, |node| node.prev())
            .take(self.len())
            .map(|node| node.value().clone())
            .collect()
    }

    /// Returns a new list in which every consecutive run of `k` elements is reversed. Returns
    /// [`None`] if `k` is zero or the length of the list isn't a multiple of `k`.
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::linked::DoublyLinkedList;
    /// let list: DoublyLinkedList<_> = (1..=4).collect();
    /// let groups = list.reversed_in_groups(2).unwrap();
    /// assert_eq!(groups.to_string(), "{2,1,4,3}");
    ///
    /// assert!(list.reversed_in_groups(3).is_none());
    /// ```
    pub fn reversed_in_groups(&self, k: usize) -> Option<DoublyLinkedList<T>> {
        if k == 0 || self.len() % k != 0 {
            return None;
        }

        let mut list = DoublyLinkedList::new();
        let mut group: DynamicArray<&T> = DynamicArray::new();
        for value in self.walk() {
            group.push(value);
            if group.len() == k {
                while let Some(value) = group.pop() {
                    list.push_back(value.clone());
                }
            }
        }
        Some(list)
    }
}

impl<T> ListContents<T> {
    /// Finds the node at `index`, walking from whichever end is closer. `index` must be in bounds.
    pub fn seek(&self, index: usize) -> NodeRef<T> {
        if index < self.len.get() / 2 {
            Self::walk_from(self.head, index, NodeRef::next)
        } else {
            Self::walk_from(self.tail, self.len.last_index() - index, NodeRef::prev)
        }
    }

    fn walk_from(
        mut node: NodeRef<T>,
        count: usize,
        step: fn(&NodeRef<T>) -> Link<T>,
    ) -> NodeRef<T> {
        for _ in 0..count {
            match step(&node) {
                Some(next) => node = next,
                None => break,
            }
        }
        node
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        let node = NodeRef::new(value, None, None);
        Full(ListContents {
            len: ONE,
            head: node,
            tail: node,
        })
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        for item in iter {
            list.push_back(item);
        }
        list
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        if let Full(contents) = mem::take(&mut self.state) {
            let mut curr = Some(contents.head);
            for _ in 0..contents.len.get() {
                let Some(node) = curr else { break };
                curr = node.next();
                drop(node.take_node());
            }
        }
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.walk().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.walk().eq(other.walk())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

// SAFETY: The list uniquely owns every node it points to, so it is Send when T: Send.
unsafe impl<T: Send> Send for DoublyLinkedList<T> {}
// SAFETY: No interior mutability is reachable through &DoublyLinkedList<T>.
unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field("contents", &DebugIter(self.walk()))
            .field("len", &self.len())
            .finish()
    }
}

/// Renders the list from front to back as `{a,b,c}`.
impl<T: Display> Display for DoublyLinkedList<T> {
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
