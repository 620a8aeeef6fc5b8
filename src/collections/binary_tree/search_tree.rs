use std::fmt::{self, Debug, Display, Formatter};

use derive_more::IsVariant;

use super::{Branch, Node};
use crate::collections::circ::CircularQueue;
use crate::collections::contiguous::DynamicArray;

/// An unbalanced binary search tree holding unique values, ordered by [`Ord`].
///
/// Every value in the left subtree of a node orders before it and every value in the right subtree
/// orders after it. Values are never duplicated: inserting a value that is already present leaves
/// the tree unchanged. Nothing rebalances the tree, so inserting values in sorted order produces a
/// tree as deep as it is long.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of values in the SearchTree.
/// - `h`: The height of the SearchTree, between `log(n)` and `n`.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `contains` | `O(h)` |
/// | `remove` | `O(h)` |
/// | `first/last` | `O(h)` |
/// | `*_order` | `O(n)` |
///
/// # Examples
/// ```
/// # use primitive_collections::collections::binary_tree::SearchTree;
/// let mut tree = SearchTree::new();
/// for value in [5, 3, 8, 3] {
///     tree.insert(value);
/// }
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.in_order(), [&3, &5, &8]);
/// ```
pub struct SearchTree<T: Ord> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
}

/// Where a removed node hung in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Position {
    /// The root of the tree, with no parent.
    Root,
    /// The left child of its parent.
    Left,
    /// The right child of its parent.
    Right,
}

/// How a removed node was taken out of the tree, based on how many children it had.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum RemovalCase {
    /// The node was simply detached from its parent.
    Leaf,
    /// The node's only child took its place.
    OneChild,
    /// The greatest value in the node's left subtree was moved into the node, and the node holding
    /// it was removed instead.
    TwoChildren,
}

/// The outcome of [`SearchTree::remove_detailed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Removal {
    /// No node held the value.
    Absent,
    /// The value was removed.
    Removed {
        /// Where the removed node hung.
        position: Position,
        /// How the node was taken out.
        case: RemovalCase,
    },
}

impl<T: Ord> SearchTree<T> {
    /// Creates a new, empty SearchTree.
    pub const fn new() -> SearchTree<T> {
        SearchTree {
            root: Branch(None),
            len: 0,
        }
    }

    /// Creates a new SearchTree with `value` at its root.
    pub fn singleton(value: T) -> SearchTree<T> {
        SearchTree {
            root: Branch(Some(Box::new(Node::leaf(value)))),
            len: 1,
        }
    }

    /// Returns the number of values in the tree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `value` as a new leaf. Returns false, dropping `value`, if an equal value is already
    /// in the tree.
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = self.root.insert(value);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Returns true if the tree holds a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.root.contains(value)
    }

    /// Removes the value equal to `value` from the tree. Returns false if there was no such value.
    pub fn remove(&mut self, value: &T) -> bool {
        self.remove_detailed(value).is_removed()
    }

    /// Removes the value equal to `value` from the tree, reporting where its node was and how it
    /// was taken out.
    ///
    /// A node with two children keeps its place: the greatest value of its left subtree moves
    /// into it and that value's node, which has at most one child, is removed instead.
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::binary_tree::{Position, Removal, RemovalCase, SearchTree};
    /// let mut tree: SearchTree<_> = [5, 3, 8].into_iter().collect();
    /// assert_eq!(
    ///     tree.remove_detailed(&5),
    ///     Removal::Removed { position: Position::Root, case: RemovalCase::TwoChildren }
    /// );
    /// assert_eq!(tree.remove_detailed(&5), Removal::Absent);
    /// assert_eq!(tree.pre_order(), [&3, &8]);
    /// ```
    pub fn remove_detailed(&mut self, value: &T) -> Removal {
        let removal = self.root.remove(value, Position::Root);
        if removal.is_removed() {
            self.len -= 1;
        }
        removal
    }

    /// Returns the smallest value in the tree.
    pub fn first(&self) -> Option<&T> {
        self.root.first()
    }

    /// Returns the greatest value in the tree.
    pub fn last(&self) -> Option<&T> {
        self.root.last()
    }

    /// Lists every value, each node before its left subtree and then its right subtree.
    pub fn pre_order(&self) -> DynamicArray<&T> {
        let mut out = DynamicArray::with_cap(self.len);
        self.root.pre_order(&mut out);
        out
    }

    /// Lists every value in ascending order.
    pub fn in_order(&self) -> DynamicArray<&T> {
        let mut out = DynamicArray::with_cap(self.len);
        self.root.in_order(&mut out);
        out
    }

    /// Lists every value, each node after its left and right subtrees.
    pub fn post_order(&self) -> DynamicArray<&T> {
        let mut out = DynamicArray::with_cap(self.len);
        self.root.post_order(&mut out);
        out
    }

    /// Lists every value breadth first, from the root down and from left to right within each
    /// level, using a [`CircularQueue`] of the nodes still to visit.
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::binary_tree::SearchTree;
    /// let tree: SearchTree<_> = [4, 2, 6, 1, 3, 7].into_iter().collect();
    /// assert_eq!(tree.level_order(), [&4, &2, &6, &1, &3, &7]);
    /// ```
    pub fn level_order(&self) -> DynamicArray<&T> {
        let mut out = DynamicArray::with_cap(self.len);
        let mut queue: CircularQueue<&Node<T>> = CircularQueue::new();
        queue.extend(self.root.as_deref());

        while let Some(node) = queue.dequeue() {
            out.push(&node.value);
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
        out
    }
}

impl<T: Ord> Default for SearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for SearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for SearchTree<T> {
    /// Inserts every value in order, skipping duplicates.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = SearchTree::new();
        tree.extend(iter);
        tree
    }
}

/// Draws the tree on its side, left subtrees above their parent and right subtrees below.
impl<T: Ord + Debug> Debug for SearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "SearchTree (len: {})", self.len)?;
        write!(f, "{:?}", self.root)
    }
}

/// Renders the values in level order as `[a, b, c]`.
impl<T: Ord + Display> Display for SearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, value) in self.level_order().iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
