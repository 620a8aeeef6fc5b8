use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use crate::collections::contiguous::DynamicArray;
use crate::collections::traits::Stack;
use crate::util::error::{CapacityOverflow, EmptyContainer};

/// A [`Stack`] backed by a [`DynamicArray`]. The top of the stack is the last element of the
/// array, so every operation works on the end of the buffer and nothing is ever moved, except when
/// the array grows.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `modify_top` | `O(1)` |
/// | `get` | `O(1)` |
///
/// \* If the backing array has to grow, `push` will take `O(n)`.
///
/// # Examples
/// ```
/// # use primitive_collections::collections::stack::ArrayStack;
/// # use primitive_collections::collections::traits::Stack;
/// let mut stack = ArrayStack::new();
/// stack.push('a');
/// stack.push('b');
/// assert_eq!(stack.peek(), Some(&'b'));
/// assert_eq!(stack.pop(), Ok('b'));
/// assert_eq!(stack.len(), 1);
/// ```
pub struct ArrayStack<T> {
    pub(crate) arr: DynamicArray<T>,
}

impl<T> ArrayStack<T> {
    /// Creates a new ArrayStack without allocating.
    pub fn new() -> ArrayStack<T> {
        ArrayStack {
            arr: DynamicArray::new(),
        }
    }

    /// Creates a new ArrayStack that can hold `cap` elements before growing.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> ArrayStack<T> {
        ArrayStack {
            arr: DynamicArray::with_cap(cap),
        }
    }

    /// Returns the capacity of the backing array.
    pub const fn cap(&self) -> usize {
        self.arr.cap()
    }

    /// Pushes `value` onto the stack, returning an error rather than panicking if the backing array
    /// can't grow.
    pub fn try_push(&mut self, value: T) -> Result<(), CapacityOverflow> {
        self.arr.try_push(value)
    }

    /// Returns the element `index` places above the bottom of the stack, if there is one.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.arr.get(index)
    }
}

impl<T> Stack<T> for ArrayStack<T> {
    fn len(&self) -> usize {
        self.arr.len()
    }

    fn push(&mut self, value: T) {
        self.arr.push(value);
    }

    fn pop(&mut self) -> Result<T, EmptyContainer> {
        self.arr.pop().ok_or(EmptyContainer)
    }

    fn peek(&self) -> Option<&T> {
        self.arr.last()
    }

    fn modify_top(&mut self, value: T) -> Result<T, EmptyContainer> {
        let top = self.arr.last_mut().ok_or(EmptyContainer)?;
        Ok(mem::replace(top, value))
    }
}

impl<T> FromIterator<T> for ArrayStack<T> {
    /// Pushes every item in order, leaving the last one on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ArrayStack {
            arr: DynamicArray::from_iter(iter),
        }
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ArrayStack<T> {
    fn clone(&self) -> Self {
        ArrayStack {
            arr: self.arr.clone(),
        }
    }
}

impl<T: Debug> Debug for ArrayStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayStack")
            .field("contents", &&*self.arr)
            .field("len", &self.arr.len())
            .field("cap", &self.arr.cap())
            .finish()
    }
}

/// Renders the backing array from bottom to top, unused slots included.
impl<T: Debug> Display for ArrayStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.arr, f)
    }
}
