use std::fmt::{self, Debug, Display, Formatter};

use tracing::debug;

use crate::collections::contiguous::Array;
use crate::collections::contiguous::growth;
use crate::util::error::CapacityOverflow;
use crate::util::fmt::{DebugIter, EmptySlot};
use crate::util::result::ResultExtension;

/// A first-in, first-out queue stored in a ring buffer that grows when full.
///
/// `head` always points at the slot before the front of the queue and `tail` at the most recently
/// written slot. Enqueueing advances `tail` then writes, dequeueing advances `head` then takes. The
/// number of elements is tracked separately, so every slot can be used and a full queue is never
/// mistaken for an empty one. Empty slots hold [`None`].
///
/// When full, the queue grows according to the
/// [`growth`](crate::collections::contiguous::growth) policy, unwrapping its elements into slots
/// `1..=len` of the new buffer.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `enqueue` | `O(1)`*, `O(n)` |
/// | `dequeue` | `O(1)` |
/// | `peek` | `O(1)` |
///
/// \* If the queue is full, `enqueue` has to reallocate.
///
/// # Examples
/// ```
/// # use primitive_collections::collections::circ::CircularQueue;
/// let mut queue = CircularQueue::with_cap(3);
/// queue.enqueue(1);
/// queue.enqueue(2);
/// assert_eq!(queue.dequeue(), Some(1));
/// queue.enqueue(3);
/// queue.enqueue(4);
/// assert_eq!(queue.cap(), 3);
/// assert_eq!(queue.to_string(), "[3, 4, 2]");
/// assert_eq!(queue.dequeue(), Some(2));
/// ```
pub struct CircularQueue<T> {
    pub(crate) slots: Array<Option<T>>,
    pub(crate) head: usize,
    pub(crate) tail: usize,
    pub(crate) len: usize,
}

impl<T> CircularQueue<T> {
    /// Creates a new, empty CircularQueue without allocating.
    pub fn new() -> CircularQueue<T> {
        CircularQueue {
            slots: Array::new(),
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Creates a new CircularQueue that can hold `cap` elements before growing.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> CircularQueue<T> {
        Self::try_with_cap(cap).throw()
    }

    /// Fallible version of [`CircularQueue::with_cap`].
    pub fn try_with_cap(cap: usize) -> Result<CircularQueue<T>, CapacityOverflow> {
        Ok(CircularQueue {
            slots: Array::try_repeat_with(|| None, cap)?,
            head: 0,
            tail: 0,
            len: 0,
        })
    }

    /// Returns the number of elements in the queue.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the queue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the ring buffer.
    pub const fn cap(&self) -> usize {
        self.slots.size()
    }

    /// Adds `value` to the back of the queue, growing the buffer if it's full.
    ///
    /// # Panics
    /// Panics if the buffer needs to grow and memory layout size would exceed [`isize::MAX`].
    pub fn enqueue(&mut self, value: T) {
        self.try_enqueue(value).throw()
    }

    /// Adds `value` to the back of the queue, returning an error rather than panicking if the
    /// buffer can't grow. The queue is left unchanged on error.
    pub fn try_enqueue(&mut self, value: T) -> Result<(), CapacityOverflow> {
        if self.len == self.cap() {
            let new_cap = growth::grown_cap(self.cap(), self.len + 1)?;
            debug!(old_cap = self.cap(), new_cap, "growing CircularQueue");
            self.try_resize(new_cap)?;
        }

        self.tail = (self.tail + 1) % self.cap();
        self.slots[self.tail] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Removes the element at the front of the queue and returns it, or [`None`] if the queue is
    /// empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        self.head = (self.head + 1) % self.cap();
        self.len -= 1;
        self.slots[self.head].take()
    }

    /// Returns a reference to the element at the front of the queue, if there is one.
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }

        self.slots[(self.head + 1) % self.cap()].as_ref()
    }

    /// Moves every element into a new buffer of `new_cap` slots, front first, starting at slot 1.
    /// `new_cap` must be greater than `len`.
    fn try_resize(&mut self, new_cap: usize) -> Result<(), CapacityOverflow> {
        let mut slots = Array::try_repeat_with(|| None, new_cap)?;
        let old_cap = self.cap();

        for offset in 1..=self.len {
            slots[offset] = self.slots[(self.head + offset) % old_cap].take();
        }

        self.slots = slots;
        self.head = 0;
        self.tail = self.len;
        Ok(())
    }

    /// Walks the queue from front to back.
    pub(crate) fn walk(&self) -> impl Iterator<Item = &T> + Clone {
        let cap = self.cap();
        (1..=self.len).filter_map(move |offset| self.slots[(self.head + offset) % cap].as_ref())
    }
}

impl<T> Extend<T> for CircularQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> FromIterator<T> for CircularQueue<T> {
    /// Enqueues every item in order, so the first item is at the front.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = CircularQueue::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Default for CircularQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularQueue")
            .field("contents", &DebugIter(self.walk()))
            .field("head", &self.head)
            .field("tail", &self.tail)
            .field("len", &self.len)
            .finish()
    }
}

/// Renders every slot of the ring buffer in storage order, with `-` for the empty ones.
impl<T: Debug> Display for CircularQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for slot in self.slots.iter() {
            match slot {
                Some(value) => list.entry(value),
                None => list.entry(&EmptySlot),
            };
        }
        list.finish()
    }
}
