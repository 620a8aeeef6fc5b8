use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::slice;

use tracing::debug;

use crate::collections::contiguous::Array;
use crate::collections::contiguous::growth;
use crate::util::error::{CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds};
use crate::util::fmt::EmptySlot;
use crate::util::result::ResultExtension;

/// A variable size contiguous collection, based on [`Array<T>`].
///
/// Capacity is managed by the [`growth`] policy: a DynamicArray below
/// [`DEFAULT_CAP`](growth::DEFAULT_CAP) grows straight to it, anything larger grows to one and a
/// half times its capacity. Capacity is never reduced by removing elements.
///
/// Slots between `len` and `cap` are uninitialized and never hold a value of `T`, which is why
/// [`Display`] renders them with an explicit `-` marker rather than a value.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynamicArray.
/// - `i`: The index of the item in question.
/// - `m`: The number of items being added.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `replace` | `O(1)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `extend_from_slice` | `O(m)`*, `O(n+m)` |
///
/// \* If the DynamicArray doesn't have enough capacity for the new elements, it has to reallocate.
///
/// \** If the DynamicArray has enough capacity for the additional items already, `reserve` is
/// `O(1)`.
pub struct DynamicArray<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> DynamicArray<T> {
    /// Creates a new DynamicArray with length and capacity 0. Memory will be allocated when the
    /// first element is added.
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<u8> = DynamicArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 0);
    /// ```
    pub fn new() -> DynamicArray<T> {
        DynamicArray {
            arr: Array::new(),
            len: 0,
        }
    }

    /// Creates a new DynamicArray with capacity exactly equal to the provided value, allowing
    /// values to be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<u8> = DynamicArray::with_cap(5);
    /// assert_eq!(arr.cap(), 5);
    /// arr.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(arr.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> DynamicArray<T> {
        Self::try_with_cap(cap).throw()
    }

    /// Creates a new DynamicArray with capacity exactly equal to the provided value, returning an
    /// error rather than panicking if that capacity can't be allocated.
    pub fn try_with_cap(cap: usize) -> Result<DynamicArray<T>, CapacityOverflow> {
        Ok(DynamicArray {
            arr: Array::try_new_uninit(cap)?,
            len: 0,
        })
    }

    /// Returns the length of the DynamicArray.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DynamicArray contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the DynamicArray.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Push the provided value onto the end of the DynamicArray, growing if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::<u8>::new();
    /// for i in 0..=5 {
    ///     arr.push(i);
    /// }
    /// assert_eq!(&*arr, &[0, 1, 2, 3, 4, 5]);
    /// assert_eq!(arr.cap(), 10);
    /// ```
    pub fn push(&mut self, value: T) {
        self.try_push(value).throw()
    }

    /// Push the provided value onto the end of the DynamicArray, returning an error if the
    /// DynamicArray needs to grow but can't.
    pub fn try_push(&mut self, value: T) -> Result<(), CapacityOverflow> {
        self.try_reserve(1)?;
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
        Ok(())
    }

    /// Push the provided value onto the end of the DynamicArray, assuming that there is enough
    /// capacity to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that `len < cap`, using methods like
    /// [`reserve`](DynamicArray::reserve) or [`with_cap`](DynamicArray::with_cap) to do so.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        self.arr[self.len].write(value);
        self.len += 1;
    }

    /// Pops the last value off the end of the DynamicArray, returning an owned value if the
    /// DynamicArray has length greater than 0.
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = (0..5).collect();
    /// for i in (0..arr.len()).rev() {
    ///     assert_eq!(arr.pop(), Some(i));
    /// }
    /// assert_eq!(arr.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before reading, so the slot is considered uninitialized afterwards.
            self.len -= 1;

            // SAFETY: The slot at the old last index is initialized and is no longer considered
            // part of the DynamicArray, so reading it moves the value out.
            Some(unsafe { self.arr[self.len].assume_init_read() })
        }
    }

    /// Returns a reference to the element at `index`, if it is within bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        (**self).get(index)
    }

    /// Returns a mutable reference to the element at `index`, if it is within bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        (**self).get_mut(index)
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary. Any
    /// index up to and including `len` is valid, with `len` appending the value.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds or if the DynamicArray can't grow.
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = (0..3).collect();
    /// arr.insert(1, 100);
    /// arr.insert(1, 200);
    /// arr.insert(5, 300);
    /// assert_eq!(&*arr, &[0, 200, 100, 1, 2, 300]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at the given index, returning an error rather than panicking.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOrCapOverflow> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len }.into());
        }

        self.try_reserve(1)?;

        let mut prev = MaybeUninit::new(value);
        for i in index..=self.len {
            prev = mem::replace(&mut self.arr[i], prev);
        }

        self.len += 1;
        Ok(())
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = "Hello world!".chars().collect();
    /// assert_eq!(arr.remove(1), 'e');
    /// assert_eq!(arr.remove(4), ' ');
    /// assert_eq!(arr, "Hlloworld!".chars().collect::<DynamicArray<_>>());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at the provided index, returning an error rather than panicking.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        let mut next = MaybeUninit::uninit();
        // Iterate backwards to index.
        for i in (index..self.len).rev() {
            next = mem::replace(&mut self.arr[i], next);
        }

        self.len -= 1;
        // SAFETY: next contains the value which was previously located at index, which we've
        // already checked to be less than len and therefore initialized.
        Ok(unsafe { next.assume_init() })
    }

    /// Replaces the element at the provided index with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    /// Replaces the element at the provided index, returning an error rather than panicking.
    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(mem::replace(&mut self[index], new_value))
    }

    /// Ensures that the DynamicArray has capacity to hold an additional `extra` elements, growing
    /// according to the [`growth`] policy when `len + extra > cap`.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    pub fn reserve(&mut self, extra: usize) {
        self.try_reserve(extra).throw()
    }

    /// Ensures that the DynamicArray has capacity to hold an additional `extra` elements, returning
    /// an error if the required capacity isn't representable.
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::contiguous::DynamicArray;
    /// # use primitive_collections::collections::contiguous::dynamic_array::CapacityOverflow;
    /// let mut arr: DynamicArray<u8> = DynamicArray::with_cap(20);
    /// arr.extend(0..20);
    /// assert_eq!(arr.try_reserve(1), Ok(()));
    /// assert_eq!(arr.cap(), 30);
    /// assert_eq!(arr.try_reserve(usize::MAX), Err(CapacityOverflow));
    /// assert_eq!(arr.cap(), 30);
    /// ```
    pub fn try_reserve(&mut self, extra: usize) -> Result<(), CapacityOverflow> {
        let required = self.len.checked_add(extra).ok_or(CapacityOverflow)?;

        if required <= self.cap() { return Ok(()); }

        let new_cap = growth::grown_cap(self.cap(), required)?;
        debug!(old_cap = self.cap(), new_cap, "growing DynamicArray");
        self.arr.try_realloc(new_cap)
    }

    /// Shortens the DynamicArray to `len` elements, dropping the rest. Has no effect if `len` is
    /// greater than or equal to the current length. Capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len { return; }

        let old_len = mem::replace(&mut self.len, len);
        for slot in &mut self.arr[len..old_len] {
            // SAFETY: All values below the old len were initialized and are now outside of len,
            // so they won't be dropped again.
            unsafe { slot.assume_init_drop(); }
        }
    }

    /// Drops all elements, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Checks that the provided index is within the bounds of self.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Appends clones of every element in `other`, reserving space for all of them at once.
    ///
    /// # Panics
    /// Panics if the DynamicArray can't grow to hold `other`.
    pub fn extend_from_slice(&mut self, other: &[T]) {
        self.reserve(other.len());

        for item in other {
            // SAFETY: Enough capacity for all of other has just been reserved.
            unsafe { self.push_unchecked(item.clone()); }
        }
    }

    /// Resizes the DynamicArray so that its length is `new_len`, truncating or appending clones
    /// of `value` as required.
    ///
    /// # Panics
    /// Panics if the DynamicArray can't grow to `new_len`.
    pub fn resize(&mut self, new_len: usize, value: T) {
        if new_len <= self.len {
            self.truncate(new_len);
        } else {
            self.reserve(new_len - self.len);
            for item in iter::repeat_n(value, new_len - self.len) {
                // SAFETY: Enough capacity for new_len elements has just been reserved.
                unsafe { self.push_unchecked(item); }
            }
        }
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut arr = DynamicArray::new();
        arr.extend(value);
        arr
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        // Drop all initialized values in place. self.arr then deallocates itself, containing only
        // MaybeUninit values with a no-op drop.
        self.clear();
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: DynamicArray is valid as a slice for len values, which are all initialized. The
        // pointer is nonnull, properly aligned and the range entirely contained within the
        // allocation.
        unsafe { slice::from_raw_parts(self.arr.ptr.as_ptr().cast(), self.len) }
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As with deref, and the mutable borrow of self guarantees unique access.
        unsafe { slice::from_raw_parts_mut(self.arr.ptr.as_ptr().cast(), self.len) }
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut arr = Self::with_cap(self.cap());
        arr.extend_from_slice(self);
        arr
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(value: &[T]) -> Self {
        let mut arr = Self::with_cap(value.len());
        arr.extend_from_slice(value);
        arr
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DynamicArray<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        **self == other[..]
    }
}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

/// Renders the whole backing buffer, including the unused slots after `len` as `-`.
///
/// ```
/// # use primitive_collections::collections::contiguous::DynamicArray;
/// let mut arr = DynamicArray::with_cap(4);
/// arr.extend([1, 2]);
/// assert_eq!(arr.to_string(), "[1, 2, -, -]");
/// ```
impl<T: Debug> Display for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter())
            .entries(iter::repeat_n(EmptySlot, self.cap() - self.len))
            .finish()
    }
}

// SAFETY: DynamicArrays rely on a unique pointer, so they are Send when T: Send.
unsafe impl<T: Send> Send for DynamicArray<T> {}
// SAFETY: DynamicArray's safe API has no interior mutability, so it is Sync when T: Sync.
unsafe impl<T: Sync> Sync for DynamicArray<T> {}
