use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// A fixed-size buffer that owns exactly `size` values on the heap. Similar to a
/// [`Box<[T]>`](Box<T>), except that the allocation is managed by hand so that it can be
/// reallocated in place.
///
/// Array is the storage layer for the growable collections in this crate. It holds no notion of
/// length or capacity on its own: [`DynamicArray`](super::super::DynamicArray) stores
/// `Array<MaybeUninit<T>>` and tracks how many slots are initialized, while
/// [`CircularQueue`](crate::collections::circ::CircularQueue) stores `Array<Option<T>>` and uses
/// `None` as its empty slot marker.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `size` | `O(1)` |
/// | `try_realloc` | `O(n)`*, `O(1)` |
///
/// \* Only when the allocator has to move the allocation.
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Returns the size of the Array.
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::contiguous::Array;
    /// let arr = Array::repeat_with(|| 0_u8, 3);
    /// assert_eq!(arr.size(), 3);
    /// ```
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Creates a new Array with size 0. Nothing is allocated.
    pub fn new() -> Array<T> {
        Array {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`. All values are
    /// uninitialized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        Self::try_new_uninit(size).throw()
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`, returning an error
    /// rather than panicking if the layout would be too large.
    pub fn try_new_uninit(size: usize) -> Result<Array<MaybeUninit<T>>, CapacityOverflow> {
        let layout = Array::<MaybeUninit<T>>::make_layout(size)?;
        let ptr = Array::<MaybeUninit<T>>::make_ptr(layout);

        Ok(Array {
            ptr,
            size,
            _phantom: PhantomData,
        })
    }

    /// Creates a new Array of `count` values, each produced by calling `f`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::contiguous::Array;
    /// let arr: Array<Option<u8>> = Array::repeat_with(|| None, 4);
    /// assert_eq!(&*arr, &[None, None, None, None]);
    /// ```
    pub fn repeat_with<F: FnMut() -> T>(f: F, count: usize) -> Array<T> {
        Self::try_repeat_with(f, count).throw()
    }

    /// Fallible version of [`Array::repeat_with`].
    pub fn try_repeat_with<F: FnMut() -> T>(
        mut f: F,
        count: usize,
    ) -> Result<Array<T>, CapacityOverflow> {
        let mut arr = Self::try_new_uninit(count)?;

        for slot in arr.iter_mut() {
            slot.write(f());
        }

        // SAFETY: Every slot has just been written.
        Ok(unsafe { arr.assume_init() })
    }

    /// Decomposes an `Array<T>` into its raw components, the pointer to the contained data and the
    /// number of elements.
    const fn into_parts(self) -> (NonNull<T>, usize) {
        let ret = (self.ptr, self.size);
        mem::forget(self);
        ret
    }

    /// Creates an `Array<T>` from its raw components.
    ///
    /// # Safety
    /// `ptr` must either be dangling with a zero-sized layout, or be allocated in the global
    /// allocator with the layout of `size` values of `T`, all of which are initialized.
    const unsafe fn from_parts(ptr: NonNull<T>, size: usize) -> Array<T> {
        Array {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Creates a [`Layout`] for `size` elements of type `T`.
    pub(crate) fn make_layout(size: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(size).map_err(|_| CapacityOverflow)
    }

    /// Allocates memory for the provided [`Layout`]. Returns a dangling pointer for a zero-sized
    /// layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Assume that all values of an `Array<MaybeUninit<T>>` are initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that the Array is properly initialized. Failing to do so
    /// is undefined behavior.
    pub unsafe fn assume_init(self) -> Array<T> {
        let (ptr, size) = self.into_parts();
        // SAFETY: The caller guarantees that all size values are initialized.
        unsafe { Array::from_parts(ptr.cast(), size) }
    }

    /// Reallocates the Array to hold exactly `new_size` values. Slots that exist in both the old
    /// and new allocation keep their contents; new slots are uninitialized. Values in slots that
    /// are cut off are not dropped, that is the caller's responsibility.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if `new_size * size_of::<T>()` would exceed [`isize::MAX`],
    /// leaving the Array untouched.
    pub fn try_realloc(&mut self, new_size: usize) -> Result<(), CapacityOverflow> {
        let new_layout = Self::make_layout(new_size)?;

        let new_ptr = match (self.size, new_size) {
            // Zero-sized types are never allocated, so only the size changes.
            _ if size_of::<T>() == 0 => self.ptr,
            (old, new) if old == new => return Ok(()),
            (0, _) => Self::make_ptr(new_layout),
            (_, 0) => {
                // SAFETY: The old layout was produced by make_layout when allocating and is
                // non-zero in size, so ptr is a live allocation in the global allocator.
                unsafe {
                    alloc::dealloc(self.ptr.as_ptr().cast(), Self::make_layout(self.size)?);
                }
                NonNull::dangling()
            },
            (_, _) => {
                let old_layout = Self::make_layout(self.size)?;

                // SAFETY: The same layout and allocator are used for the allocation, and the new
                // layout size is > 0 and <= isize::MAX.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        self.ptr = new_ptr;
        self.size = new_size;
        Ok(())
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        // SAFETY: All size values are initialized and are never accessed again.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size));
        }

        if size_of::<T>() != 0 && self.size != 0 {
            // SAFETY: ptr was allocated in the global allocator with this exact layout, which
            // can't overflow because it was checked when allocating.
            unsafe {
                alloc::dealloc(
                    self.ptr.as_ptr().cast(),
                    Layout::array::<T>(self.size).unwrap_unchecked(),
                )
            }
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for size values, all of which are initialized.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As with deref, and the mutable borrow of self guarantees unique access.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

// SAFETY: Arrays, when used safely rely on unique pointers and are therefore safe for Send when T:
// Send.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array's safe API obeys all rules of the borrow checker, so no interior mutability occurs.
// This means that Array<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &&**self)
            .field("size", &self.size)
            .finish()
    }
}
