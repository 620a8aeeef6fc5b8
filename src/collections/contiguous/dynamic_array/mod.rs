//! A module containing [`DynamicArray`], the growable contiguous collection that the array-backed
//! stack and the character buffer are built on.
//!
//! Borrowed iteration is provided by [`Iter`](std::slice::Iter) and
//! [`IterMut`](std::slice::IterMut), through `Deref<Target = [T]>`.
//!
//! [`DynamicArray`] is also re-exported under the parent module.

mod dynamic_array;

pub use dynamic_array::*;
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds};
