//! The growth policy shared by [`DynamicArray`](super::DynamicArray),
//! [`CircularQueue`](crate::collections::circ::CircularQueue) and every collection built on them.
//!
//! A buffer below [`DEFAULT_CAP`] grows straight to it, anything larger grows by half of its
//! current capacity. Buffers never shrink on their own.

use std::cmp;

use crate::util::error::CapacityOverflow;

/// The capacity that any buffer smaller than it grows to.
pub const DEFAULT_CAP: usize = 10;

/// Calculates the capacity a buffer of capacity `cap` should grow to so that it can hold at least
/// `required` values.
///
/// # Errors
/// Returns [`CapacityOverflow`] if the new capacity isn't representable as a [`usize`]. Whether the
/// resulting allocation fits in memory is checked separately, when allocating.
///
/// # Examples
/// ```
/// # use primitive_collections::collections::contiguous::growth::{grown_cap, DEFAULT_CAP};
/// assert_eq!(grown_cap(0, 1), Ok(DEFAULT_CAP));
/// assert_eq!(grown_cap(10, 11), Ok(15));
/// assert_eq!(grown_cap(15, 16), Ok(22));
/// assert_eq!(grown_cap(15, 40), Ok(40));
/// ```
pub fn grown_cap(cap: usize, required: usize) -> Result<usize, CapacityOverflow> {
    let grown = if cap < DEFAULT_CAP {
        DEFAULT_CAP
    } else {
        // cap + cap / 2 is floor(cap * 1.5) without the intermediate overflow of cap * 3.
        cap.checked_add(cap / 2).ok_or(CapacityOverflow)?
    };

    Ok(cmp::max(grown, required))
}
