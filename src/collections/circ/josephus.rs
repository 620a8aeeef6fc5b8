//! The Josephus elimination, played out on a [`CircularQueue`].

use derive_more::{Display, Error, IsVariant};

use crate::collections::circ::CircularQueue;
use crate::collections::contiguous::DynamicArray;

/// Returned by [`josephus`] when no elimination can take place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, IsVariant)]
pub enum JosephusError {
    /// The circle was empty.
    #[display("At least one participant is required!")]
    NoParticipants,
    /// The step between eliminations was zero.
    #[display("The elimination step must be at least 1!")]
    ZeroStep,
}

/// Seats `n` participants, numbered `1..=n`, in a circle. Counting starts from participant `start`
/// and every `out`th participant counted leaves the circle, with counting restarting from the next
/// one. Returns the numbers of the participants in the order they were eliminated.
///
/// A `start` of 0 is treated as 1 and values above `n` wrap around the circle.
///
/// # Errors
/// Returns [`JosephusError`] if `n` or `out` is zero.
///
/// # Examples
/// ```
/// # use primitive_collections::collections::circ::josephus;
/// let order = josephus(5, 1, 2).unwrap();
/// assert_eq!(order, [2, 4, 1, 5, 3]);
/// ```
pub fn josephus(n: usize, start: usize, out: usize) -> Result<DynamicArray<usize>, JosephusError> {
    if n == 0 {
        return Err(JosephusError::NoParticipants);
    }
    if out == 0 {
        return Err(JosephusError::ZeroStep);
    }

    let mut circle = CircularQueue::with_cap(n);
    circle.extend(1..=n);
    rotate(&mut circle, (start.max(1) - 1) % n);

    let mut order = DynamicArray::with_cap(n);
    while !circle.is_empty() {
        let skip = (out - 1) % circle.len();
        rotate(&mut circle, skip);
        if let Some(eliminated) = circle.dequeue() {
            order.push(eliminated);
        }
    }

    Ok(order)
}

/// Moves `count` participants from the front of the circle to the back.
fn rotate<T>(circle: &mut CircularQueue<T>, count: usize) {
    for _ in 0..count {
        if let Some(passed) = circle.dequeue() {
            circle.enqueue(passed);
        }
    }
}
