use std::num::NonZero;

use crate::util::error::CapacityOverflow;

/// The length of a list that holds at least one node. An empty list has no Length at all, so the
/// head and tail of a full list never need to be optional.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) struct Length(pub NonZero<usize>);

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);

impl Length {
    pub const fn get(self) -> usize {
        self.0.get()
    }

    pub const fn incremented(self) -> Result<Length, CapacityOverflow> {
        match self.0.checked_add(1) {
            Some(len) => Ok(Length(len)),
            None => Err(CapacityOverflow),
        }
    }

    /// Returns [`None`] if removing one node would leave the list empty.
    pub const fn decremented(self) -> Option<Length> {
        match NonZero::new(self.0.get() - 1) {
            Some(len) => Some(Length(len)),
            None => None,
        }
    }

    pub const fn last_index(self) -> usize {
        self.0.get() - 1
    }
}
