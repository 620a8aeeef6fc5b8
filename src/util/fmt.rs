use std::fmt::{self, Debug, Formatter};

/// Stands in for a slot that holds no value when rendering the backing buffer of a collection.
#[derive(Clone, Copy)]
pub struct EmptySlot;

impl Debug for EmptySlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "-")
    }
}

/// Renders the items of an iterator as a debug list, so that collections which can't be borrowed
/// as a slice can still be passed to [`DebugStruct::field`](std::fmt::DebugStruct::field).
pub struct DebugIter<I>(pub I);

impl<I> Debug for DebugIter<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}
