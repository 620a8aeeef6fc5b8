//! Stack types and the algorithms built on them. [`ArrayStack`] and [`LinkedStack`] both implement
//! [`Stack`](crate::collections::traits::Stack), so [`brackets`] and [`navigation`] work over
//! either one.
#![warn(missing_docs)]

pub mod brackets;
pub mod navigation;

mod array_stack;
mod linked_stack;
mod tests;

pub use array_stack::*;
pub use linked_stack::*;

#[doc(inline)]
pub use crate::util::error::EmptyContainer;
