//! Linked collection types. Currently just [`DoublyLinkedList`].
#![warn(missing_docs)]

pub mod list;

#[doc(inline)]
pub use list::DoublyLinkedList;
