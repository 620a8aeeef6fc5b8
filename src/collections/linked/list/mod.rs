//! A module containing [`DoublyLinkedList`], a list of nodes linked in both directions.

mod doubly_linked_list;
mod length;
mod node;
mod tests;

pub use doubly_linked_list::*;
pub(crate) use length::*;
pub(crate) use node::*;
