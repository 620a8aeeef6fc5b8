//! Circular collection types. Currently just [`CircularQueue`], a growable ring buffer, and the
//! [`josephus`] elimination built on top of it.
#![warn(missing_docs)]

pub mod josephus;

mod circular_queue;
mod tests;

pub use circular_queue::*;
#[doc(inline)]
pub use josephus::{JosephusError, josephus};
