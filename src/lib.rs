//! This crate re-implements, from first principles, the container primitives a standard library
//! normally provides.
//!
//! # Purpose
//! These types are written to learn about each of the data structures themselves: growth policies
//! for contiguous buffers, index arithmetic for ring buffers, pointer rewiring for linked nodes and
//! recursive maintenance of a search tree. None of them are balanced, lock-free or otherwise tuned,
//! but they aim to be correct.
//!
//! # Contents
//! - [`DynamicArray`](collections::contiguous::DynamicArray): a growable array with a fixed
//!   [growth policy](collections::contiguous::growth).
//! - [`ArrayStack`](collections::stack::ArrayStack) and
//!   [`LinkedStack`](collections::stack::LinkedStack): two backings for the same
//!   [`Stack`](collections::traits::Stack) contract, along with bracket matching and browser-style
//!   navigation.
//! - [`CircularQueue`](collections::circ::CircularQueue): a growable ring buffer, along with the
//!   Josephus elimination.
//! - [`DoublyLinkedList`](collections::linked::DoublyLinkedList): a list with positional and
//!   value-based editing, middle lookup, group reversal and cycle detection.
//! - [`CharBuffer`](collections::text::CharBuffer): an editable character sequence with substring
//!   search and replace, along with the longest common substring.
//! - [`SearchTree`](collections::binary_tree::SearchTree): an unbalanced binary search tree and its
//!   four traversals.
//!
//! # Error Handling
//! It is more ergonomic for some methods to panic, because users don't want to be forced to handle
//! an error every time they invoke a method. For example, imagine having to handle the possibility
//! of a capacity overflow every time you push into a DynamicArray. Methods like that come in pairs:
//! the plain method panics with the message of the error that its `try_` counterpart returns.
//!
//! Everything a caller is expected to check, such as popping an empty stack or indexing past the end
//! of a list, is reported through an [`Option`] or a [`Result`] instead.
//!
//! When this crate employs errors via [`Result`]s, it does so in a method that is strongly typed,
//! using enums for static dispatch rather than dynamic, with structs (often ZSTs) that implement
//! [`Error`](std::error::Error).
//!
//! # Logging
//! Buffer growth and tree removals emit [`tracing`] events at the `debug` and `trace` levels. No
//! subscriber is installed by this crate.
//!
//! # Dependencies
//! This crate doesn't use [`Vec`] at all, every collection is built on its own allocation. It does
//! depend on some derive macros because they're helpful and remove the need for some very
//! repetitive programming.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
