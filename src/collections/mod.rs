//! The container types of this crate, each in its own module behind a Cargo feature of the same
//! name (`tree` for [`binary_tree`]).
//!
//! # Method
//! Every buffer-backed type here is built on [`contiguous::Array`], and the growable ones share
//! the [`contiguous::growth`] policy. Types that are contiguous implement
//! [`Deref<Target = [T]>`](std::ops::Deref), which saves writing some of the more repetitive
//! functionality.

#[cfg(feature = "tree")]
pub mod binary_tree;
#[cfg(feature = "circ")]
pub mod circ;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "stack")]
pub mod stack;
#[cfg(feature = "text")]
pub mod text;
#[cfg(feature = "traits")]
pub mod traits;
