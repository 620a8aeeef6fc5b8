//! Tree-based collection types. Currently just [`SearchTree`], an unbalanced binary search tree.
#![warn(missing_docs)]

mod branch;
mod search_tree;
mod tests;

pub(crate) use branch::*;
pub use search_tree::*;
