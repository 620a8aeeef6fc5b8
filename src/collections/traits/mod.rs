//! Traits describing the contracts that several collections in this crate share.

pub mod stack;

#[doc(inline)]
pub use stack::Stack;
