//! A module containing [`Array`], the raw fixed-size heap buffer that the growable collections
//! are built on.
//!
//! [`Array`] is also re-exported under the parent module.

mod array;

pub use array::*;
