//! Contiguous collection types. Namely [`Array`] for raw fixed-size storage and [`DynamicArray`]
//! for a collection that grows at runtime, along with the [`growth`] policy shared by every
//! buffer-backed collection in this crate.
#![warn(missing_docs)]

pub mod array;
pub mod dynamic_array;
pub mod growth;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use dynamic_array::DynamicArray;
