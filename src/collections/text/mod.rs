//! Text types. [`CharBuffer`] is a growable buffer of [`char`]s that can be searched and edited in
//! place, and [`longest_common_substring`] is built on it.
#![warn(missing_docs)]

mod char_buffer;
mod lcs;
mod tests;

pub use char_buffer::*;
pub use lcs::*;
