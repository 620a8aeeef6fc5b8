#![warn(missing_docs)]

pub mod alloc;
pub mod error;
pub mod fmt;
pub mod panic;
pub mod result;
