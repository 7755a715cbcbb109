//! Independent drills on numbers, strings and slices.
//!
//! Each function here is a leaf: it shares no state with the others and none of
//! them is used by the grid algorithms in [`crate::core`].

pub mod arrays;
pub mod chess;
pub mod digits;
pub mod error;
pub mod numeric;
pub mod roman;
pub mod text;

pub use error::TaskError;
