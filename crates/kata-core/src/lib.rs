//! # Loopkata Core Library
//!
//! A collection of small, self-contained exercises in loops and branching,
//! written as pure functions over owned or exclusively borrowed data.
//!
//! ## Layout
//!
//! The library is split into two independent layers:
//!
//! - **[`core`]: The Grid Algorithms.** The square [`Grid`](core::grid::Grid)
//!   container together with the two algorithms that operate on it: clockwise
//!   spiral filling and in-place 90-degree rotation.
//!
//! - **[`tasks`]: The Catalog.** Leaf utilities (numeric predicates, Roman
//!   numerals, digit and string manipulation, balance-point search, sorting) that
//!   share no state with each other or with the grid algorithms.
//!
//! Nothing in this crate performs I/O or keeps state between calls; every
//! function is reentrant and may be called concurrently on disjoint inputs.

pub mod core;
pub mod tasks;
