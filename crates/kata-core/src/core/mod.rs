//! # Core Module
//!
//! Square-grid algorithms that form the centre of the crate.
//!
//! - **Container** ([`grid`]) - The [`Grid`](grid::Grid) type, ring geometry, and [`GridError`](grid::GridError)
//! - **Spiral Filling** ([`spiral`]) - Builds an `N×N` grid holding `1..=N²` in clockwise spiral order
//! - **Rotation** ([`rotation`]) - Rotates a grid 90 degrees clockwise, reusing its storage
//!
//! The two algorithms do not depend on each other. Both are `O(N²)` and allocate
//! at most the grid they return.

pub mod grid;
pub mod rotation;
pub mod spiral;
