//! Scan-order tile placement on a 3D grid
//!
//! Authored tiles carry one face identifier per axis direction. The catalog is
//! expanded with rotated variants, indexed by face identifier, and a grid is
//! filled cell by cell so that every pair of neighbouring cells agrees on the
//! face they share. The solved grid can be rendered as an image or exported as
//! JSON.

#![forbid(unsafe_code)]

/// Adjacency index, candidate sets and the scan-order solver
pub mod algorithm;
/// Command-line interface, file loading, export and error handling
pub mod io;
/// Pixel block rotation and image compositing
pub mod render;
/// Tile definitions, rotation expansion and the grid
pub mod spatial;

pub use io::error::{GenerationError, Result};
