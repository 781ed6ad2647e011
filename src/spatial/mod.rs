//! Spatial data structures
//!
//! This module contains spatial-related functionality including:
//! - Tile definitions, faces and rotation expansion
//! - Grid dimensions and the solved grid

/// Grid dimensions and storage
pub mod grid;
/// Tile definitions, variants and the expanded catalog
pub mod tiles;

pub use grid::{Dimensions, Grid};
pub use tiles::{TileCatalog, TileDefinition, TileVariant};
