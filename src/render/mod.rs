//! Rendering of solved grids into pixel images

/// Square pixel blocks and in-place rotation
pub mod block;
/// Texture atlas and grid compositing
pub mod compositor;
