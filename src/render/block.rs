//! Square pixel blocks with in-place quarter-turn rotation

use image::Rgba;

use crate::spatial::tiles::Rotation;

/// 16-bit RGBA pixel
pub type Pixel = Rgba<u16>;

/// Square block of pixels stored flat and indexed by `(x, y)`
///
/// Pixels are laid out column by column: `(x, y)` lives at `x * size + y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBlock {
    size: usize,
    pixels: Vec<Pixel>,
}

impl PixelBlock {
    /// Wrap `pixels` as a `size × size` block
    ///
    /// Returns `None` unless exactly `size * size` pixels are supplied.
    pub fn new(size: usize, pixels: Vec<Pixel>) -> Option<Self> {
        (size.checked_mul(size) == Some(pixels.len())).then_some(Self { size, pixels })
    }

    /// Block filled with a single colour
    pub fn filled(size: usize, pixel: Pixel) -> Self {
        Self {
            size,
            pixels: vec![pixel; size * size],
        }
    }

    /// Build a block by evaluating `f(x, y)` for every pixel
    pub fn from_fn<F>(size: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Pixel,
    {
        let mut pixels = Vec::with_capacity(size * size);
        for x in 0..size {
            for y in 0..size {
                pixels.push(f(x, y));
            }
        }
        Self { size, pixels }
    }

    /// Edge length in pixels
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Pixel at `(x, y)`
    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.pixels.get(x * self.size + y).copied()
    }

    /// Rotate by one quarter turn in place
    ///
    /// Walks the concentric rings from the outside in, swapping four pixels at a
    /// time. The right edge ends up on the top edge, the same way a quarter turn
    /// moves a tile's right face to its front.
    pub fn rotate_quarter_turn(&mut self) {
        let n = self.size;
        for layer in 0..n / 2 {
            let last = n - 1 - layer;
            for i in layer..last {
                let offset = i - layer;
                let left = self.offset(layer, i);
                let top = self.offset(last - offset, layer);
                let right = self.offset(last, last - offset);
                let bottom = self.offset(i, last);

                // left <- top <- right <- bottom <- left
                self.pixels.swap(left, top);
                self.pixels.swap(top, right);
                self.pixels.swap(right, bottom);
            }
        }
    }

    /// Copy of the block turned by `rotation`
    #[must_use]
    pub fn rotated(&self, rotation: Rotation) -> Self {
        let mut block = self.clone();
        for _ in 0..rotation.quarter_turns() {
            block.rotate_quarter_turn();
        }
        block
    }

    const fn offset(&self, x: usize, y: usize) -> usize {
        x * self.size + y
    }
}
