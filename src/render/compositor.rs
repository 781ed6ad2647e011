//! Stitches a solved grid into one image
//!
//! Every variant's texture is rotated once up front, then each cell copies its
//! variant's block into the tile-sized rectangle at `(x · tile, y · tile)`.
//! The image has no depth, so the caller picks a single layer or flattens all
//! layers with upper ones drawn over lower ones.

use std::collections::HashMap;

use image::ImageBuffer;

use crate::io::configuration::MAX_OUTPUT_PIXELS;
use crate::io::error::{Result, asset_error, invalid_parameter};
use crate::render::block::{Pixel, PixelBlock};
use crate::spatial::grid::Grid;
use crate::spatial::tiles::TileCatalog;

/// Composited 16-bit RGBA output image
pub type OutputImage = ImageBuffer<Pixel, Vec<u16>>;

/// Decoded textures keyed by texture reference, all sharing one edge length
#[derive(Debug, Clone)]
pub struct TextureAtlas {
    tile_size: usize,
    blocks: HashMap<String, PixelBlock>,
}

impl TextureAtlas {
    /// Create an empty atlas for blocks of `tile_size × tile_size` pixels
    pub fn new(tile_size: usize) -> Self {
        Self {
            tile_size,
            blocks: HashMap::new(),
        }
    }

    /// Register the block for `texture`
    ///
    /// # Errors
    ///
    /// Returns an asset error if the block's size differs from the atlas tile size
    pub fn insert(&mut self, texture: &str, block: PixelBlock) -> Result<()> {
        if block.size() != self.tile_size {
            return Err(asset_error(
                texture,
                &format!(
                    "is {0}x{0} pixels but tiles are {1}x{1}",
                    block.size(),
                    self.tile_size
                ),
            ));
        }
        self.blocks.insert(texture.to_string(), block);
        Ok(())
    }

    /// Block for `texture`
    pub fn get(&self, texture: &str) -> Option<&PixelBlock> {
        self.blocks.get(texture)
    }

    /// Edge length of every block in pixels
    pub const fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// Number of textures
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether no textures are registered
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Which grid layers end up in the image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayerSelection {
    /// Draw every layer from bottom to top, upper layers covering lower ones
    #[default]
    Flatten,
    /// Draw only layer `z`
    Single(usize),
}

/// Renders solved grids using pre-rotated blocks, one per variant
#[derive(Debug, Clone)]
pub struct Compositor {
    tile_size: usize,
    variant_blocks: Vec<PixelBlock>,
}

impl Compositor {
    /// Rotate each variant's texture by the variant's rotation
    ///
    /// # Errors
    ///
    /// Returns an asset error if a variant's texture is missing from the atlas
    pub fn new(catalog: &TileCatalog, atlas: &TextureAtlas) -> Result<Self> {
        let variant_blocks = catalog
            .variants()
            .iter()
            .map(|variant| {
                atlas
                    .get(&variant.texture)
                    .map(|block| block.rotated(variant.rotation))
                    .ok_or_else(|| asset_error(&variant.texture, &"texture was not loaded"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            tile_size: atlas.tile_size(),
            variant_blocks,
        })
    }

    /// Render the selected layers of `grid`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The selected layer is outside the grid
    /// - The output size does not fit in `u32` or exceeds `MAX_OUTPUT_PIXELS`
    /// - A cell holds a variant id unknown to the compositor
    pub fn compose(&self, grid: &Grid, layers: LayerSelection) -> Result<OutputImage> {
        let dimensions = grid.dimensions();
        let layer_range = match layers {
            LayerSelection::Flatten => 0..dimensions.z,
            LayerSelection::Single(z) if z < dimensions.z => z..z + 1,
            LayerSelection::Single(z) => {
                return Err(invalid_parameter(
                    "layer",
                    &z,
                    &format!("grid only has {} layers", dimensions.z),
                ));
            }
        };

        let width = self.pixel_extent("x", dimensions.x)?;
        let height = self.pixel_extent("y", dimensions.y)?;
        if u64::from(width) * u64::from(height) > MAX_OUTPUT_PIXELS {
            return Err(invalid_parameter(
                "output",
                &format!("{width}x{height}"),
                &format!("map image must not exceed {MAX_OUTPUT_PIXELS} pixels"),
            ));
        }
        let mut image = OutputImage::new(width, height);

        for z in layer_range {
            for y in 0..dimensions.y {
                for x in 0..dimensions.x {
                    let Some(id) = grid.get(x, y, z) else {
                        continue;
                    };
                    let block = self.variant_blocks.get(id).ok_or_else(|| {
                        invalid_parameter("variant", &id, &"not part of the tile catalog")
                    })?;
                    self.blit(&mut image, block, x, y);
                }
            }
        }

        Ok(image)
    }

    fn blit(&self, image: &mut OutputImage, block: &PixelBlock, cell_x: usize, cell_y: usize) {
        let origin_x = cell_x * self.tile_size;
        let origin_y = cell_y * self.tile_size;

        for x in 0..self.tile_size {
            for y in 0..self.tile_size {
                let Some(pixel) = block.get(x, y) else {
                    continue;
                };
                // Bounds were checked against u32 in `pixel_extent`
                if let Some(target) =
                    image.get_pixel_mut_checked((origin_x + x) as u32, (origin_y + y) as u32)
                {
                    *target = pixel;
                }
            }
        }
    }

    fn pixel_extent(&self, axis: &'static str, cells: usize) -> Result<u32> {
        cells
            .checked_mul(self.tile_size)
            .and_then(|pixels| u32::try_from(pixels).ok())
            .ok_or_else(|| {
                invalid_parameter(axis, &cells, &"output image would exceed u32::MAX pixels")
            })
    }
}
