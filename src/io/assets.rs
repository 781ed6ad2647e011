//! Texture loading into square pixel blocks

use std::path::Path;

use image::{ImageBuffer, Rgba};

use crate::io::error::{GenerationError, Result, asset_error};
use crate::render::block::PixelBlock;
use crate::render::compositor::TextureAtlas;
use crate::spatial::tiles::TileCatalog;

/// Convert a decoded square image into a pixel block
///
/// Returns `None` for non-square images.
pub fn block_from_image(image: &ImageBuffer<Rgba<u16>, Vec<u16>>) -> Option<PixelBlock> {
    let (width, height) = image.dimensions();
    if width != height {
        return None;
    }

    let size = width as usize;
    Some(PixelBlock::from_fn(size, |x, y| {
        image
            .get_pixel_checked(x as u32, y as u32)
            .copied()
            .unwrap_or(Rgba([0, 0, 0, 0]))
    }))
}

/// Decode one texture file into a pixel block
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist
/// - The file cannot be decoded as an image
/// - The image is not square
pub fn load_texture(texture: &str, path: &Path) -> Result<PixelBlock> {
    if !path.is_file() {
        return Err(asset_error(
            texture,
            &format!("no file at '{}'", path.display()),
        ));
    }

    let image = image::open(path)
        .map_err(|e| GenerationError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .to_rgba16();

    block_from_image(&image).ok_or_else(|| {
        let (width, height) = image.dimensions();
        asset_error(
            texture,
            &format!("tiles must be square, got {width}x{height} pixels"),
        )
    })
}

/// Decode every texture referenced by the catalog
///
/// Relative references are resolved against `base_dir`. All textures must share
/// one edge length, taken from the first texture loaded.
///
/// # Errors
///
/// Returns an asset error if any texture is missing, undecodable, non-square or
/// sized differently from the others
pub fn load_textures(catalog: &TileCatalog, base_dir: &Path) -> Result<TextureAtlas> {
    let mut atlas: Option<TextureAtlas> = None;

    for texture in catalog.textures() {
        let block = load_texture(texture, &base_dir.join(texture))?;
        atlas
            .get_or_insert_with(|| TextureAtlas::new(block.size()))
            .insert(texture, block)?;
    }

    Ok(atlas.unwrap_or_else(|| TextureAtlas::new(0)))
}
