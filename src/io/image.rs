//! PNG export of composited maps

use std::path::Path;

use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::render::compositor::OutputImage;

/// Save the composited map, creating parent directories as needed
///
/// The format follows the file extension; `.png` keeps all 16 bits per channel.
///
/// # Errors
///
/// Returns an error if:
/// - The image has no pixels
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_map_image(image: &OutputImage, output_path: &Path) -> Result<()> {
    if image.width() == 0 || image.height() == 0 {
        return Err(invalid_parameter(
            "output",
            &output_path.display(),
            &"map image has no pixels",
        ));
    }

    ensure_parent_dir(output_path)?;

    image
        .save(output_path)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Create the parent directory of `path` if it has one
///
/// # Errors
///
/// Returns a file system error if the directory cannot be created
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })
        }
        _ => Ok(()),
    }
}
