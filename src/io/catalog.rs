//! Tile catalog loading from JSON

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::io::error::{GenerationError, Result};
use crate::spatial::tiles::TileDefinition;

/// Decode tile definitions from any JSON reader
///
/// `path` is only used for error messages.
///
/// # Errors
///
/// Returns a catalog error if the input is not a JSON array of tile definitions
pub fn read_definitions<R: Read>(reader: R, path: &Path) -> Result<Vec<TileDefinition>> {
    serde_json::from_reader(reader).map_err(|e| GenerationError::Catalog {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Load tile definitions from a JSON file
///
/// # Errors
///
/// Returns a catalog error if the file cannot be opened or decoded
pub fn load_definitions(path: &Path) -> Result<Vec<TileDefinition>> {
    let file = File::open(path).map_err(|e| GenerationError::Catalog {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    read_definitions(BufReader::new(file), path)
}
