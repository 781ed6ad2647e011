//! JSON export of the solved grid together with the variant table

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::io::error::{GenerationError, Result};
use crate::io::image::ensure_parent_dir;
use crate::spatial::grid::{Dimensions, Grid};
use crate::spatial::tiles::{TileCatalog, TileVariant, VariantId};

/// Grid size as written to the map data
#[derive(Debug, Serialize)]
pub struct DimensionsSummary {
    /// Cells per row
    pub x: usize,
    /// Rows per layer
    pub y: usize,
    /// Layers
    pub z: usize,
}

impl From<Dimensions> for DimensionsSummary {
    fn from(dimensions: Dimensions) -> Self {
        Self {
            x: dimensions.x,
            y: dimensions.y,
            z: dimensions.z,
        }
    }
}

/// Serializable generation result
#[derive(Debug, Serialize)]
pub struct MapData<'a> {
    /// Seed the grid was solved with
    pub seed: u64,
    /// Grid size
    pub dimensions: DimensionsSummary,
    /// Every variant keyed by its id
    pub tiles: BTreeMap<VariantId, &'a TileVariant>,
    /// Variant ids as nested `[z][y][x]` arrays
    pub grid: Vec<Vec<Vec<VariantId>>>,
}

impl<'a> MapData<'a> {
    /// Collect the variant table and grid for serialization
    pub fn new(catalog: &'a TileCatalog, grid: &Grid, seed: u64) -> Self {
        Self {
            seed,
            dimensions: grid.dimensions().into(),
            tiles: catalog
                .variants()
                .iter()
                .map(|variant| (variant.id, variant))
                .collect(),
            grid: grid.to_nested(),
        }
    }
}

/// Write map data as pretty-printed JSON to any writer
///
/// # Errors
///
/// Returns a serialization error if encoding or writing fails
pub fn write_map_data<W: Write>(data: &MapData<'_>, writer: W, path: &Path) -> Result<()> {
    serde_json::to_writer_pretty(writer, data).map_err(|e| GenerationError::Serialization {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write map data as pretty-printed JSON to `output_path`
///
/// # Errors
///
/// Returns an error if the file cannot be created or the data cannot be written
pub fn export_map_data(data: &MapData<'_>, output_path: &Path) -> Result<()> {
    ensure_parent_dir(output_path)?;

    let file = File::create(output_path).map_err(|e| GenerationError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;
    let mut writer = BufWriter::new(file);
    write_map_data(data, &mut writer, output_path)?;

    writer.flush().map_err(|e| GenerationError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write file",
        source: e,
    })
}
