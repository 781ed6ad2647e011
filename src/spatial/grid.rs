//! Grid dimensions and the solved tile grid
//!
//! Cells are stored in a dense `[z][y][x]` array so that a layer is contiguous
//! and rows within it are contiguous, matching the solver's scan order.

use ndarray::{Array3, ArrayView2, Axis};

use crate::io::configuration::{MAX_GRID_CELLS, MAX_GRID_DIMENSION};
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::spatial::tiles::VariantId;

/// Validated grid size in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Cells per row
    pub x: usize,
    /// Rows per layer
    pub y: usize,
    /// Layers
    pub z: usize,
}

impl Dimensions {
    /// Validate raw dimensions
    ///
    /// # Errors
    ///
    /// Returns `Dimension` if any axis is zero or negative and
    /// `InvalidParameter` if any axis exceeds `MAX_GRID_DIMENSION` or the grid
    /// holds more than `MAX_GRID_CELLS` cells
    pub fn new(x: i64, y: i64, z: i64) -> Result<Self> {
        let dimensions = Self {
            x: Self::validate_axis("x", x)?,
            y: Self::validate_axis("y", y)?,
            z: Self::validate_axis("z", z)?,
        };

        let cells = dimensions
            .x
            .checked_mul(dimensions.y)
            .and_then(|layer| layer.checked_mul(dimensions.z))
            .filter(|&cells| cells <= MAX_GRID_CELLS);
        if cells.is_none() {
            return Err(invalid_parameter(
                "cells",
                &format!("{x}x{y}x{z}"),
                &format!("grid must not exceed {MAX_GRID_CELLS} cells"),
            ));
        }

        Ok(dimensions)
    }

    fn validate_axis(axis: &'static str, value: i64) -> Result<usize> {
        if value <= 0 {
            return Err(GenerationError::Dimension { axis, value });
        }
        let size = usize::try_from(value).map_err(|_overflow| {
            invalid_parameter(axis, &value, &"does not fit in memory on this platform")
        })?;
        if size > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                axis,
                &value,
                &format!("must not exceed {MAX_GRID_DIMENSION}"),
            ));
        }
        Ok(size)
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.x * self.y * self.z
    }

    const fn shape(self) -> (usize, usize, usize) {
        (self.z, self.y, self.x)
    }
}

/// Fully assigned grid of variant ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array3<VariantId>,
}

impl Grid {
    /// Allocate a grid with every cell holding variant `0`
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            cells: Array3::zeros(dimensions.shape()),
        }
    }

    /// Build a grid from nested `[z][y][x]` rows
    ///
    /// Returns `None` when the input is empty or ragged.
    pub fn from_nested(layers: &[Vec<Vec<VariantId>>]) -> Option<Self> {
        let z = layers.len();
        let y = layers.first()?.len();
        let x = layers.first()?.first()?.len();
        let flat: Vec<VariantId> = layers
            .iter()
            .flat_map(|layer| layer.iter().flat_map(|row| row.iter().copied()))
            .collect();

        let uniform = layers
            .iter()
            .all(|layer| layer.len() == y && layer.iter().all(|row| row.len() == x));
        if !uniform || x == 0 || y == 0 {
            return None;
        }

        Array3::from_shape_vec((z, y, x), flat)
            .ok()
            .map(|cells| Self { cells })
    }

    /// Grid size
    pub fn dimensions(&self) -> Dimensions {
        let (z, y, x) = self.cells.dim();
        Dimensions { x, y, z }
    }

    /// Variant at `(x, y, z)`
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<VariantId> {
        self.cells.get([z, y, x]).copied()
    }

    /// Overwrite the variant at `(x, y, z)`
    ///
    /// Returns `false` if the position lies outside the grid.
    pub fn set(&mut self, x: usize, y: usize, z: usize, id: VariantId) -> bool {
        self.cells.get_mut([z, y, x]).map(|cell| *cell = id).is_some()
    }

    /// One layer as a `[y][x]` view
    pub fn layer(&self, z: usize) -> Option<ArrayView2<'_, VariantId>> {
        (z < self.cells.len_of(Axis(0))).then(|| self.cells.index_axis(Axis(0), z))
    }

    /// Copy out as nested `[z][y][x]` vectors
    pub fn to_nested(&self) -> Vec<Vec<Vec<VariantId>>> {
        self.cells
            .outer_iter()
            .map(|layer| layer.outer_iter().map(|row| row.to_vec()).collect())
            .collect()
    }
}
