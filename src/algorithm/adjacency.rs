//! Face-identifier index answering "which variants may sit here" in O(1)
//!
//! One table per direction maps a face identifier to every variant exposing that
//! identifier on the face pointing in that direction. Tables are filled in
//! variant id order and never change afterwards.

use std::collections::HashMap;

use crate::spatial::tiles::{Direction, FaceId, TileCatalog, VariantId};

/// Per-direction lookup from face identifier to variant ids
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    tables: [HashMap<FaceId, Vec<VariantId>>; 6],
}

impl AdjacencyIndex {
    /// Index every variant of the catalog under each of its six faces
    pub fn build(catalog: &TileCatalog) -> Self {
        let mut tables: [HashMap<FaceId, Vec<VariantId>>; 6] = Default::default();

        for variant in catalog.variants() {
            for direction in Direction::ALL {
                if let Some(table) = tables.get_mut(direction.index()) {
                    table
                        .entry(variant.faces.get(direction))
                        .or_default()
                        .push(variant.id);
                }
            }
        }

        Self { tables }
    }

    /// Variants whose face towards `direction` carries `face`
    pub fn exposing(&self, direction: Direction, face: FaceId) -> &[VariantId] {
        self.tables
            .get(direction.index())
            .and_then(|table| table.get(&face))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Variants allowed directly in `direction` from a tile whose face towards
    /// `direction` carries `face`
    ///
    /// The neighbour touches that face with its opposite one, so the lookup goes
    /// through the opposite direction's table.
    pub fn neighbours(&self, direction: Direction, face: FaceId) -> &[VariantId] {
        self.exposing(direction.opposite(), face)
    }

    /// Number of distinct face identifiers seen on faces towards `direction`
    pub fn face_count(&self, direction: Direction) -> usize {
        self.tables.get(direction.index()).map_or(0, HashMap::len)
    }
}
