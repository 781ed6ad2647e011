//! Tile definitions and rotation expansion
//!
//! Authored tile definitions describe one face identifier per axis direction.
//! Definitions that allow rotation are expanded into four variants, one per
//! quarter turn about the vertical axis, each with its horizontal faces permuted.
//! The expanded catalog assigns every variant a dense id starting at zero.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Integer tag carried by one face of a tile
pub type FaceId = i64;

/// Dense index of a tile variant within a [`TileCatalog`]
pub type VariantId = usize;

/// One of the six axis directions a tile face can point to
///
/// Seen from above, `PosX` faces towards the previous row, `NegX` towards the
/// next row, `PosY` towards the next column and `NegY` towards the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Front face (towards row `y - 1`)
    PosX,
    /// Back face (towards row `y + 1`)
    NegX,
    /// Right face (towards column `x + 1`)
    PosY,
    /// Left face (towards column `x - 1`)
    NegY,
    /// Top face (towards layer `z + 1`)
    PosZ,
    /// Bottom face (towards layer `z - 1`)
    NegZ,
}

impl Direction {
    /// All six directions in index order
    pub const ALL: [Self; 6] = [
        Self::PosX,
        Self::NegX,
        Self::PosY,
        Self::NegY,
        Self::PosZ,
        Self::NegZ,
    ];

    /// The direction pointing the other way along the same axis
    pub const fn opposite(self) -> Self {
        match self {
            Self::PosX => Self::NegX,
            Self::NegX => Self::PosX,
            Self::PosY => Self::NegY,
            Self::NegY => Self::PosY,
            Self::PosZ => Self::NegZ,
            Self::NegZ => Self::PosZ,
        }
    }

    /// Position of this direction in [`Direction::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Quarter turns about the vertical axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Rotation {
    /// No rotation
    #[default]
    R0,
    /// One quarter turn
    R90,
    /// Two quarter turns
    R180,
    /// Three quarter turns
    R270,
}

impl Rotation {
    /// All rotations in quarter-turn order
    pub const ALL: [Self; 4] = [Self::R0, Self::R90, Self::R180, Self::R270];

    /// Build from a number of quarter turns, wrapping modulo four
    pub const fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => Self::R0,
            1 => Self::R90,
            2 => Self::R180,
            _ => Self::R270,
        }
    }

    /// Number of quarter turns in `0..4`
    pub const fn quarter_turns(self) -> u8 {
        self as u8
    }

    /// Rotation equivalent to applying `self` then `other`
    #[must_use]
    pub const fn then(self, other: Self) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + other.quarter_turns())
    }
}

impl From<Rotation> for u8 {
    fn from(rotation: Rotation) -> Self {
        rotation.quarter_turns()
    }
}

impl TryFrom<u8> for Rotation {
    type Error = String;

    fn try_from(turns: u8) -> Result<Self, Self::Error> {
        if turns < 4 {
            Ok(Self::from_quarter_turns(turns))
        } else {
            Err(format!("rotation must be in 0..=3, got {turns}"))
        }
    }
}

/// Face identifiers of a tile, one per axis direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Faces {
    /// Front face
    pub pos_x: FaceId,
    /// Right face
    pub pos_y: FaceId,
    /// Back face
    pub neg_x: FaceId,
    /// Left face
    pub neg_y: FaceId,
    /// Top face
    pub pos_z: FaceId,
    /// Bottom face
    pub neg_z: FaceId,
}

impl Faces {
    /// Every face carries the same identifier
    pub const fn uniform(id: FaceId) -> Self {
        Self {
            pos_x: id,
            pos_y: id,
            neg_x: id,
            neg_y: id,
            pos_z: id,
            neg_z: id,
        }
    }

    /// Identifier on the face pointing towards `direction`
    pub const fn get(&self, direction: Direction) -> FaceId {
        match direction {
            Direction::PosX => self.pos_x,
            Direction::NegX => self.neg_x,
            Direction::PosY => self.pos_y,
            Direction::NegY => self.neg_y,
            Direction::PosZ => self.pos_z,
            Direction::NegZ => self.neg_z,
        }
    }

    /// Faces after turning the tile by `rotation`
    ///
    /// A quarter turn moves the right face to the front, the front to the left,
    /// the left to the back and the back to the right. Vertical faces stay put.
    #[must_use]
    pub const fn rotated(&self, rotation: Rotation) -> Self {
        let (pos_x, pos_y, neg_x, neg_y) = match rotation {
            Rotation::R0 => (self.pos_x, self.pos_y, self.neg_x, self.neg_y),
            Rotation::R90 => (self.pos_y, self.neg_x, self.neg_y, self.pos_x),
            Rotation::R180 => (self.neg_x, self.neg_y, self.pos_x, self.pos_y),
            Rotation::R270 => (self.neg_y, self.pos_x, self.pos_y, self.neg_x),
        };

        Self {
            pos_x,
            pos_y,
            neg_x,
            neg_y,
            pos_z: self.pos_z,
            neg_z: self.neg_z,
        }
    }
}

/// Authored tile as read from the catalog file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileDefinition {
    /// Reference to the tile's texture (usually a file path)
    pub texture: String,
    /// Whether the three rotated variants should be generated
    #[serde(default)]
    pub allow_rotation: bool,
    /// Face identifiers
    #[serde(flatten)]
    pub faces: Faces,
}

/// One concrete, possibly rotated, instantiation of a tile definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileVariant {
    /// Dense variant id
    pub id: VariantId,
    /// Texture reference inherited from the definition
    pub texture: String,
    /// Quarter turns applied to the definition
    pub rotation: Rotation,
    /// Face identifiers after rotation
    #[serde(flatten)]
    pub faces: Faces,
}

/// Expanded tile set with sequential variant ids
#[derive(Debug, Clone, Default)]
pub struct TileCatalog {
    variants: Vec<TileVariant>,
}

impl TileCatalog {
    /// Expand definitions into variants
    ///
    /// Each definition yields its unrotated variant, followed by the three
    /// rotated variants when rotation is allowed. Rotations are always derived
    /// from the definition's own faces.
    pub fn from_definitions(definitions: &[TileDefinition]) -> Self {
        let mut variants = Vec::with_capacity(definitions.len() * Rotation::ALL.len());

        for definition in definitions {
            let rotations: &[Rotation] = if definition.allow_rotation {
                &Rotation::ALL
            } else {
                &[Rotation::R0]
            };

            for &rotation in rotations {
                variants.push(TileVariant {
                    id: variants.len(),
                    texture: definition.texture.clone(),
                    rotation,
                    faces: definition.faces.rotated(rotation),
                });
            }
        }

        Self { variants }
    }

    /// Number of variants
    pub const fn len(&self) -> usize {
        self.variants.len()
    }

    /// Whether the catalog holds no variants
    pub const fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Look up a variant by id
    pub fn get(&self, id: VariantId) -> Option<&TileVariant> {
        self.variants.get(id)
    }

    /// All variants in id order
    pub fn variants(&self) -> &[TileVariant] {
        &self.variants
    }

    /// Iterator over every variant id
    pub fn ids(&self) -> std::ops::Range<VariantId> {
        0..self.variants.len()
    }

    /// Distinct texture references in first-seen order
    pub fn textures(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.variants
            .iter()
            .map(|variant| variant.texture.as_str())
            .filter(|texture| seen.insert(*texture))
            .collect()
    }
}
