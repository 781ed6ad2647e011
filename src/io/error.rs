//! Error types for catalog loading, solving, compositing and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Tile catalog could not be read or decoded
    Catalog {
        /// Path to the catalog file
        path: PathBuf,
        /// Description of what went wrong
        reason: String,
    },

    /// A texture referenced by the catalog is missing or unusable
    Asset {
        /// Texture reference as written in the catalog
        texture: String,
        /// Description of what's wrong with the texture
        reason: String,
    },

    /// Failed to decode a texture image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// No tile variant is compatible with the already placed neighbours
    ///
    /// The solver never revisits a decision, so this aborts the run. Restarting
    /// with another seed may succeed.
    UnsatisfiableCell {
        /// Cell coordinates as `[x, y, z]`
        position: [usize; 3],
    },

    /// A grid dimension is zero or negative
    Dimension {
        /// Axis name (`x`, `y` or `z`)
        axis: &'static str,
        /// Provided value
        value: i64,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Failed to encode the generation result as JSON
    Serialization {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying encoder error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl GenerationError {
    /// Whether restarting the solve with a different seed can fix this error
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::UnsatisfiableCell { .. })
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog { path, reason } => {
                write!(f, "Invalid tile catalog '{}': {reason}", path.display())
            }
            Self::Asset { texture, reason } => {
                write!(f, "Invalid texture '{texture}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::UnsatisfiableCell { position } => {
                write!(
                    f,
                    "No compatible tile for cell (x={}, y={}, z={})",
                    position[0], position[1], position[2]
                )
            }
            Self::Dimension { axis, value } => {
                write!(f, "Grid dimension {axis} = {value} must be at least 1")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { path, source } => {
                write!(
                    f,
                    "Failed to write map data to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

impl From<image::ImageError> for GenerationError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an asset error for a texture reference
pub fn asset_error(texture: &str, reason: &impl ToString) -> GenerationError {
    GenerationError::Asset {
        texture: texture.to_string(),
        reason: reason.to_string(),
    }
}
