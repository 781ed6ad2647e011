//! Input/output operations and error handling

/// Texture decoding into pixel blocks
pub mod assets;
/// Tile catalog loading
pub mod catalog;
/// Command-line interface and run orchestration
pub mod cli;
/// Runtime configuration defaults
pub mod configuration;
/// Error types
pub mod error;
/// JSON map data export
pub mod export;
/// PNG map export
pub mod image;
/// Stage timing and progress display
pub mod progress;
