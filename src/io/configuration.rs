//! Runtime configuration defaults

// Default grid fills a 3840x2160 screen with 16x16 tiles
/// Default number of tiles per row
pub const DEFAULT_X: i64 = 3840 / 16;
/// Default number of rows per layer
pub const DEFAULT_Y: i64 = 2160 / 16;
/// Default number of layers
pub const DEFAULT_Z: i64 = 1;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;
/// Maximum number of cells in a grid
pub const MAX_GRID_CELLS: usize = 50_000_000;
/// Maximum number of pixels in a composited map image
pub const MAX_OUTPUT_PIXELS: u64 = 1 << 28;

/// Default tile catalog path
pub const DEFAULT_INPUT_PATH: &str = "input.json";
/// Default output path
pub const DEFAULT_OUTPUT_PATH: &str = "output.png";

/// Default number of solve attempts before giving up on an unsatisfiable cell
pub const DEFAULT_ATTEMPTS: u32 = 1;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Spinner refresh interval
pub const SPINNER_TICK_MS: u64 = 80;
