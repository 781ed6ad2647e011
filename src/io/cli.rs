//! Command-line interface and the end-to-end generation run

use crate::algorithm::adjacency::AdjacencyIndex;
use crate::algorithm::solver::GridSolver;
use crate::io::assets::load_textures;
use crate::io::catalog::load_definitions;
use crate::io::configuration::{
    DEFAULT_ATTEMPTS, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_X, DEFAULT_Y, DEFAULT_Z,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::export::{MapData, export_map_data};
use crate::io::image::export_map_image;
use crate::io::progress::ProgressReporter;
use crate::render::compositor::{Compositor, LayerSelection};
use crate::spatial::grid::{Dimensions, Grid};
use crate::spatial::tiles::TileCatalog;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Output written at the end of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Stitched PNG map
    Image,
    /// Variant table and grid as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "tilestack")]
#[command(
    author,
    version,
    about = "Fill a 3D grid with face-compatible tiles and render or export it"
)]
/// Command-line arguments for the map generator
pub struct Cli {
    /// Tile catalog JSON file
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Output file (PNG map or JSON map data)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Number of tiles per row
    #[arg(short = 'x', default_value_t = DEFAULT_X, allow_negative_numbers = true)]
    pub x: i64,

    /// Number of rows per layer
    #[arg(short = 'y', default_value_t = DEFAULT_Y, allow_negative_numbers = true)]
    pub y: i64,

    /// Number of layers
    #[arg(short = 'z', default_value_t = DEFAULT_Z, allow_negative_numbers = true)]
    pub z: i64,

    /// Random seed for reproducible generation (defaults to the current time)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output format (inferred from the output extension when omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Render only this layer instead of flattening all layers
    #[arg(short, long)]
    pub layer: Option<usize>,

    /// Solve attempts, each with the next seed, when a cell has no compatible tile
    #[arg(short, long, default_value_t = DEFAULT_ATTEMPTS)]
    pub attempts: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Explicit format, or `Json` for a `.json` output and `Image` otherwise
    pub fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_else(|| {
            let is_json = self
                .output
                .extension()
                .and_then(|s| s.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
            if is_json {
                OutputFormat::Json
            } else {
                OutputFormat::Image
            }
        })
    }

    /// Layers drawn into the map image
    pub const fn layer_selection(&self) -> LayerSelection {
        match self.layer {
            Some(z) => LayerSelection::Single(z),
            None => LayerSelection::Flatten,
        }
    }

    /// Seed for the first attempt
    pub fn base_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |elapsed| elapsed.as_secs())
        })
    }
}

/// Figures reported at the end of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of authored tile definitions
    pub definitions: usize,
    /// Number of variants after rotation expansion
    pub variants: usize,
    /// Seed of the successful attempt
    pub seed: u64,
    /// Attempts used, including the successful one
    pub attempts: u32,
    /// Where the output was written
    pub output: PathBuf,
}

/// Runs the whole pipeline for one set of CLI arguments
pub struct Generator {
    cli: Cli,
    progress: ProgressReporter,
}

impl Generator {
    /// Create a generator with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            ProgressReporter::new()
        } else {
            ProgressReporter::hidden()
        };

        Self { cli, progress }
    }

    /// Load, expand, index, solve and write the result
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The grid dimensions or attempt count are invalid
    /// - The catalog or a texture cannot be loaded
    /// - Every attempt hits a cell with no compatible tile
    /// - The output cannot be written
    pub fn run(&mut self) -> Result<RunSummary> {
        let result = self.run_stages();
        if result.is_err() {
            self.progress.abandon_stage();
        }
        result
    }

    fn run_stages(&mut self) -> Result<RunSummary> {
        let dimensions = Dimensions::new(self.cli.x, self.cli.y, self.cli.z)?;
        if self.cli.attempts == 0 {
            return Err(invalid_parameter(
                "attempts",
                &self.cli.attempts,
                &"must be at least 1",
            ));
        }
        let format = self.cli.output_format();

        self.progress.begin_stage("loading catalog");
        let definitions = load_definitions(&self.cli.input)?;

        self.progress.begin_stage("generating rotations");
        let catalog = TileCatalog::from_definitions(&definitions);
        let index = AdjacencyIndex::build(&catalog);

        // Textures are checked before solving so a bad asset fails fast
        let compositor = if format == OutputFormat::Image {
            self.progress.begin_stage("loading assets");
            let atlas = load_textures(&catalog, catalog_dir(&self.cli.input))?;
            Some(Compositor::new(&catalog, &atlas)?)
        } else {
            None
        };

        let (grid, seed, attempts) = self.solve(&catalog, &index, dimensions)?;

        if let Some(compositor) = compositor {
            self.progress.begin_stage("generating map image");
            let image = compositor.compose(&grid, self.cli.layer_selection())?;
            export_map_image(&image, &self.cli.output)?;
        } else {
            self.progress.begin_stage("writing map data");
            export_map_data(&MapData::new(&catalog, &grid, seed), &self.cli.output)?;
        }
        self.progress.finish_stage();

        let summary = RunSummary {
            definitions: definitions.len(),
            variants: catalog.len(),
            seed,
            attempts,
            output: self.cli.output.clone(),
        };
        self.report(&summary);
        Ok(summary)
    }

    fn solve(
        &mut self,
        catalog: &TileCatalog,
        index: &AdjacencyIndex,
        dimensions: Dimensions,
    ) -> Result<(Grid, u64, u32)> {
        let base_seed = self.cli.base_seed();
        self.progress
            .begin_cell_stage("generating map", dimensions.cell_count());

        let mut attempt = 1;
        loop {
            let seed = base_seed.wrapping_add(u64::from(attempt - 1));
            self.progress.restart_cells(attempt, seed);

            let progress = &self.progress;
            let mut solver = GridSolver::new(catalog, index, seed);
            match solver.solve_observed(dimensions, |cells| progress.set_cells(cells)) {
                Ok(grid) => return Ok((grid, seed, attempt)),
                Err(error) if error.is_retryable() && attempt < self.cli.attempts => {
                    self.progress.note(&format!("attempt {attempt} failed: {error}"));
                    attempt += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }

    fn report(&self, summary: &RunSummary) {
        self.progress
            .note(&format!("input structures {}", summary.definitions));
        self.progress
            .note(&format!("output structures {}", summary.variants));
        self.progress.note(&format!(
            "seed {} (attempt {})",
            summary.seed, summary.attempts
        ));
        self.progress.note(&format!(
            "finished in {:.2?}",
            self.progress.total_elapsed()
        ));
    }

    /// Timings of the stages completed so far
    pub fn progress(&self) -> &ProgressReporter {
        &self.progress
    }
}

/// Directory that relative texture references are resolved against
pub fn catalog_dir(input: &Path) -> &Path {
    input.parent().unwrap_or_else(|| Path::new(""))
}
