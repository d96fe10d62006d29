//! Command-line interface for generating, eroding, solving and rendering a maze

use crate::algorithm::erosion::{dangling_stubs, erode};
use crate::algorithm::generator::{generate_from_template, generate_with_seed};
use crate::algorithm::meta::generate_meta_maze;
use crate::algorithm::solver::solve;
use crate::io::configuration::{
    DEFAULT_BORDER_PIXELS, DEFAULT_CELL_PIXELS, DEFAULT_CELLS_HIGH, DEFAULT_CELLS_WIDE,
    DEFAULT_ERODE_AMOUNT, FLOOR_COLOR, MAX_META_MAZE_LEVELS, MIN_CELL_PIXELS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_png;
use crate::io::progress::StageProgress;
use crate::io::template::Template;
use crate::render::arrow::with_endpoint_arrows;
use crate::render::{Bordered, MazeRaster};
use crate::spatial::grid::MazeGrid;
use clap::Parser;
use log::{LevelFilter, debug, info};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gridmaze")]
#[command(
    author,
    version,
    about = "Generate a grid maze image, optionally shaped by a template image"
)]
/// Command-line arguments for the maze generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// PNG file the maze image is written to
    #[arg(short, long, value_name = "PNG")]
    pub output: PathBuf,

    /// Width of the maze in grid cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_CELLS_WIDE)]
    pub cells_wide: usize,

    /// Height of the maze in grid cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_CELLS_HIGH)]
    pub cells_high: usize,

    /// Width of each maze cell in pixels
    #[arg(short, long, default_value_t = DEFAULT_CELL_PIXELS)]
    pub cell_width: u32,

    /// Number of passes removing small dangling walls
    #[arg(short, long, default_value_t = DEFAULT_ERODE_AMOUNT)]
    pub erode_amount: usize,

    /// Random seed; derived from the current time if omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Highlight the solution path
    #[arg(short = 'S', long)]
    pub show_solution: bool,

    /// Nest the maze this many levels deep, each level templated on the last
    ///
    /// Every level is seven times wider than the one before, so at most 3 levels
    /// fit within the maximum grid dimension.
    #[arg(short, long, default_value_t = 0)]
    pub meta_maze: usize,

    /// PNG template image; each pixel becomes one cell (ignores dimensions)
    #[arg(short, long, value_name = "PNG")]
    pub template: Option<PathBuf>,

    /// Extra white border around the image in pixels
    #[arg(short, long, default_value_t = DEFAULT_BORDER_PIXELS)]
    pub border: u32,

    /// Skip the start and end arrows
    #[arg(long)]
    pub no_arrows: bool,

    /// Suppress progress and informational output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug messages
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level implied by the quiet and debug flags
    pub const fn log_level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }

    /// Install the logger; `RUST_LOG` overrides the flag-derived level
    pub fn init_logging(&self) {
        let default_filter = self.log_level().to_string().to_lowercase();
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(default_filter),
        )
        .try_init();
    }

    /// Reject argument combinations that cannot produce an image
    ///
    /// # Errors
    ///
    /// Returns an error if the cell width is below the minimum, a dimension is
    /// zero, or the meta-maze is nested too deep
    pub fn validate(&self) -> Result<()> {
        if self.cell_width < MIN_CELL_PIXELS {
            return Err(invalid_parameter(
                "cell_width",
                &self.cell_width,
                &format!("cells must be at least {MIN_CELL_PIXELS} pixels wide"),
            ));
        }
        if self.meta_maze > MAX_META_MAZE_LEVELS {
            return Err(invalid_parameter(
                "meta_maze",
                &self.meta_maze,
                &format!("at most {MAX_META_MAZE_LEVELS} levels are supported"),
            ));
        }
        if self.template.is_none() && self.meta_maze == 0 {
            for (parameter, value) in [
                ("cells_wide", self.cells_wide),
                ("cells_high", self.cells_high),
            ] {
                if value < 1 {
                    return Err(invalid_parameter(parameter, &value, &"must be at least 1"));
                }
            }
        }
        Ok(())
    }
}

/// Runs the full pipeline for one set of command-line arguments
pub struct MazeProcessor {
    cli: Cli,
    progress: StageProgress,
}

impl MazeProcessor {
    /// Create a processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        let progress = StageProgress::new(cli.should_show_progress());
        Self { cli, progress }
    }

    /// Build the maze the arguments describe, before erosion and solving
    ///
    /// # Errors
    ///
    /// Returns an error if the template cannot be loaded or the maze cannot be generated
    pub fn build_maze(&mut self) -> Result<MazeGrid> {
        if let Some(ref template_path) = self.cli.template {
            let template = Template::from_png_file(template_path)?;
            return generate_from_template(&template, self.cli.seed);
        }
        if self.cli.meta_maze > 0 {
            self.progress.start("meta-maze", self.cli.meta_maze);
            let progress = &self.progress;
            let grid = generate_meta_maze(self.cli.meta_maze, self.cli.seed, |_| {
                progress.advance();
            });
            self.progress.finish();
            return grid;
        }
        generate_with_seed(self.cli.cells_wide, self.cli.cells_high, self.cli.seed)
    }

    /// Generate, erode, solve and render the maze, then write the PNG
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, generation, solving or export fails
    pub fn process(&mut self) -> Result<MazeGrid> {
        self.cli.validate()?;

        let mut grid = self.build_maze()?;
        info!("Generated {grid} OK.");

        if self.cli.erode_amount > 0 {
            info!("Eroding maze walls {} steps.", self.cli.erode_amount);
            self.progress.start("eroding", self.cli.erode_amount);
            for _ in 0..self.cli.erode_amount {
                erode(&mut grid);
                self.progress.advance();
            }
            self.progress.finish();
            debug!("{} dangling stubs remain", dangling_stubs(&grid));
        }

        if self.cli.show_solution {
            info!("Finding solution to the maze.");
            solve(&mut grid, true)?;
        }

        if self.cli.no_arrows {
            let plain = Bordered::new(
                MazeRaster::new(&grid, self.cli.cell_width)?,
                self.cli.border,
                FLOOR_COLOR,
            );
            export_png(&plain, &self.cli.output)?;
        } else {
            let decorated = with_endpoint_arrows(&grid, self.cli.cell_width, self.cli.border)?;
            export_png(&decorated, &self.cli.output)?;
        }
        info!("Image {} written OK.", self.cli.output.display());

        Ok(grid)
    }
}
