//! Maze constants and runtime configuration defaults

use image::Rgba;

// Default values for configurable parameters
/// Default maze width in cells
pub const DEFAULT_CELLS_WIDE: usize = 20;
/// Default maze height in cells
pub const DEFAULT_CELLS_HIGH: usize = 20;
/// Default width of one rendered cell in pixels
pub const DEFAULT_CELL_PIXELS: u32 = 11;
/// Default number of erosion passes
pub const DEFAULT_ERODE_AMOUNT: usize = 0;
/// Default width of the plain border around the decorated image
pub const DEFAULT_BORDER_PIXELS: u32 = 0;

// A cell needs a wall pixel on each side and a visible interior
/// Minimum rendered cell width in pixels
pub const MIN_CELL_PIXELS: u32 = 5;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension in cells
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Minimum side length of the start and end arrows in pixels
pub const ARROW_LENGTH: u32 = 16;

// Meta-maze settings
/// Side length in cells of the innermost meta-maze
pub const META_MAZE_BASE_CELLS: usize = 8;
/// Pixels per cell when a maze is rendered as the next level's template
pub const META_MAZE_CELL_PIXELS: u32 = 7;
/// Deepest meta-maze whose last level stays within the maximum grid dimension
pub const MAX_META_MAZE_LEVELS: usize = 3;

// Template classification thresholds
/// Green channel above which a zero red/blue pixel marks a start candidate
pub const TEMPLATE_START_GREEN_MIN: u8 = 200;
/// Red channel above which a zero green/blue pixel marks an end candidate
pub const TEMPLATE_END_RED_MIN: u8 = 200;

// Rendering palette
/// Wall pixels
pub const WALL_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);
/// Open floor, excluded cells and borders
pub const FLOOR_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
/// Interior of cells on the solution path
pub const SOLUTION_COLOR: Rgba<u8> = Rgba([230, 20, 20, 255]);
/// Arrow marking the start cell
pub const START_ARROW_COLOR: Rgba<u8> = Rgba([40, 180, 70, 255]);
/// Arrow marking the end cell
pub const END_ARROW_COLOR: Rgba<u8> = Rgba([100, 120, 255, 255]);
