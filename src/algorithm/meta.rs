//! Mazes whose layout template is the rendering of a smaller maze

use crate::algorithm::generator::{generate_from_template, generate_with_seed, resolve_seed};
use crate::io::configuration::{
    FLOOR_COLOR, MAX_META_MAZE_LEVELS, META_MAZE_BASE_CELLS, META_MAZE_CELL_PIXELS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::template::Template;
use crate::render::{MazeRaster, rasterize};
use crate::spatial::grid::MazeGrid;
use image::RgbaImage;
use log::debug;

/// Paint the top-left 2x2 and bottom-right 3x3 pixels white
///
/// The outer wall pixels would otherwise exclude the default start and end
/// cells of the next level.
pub fn clear_image_corners(img: &mut RgbaImage) {
    let (width, height) = img.dimensions();
    for y in 0..height.min(2) {
        for x in 0..width.min(2) {
            img.put_pixel(x, y, FLOOR_COLOR);
        }
    }
    for y in height.saturating_sub(3)..height {
        for x in width.saturating_sub(3)..width {
            img.put_pixel(x, y, FLOOR_COLOR);
        }
    }
}

/// Build the next meta-maze level from a rendered maze
///
/// # Errors
///
/// Returns an error if the rendered template is too large or unsolvable
pub fn next_level(previous: &MazeGrid, seed: u64) -> Result<MazeGrid> {
    let raster = MazeRaster::new(previous, META_MAZE_CELL_PIXELS)?;
    let mut img = rasterize(&raster);
    clear_image_corners(&mut img);
    generate_from_template(&Template::from_image(&img), Some(seed))
}

/// Generate a meta-maze with `levels` nested levels
///
/// Starts from a small square maze; level `i` uses `seed + i`. `on_level` is
/// called with the number of each completed level.
///
/// # Errors
///
/// Returns an error if `levels` is zero or above [`MAX_META_MAZE_LEVELS`], or
/// any level fails to generate
pub fn generate_meta_maze(
    levels: usize,
    seed: Option<u64>,
    mut on_level: impl FnMut(usize),
) -> Result<MazeGrid> {
    if levels == 0 {
        return Err(invalid_parameter(
            "meta_maze",
            &levels,
            &"a meta-maze needs at least one level",
        ));
    }
    // Each level is seven times wider than the last
    if levels > MAX_META_MAZE_LEVELS {
        return Err(invalid_parameter(
            "meta_maze",
            &levels,
            &format!("at most {MAX_META_MAZE_LEVELS} levels fit within the maximum grid dimension"),
        ));
    }
    let seed = resolve_seed(seed);
    let mut grid = generate_with_seed(META_MAZE_BASE_CELLS, META_MAZE_BASE_CELLS, Some(seed))?;
    for level in 0..levels {
        grid = next_level(&grid, seed.wrapping_add(level as u64))?;
        debug!("meta-maze level {} is {}x{}", level + 1, grid.width(), grid.height());
        on_level(level + 1);
    }
    Ok(grid)
}
