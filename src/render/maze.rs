//! Pixel rules for drawing each maze cell as an NxN square

use crate::io::configuration::{FLOOR_COLOR, MIN_CELL_PIXELS, SOLUTION_COLOR, WALL_COLOR};
use crate::io::error::{Result, invalid_parameter};
use crate::render::Raster;
use crate::spatial::cell::{Cell, Corner, Direction};
use crate::spatial::grid::MazeGrid;
use image::Rgba;

/// Renders a maze grid with a fixed number of pixels per cell
#[derive(Debug, Clone, Copy)]
pub struct MazeRaster<'a> {
    grid: &'a MazeGrid,
    cell_pixels: u32,
    dimensions: (u32, u32),
}

impl<'a> MazeRaster<'a> {
    /// Create a raster view of `grid`
    ///
    /// # Errors
    ///
    /// Returns an error if `cell_pixels` is below the minimum cell width or the
    /// image would be too large to address
    pub fn new(grid: &'a MazeGrid, cell_pixels: u32) -> Result<Self> {
        if cell_pixels < MIN_CELL_PIXELS {
            return Err(invalid_parameter(
                "cell_pixels",
                &cell_pixels,
                &format!("cells must be at least {MIN_CELL_PIXELS} pixels wide"),
            ));
        }
        let scale = |cells: usize| {
            u32::try_from(cells)
                .ok()
                .and_then(|cells| cells.checked_mul(cell_pixels))
        };
        let (Some(width), Some(height)) = (scale(grid.width()), scale(grid.height())) else {
            return Err(invalid_parameter(
                "cell_pixels",
                &cell_pixels,
                &"the rendered image would exceed the addressable size",
            ));
        };
        Ok(Self {
            grid,
            cell_pixels,
            dimensions: (width, height),
        })
    }

    /// Pixels per cell side
    pub const fn cell_pixels(&self) -> u32 {
        self.cell_pixels
    }

    /// Pixel at the center of the cell with the given index
    pub fn cell_center(&self, index: usize) -> (u32, u32) {
        let (col, row) = self.grid.coords(index);
        let half = self.cell_pixels / 2;
        (
            col as u32 * self.cell_pixels + half,
            row as u32 * self.cell_pixels + half,
        )
    }
}

/// Color of pixel `(x, y)` within a single cell of side `n`
pub fn cell_pixel(cell: &Cell, x: u32, y: u32, n: u32) -> Rgba<u8> {
    let last = n.saturating_sub(1);
    let ink = |set: bool| if set { WALL_COLOR } else { FLOOR_COLOR };

    if cell.is_excluded() {
        return FLOOR_COLOR;
    }
    match (x, y) {
        (0, 0) => ink(cell.corner_set(Corner::TopLeft)),
        (0, y) if y == last => ink(cell.corner_set(Corner::BottomLeft)),
        (x, 0) if x == last => ink(cell.corner_set(Corner::TopRight)),
        (x, y) if x == last && y == last => ink(cell.corner_set(Corner::BottomRight)),
        (0, _) => ink(cell.has_wall(Direction::Left)),
        (x, _) if x == last => ink(cell.has_wall(Direction::Right)),
        (_, 0) => ink(cell.has_wall(Direction::Up)),
        (_, y) if y == last => ink(cell.has_wall(Direction::Down)),
        // Solution cells get a colored square at least two pixels from the edge
        (x, y) if cell.is_on_path() && x > 1 && y > 1 && x + 2 < n && y + 2 < n => SOLUTION_COLOR,
        _ => FLOOR_COLOR,
    }
}

impl Raster for MazeRaster<'_> {
    fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        let (width, height) = self.dimensions;
        if x >= width || y >= height {
            return None;
        }
        let n = self.cell_pixels;
        let cell = self
            .grid
            .cell_at((x / n) as usize, (y / n) as usize)?;
        Some(cell_pixel(cell, x % n, y % n, n))
    }
}
