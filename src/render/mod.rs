//! Composable raster adapters over a read-only maze grid
//!
//! Every adapter implements [`Raster`], so a plain maze, a bordered maze and a
//! decorated maze are built by wrapping one raster in another rather than by
//! specializing the grid.

use image::{Rgba, RgbaImage};

/// Outlined direction arrows composited on top of another raster
pub mod arrow;
/// Solid border around another raster
pub mod border;
/// Per-cell rendering of a maze grid
pub mod maze;

pub use arrow::ArrowOverlay;
pub use border::Bordered;
pub use maze::MazeRaster;

/// Fully transparent pixel used outside any painted area
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Read-only pixel source with fixed dimensions
pub trait Raster {
    /// Width and height in pixels
    fn dimensions(&self) -> (u32, u32);

    /// Color at a pixel, or `None` where nothing is painted
    fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>>;
}

impl<R: Raster + ?Sized> Raster for &R {
    fn dimensions(&self) -> (u32, u32) {
        (**self).dimensions()
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        (**self).pixel(x, y)
    }
}

/// Paint a raster into an RGBA buffer; unpainted pixels become transparent
pub fn rasterize<R: Raster + ?Sized>(raster: &R) -> RgbaImage {
    let (width, height) = raster.dimensions();
    RgbaImage::from_fn(width, height, |x, y| raster.pixel(x, y).unwrap_or(TRANSPARENT))
}
