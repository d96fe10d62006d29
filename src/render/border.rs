//! Solid-color frame around any raster

use crate::render::Raster;
use image::Rgba;

/// Surrounds an inner raster with a border of fixed width
#[derive(Debug, Clone)]
pub struct Bordered<R> {
    inner: R,
    border: u32,
    fill: Rgba<u8>,
}

impl<R: Raster> Bordered<R> {
    /// Wrap `inner` in a border `border` pixels wide painted with `fill`
    pub const fn new(inner: R, border: u32, fill: Rgba<u8>) -> Self {
        Self {
            inner,
            border,
            fill,
        }
    }

    /// Border width in pixels
    pub const fn border(&self) -> u32 {
        self.border
    }

    /// The wrapped raster
    pub const fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: Raster> Raster for Bordered<R> {
    fn dimensions(&self) -> (u32, u32) {
        let (width, height) = self.inner.dimensions();
        let frame = self.border.saturating_mul(2);
        (width.saturating_add(frame), height.saturating_add(frame))
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        let (width, height) = self.dimensions();
        if x >= width || y >= height {
            return None;
        }
        let (inner_width, inner_height) = self.inner.dimensions();
        let inside_x = x.checked_sub(self.border).filter(|&ix| ix < inner_width);
        let inside_y = y.checked_sub(self.border).filter(|&iy| iy < inner_height);
        match (inside_x, inside_y) {
            (Some(ix), Some(iy)) => self.inner.pixel(ix, iy),
            _ => Some(self.fill),
        }
    }
}
