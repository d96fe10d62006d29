//! Template image parsing into per-cell maze roles
//!
//! Each template pixel becomes one maze cell. Colors are classified as:
//! - Black pixels are excluded cells
//! - Green pixels (RGB = 0, >200, 0) are possible start cells
//! - Red pixels (RGB = >200, 0, 0) are possible end cells
//! - Every other color is a normal maze cell

use crate::io::configuration::{TEMPLATE_END_RED_MIN, TEMPLATE_START_GREEN_MIN};
use crate::io::error::{MazeError, Result};
use image::{Rgba, RgbaImage};
use ndarray::Array2;
use std::path::Path;

/// Role a template pixel assigns to its cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TemplateCell {
    /// Part of the maze
    #[default]
    Normal,
    /// Not part of the maze
    Excluded,
    /// Part of the maze and eligible as the start cell
    StartCandidate,
    /// Part of the maze and eligible as the end cell
    EndCandidate,
}

impl TemplateCell {
    /// Classify a single template pixel; alpha is ignored
    pub const fn from_rgba(pixel: Rgba<u8>) -> Self {
        let [r, g, b, _] = pixel.0;
        if r == 0 && g == 0 && b == 0 {
            return Self::Excluded;
        }
        if r == 0 && g > TEMPLATE_START_GREEN_MIN && b == 0 {
            return Self::StartCandidate;
        }
        if r > TEMPLATE_END_RED_MIN && g == 0 && b == 0 {
            return Self::EndCandidate;
        }
        Self::Normal
    }

    /// Raw role code (0 = normal, 1 = excluded, 2 = start, 3 = end)
    pub const fn code(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::Excluded => 1,
            Self::StartCandidate => 2,
            Self::EndCandidate => 3,
        }
    }
}

impl TryFrom<u8> for TemplateCell {
    type Error = MazeError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::Normal),
            1 => Ok(Self::Excluded),
            2 => Ok(Self::StartCandidate),
            3 => Ok(Self::EndCandidate),
            _ => Err(MazeError::InvalidTemplate {
                reason: format!("unrecognized cell role code {code}"),
            }),
        }
    }
}

/// Per-cell role classification, indexed by `[row, col]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    cells: Array2<TemplateCell>,
}

impl Template {
    /// Load and classify a template image from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or decoded as an image
    pub fn from_png_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let img = image::open(&path_buf).map_err(|e| MazeError::ImageLoad {
            path: path_buf,
            source: e,
        })?;
        Ok(Self::from_image(&img.to_rgba8()))
    }

    /// Classify every pixel of an in-memory image
    pub fn from_image(img: &RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let mut cells = Array2::from_elem((height as usize, width as usize), TemplateCell::Normal);
        for (x, y, pixel) in img.enumerate_pixels() {
            if let Some(cell) = cells.get_mut([y as usize, x as usize]) {
                *cell = TemplateCell::from_rgba(*pixel);
            }
        }
        Self::from_cells(cells)
    }

    /// Build a template from raw role codes in row-major order
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `codes` does not hold exactly `width * height` entries
    /// - Any code is not a recognized role
    pub fn from_codes(width: usize, height: usize, codes: &[u8]) -> Result<Self> {
        let roles = codes
            .iter()
            .map(|&code| TemplateCell::try_from(code))
            .collect::<Result<Vec<_>>>()?;
        let cells =
            Array2::from_shape_vec((height, width), roles).map_err(|e| MazeError::InvalidTemplate {
                reason: format!("{} codes do not fill a {width}x{height} grid: {e}", codes.len()),
            })?;
        Ok(Self::from_cells(cells))
    }

    /// Wrap an existing classification array
    pub const fn from_cells(cells: Array2<TemplateCell>) -> Self {
        Self { cells }
    }

    /// Width in cells
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Height in cells
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Role of the cell at a column and row
    pub fn get(&self, col: usize, row: usize) -> Option<TemplateCell> {
        self.cells.get([row, col]).copied()
    }

    /// Roles in row-major order, matching maze cell indices
    pub fn iter(&self) -> impl Iterator<Item = TemplateCell> + '_ {
        self.cells.iter().copied()
    }
}
