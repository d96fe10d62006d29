//! PNG export for any raster adapter

use crate::io::error::{MazeError, Result};
use crate::render::{Raster, rasterize};
use image::ImageFormat;
use std::path::Path;

/// Export a raster as a PNG image
///
/// Unpainted pixels are written as transparent.
///
/// # Errors
///
/// Returns an error if:
/// - The raster has zero width or height
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn export_png<R: Raster + ?Sized>(raster: &R, output_path: &Path) -> Result<()> {
    let (width, height) = raster.dimensions();
    if width == 0 || height == 0 {
        return Err(MazeError::InvalidParameter {
            parameter: "raster",
            value: format!("{width}x{height}"),
            reason: "cannot export an empty image".to_string(),
        });
    }

    let img = rasterize(raster);

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| MazeError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
