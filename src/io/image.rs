//! Grayscale PNG export for composited noise grids

use crate::grid::NoiseGrid;
use image::{ImageBuffer, Luma};

/// Export a noise grid as an 8-bit grayscale PNG
///
/// Grid samples map one-to-one onto image pixels, row by row.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &NoiseGrid, output_path: &str) -> crate::io::error::Result<()> {
    use crate::io::error::NoiseError;

    let width = grid.width() as u32;
    let height = grid.height() as u32;
    let mut img = ImageBuffer::new(width, height);

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let value = grid.sample(x, y).unwrap_or(0);
            img.put_pixel(x as u32, y as u32, Luma([value]));
        }
    }

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| NoiseError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| NoiseError::ImageExport {
        path: output_path.into(),
        source: e,
    })?;

    Ok(())
}
