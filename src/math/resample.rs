//! Bilinear grid resampling
//!
//! Maps a source grid onto a destination grid of arbitrary dimensions by
//! sampling with half-pixel-center coordinates. Upsampling coarse octaves to
//! the shared output size is the hot path, but the same kernel handles
//! downsampling and identity resizes.

use crate::grid::NoiseGrid;
use crate::io::error::{Result, invalid_dimension};

/// Resample `source` onto a `dest_width` by `dest_height` grid
///
/// Each destination pixel center maps back into source space with the
/// half-pixel convention `(i + 0.5) * scale - 0.5`. Coordinates left of the
/// first sample clamp to zero and the upper interpolation corner clamps to
/// the last row or column, so borders replicate edge samples instead of
/// wrapping. Interpolation runs in `f32` and the result is truncated, not
/// rounded, when narrowed back to 8 bits.
///
/// # Errors
///
/// Returns [`NoiseError::InvalidDimension`](crate::NoiseError::InvalidDimension)
/// when `dest_width` or `dest_height` is zero; nothing is allocated in that
/// case.
pub fn resample(source: &NoiseGrid, dest_width: usize, dest_height: usize) -> Result<NoiseGrid> {
    if dest_width == 0 {
        return Err(invalid_dimension("dest_width", dest_width));
    }
    if dest_height == 0 {
        return Err(invalid_dimension("dest_height", dest_height));
    }

    let source_width = source.width();
    let source_height = source.height();
    let x_scale = source_width as f32 / dest_width as f32;
    let y_scale = source_height as f32 / dest_height as f32;

    let mut samples = Vec::with_capacity(dest_width * dest_height);
    for y in 0..dest_height {
        let mut source_y = (y as f32 + 0.5) * y_scale - 0.5;
        if source_y < 0.0 {
            source_y = 0.0;
        }
        let y0 = source_y as usize;
        let y_frac = source_y - y0 as f32;
        let y1 = if y0 + 1 >= source_height { y0 } else { y0 + 1 };

        for x in 0..dest_width {
            let mut source_x = (x as f32 + 0.5) * x_scale - 0.5;
            if source_x < 0.0 {
                source_x = 0.0;
            }
            let x0 = source_x as usize;
            let x_frac = source_x - x0 as f32;
            let x1 = if x0 + 1 >= source_width { x0 } else { x0 + 1 };

            let top_left = f32::from(source.sample(x0, y0).unwrap_or(0));
            let top_right = f32::from(source.sample(x1, y0).unwrap_or(0));
            let bottom_left = f32::from(source.sample(x0, y1).unwrap_or(0));
            let bottom_right = f32::from(source.sample(x1, y1).unwrap_or(0));

            let top = (1.0 - x_frac) * top_left + x_frac * top_right;
            let bottom = (1.0 - x_frac) * bottom_left + x_frac * bottom_right;
            let blended = (1.0 - y_frac) * top + y_frac * bottom;

            samples.push(blended as u8);
        }
    }

    NoiseGrid::from_samples(dest_width, dest_height, samples)
}
