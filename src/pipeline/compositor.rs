//! Pixel-wise octave blending
//!
//! Takes a set of generated octaves and collapses them into one grid by
//! per-pixel arithmetic mean. Octaves may differ in size: the output covers
//! the largest extent, and smaller octaves simply stop contributing outside
//! their own bounds.

use ndarray::Array2;

use crate::grid::NoiseGrid;
use crate::io::error::{NoiseError, Result};

/// Blend octaves into a single grid by per-pixel arithmetic mean
///
/// The output is as wide as the widest octave and as tall as the tallest
/// one. Sums accumulate in `u32`, which cannot overflow before memory runs
/// out: each octave adds at most 255. The mean rounds half away from zero
/// and is clamped into the 8-bit range before narrowing.
///
/// # Errors
///
/// Returns [`NoiseError::EmptyOctaveSet`] when `octaves` is empty.
pub fn composite(octaves: &[NoiseGrid]) -> Result<NoiseGrid> {
    if octaves.is_empty() {
        return Err(NoiseError::EmptyOctaveSet);
    }

    let max_width = octaves.iter().map(NoiseGrid::width).max().unwrap_or(0);
    let max_height = octaves.iter().map(NoiseGrid::height).max().unwrap_or(0);

    let mut sums = Array2::<u32>::zeros((max_height, max_width));
    for octave in octaves {
        for y in 0..octave.height() {
            for x in 0..octave.width() {
                if let (Some(sum), Some(sample)) = (sums.get_mut([y, x]), octave.sample(x, y)) {
                    *sum += u32::from(sample);
                }
            }
        }
    }

    // The divisor stays the total octave count even where smaller octaves
    // never contributed, which darkens regions outside their extent.
    let count = octaves.len() as f64;
    let mut samples = Vec::with_capacity(max_width * max_height);
    for y in 0..max_height {
        for x in 0..max_width {
            let sum = sums.get([y, x]).copied().unwrap_or(0);
            let mean = (f64::from(sum) / count).round().clamp(0.0, 255.0);
            samples.push(mean as u8);
        }
    }

    NoiseGrid::from_samples(max_width, max_height, samples)
}
