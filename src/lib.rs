//! Fractal grayscale noise synthesis by averaging octaves of random grids
//!
//! The pipeline generates octaves of uniform random noise at halving
//! resolutions, bilinearly upsamples each back to a common output size, and
//! blends them into a single image by pixel-wise mean.

#![forbid(unsafe_code)]

/// Noise grid storage and the sample sources that fill it
pub mod grid;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for grid resampling
pub mod math;
/// Octave generation, compositing, and pipeline orchestration
pub mod pipeline;

pub use io::error::{NoiseError, Result};
