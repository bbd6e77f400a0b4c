//! Noise grid storage and construction
//!
//! A [`NoiseGrid`] is a fully populated rectangle of 8-bit intensity
//! samples. Constructors validate their inputs and either return a complete
//! grid or an error; no partially initialized grid ever escapes.

use ndarray::Array2;

use crate::grid::source::SampleSource;
use crate::io::error::{NoiseError, Result, invalid_dimension};

/// Two-dimensional grid of 8-bit intensity samples
///
/// Samples are stored row-major. Width and height are always at least one
/// cell, so every grid has content to resample or composite.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NoiseGrid {
    samples: Array2<u8>,
}

impl NoiseGrid {
    /// Generate a grid of independent samples drawn from `source`
    ///
    /// Cells are filled in row-major order, one sample per cell, so a seeded
    /// source reproduces the same grid on every run.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidDimension`] when `width` or `height` is
    /// zero.
    pub fn random<S: SampleSource>(width: usize, height: usize, source: &mut S) -> Result<Self> {
        validate_dimensions(width, height)?;
        let mut samples = Vec::with_capacity(width * height);
        for _ in 0..width * height {
            samples.push(source.next_sample());
        }
        Self::from_samples(width, height, samples)
    }

    /// Build a grid from a row-major sample buffer
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidDimension`] when `width` or `height` is
    /// zero, and [`NoiseError::SampleCountMismatch`] when the buffer length
    /// is not exactly `width * height`.
    pub fn from_samples(width: usize, height: usize, samples: Vec<u8>) -> Result<Self> {
        validate_dimensions(width, height)?;
        let expected = width * height;
        let actual = samples.len();
        if actual != expected {
            return Err(NoiseError::SampleCountMismatch { expected, actual });
        }
        match Array2::from_shape_vec((height, width), samples) {
            Ok(samples) => Ok(Self { samples }),
            Err(_) => Err(NoiseError::SampleCountMismatch { expected, actual }),
        }
    }

    /// Build a grid where every sample holds the same value
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidDimension`] when `width` or `height` is
    /// zero.
    pub fn constant(width: usize, height: usize, value: u8) -> Result<Self> {
        validate_dimensions(width, height)?;
        Ok(Self {
            samples: Array2::from_elem((height, width), value),
        })
    }

    /// Number of sample columns
    pub fn width(&self) -> usize {
        self.samples.ncols()
    }

    /// Number of sample rows
    pub fn height(&self) -> usize {
        self.samples.nrows()
    }

    /// Intensity at `(x, y)`, or `None` outside the grid
    pub fn sample(&self, x: usize, y: usize) -> Option<u8> {
        self.samples.get([y, x]).copied()
    }

    /// Row-major copy of every sample
    pub fn to_vec(&self) -> Vec<u8> {
        self.samples.iter().copied().collect()
    }

    /// Consume the grid and return its row-major sample buffer
    pub fn into_samples(self) -> Vec<u8> {
        self.samples.into_iter().collect()
    }

    /// Bilinear-resampled copy of this grid at the given dimensions
    ///
    /// The source grid is left untouched; see
    /// [`resample`](crate::math::resample::resample) for the sampling
    /// conventions.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidDimension`] when `dest_width` or
    /// `dest_height` is zero.
    pub fn resampled(&self, dest_width: usize, dest_height: usize) -> Result<Self> {
        crate::math::resample::resample(self, dest_width, dest_height)
    }
}

fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 {
        return Err(invalid_dimension("width", width));
    }
    if height == 0 {
        return Err(invalid_dimension("height", height));
    }
    Ok(())
}
