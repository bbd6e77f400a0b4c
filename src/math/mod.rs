//! Mathematical utilities for grid resampling

/// Bilinear grid resampling with half-pixel centers
pub mod resample;
