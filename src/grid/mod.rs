//! Noise grid storage and sample sources

/// Noise grid storage and construction
pub mod noise;
/// Sample sources that supply grid intensities
pub mod source;

pub use noise::NoiseGrid;
