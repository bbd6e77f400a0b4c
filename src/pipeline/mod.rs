//! Octave generation and blending pipeline

/// Pixel-wise octave blending
pub mod compositor;
/// Pipeline configuration and the octave executor
pub mod executor;

pub use executor::{NoisePipeline, PipelineConfig};
