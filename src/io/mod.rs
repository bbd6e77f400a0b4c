//! Input/output operations and error handling

/// Command-line interface and pipeline orchestration
pub mod cli;
/// Pipeline constants and runtime configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Grayscale PNG export
pub mod image;
/// Progress display for the octave loop
pub mod progress;
/// Octave capture and GIF generation
pub mod visualization;
