//! Error types for noise generation and export operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all pipeline operations
#[derive(Debug)]
pub enum NoiseError {
    /// A grid dimension was zero where at least one cell is required
    InvalidDimension {
        /// Name of the offending dimension
        parameter: &'static str,
        /// Provided value that failed validation
        value: usize,
    },

    /// Pipeline parameter validation failed
    InvalidConfiguration {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Compositing was requested for zero octaves
    ///
    /// The blend divides by the octave count, so an empty set is rejected
    /// before any accumulation happens.
    EmptyOctaveSet,

    /// Raw sample buffer does not match the requested grid dimensions
    SampleCountMismatch {
        /// Number of samples the dimensions require
        expected: usize,
        /// Number of samples actually provided
        actual: usize,
    },

    /// Failed to save a generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for NoiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { parameter, value } => {
                write!(
                    f,
                    "Invalid dimension '{parameter}' = {value}: must be at least 1"
                )
            }
            Self::InvalidConfiguration {
                parameter,
                value,
                reason,
            } => {
                write!(
                    f,
                    "Invalid configuration '{parameter}' = '{value}': {reason}"
                )
            }
            Self::EmptyOctaveSet => {
                write!(f, "Cannot composite an empty octave set")
            }
            Self::SampleCountMismatch { expected, actual } => {
                write!(
                    f,
                    "Sample buffer holds {actual} values but the grid needs {expected}"
                )
            }
            Self::ImageExport { path, source } => {
                write!(f, "Failed to export image to '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for NoiseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pipeline results
pub type Result<T> = std::result::Result<T, NoiseError>;

/// Create an invalid dimension error
pub const fn invalid_dimension(parameter: &'static str, value: usize) -> NoiseError {
    NoiseError::InvalidDimension { parameter, value }
}

/// Create an invalid configuration error
pub fn invalid_configuration(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> NoiseError {
    NoiseError::InvalidConfiguration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
