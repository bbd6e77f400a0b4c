//! Pipeline constants and runtime configuration defaults

// Default values for configurable parameters
/// Number of octaves blended when none is requested
pub const DEFAULT_OCTAVES: usize = 12;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed output edge length in pixels
pub const MAX_OUTPUT_DIMENSION: usize = 16_384;

// Output settings
/// Output path used when none is requested
pub const DEFAULT_OUTPUT: &str = "out.png";
/// Suffix added to the output name for the octave animation
pub const VISUALIZATION_SUFFIX: &str = "_octaves";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 250;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Hold on the final GIF frame, as a multiple of the frame delay
pub const FINAL_FRAME_HOLD: u32 = 8;
