//! Octave capture and GIF generation for pipeline visualization

use crate::grid::NoiseGrid;
use crate::io::error::{NoiseError, Result};
use crate::pipeline::compositor::composite;
use image::{Frame, Rgba, RgbaImage};

/// Captures upsampled octaves for animation export
///
/// Records each octave as the pipeline produces it. Frame `k` of the
/// exported GIF shows the composite of the first `k` octaves, so the
/// animation replays how the fractal image converges as octaves accumulate.
pub struct OctaveCapture {
    octaves: Vec<NoiseGrid>,
}

impl OctaveCapture {
    /// Create a capture sized for the expected octave count
    pub fn new(octave_count: usize) -> Self {
        Self {
            octaves: Vec::with_capacity(octave_count),
        }
    }

    /// Record one upsampled octave in creation order
    pub fn record_octave(&mut self, octave: &NoiseGrid) {
        self.octaves.push(octave.clone());
    }

    /// Returns all recorded octaves
    pub fn recorded_octaves(&self) -> &[NoiseGrid] {
        &self.octaves
    }

    /// Returns the total number of recorded octaves
    pub const fn octave_count(&self) -> usize {
        self.octaves.len()
    }

    /// Export the octave accumulation as a GIF
    ///
    /// One frame per recorded octave, each showing the running mean of the
    /// octaves so far, plus a longer hold on the final frame. Delays shorter
    /// than what GIF viewers honor are clamped up.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No octaves were recorded
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &str, frame_delay_ms: u32) -> Result<()> {
        use crate::io::configuration::{FINAL_FRAME_HOLD, VIEWER_MIN_FRAME_DELAY_MS};

        if self.octaves.is_empty() {
            return Err(NoiseError::EmptyOctaveSet);
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let mut frames = Vec::with_capacity(self.octaves.len() + 1);
        for upto in 1..=self.octaves.len() {
            let blended = composite(self.octaves.get(..upto).unwrap_or(&[]))?;
            frames.push(render_frame(&blended, effective_delay_ms));
        }

        // Final frame displays longer for better visibility
        if let Some(last_frame_img) = frames.last().map(|f| f.buffer().clone()) {
            frames.push(Frame::from_parts(
                last_frame_img,
                0,
                0,
                image::Delay::from_numer_denom_ms(effective_delay_ms * FINAL_FRAME_HOLD, 1),
            ));
        }

        if let Some(parent) = std::path::Path::new(output_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| NoiseError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| NoiseError::FileSystem {
            path: output_path.into(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| NoiseError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        Ok(())
    }
}

// Grayscale samples spread across RGB so GIF palettes stay neutral
fn render_frame(grid: &NoiseGrid, delay_ms: u32) -> Frame {
    let mut img = RgbaImage::new(grid.width() as u32, grid.height() as u32);

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let value = grid.sample(x, y).unwrap_or(0);
            img.put_pixel(x as u32, y as u32, Rgba([value, value, value, 255]));
        }
    }

    Frame::from_parts(img, 0, 0, image::Delay::from_numer_denom_ms(delay_ms, 1))
}
