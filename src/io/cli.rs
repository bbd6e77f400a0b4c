//! Command-line interface for fractal noise image generation

use crate::grid::NoiseGrid;
use crate::io::configuration::{
    DEFAULT_OCTAVES, DEFAULT_OUTPUT, GIF_FRAME_DELAY_MS, MAX_OUTPUT_DIMENSION,
    VISUALIZATION_SUFFIX,
};
use crate::io::error::{Result, invalid_configuration};
use crate::io::image::export_grid_as_png;
use crate::io::progress::ProgressManager;
use crate::io::visualization::OctaveCapture;
use crate::pipeline::compositor::composite;
use crate::pipeline::executor::{NoisePipeline, PipelineConfig};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "noisestack")]
#[command(
    author,
    version,
    about = "Generate grayscale fractal noise by averaging octaves of random grids"
)]
/// Command-line arguments for the noise generation tool
pub struct Cli {
    /// Number of noise octaves to blend
    #[arg(short, long, default_value_t = DEFAULT_OCTAVES)]
    pub octaves: usize,

    /// Output edge length in pixels (defaults to 2^octaves)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Random seed for reproducible generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output PNG path
    #[arg(short = 'O', long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Enable octave accumulation output as animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates one pipeline run with progress tracking and export
pub struct PipelineRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl PipelineRunner {
    /// Create a new runner with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self {
            cli,
            progress_manager: None,
        }
    }

    /// Generate the image according to CLI arguments and write the outputs
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, generation, or export fails
    pub fn run(&mut self) -> Result<()> {
        let config = self.resolve_config()?;

        if self.cli.should_show_progress() {
            self.progress_manager = Some(ProgressManager::new(config.octave_count()));
        }

        let mut pipeline = match self.cli.seed {
            Some(seed) => NoisePipeline::seeded(config, seed),
            None => NoisePipeline::new(config),
        };

        let mut capture = self
            .cli
            .visualize
            .then(|| OctaveCapture::new(config.octave_count()));

        let mut octaves = Vec::with_capacity(config.octave_count());
        for index in 0..config.octave_count() {
            if let Some(ref pm) = self.progress_manager {
                pm.octave_started(index, config.octave_size(index).unwrap_or(0));
            }

            let Some(octave) = pipeline.next_octave()? else {
                break;
            };

            if let Some(ref mut capture) = capture {
                capture.record_octave(&octave);
            }
            if let Some(ref pm) = self.progress_manager {
                pm.octave_completed();
            }
            octaves.push(octave);
        }

        let blended = composite(&octaves)?;

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        let output_path = self.cli.output.to_str().ok_or_else(|| {
            invalid_configuration(
                "output",
                &self.cli.output.display(),
                &"path is not valid UTF-8",
            )
        })?;
        export_grid_as_png(&blended, output_path)?;

        if let Some(ref capture) = capture {
            let viz_path = Self::get_visualization_path(&self.cli.output);
            capture.export_gif(
                viz_path.to_str().ok_or_else(|| {
                    invalid_configuration(
                        "output",
                        &viz_path.display(),
                        &"path is not valid UTF-8",
                    )
                })?,
                GIF_FRAME_DELAY_MS,
            )?;
        }

        self.report_written(&blended);

        Ok(())
    }

    // The derived size doubles per octave, so the cap also bounds octave count
    fn resolve_config(&self) -> Result<PipelineConfig> {
        let size = match self.cli.size {
            Some(size) => size,
            None => 1usize.checked_shl(self.cli.octaves as u32).ok_or_else(|| {
                invalid_configuration(
                    "octaves",
                    &self.cli.octaves,
                    &"too many octaves to derive a default size",
                )
            })?,
        };

        if size > MAX_OUTPUT_DIMENSION {
            return Err(invalid_configuration(
                "size",
                &size,
                &format!("exceeds the maximum supported dimension of {MAX_OUTPUT_DIMENSION}"),
            ));
        }

        PipelineConfig::new(self.cli.octaves, size)
    }

    // Allow print for user feedback once generation completes
    #[allow(clippy::print_stderr)]
    fn report_written(&self, grid: &NoiseGrid) {
        if !self.cli.quiet {
            eprintln!(
                "Wrote {} ({}x{}, {} octaves)",
                self.cli.output.display(),
                grid.width(),
                grid.height(),
                self.cli.octaves
            );
        }
    }

    fn get_visualization_path(output_path: &Path) -> PathBuf {
        let stem = output_path.file_stem().unwrap_or_default();
        let viz_name = format!("{}{}.gif", stem.to_string_lossy(), VISUALIZATION_SUFFIX);

        if let Some(parent) = output_path.parent() {
            parent.join(viz_name)
        } else {
            PathBuf::from(viz_name)
        }
    }
}
