//! Octave pipeline configuration and execution
//!
//! The pipeline generates octave 0 directly at the output size, then each
//! further octave at half the previous edge length before upsampling it back
//! to the output size. Compositing the upsampled octaves produces the final
//! fractal image.

use crate::grid::NoiseGrid;
use crate::grid::source::{RandomSource, SampleSource};
use crate::io::error::{Result, invalid_configuration};
use crate::math::resample::resample;
use crate::pipeline::compositor::composite;

/// Validated parameters for one pipeline run
///
/// Construction checks that every octave keeps at least one cell, so the
/// execution path never sees a degenerate grid size.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PipelineConfig {
    octave_count: usize,
    output_size: usize,
}

impl PipelineConfig {
    /// Validate and build a pipeline configuration
    ///
    /// `output_size` is the edge length of the square output grid. Octave
    /// `i` is generated at `output_size` halved `i` times, and the smallest
    /// octave must still hold at least one cell.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidConfiguration`](crate::NoiseError::InvalidConfiguration)
    /// when `octave_count` is zero, `output_size` is zero, or repeated
    /// halving leaves the last octave without cells.
    pub fn new(octave_count: usize, output_size: usize) -> Result<Self> {
        if octave_count == 0 {
            return Err(invalid_configuration(
                "octave_count",
                &octave_count,
                &"at least one octave is required",
            ));
        }
        if output_size == 0 {
            return Err(invalid_configuration(
                "output_size",
                &output_size,
                &"the output grid needs at least one cell",
            ));
        }

        let smallest = u32::try_from(octave_count - 1)
            .ok()
            .and_then(|shift| output_size.checked_shr(shift))
            .unwrap_or(0);
        if smallest == 0 {
            return Err(invalid_configuration(
                "octave_count",
                &octave_count,
                &format!(
                    "halving {output_size} per octave leaves octave {} empty",
                    octave_count - 1
                ),
            ));
        }

        Ok(Self {
            octave_count,
            output_size,
        })
    }

    /// Number of octaves the pipeline generates
    pub const fn octave_count(&self) -> usize {
        self.octave_count
    }

    /// Edge length of the square output grid
    pub const fn output_size(&self) -> usize {
        self.output_size
    }

    /// Edge length at which octave `index` is generated, before upsampling
    ///
    /// Returns `None` for indices beyond the configured octave count.
    pub fn octave_size(&self, index: usize) -> Option<usize> {
        if index >= self.octave_count {
            return None;
        }
        u32::try_from(index)
            .ok()
            .and_then(|shift| self.output_size.checked_shr(shift))
    }
}

/// Stateful octave generator and compositor
///
/// Octaves come out one at a time so callers can report progress or capture
/// intermediate frames, and the run is a pure function of the configuration
/// and the sample source.
pub struct NoisePipeline<S = RandomSource> {
    config: PipelineConfig,
    source: S,
    next_index: usize,
}

impl NoisePipeline<RandomSource> {
    /// Pipeline with an entropy-seeded sample source
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_source(config, RandomSource::new())
    }

    /// Pipeline with a deterministic sample source for reproducible output
    pub fn seeded(config: PipelineConfig, seed: u64) -> Self {
        Self::with_source(config, RandomSource::seeded(seed))
    }
}

impl<S: SampleSource> NoisePipeline<S> {
    /// Pipeline drawing samples from the given source
    pub const fn with_source(config: PipelineConfig, source: S) -> Self {
        Self {
            config,
            source,
            next_index: 0,
        }
    }

    /// Number of octaves this pipeline produces in total
    pub const fn octave_count(&self) -> usize {
        self.config.octave_count()
    }

    /// Configuration this pipeline was built from
    pub const fn config(&self) -> PipelineConfig {
        self.config
    }

    /// Generate the next octave, upsampled to the output size
    ///
    /// Octave 0 is generated directly at the output size and returned as
    /// is. Every later octave is generated at its own halved edge length and
    /// bilinearly upsampled before being returned. Yields `None` once all
    /// octaves have been produced.
    ///
    /// # Errors
    ///
    /// Propagates grid construction and resampling failures; none occur with
    /// a configuration built through [`PipelineConfig::new`].
    pub fn next_octave(&mut self) -> Result<Option<NoiseGrid>> {
        let Some(octave_size) = self.config.octave_size(self.next_index) else {
            return Ok(None);
        };

        let octave = NoiseGrid::random(octave_size, octave_size, &mut self.source)?;
        let octave = if self.next_index == 0 {
            octave
        } else {
            resample(&octave, self.config.output_size(), self.config.output_size())?
        };

        self.next_index += 1;
        Ok(Some(octave))
    }

    /// Generate all remaining octaves and composite them into one grid
    ///
    /// On a fresh pipeline this is the complete run. The sample source is
    /// consumed octave by octave in creation order, so seeded runs are fully
    /// reproducible.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::EmptyOctaveSet`](crate::NoiseError::EmptyOctaveSet)
    /// when the pipeline is already exhausted, and propagates any octave
    /// generation failure.
    pub fn generate(&mut self) -> Result<NoiseGrid> {
        let mut octaves = Vec::with_capacity(self.config.octave_count() - self.next_index);
        while let Some(octave) = self.next_octave()? {
            octaves.push(octave);
        }
        composite(&octaves)
    }
}
