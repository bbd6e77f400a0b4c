//! Sample sources that supply grid intensities
//!
//! Grid constructors pull one 8-bit sample per cell from a [`SampleSource`],
//! so the statistical character of the noise is decided entirely by the
//! source implementation. [`RandomSource`] is the production source;
//! [`SequenceSource`] replays a fixed buffer for deterministic tests.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Supplier of 8-bit intensity samples for grid construction
pub trait SampleSource {
    /// Produce the next intensity sample
    fn next_sample(&mut self) -> u8;
}

/// Uniform random sample source backed by a seedable generator
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Create a source seeded from process entropy
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    /// Create a deterministic source for reproducible generation
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleSource for RandomSource {
    fn next_sample(&mut self) -> u8 {
        self.rng.random()
    }
}

/// Fixed sample sequence that wraps around once exhausted
///
/// An empty sequence yields zero for every sample.
pub struct SequenceSource {
    samples: Vec<u8>,
    cursor: usize,
}

impl SequenceSource {
    /// Create a source that cycles through the given samples
    pub fn new(samples: Vec<u8>) -> Self {
        Self { samples, cursor: 0 }
    }
}

impl SampleSource for SequenceSource {
    fn next_sample(&mut self) -> u8 {
        let sample = self.samples.get(self.cursor).copied().unwrap_or(0);
        self.cursor = (self.cursor + 1) % self.samples.len().max(1);
        sample
    }
}
