//! Progress display for the octave generation loop

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static OCTAVE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Octaves: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display for a single pipeline run
///
/// One bar tick per octave, with the current generation resolution shown in
/// the message slot.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar sized to the octave count
    pub fn new(octave_count: usize) -> Self {
        let bar = ProgressBar::new(octave_count as u64);
        bar.set_style(OCTAVE_STYLE.clone());
        Self { bar }
    }

    /// Show which octave is being generated and at what resolution
    pub fn octave_started(&self, index: usize, octave_size: usize) {
        self.bar
            .set_message(format!("octave {index} ({octave_size}x{octave_size})"));
    }

    /// Mark one octave as completed
    pub fn octave_completed(&self) {
        self.bar.inc(1);
    }

    /// Clear the octave message once compositing finishes
    pub fn finish(&self) {
        self.bar.finish_with_message("composited");
    }
}
