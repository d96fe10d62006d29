//! Progress display for multi-step maze stages

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg:>12} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks one stage at a time, such as erosion passes or meta-maze levels
///
/// When disabled every call is a no-op, so callers never branch on quiet mode.
pub struct StageProgress {
    enabled: bool,
    bar: Option<ProgressBar>,
}

impl Default for StageProgress {
    fn default() -> Self {
        Self::new(true)
    }
}

impl StageProgress {
    /// Create a progress tracker; `enabled = false` suppresses all output
    pub const fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }

    /// Whether progress is displayed
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Begin a stage of `steps` steps labelled `label`, finishing any previous stage
    pub fn start(&mut self, label: &str, steps: usize) {
        self.finish();
        if !self.enabled || steps == 0 {
            return;
        }
        let bar = ProgressBar::new(steps as u64);
        bar.set_style(STAGE_STYLE.clone());
        bar.set_message(label.to_string());
        self.bar = Some(bar);
    }

    /// Record one completed step
    pub fn advance(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Steps completed in the current stage
    pub fn position(&self) -> u64 {
        self.bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Clear the current stage's bar
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
