//! Terminal progress reporting for stepped simulation runs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display for a single stepped run
///
/// In quiet mode the bar is hidden entirely, keeping output clean for
/// scripted runs while the stepping code stays unconditional.
pub struct RunProgress {
    bar: ProgressBar,
    label: String,
}

impl RunProgress {
    /// Create a bar spanning `total` steps, labelled with the sketch name
    pub fn new(label: &str, total: usize, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(total as u64)
        };
        bar.set_style(STEP_STYLE.clone());
        bar.set_message(label.to_string());
        Self {
            bar,
            label: label.to_string(),
        }
    }

    /// Advance by one step
    pub fn tick(&self) {
        self.bar.inc(1);
    }

    /// Jump to an absolute step position
    ///
    /// Used when a run can move backwards, as a wave restart does.
    pub fn set_position(&self, position: usize) {
        self.bar.set_position(position as u64);
    }

    /// Fold the running restart count into the label
    pub fn note_restarts(&self, restarts: usize) {
        if restarts > 0 {
            self.bar
                .set_message(format!("{} (restarts: {restarts})", self.label));
        }
    }

    /// Close out the bar, leaving the final state on screen
    pub fn finish(&self) {
        self.bar.finish();
    }
}
