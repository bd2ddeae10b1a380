//! Spinner-backed pipeline progress.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use showlist_import::PipelineProgress;

/// Shows the current pipeline phase on a spinner line.
pub(crate) struct SpinnerProgress {
    pb: ProgressBar,
}

impl SpinnerProgress {
    /// When `quiet` is true the spinner is hidden.
    pub(crate) fn new(quiet: bool) -> Self {
        let pb = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };
        let style = ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|");
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));
        Self { pb }
    }
}

impl PipelineProgress for SpinnerProgress {
    fn on_phase(&self, message: &str) {
        log::debug!("{message}");
        self.pb.set_message(message.to_string());
    }

    fn on_source(&self, platform: &str, records: usize) {
        self.pb.suspend(|| log::info!("  {platform}: {records} titles"));
    }

    fn on_complete(&self, message: &str) {
        self.pb.finish_and_clear();
        log::info!("{message}");
    }
}

impl Drop for SpinnerProgress {
    fn drop(&mut self) {
        if !self.pb.is_finished() {
            self.pb.finish_and_clear();
        }
    }
}
