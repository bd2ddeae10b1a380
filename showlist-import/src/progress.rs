//! Pipeline progress reporting.

/// Trait for receiving pipeline progress updates.
pub trait PipelineProgress {
    /// Called when a phase starts (e.g., "Merging titles CSV files").
    fn on_phase(&self, message: &str);

    /// Called after each source file has been read.
    fn on_source(&self, platform: &str, records: usize);

    /// Called when the pipeline is complete.
    fn on_complete(&self, message: &str);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl PipelineProgress for SilentProgress {
    fn on_phase(&self, _message: &str) {}
    fn on_source(&self, _platform: &str, _records: usize) {}
    fn on_complete(&self, _message: &str) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl PipelineProgress for LogProgress {
    fn on_phase(&self, message: &str) {
        log::info!("{}", message);
    }

    fn on_source(&self, platform: &str, records: usize) {
        log::info!("  {}: {} titles", platform, records);
    }

    fn on_complete(&self, message: &str) {
        log::info!("{}", message);
    }
}
