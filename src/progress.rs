use std::path::Path;

/// Trait for reporting migration progress.
///
/// The CLI implements it with indicatif bars; library callers and tests use
/// [`SilentReporter`]. All methods have default no-op implementations.
pub trait ProgressReporter {
    fn on_report_read(&self, _unique_file_names: usize, _targets: usize) {}
    fn on_search_start(&self, _targets: usize) {}
    fn on_target_searched(&self, _target: &Path, _sources_found: usize) {}
    fn on_search_complete(&self, _sources_found: usize, _duration_secs: f64) {}
    fn on_copy_start(&self, _total_copies: usize) {}
    fn on_copy_progress(&self, _attempted: usize, _total_copies: usize) {}
    fn on_copy_complete(&self, _copied: usize, _errors: usize, _duration_secs: f64) {}
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}
