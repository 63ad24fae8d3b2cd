use colored::*;
use copy_images::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::path::Path;
use std::time::Duration;

const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// CLI progress reporter using indicatif progress bars.
///
/// - Search phase: progress bar over target directories
/// - Copy phase: progress bar over queued files
pub struct CliReporter {
    bar: RefCell<Option<ProgressBar>>,
}

impl CliReporter {
    pub fn new() -> Self {
        Self {
            bar: RefCell::new(None),
        }
    }

    fn start_bar(&self, len: usize, label: &str) {
        let pb = ProgressBar::new(len as u64);
        let template = format!(
            "  {{spinner:.cyan}} {} [{{bar:30.cyan/dim}}] {{pos}}/{{len}}",
            label
        );
        if let Ok(style) = ProgressStyle::with_template(&template) {
            pb.set_style(style.progress_chars("━╸─").tick_chars(TICK_CHARS));
        }
        pb.enable_steady_tick(Duration::from_millis(80));
        if let Some(old) = self.bar.replace(Some(pb)) {
            old.finish_and_clear();
        }
    }

    fn finish_bar(&self) {
        if let Some(pb) = self.bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl ProgressReporter for CliReporter {
    fn on_search_start(&self, targets: usize) {
        self.start_bar(targets, "Searching");
    }

    fn on_target_searched(&self, _target: &Path, _sources_found: usize) {
        if let Some(pb) = self.bar.borrow().as_ref() {
            pb.inc(1);
        }
    }

    fn on_search_complete(&self, sources_found: usize, duration_secs: f64) {
        self.finish_bar();
        eprintln!(
            "  {} Search complete: {} files found in {:.2}s",
            "✓".green(),
            sources_found,
            duration_secs
        );
    }

    fn on_copy_start(&self, total_copies: usize) {
        self.start_bar(total_copies, "Copying");
    }

    fn on_copy_progress(&self, attempted: usize, _total_copies: usize) {
        if let Some(pb) = self.bar.borrow().as_ref() {
            pb.set_position(attempted as u64);
        }
    }

    fn on_copy_complete(&self, copied: usize, errors: usize, duration_secs: f64) {
        self.finish_bar();
        let mark = if errors == 0 { "✓".green() } else { "!".yellow() };
        eprintln!(
            "  {} Copy complete: {} copied, {} failed in {:.2}s",
            mark, copied, errors, duration_secs
        );
    }
}
