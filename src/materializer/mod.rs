//! Creates target directories, finds the reported images under the generated
//! site, and copies them across.

mod copy;
mod plan;

pub use copy::{copy_into, CopyOutcome};
pub use plan::{ensure_target_dir, CopyPlan, PlanOutcome};

use glob::Pattern;
use std::path::Path;
use tracing::error;

#[derive(Debug, Default)]
pub struct Materializer {
    ignore_patterns: Vec<Pattern>,
}

impl Materializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalid globs are logged and skipped.
    pub fn with_ignore_patterns(ignore_globs: &[String]) -> Self {
        let ignore_patterns = ignore_globs
            .iter()
            .filter_map(|glob| match Pattern::new(glob) {
                Ok(p) => Some(p),
                Err(e) => {
                    error!("Invalid glob pattern '{}': {}", glob, e);
                    None
                }
            })
            .collect();
        Self { ignore_patterns }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        self.ignore_patterns
            .iter()
            .any(|pattern| pattern.matches_path(path))
    }
}
