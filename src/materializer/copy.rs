use super::{CopyPlan, Materializer};
use crate::error::Error;
use crate::progress::ProgressReporter;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyOutcome {
    pub copied: usize,
    pub errors: usize,
}

/// Copy `source` into `target_dir` under its own base name, overwriting.
pub fn copy_into(source: &Path, target_dir: &Path) -> Result<PathBuf, Error> {
    let copy_error = |source_err| Error::Copy {
        from: source.to_path_buf(),
        to: target_dir.to_path_buf(),
        source: source_err,
    };

    let file_name = source.file_name().ok_or_else(|| {
        copy_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "source has no file name",
        ))
    })?;
    let destination = target_dir.join(file_name);
    if is_same_file(source, &destination) {
        return Err(copy_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "source and destination are the same file",
        )));
    }
    fs::copy(source, &destination).map_err(copy_error)?;
    Ok(destination)
}

/// `fs::copy` truncates the destination before reading, so copying a file
/// onto itself would empty it.
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

impl Materializer {
    /// Run every planned copy. One failure never stops the rest.
    pub fn execute(&self, plan: &CopyPlan, reporter: &dyn ProgressReporter) -> CopyOutcome {
        let mut outcome = CopyOutcome::default();
        let total = plan.total_copies();
        let start = Instant::now();
        let mut attempted = 0;
        reporter.on_copy_start(total);

        for (target_dir, sources) in plan.iter() {
            for source in sources {
                match copy_into(source, target_dir) {
                    Ok(_) => {
                        debug!("Copied {} to {}", source.display(), target_dir.display());
                        outcome.copied += 1;
                    }
                    Err(err) => {
                        error!("{}", err);
                        outcome.errors += 1;
                    }
                }
                attempted += 1;
                reporter.on_copy_progress(attempted, total);
            }
        }

        reporter.on_copy_complete(outcome.copied, outcome.errors, start.elapsed().as_secs_f64());
        outcome
    }
}
