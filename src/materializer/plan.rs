use super::Materializer;
use crate::error::Error;
use crate::progress::ProgressReporter;
use crate::report::TargetMapping;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error};
use walkdir::WalkDir;

/// Target directory → source files to copy into it. Fully built before any
/// copy runs.
#[derive(Debug, Default)]
pub struct CopyPlan {
    entries: IndexMap<PathBuf, Vec<PathBuf>>,
}

impl CopyPlan {
    pub fn insert(&mut self, target_dir: PathBuf, sources: Vec<PathBuf>) {
        self.entries.insert(target_dir, sources);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PathBuf, &Vec<PathBuf>)> {
        self.entries.iter()
    }

    pub fn sources_for(&self, target_dir: &Path) -> Option<&[PathBuf]> {
        self.entries.get(target_dir).map(Vec::as_slice)
    }

    pub fn target_count(&self) -> usize {
        self.entries.len()
    }

    pub fn total_copies(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

#[derive(Debug, Default)]
pub struct PlanOutcome {
    pub plan: CopyPlan,
    pub dir_errors: usize,
}

/// Create `dir` and its parents. A directory that already exists is fine.
pub fn ensure_target_dir(dir: &Path) -> Result<(), Error> {
    match fs::create_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(source) => Err(Error::CreateDir {
            path: dir.to_path_buf(),
            source,
        }),
    }
}

impl Materializer {
    /// Walk all of `site_dir` once, returning every file whose base name is
    /// in `wanted`. Same-named files in different folders are all returned.
    pub fn find_sources(&self, site_dir: &Path, wanted: &[String]) -> Vec<PathBuf> {
        let wanted: HashSet<&str> = wanted.iter().map(String::as_str).collect();
        let mut sources = Vec::new();

        let walker = WalkDir::new(site_dir)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_ignored(entry.path()));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    debug!("Skipping unreadable entry under {}: {}", site_dir.display(), err);
                    continue;
                }
            };

            let file_type = entry.file_type();
            if file_type.is_dir() || (file_type.is_symlink() && entry.path().is_dir()) {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            if wanted.contains(file_name.as_ref()) {
                debug!(
                    "Found image file {} in {}",
                    file_name,
                    entry.path().parent().unwrap_or(site_dir).display()
                );
                sources.push(entry.path().to_path_buf());
            }
        }

        sources
    }

    /// Create every target directory and find its sources under `site_dir`.
    ///
    /// Directory failures are logged and counted; the target is still
    /// searched and planned.
    pub fn build_plan(
        &self,
        targets: &TargetMapping,
        site_dir: &Path,
        reporter: &dyn ProgressReporter,
    ) -> PlanOutcome {
        let mut outcome = PlanOutcome::default();
        let start = Instant::now();
        reporter.on_search_start(targets.len());

        for (target_dir, file_names) in targets {
            if let Err(err) = ensure_target_dir(target_dir) {
                error!("{}", err);
                outcome.dir_errors += 1;
            }

            let sources = self.find_sources(site_dir, file_names);
            reporter.on_target_searched(target_dir, sources.len());
            outcome.plan.insert(target_dir.clone(), sources);
        }

        reporter.on_search_complete(outcome.plan.total_copies(), start.elapsed().as_secs_f64());
        outcome
    }
}
