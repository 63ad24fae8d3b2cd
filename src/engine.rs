use crate::config::AppConfig;
use crate::error::Error;
use crate::materializer::Materializer;
use crate::progress::ProgressReporter;
use crate::report::{self, DuplicateFileName};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub struct MigrationEngine {
    config: AppConfig,
}

#[derive(Debug)]
pub struct MigrationResult {
    pub targets: usize,
    pub unique_file_names: usize,
    pub copied: usize,
    pub dir_errors: usize,
    pub copy_errors: usize,
    pub duplicates: Vec<DuplicateFileName>,
    pub parse_duration: Duration,
    pub search_duration: Duration,
    pub copy_duration: Duration,
}

impl MigrationResult {
    /// Directory creation and copy failures combined.
    pub fn errors(&self) -> usize {
        self.dir_errors + self.copy_errors
    }

    pub fn summary(&self) -> String {
        let errors = self.errors();
        format!(
            "Finished. {} of {} files copied. {} {} occurred.",
            self.copied,
            self.unique_file_names,
            errors,
            plural_errors(errors)
        )
    }
}

pub fn plural_errors(count: usize) -> &'static str {
    if count == 1 {
        "error"
    } else {
        "errors"
    }
}

impl MigrationEngine {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Run one migration:
    /// 1. Read the report into target directory → file names
    /// 2. Create each target directory and search `site_dir` for its files
    /// 3. Copy everything found
    ///
    /// Only a report that cannot be opened or read is an error; per-directory
    /// and per-file failures are counted in the result.
    pub fn run(
        &self,
        site_dir: &Path,
        ghost_dir: &Path,
        reporter: &dyn ProgressReporter,
    ) -> Result<MigrationResult, Error> {
        info!("Jekyll directory: {}", site_dir.display());
        info!("Ghost directory: {}", ghost_dir.display());

        // Phase 1: Parse
        let parse_start = Instant::now();
        let report_path = &self.config.report_path;
        let parsed = report::read_report(report_path, ghost_dir)?;
        let parse_duration = parse_start.elapsed();
        info!(
            "Read {} unique image file names from {}",
            parsed.unique_file_names,
            report_path.display()
        );
        debug!(
            "Parse completed in {:.2}s; {} target directories, {} duplicates skipped, {} orphaned",
            parse_duration.as_secs_f64(),
            parsed.targets.len(),
            parsed.duplicates.len(),
            parsed.orphaned_file_names,
        );
        reporter.on_report_read(parsed.unique_file_names, parsed.targets.len());

        // Phase 2: Search
        info!("Searching for image files in {}...", site_dir.display());
        let materializer = Materializer::with_ignore_patterns(&self.config.ignore_patterns);
        let search_start = Instant::now();
        let planned = materializer.build_plan(&parsed.targets, site_dir, reporter);
        let search_duration = search_start.elapsed();
        debug!(
            "Search completed in {:.2}s; {} files queued for {} directories",
            search_duration.as_secs_f64(),
            planned.plan.total_copies(),
            planned.plan.target_count(),
        );

        // Phase 3: Copy
        info!("Copying image files to {}...", ghost_dir.display());
        let copy_start = Instant::now();
        let copied = materializer.execute(&planned.plan, reporter);
        let copy_duration = copy_start.elapsed();

        let result = MigrationResult {
            targets: parsed.targets.len(),
            unique_file_names: parsed.unique_file_names,
            copied: copied.copied,
            dir_errors: planned.dir_errors,
            copy_errors: copied.errors,
            duplicates: parsed.duplicates,
            parse_duration,
            search_duration,
            copy_duration,
        };
        info!("{}", result.summary());

        Ok(result)
    }
}
