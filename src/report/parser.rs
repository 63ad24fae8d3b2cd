use super::line::{classify_line, LineKind};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Resolved target directory → image file names, in first-seen order.
pub type TargetMapping = IndexMap<PathBuf, Vec<String>>;

/// A file name listed twice in the same post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateFileName {
    pub post_title: Option<String>,
    pub file_name: String,
}

#[derive(Debug, Default)]
pub struct ParsedReport {
    pub targets: TargetMapping,
    /// Accepted file names across all posts; the denominator of the summary.
    pub unique_file_names: usize,
    pub duplicates: Vec<DuplicateFileName>,
    /// File names dropped because their post had no target directory.
    pub orphaned_file_names: usize,
}

/// State of the post currently being read.
#[derive(Debug, Default)]
struct PostBlock {
    title: Option<String>,
    target_dir: Option<PathBuf>,
    file_names: Vec<String>,
}

/// Line-at-a-time report parser.
pub struct ReportParser {
    ghost_dir: PathBuf,
    block: PostBlock,
    parsed: ParsedReport,
}

impl ReportParser {
    pub fn new(ghost_dir: &Path) -> Self {
        Self {
            ghost_dir: ghost_dir.to_path_buf(),
            block: PostBlock::default(),
            parsed: ParsedReport::default(),
        }
    }

    pub fn feed_line(&mut self, line: &str) {
        debug!("Line: {}", line);
        match classify_line(line) {
            LineKind::Title(title) => {
                self.block.title = Some(title.to_string());
            }
            LineKind::TargetDir(subdir) => {
                let target_dir = self.ghost_dir.join(subdir);
                debug!("Target Directory: {}", target_dir.display());
                debug!(
                    "Existing Target Directory: {}",
                    if self.parsed.targets.contains_key(&target_dir) {
                        "YES"
                    } else {
                        "NO"
                    }
                );
                self.block.target_dir = Some(target_dir);
            }
            LineKind::Terminator => self.close_block(),
            LineKind::Ignorable => {}
            LineKind::FileName(file_name) => self.add_file_name(file_name),
        }
    }

    fn add_file_name(&mut self, file_name: &str) {
        if self.block.file_names.iter().any(|f| f == file_name) {
            warn!(
                "Skipping duplicate file name in post \"{}\": {}",
                self.block.title.as_deref().unwrap_or("None"),
                file_name
            );
            self.parsed.duplicates.push(DuplicateFileName {
                post_title: self.block.title.clone(),
                file_name: file_name.to_string(),
            });
        } else {
            debug!("File name: {}", file_name);
            self.block.file_names.push(file_name.to_string());
            self.parsed.unique_file_names += 1;
        }
    }

    fn close_block(&mut self) {
        let block = std::mem::take(&mut self.block);
        match block.target_dir {
            Some(target_dir) => self
                .parsed
                .targets
                .entry(target_dir)
                .or_default()
                .extend(block.file_names),
            None => {
                if !block.file_names.is_empty() {
                    debug!(
                        "Dropping {} file names with no target directory",
                        block.file_names.len()
                    );
                }
                self.parsed.orphaned_file_names += block.file_names.len();
            }
        }
    }

    /// Finish parsing. A block with no closing terminator is not flushed.
    pub fn finish(self) -> ParsedReport {
        if !self.block.file_names.is_empty() {
            debug!(
                "Report ended without a terminator; {} file names not recorded",
                self.block.file_names.len()
            );
        }
        self.parsed
    }
}
