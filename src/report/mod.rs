//! Reader for the image report: per post, a target directory and the image
//! file names the post uses.

pub mod line;
mod parser;

pub use line::{classify_line, LineKind};
pub use parser::{DuplicateFileName, ParsedReport, ReportParser, TargetMapping};

use crate::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

/// Parse every line of `reader`, resolving target directories under `ghost_dir`.
pub fn parse_report<R: BufRead>(reader: R, ghost_dir: &Path) -> Result<ParsedReport, Error> {
    let mut parser = ReportParser::new(ghost_dir);
    for line in reader.lines() {
        parser.feed_line(&line?);
    }
    Ok(parser.finish())
}

/// Open and parse the report at `path`. Failing to open it is fatal.
pub fn read_report(path: &Path, ghost_dir: &Path) -> Result<ParsedReport, Error> {
    let file = File::open(path).map_err(|source| Error::ReportOpen {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Reading {}...", path.display());
    parse_report(BufReader::new(file), ghost_dir)
}
