use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)] // requires `derive` feature
#[command(name = "copy-images", version)]
#[command(about = "Copy images from Jekyll _site directory to Ghost directory", long_about = None)]
pub struct Cli {
    /// The path to your generated Jekyll site (usually `_site`), e.g., '~/my-jekyll-site/_site'.
    pub jekyll_site_dir: PathBuf,

    /// The path to the top level of your Ghost site (the parent of the `content` directory).
    pub ghost_dir: PathBuf,

    /// Read the image report from this file instead of the one next to the program.
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Write the full log to this file instead of the one next to the program.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
