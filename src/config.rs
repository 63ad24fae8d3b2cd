use config::{Config, ConfigError, Environment, File as ConfigFile};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

pub const REPORT_FILE_NAME: &str = "image-report.txt";
pub const LOG_FILE_NAME: &str = "copy-images.log";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub report_path: PathBuf,
    pub log_file_path: PathBuf,
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

impl AppConfig {
    /// Defaults resolved against `dir`, with no ignore patterns.
    pub fn with_program_dir(dir: &Path) -> Self {
        Self {
            report_path: dir.join(REPORT_FILE_NAME),
            log_file_path: dir.join(LOG_FILE_NAME),
            ignore_patterns: Vec::new(),
        }
    }
}

/// Directory holding the running executable. The report and the log file live
/// next to the program, falling back to the working directory.
pub fn program_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.canonicalize().ok())
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    load_configuration_from(&program_dir())
}

/// Layer defaults, an optional `Config` file in `dir`, and `COPY_IMAGES_*`
/// environment variables.
pub fn load_configuration_from(dir: &Path) -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::with_program_dir(dir);
    let builder = Config::builder()
        .set_default(
            "report_path",
            defaults.report_path.to_string_lossy().into_owned(),
        )?
        .set_default(
            "log_file_path",
            defaults.log_file_path.to_string_lossy().into_owned(),
        )?
        .add_source(ConfigFile::with_name(&dir.join("Config").to_string_lossy()).required(false))
        .add_source(Environment::with_prefix("COPY_IMAGES"))
        .build()?;
    builder.try_deserialize::<AppConfig>()
}
