pub mod config;
pub mod engine;
pub mod error;
pub mod materializer;
pub mod progress;
pub mod report;

pub use config::AppConfig;
pub use engine::{MigrationEngine, MigrationResult};
pub use error::Error;
pub use materializer::{CopyPlan, Materializer};
pub use progress::{ProgressReporter, SilentReporter};
pub use report::{ParsedReport, ReportParser, TargetMapping};
