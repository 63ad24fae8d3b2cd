use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::path::Path;
use tracing::{Event, Level, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt as tracing_fmt, EnvFilter};

fn level_name(level: &Level) -> &'static str {
    match *level {
        Level::WARN => "WARNING",
        Level::ERROR => "ERROR",
        Level::INFO => "INFO",
        Level::DEBUG => "DEBUG",
        Level::TRACE => "TRACE",
    }
}

/// Writes each event as `LEVEL: message`.
struct LevelPrefixed;

impl<S, N> FormatEvent<S, N> for LevelPrefixed
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(writer, "{}: ", level_name(event.metadata().level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Console gets bare messages at INFO and above; the log file gets every
/// event at DEBUG and above, prefixed with its level. `TRACING_LEVEL`
/// overrides the file filter.
pub fn init_logger(log_file_path: &Path) -> Result<WorkerGuard> {
    let filter = env::var("TRACING_LEVEL").unwrap_or_else(|_| "debug".to_string());
    let file_filter = EnvFilter::new(filter);

    let log_dir = log_file_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let log_file_name = log_file_path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", log_file_path.display()))?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(log_file_name.to_string_lossy().into_owned())
        .build(log_dir)
        .with_context(|| format!("Failed to open log file {}", log_file_path.display()))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_fmt::layer()
                .with_writer(std::io::stdout)
                .without_time()
                .with_level(false)
                .with_target(false)
                .with_ansi(true)
                .with_filter(LevelFilter::INFO),
        )
        .with(
            tracing_fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .event_format(LevelPrefixed)
                .with_filter(file_filter),
        )
        .init();

    Ok(guard)
}
