//! Structured logging setup
//!
//! Provides:
//! - Pretty formatting for interactive use, JSON for machine consumption
//! - Console (stderr), daily rolling file, or both
//! - `RUST_LOG` taking precedence over the configured level
//!
//! Stdout is left to the conversion's confirmation line.

use crate::config::Config;
use anyhow::Result;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

const LOG_FILE_PREFIX: &str = "beacon-convert.log";

/// Initialize the global subscriber from configuration.
///
/// When logs go to a file the returned guard must be held until exit, or
/// buffered lines are lost.
pub fn init_logging(config: &Config) -> Result<Option<WorkerGuard>> {
    let log_format = config.logging.format.as_str();
    let log_dir = config.paths.log_directory.as_path();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.output.as_str() {
        "file" => init_file_logging(env_filter, log_format, log_dir).map(Some),
        "both" => init_combined_logging(env_filter, log_format, log_dir).map(Some),
        _ => init_console_logging(env_filter, log_format).map(|_| None),
    }
}

fn init_console_logging(filter: EnvFilter, format: &str) -> Result<()> {
    let subscriber = tracing_subscriber::registry().with(filter);

    match format {
        "json" => subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()?,
        _ => subscriber
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_ansi(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .pretty(),
            )
            .try_init()?,
    }

    Ok(())
}

fn daily_appender(log_dir: &Path) -> Result<RollingFileAppender> {
    Ok(RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(log_dir)?)
}

fn init_file_logging(filter: EnvFilter, format: &str, log_dir: &Path) -> Result<WorkerGuard> {
    let (non_blocking, guard) = tracing_appender::non_blocking(daily_appender(log_dir)?);

    let subscriber = tracing_subscriber::registry().with(filter);

    match format {
        "json" => subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .try_init()?,
        _ => subscriber
            .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
            .try_init()?,
    }

    Ok(guard)
}

fn init_combined_logging(filter: EnvFilter, format: &str, log_dir: &Path) -> Result<WorkerGuard> {
    let (non_blocking, guard) = tracing_appender::non_blocking(daily_appender(log_dir)?);

    let subscriber = tracing_subscriber::registry().with(filter);

    match format {
        "json" => subscriber
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(fmt::layer().json().with_writer(non_blocking))
            .try_init()?,
        _ => subscriber
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
            .try_init()?,
    }

    Ok(guard)
}
