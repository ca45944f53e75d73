use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use spdlog::sink::{RotatingFileSink, RotationPolicy, StdStream, StdStreamSink};
use spdlog::{Level, LevelFilter, Logger};

use crate::config::{Config, Log, LogLevel, LogRotation};

pub const DEFAULT_MAX_FILES: usize = 30;

impl From<LogLevel> for Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Critical => Level::Critical,
            LogLevel::Error => Level::Error,
            LogLevel::Warn => Level::Warn,
            LogLevel::Info => Level::Info,
            LogLevel::Debug => Level::Debug,
            LogLevel::Trace => Level::Trace,
        }
    }
}

impl From<LogRotation> for RotationPolicy {
    fn from(value: LogRotation) -> Self {
        match value {
            LogRotation::Daily => RotationPolicy::Daily { hour: 0, minute: 0 },
            LogRotation::Hourly => RotationPolicy::Hourly,
        }
    }
}

fn file_sink(location: &Path, log: &Log) -> spdlog::Result<Arc<RotatingFileSink>> {
    let sink = RotatingFileSink::builder()
        .base_path(location)
        .rotation_policy(log.rotation.into())
        .max_files(log.max_files.unwrap_or(DEFAULT_MAX_FILES))
        .rotate_on_open(false)
        .build()?;
    Ok(Arc::new(sink))
}

// stdout carries the generated post, so the console only ever gets stderr
fn console_sink() -> spdlog::Result<Arc<StdStreamSink>> {
    let sink = StdStreamSink::builder()
        .std_stream(StdStream::Stderr)
        .build()?;
    Ok(Arc::new(sink))
}

/// Builds a logger for `[log]`: a rotating file when a location is known,
/// stderr when asked for or when there is nowhere else to write.
pub fn build_logger(log: &Log) -> spdlog::Result<Arc<Logger>> {
    let mut builder = Logger::builder();

    if let Some(ref location) = log.location {
        builder.sink(file_sink(location, log)?);
    }
    if log.log_to_console || log.location.is_none() {
        builder.sink(console_sink()?);
    }

    let logger = Arc::new(builder.build()?);
    logger.set_level_filter(LevelFilter::MoreSevereEqual(log.level.into()));
    logger.set_flush_level_filter(LevelFilter::MoreSevereEqual(Level::Warn));
    logger.set_flush_period(Some(Duration::from_secs(2)));
    Ok(logger)
}

/// Installs the default logger described by `[log]`. Without that section the
/// spdlog console logger stays in place.
pub fn configure_logger(config: &Config) -> spdlog::Result<()> {
    if let Some(ref log) = config.log {
        spdlog::set_default_logger(build_logger(log)?);
    }
    Ok(())
}
