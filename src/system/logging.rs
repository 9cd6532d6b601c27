//! Logging system initialization
//!
//! Sets up the tracing subscriber from the loaded configuration.

use std::io::Write;

use tracing_appender::non_blocking::WorkerGuard;

use crate::config::LoggingConfig;
use crate::errors::{LinkdeskError, Result};

/// Where log lines go when no file is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleSink {
    Stderr,
    /// The terminal belongs to the TUI; drop console output
    Discard,
}

/// Initialize the logging system
///
/// Call once during startup, after the configuration has been loaded.
/// The returned guard must stay alive for the whole program so buffered
/// lines are flushed.
pub fn init_logging(config: &LoggingConfig, console: ConsoleSink) -> Result<WorkerGuard> {
    let to_file = !config.file.is_empty();

    let writer: Box<dyn Write + Send + Sync> = if to_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.file)
            .map_err(|e| {
                LinkdeskError::config(format!("Failed to open log file {}: {}", config.file, e))
            })?;
        Box::new(file)
    } else {
        match console {
            ConsoleSink::Stderr => Box::new(std::io::stderr()),
            ConsoleSink::Discard => Box::new(std::io::sink()),
        }
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| LinkdeskError::config(format!("Invalid log level: {}", e)))?;

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(!to_file && console == ConsoleSink::Stderr);

    let installed = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    installed.map_err(|e| LinkdeskError::config(format!("Logger already set: {}", e)))?;

    Ok(guard)
}
