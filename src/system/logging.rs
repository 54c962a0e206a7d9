//! Logging system initialization
//!
//! This module provides functions to initialize the tracing/logging system
//! based on application configuration.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use crate::config::LoggingConfig;

/// Where log lines go when no log file is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// CLI mode: stderr keeps stdout clean for command output
    Stderr,
    /// TUI mode: drop console output so the alternate screen stays intact
    Silent,
}

/// Initialize logging system based on configuration
///
/// A configured `file` always wins over the sink. Otherwise the sink decides
/// between stderr and nothing.
///
/// **Note**: This should be called only once during application startup,
/// after the configuration has been loaded. A second call keeps the first
/// subscriber.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
pub fn init_logging(config: &LoggingConfig, sink: LogSink) -> WorkerGuard {
    let to_file = config.file.as_deref().is_some_and(|f| !f.is_empty());

    let writer: Box<dyn std::io::Write + Send + Sync> = match config.file.as_deref() {
        Some(log_file) if !log_file.is_empty() => file_writer(log_file, config.enable_rotation),
        _ => match sink {
            LogSink::Stderr => Box::new(std::io::stderr()),
            LogSink::Silent => Box::new(std::io::sink()),
        },
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(!to_file && sink == LogSink::Stderr);

    let result = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };

    if let Err(e) = result {
        eprintln!("[WARN] Logging already initialized: {}", e);
    }

    guard
}

fn file_writer(log_file: &str, rotate: bool) -> Box<dyn std::io::Write + Send + Sync> {
    let path = std::path::Path::new(log_file);

    if rotate {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(std::path::Path::new("."));
        let filename = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("linkdeck.log");
        return Box::new(rolling::daily(dir, filename));
    }

    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(file) => Box::new(file),
        Err(e) => {
            eprintln!("[WARN] Cannot open log file {}: {}", log_file, e);
            Box::new(std::io::sink())
        }
    }
}
