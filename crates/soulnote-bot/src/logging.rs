//! Tracing bootstrap for the binary.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use soulnote_core::config::LoggingConfig;
use soulnote_infrastructure::SoulnotePaths;

const LOG_FILE_PREFIX: &str = "soulnote.log";

/// Where log events go besides the optional file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Stderr,
    /// The console transport owns the terminal.
    FileOnly,
}

/// Installs the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be kept
/// alive until the process exits.
pub fn init(config: &LoggingConfig, debug: bool, output: LogOutput) -> Result<Option<WorkerGuard>> {
    let filter = build_filter(config, debug, std::env::var("RUST_LOG").ok());

    let (file_layer, guard) = if config.file {
        let log_dir = SoulnotePaths::log_dir().context("Failed to resolve log directory")?;
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
        let appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer().with_writer(writer).with_ansi(false);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    let stderr_layer = (output == LogOutput::Stderr).then(|| fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

/// `--debug` wins, then `RUST_LOG`, then the configured level.
fn build_filter(config: &LoggingConfig, debug: bool, rust_log: Option<String>) -> EnvFilter {
    if debug {
        return EnvFilter::new("debug");
    }
    match rust_log.filter(|value| !value.trim().is_empty()) {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::new(&config.level),
    }
}
