//! Tracing subscriber setup.
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

const LOG_FILE_PREFIX: &str = "discomaze.log";

/// Keeps the background log writer alive; drop it last.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

/// Platform-specific log directory.
///
/// - macOS: `~/Library/Caches/discomaze/logs`
/// - Linux: `~/.cache/discomaze/logs` (or `$XDG_CACHE_HOME/discomaze/logs`)
/// - Windows: `%LOCALAPPDATA%\discomaze\logs`
/// - Fallback: `/tmp/discomaze/logs`
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "discomaze")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/discomaze"))
        .join("logs")
}

/// Installs the global subscriber.
///
/// Human-readable events go to stderr, filtered by `RUST_LOG` (default
/// `info`). When file logging is enabled the same events are also written,
/// without ANSI codes, to a daily-rolling file.
pub fn setup_logging(config: &LoggingConfig) -> Result<LoggingGuard> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, guard, file_dir) = if config.file {
        let dir = config.log_dir.clone().unwrap_or_else(default_log_dir);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

        let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer().with_writer(writer).with_ansi(false);
        (Some(layer), Some(guard), Some(dir))
    } else {
        (None, None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    if let Some(dir) = file_dir {
        tracing::info!("Log file: {}/{}.*", dir.display(), LOG_FILE_PREFIX);
    }

    Ok(LoggingGuard { _file: guard })
}
