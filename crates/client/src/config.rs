//! Client configuration.
//!
//! Values come from environment variables (optionally loaded from `.env`),
//! then command-line flags override them.
use std::env;
use std::path::PathBuf;

use clap::Args;
use discomaze_core::{FieldRadius, MazeConfig};

/// Settings for one client run.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub maze: MazeConfig,
    pub logging: LoggingConfig,
}

/// Log sinks beyond stderr.
#[derive(Clone, Debug, Default)]
pub struct LoggingConfig {
    /// Directory for the daily-rolling log file. `None` picks the platform
    /// cache directory when file logging is enabled.
    pub log_dir: Option<PathBuf>,
    /// Whether to write a log file at all.
    pub file: bool,
}

impl ClientConfig {
    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DISCOMAZE_ROWS`, `DISCOMAZE_COLS` - logical maze size (default: 10x10)
    /// - `DISCOMAZE_COLORS` - wall palette size (default: 5)
    /// - `DISCOMAZE_TARGETS` - targets per episode (default: 1)
    /// - `DISCOMAZE_FIELD` - observation radius as `RxC` (default: full view)
    /// - `DISCOMAZE_SEED` - generator seed (default: OS entropy)
    /// - `DISCOMAZE_LOG_DIR` - log file directory; implies `DISCOMAZE_LOG_FILE`
    /// - `DISCOMAZE_LOG_FILE` - write a log file to the default directory
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).map(|value| value.trim().to_owned());
        let mut config = Self::default();

        if let Some(rows) = read("DISCOMAZE_ROWS").and_then(|v| v.parse().ok()) {
            config.maze.rows = rows;
        }
        if let Some(cols) = read("DISCOMAZE_COLS").and_then(|v| v.parse().ok()) {
            config.maze.cols = cols;
        }
        if let Some(colors) = read("DISCOMAZE_COLORS").and_then(|v| v.parse().ok()) {
            config.maze.n_colors = colors;
        }
        if let Some(targets) = read("DISCOMAZE_TARGETS").and_then(|v| v.parse().ok()) {
            config.maze.n_targets = targets;
        }
        if let Some(field) = read("DISCOMAZE_FIELD") {
            match parse_field(&field) {
                Ok(field) => config.maze.field = Some(field),
                Err(err) => tracing::warn!(%field, %err, "ignoring DISCOMAZE_FIELD"),
            }
        }
        if let Some(seed) = read("DISCOMAZE_SEED").and_then(|v| v.parse().ok()) {
            config.maze.seed = Some(seed);
        }
        if let Some(dir) = read("DISCOMAZE_LOG_DIR").filter(|v| !v.is_empty()) {
            config.logging.log_dir = Some(PathBuf::from(dir));
            config.logging.file = true;
        }
        if let Some(file) = read("DISCOMAZE_LOG_FILE").as_deref().and_then(parse_bool) {
            config.logging.file = file;
        }

        config
    }

    /// Applies command-line overrides on top of the environment.
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(rows) = overrides.rows {
            self.maze.rows = rows;
        }
        if let Some(cols) = overrides.cols {
            self.maze.cols = cols;
        }
        if let Some(colors) = overrides.colors {
            self.maze.n_colors = colors;
        }
        if let Some(targets) = overrides.targets {
            self.maze.n_targets = targets;
        }
        if let Some(field) = overrides.field {
            self.maze.field = Some(field);
        }
        if overrides.full_view {
            self.maze.field = None;
        }
        if let Some(seed) = overrides.seed {
            self.maze.seed = Some(seed);
        }
        if let Some(dir) = &overrides.log_dir {
            self.logging.log_dir = Some(dir.clone());
            self.logging.file = true;
        }
    }
}

/// Maze and logging flags shared by every subcommand.
#[derive(Args, Clone, Debug, Default)]
pub struct Overrides {
    /// Logical maze rows
    #[arg(long, global = true)]
    pub rows: Option<usize>,

    /// Logical maze columns
    #[arg(long, global = true)]
    pub cols: Option<usize>,

    /// Number of wall colors
    #[arg(long, global = true)]
    pub colors: Option<usize>,

    /// Targets spawned per episode
    #[arg(long, global = true)]
    pub targets: Option<usize>,

    /// Egocentric observation radius, e.g. `3x3`
    #[arg(long, global = true, value_parser = parse_field)]
    pub field: Option<FieldRadius>,

    /// Observe the whole maze even if a field is configured
    #[arg(long, global = true, conflicts_with = "field")]
    pub full_view: bool,

    /// Generator seed
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Also write logs to this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,
}

/// Parses an observation radius written as `RxC` (or a single `R` for a
/// square window).
pub fn parse_field(value: &str) -> Result<FieldRadius, String> {
    let value = value.trim();
    let (rows, cols) = match value.split_once(['x', 'X']) {
        Some((rows, cols)) => (rows, cols),
        None => (value, value),
    };
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|err| format!("invalid field radius `{value}`: {err}"))
    };
    Ok(FieldRadius::new(parse(rows)?, parse(cols)?))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
