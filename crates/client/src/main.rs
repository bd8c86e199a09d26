//! Random Disco Maze client binary.
//!
//! # Examples
//!
//! ```bash
//! # 20 random-policy episodes on a 15x15 maze, summary as JSON
//! cargo run -p discomaze-client -- rollout --rows 15 --cols 15 --episodes 20 --json
//!
//! # play with a 3x3 egocentric window
//! cargo run -p discomaze-client -- play --field 3x3
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use discomaze_client::{ClientConfig, Overrides, Play, Rollout, logging};

/// Random Disco Maze simulator
#[derive(Parser)]
#[command(name = "discomaze")]
#[command(about = "Procedural maze episodes in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    overrides: Overrides,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run headless episodes with a random policy
    Rollout(Rollout),

    /// Play interactively, one command per line
    Play(Play),
}

fn main() -> Result<()> {
    // Load .env file if it exists (DISCOMAZE_* settings)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    config.apply(&cli.overrides);

    let _guard = logging::setup_logging(&config.logging)?;

    tracing::info!(
        rows = config.maze.rows,
        cols = config.maze.cols,
        targets = config.maze.n_targets,
        field = ?config.maze.field,
        seed = ?config.maze.seed,
        "Starting discomaze"
    );

    match cli.command {
        Command::Rollout(cmd) => cmd.execute(&config.maze),
        Command::Play(cmd) => cmd.execute(&config.maze),
    }
}
