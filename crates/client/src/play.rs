//! Interactive control loop.
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use discomaze_core::{DiscoMaze, MazeConfig};

use crate::input::InputEvent;
use crate::presentation::text_frame;

/// Play in the terminal, one command per line
#[derive(Parser, Debug, Clone, Default)]
pub struct Play {
    /// Disable colored output
    #[arg(long)]
    pub plain: bool,
}

/// Totals reported when the loop ends.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlayReport {
    pub episodes: usize,
    pub steps: usize,
    pub total_reward: f32,
}

const HELP: &str = "keys: a/s/d/w move, . stay, r restart, q quit";

impl Play {
    pub fn execute(self, config: &MazeConfig) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let report = self.run(config, stdin.lock(), stdout.lock())?;
        tracing::info!(
            episodes = report.episodes,
            steps = report.steps,
            total_reward = report.total_reward,
            "Play session ended"
        );
        Ok(())
    }

    /// Drives episodes from `input` until it is exhausted or a quit event
    /// arrives. Every line advances the episode by one step, so an empty
    /// line waits in place.
    pub fn run<R: BufRead, W: Write>(
        &self,
        config: &MazeConfig,
        input: R,
        mut out: W,
    ) -> Result<PlayReport> {
        let mut sim = DiscoMaze::new(config.clone()).context("Failed to build simulator")?;
        let styled = !self.plain;
        let mut report = PlayReport {
            episodes: 1,
            ..PlayReport::default()
        };
        let mut episode_reward = 0.0;

        writeln!(out, "{HELP}")?;
        write!(out, "{}", text_frame(&sim, styled))?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            let Some(event) = InputEvent::parse(&line) else {
                writeln!(out, "unknown command `{}` ({HELP})", line.trim())?;
                continue;
            };

            if event.quit {
                break;
            }

            if event.restart || sim.is_terminated() {
                writeln!(out, "episode return {episode_reward:.2}")?;
                sim.reset().context("Failed to reset episode")?;
                report.episodes += 1;
                episode_reward = 0.0;
                write!(out, "{}", text_frame(&sim, styled))?;
                if event.restart {
                    continue;
                }
            }

            let transition = sim.step(event.action_or_stay())?;
            report.steps += 1;
            report.total_reward += transition.reward;
            episode_reward += transition.reward;

            write!(out, "{}", text_frame(&sim, styled))?;
            if transition.reward != 0.0 {
                writeln!(out, "reward {:.3}", transition.reward)?;
            }
            if transition.terminated {
                let cause = if sim.is_alive() { "no targets left" } else { "hit a wall" };
                writeln!(out, "episode over: {cause}; press enter for a new maze")?;
            }
        }

        writeln!(out, "episode return {episode_reward:.2}")?;
        out.flush()?;
        Ok(report)
    }
}
