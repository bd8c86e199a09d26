//! Headless episodes under a uniform random policy.
use anyhow::{Context, Result};
use clap::Parser;
use discomaze_core::{Action, DiscoMaze, MazeConfig, PcgRng};
use rand::Rng;
use serde::Serialize;

/// Run episodes with a uniform random policy
#[derive(Parser, Debug, Clone)]
pub struct Rollout {
    /// Number of episodes to run
    #[arg(long, default_value_t = 10)]
    pub episodes: usize,

    /// Step limit per episode
    #[arg(long, default_value_t = 500)]
    pub max_steps: usize,

    /// Print a JSON summary to stdout
    #[arg(long)]
    pub json: bool,
}

/// Outcome of one episode.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EpisodeSummary {
    pub episode: usize,
    pub steps: usize,
    pub total_reward: f32,
    pub terminated: bool,
    pub alive: bool,
    pub targets_left: usize,
}

/// Outcome of a whole rollout.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RolloutSummary {
    pub config: MazeConfig,
    pub seed: u64,
    pub episodes: Vec<EpisodeSummary>,
    pub mean_return: f32,
}

impl Rollout {
    pub fn execute(self, config: &MazeConfig) -> Result<()> {
        let summary = self.run(config)?;

        if self.json {
            let json = serde_json::to_string_pretty(&summary)
                .context("Failed to serialize rollout summary")?;
            println!("{json}");
        }

        tracing::info!(
            episodes = summary.episodes.len(),
            mean_return = summary.mean_return,
            seed = summary.seed,
            "Rollout finished"
        );
        Ok(())
    }

    /// Runs every episode on one simulator, resetting between them.
    ///
    /// The policy draws from its own generator seeded from the simulator's
    /// seed, so a fixed seed reproduces the whole rollout.
    pub fn run(&self, config: &MazeConfig) -> Result<RolloutSummary> {
        let mut sim = DiscoMaze::new(config.clone()).context("Failed to build simulator")?;
        let seed = sim.current_seed();
        let mut policy = PcgRng::new(seed.rotate_left(32));

        let mut episodes = Vec::with_capacity(self.episodes);
        for episode in 0..self.episodes {
            if episode > 0 {
                sim.reset().context("Failed to reset episode")?;
            }

            let mut steps = 0;
            let mut total_reward = 0.0;
            while steps < self.max_steps && !sim.is_terminated() {
                let action =
                    Action::from_index(policy.gen_range(0..Action::COUNT)).unwrap_or_default();
                let transition = sim.step(action)?;
                total_reward += transition.reward;
                steps += 1;
            }

            let summary = EpisodeSummary {
                episode,
                steps,
                total_reward,
                terminated: sim.is_terminated(),
                alive: sim.is_alive(),
                targets_left: sim.targets().len(),
            };
            tracing::info!(
                episode,
                steps,
                total_reward,
                terminated = summary.terminated,
                "Episode finished"
            );
            episodes.push(summary);
        }

        let mean_return = if episodes.is_empty() {
            0.0
        } else {
            episodes.iter().map(|e| e.total_reward).sum::<f32>() / episodes.len() as f32
        };

        Ok(RolloutSummary {
            config: config.clone(),
            seed,
            episodes,
            mean_return,
        })
    }
}
