use crate::action::Action;
use crate::config::MazeConfig;
use crate::engine::{DiscoMaze, SimError, SpawnError, Transition};
use crate::observe::{Frame, Palette, Rgb};
use crate::state::{ObjectId, Position};

use super::{Environment, Info};

/// Observation of the goal-conditioned variant.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoalObservation {
    pub observation: Frame<Rgb>,
    pub achieved_goal: Frame<Rgb>,
    pub desired_goal: Frame<Rgb>,
}

/// Goal-conditioned maze.
///
/// Runs the base simulator without targets. Every reset draws a goal cell
/// and renders the buffer the agent would see standing on it; the episode
/// succeeds when the player reaches that cell.
#[derive(Clone, Debug)]
pub struct GoalMaze {
    inner: DiscoMaze,
    goal: Position,
    desired: Frame<Rgb>,
    terminated: bool,
    last_success: bool,
}

impl GoalMaze {
    pub fn new(config: MazeConfig) -> Result<Self, SimError> {
        let inner = DiscoMaze::new(config.with_targets(0).with_end_without_targets(false))?;
        let desired = inner.state().clone();
        let mut env = Self {
            inner,
            goal: Position::ORIGIN,
            desired,
            terminated: false,
            last_success: false,
        };
        env.draw_goal()?;
        Ok(env)
    }

    pub fn inner(&self) -> &DiscoMaze {
        &self.inner
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn desired_goal(&self) -> &Frame<Rgb> {
        &self.desired
    }

    /// `0.0` when some cell shows the player in both buffers, `-1.0`
    /// otherwise.
    pub fn compute_reward(achieved_goal: &Frame<Rgb>, desired_goal: &Frame<Rgb>) -> f32 {
        let reached = achieved_goal
            .as_slice()
            .iter()
            .zip(desired_goal.as_slice())
            .any(|(a, d)| *a == Palette::PLAYER && *d == Palette::PLAYER);
        if reached { 0.0 } else { -1.0 }
    }

    fn draw_goal(&mut self) -> Result<(), SimError> {
        let goal = self
            .inner
            .random_empty_cell()
            .ok_or(SpawnError::NotEnoughSpace {
                requested: 1,
                available: 0,
            })?;

        let mut grid = self.inner.grid().clone();
        grid.clear(self.inner.player_position())?;
        grid.set(goal, ObjectId::PLAYER)?;

        self.goal = goal;
        self.desired = self.inner.render_grid(&grid);
        self.terminated = false;
        self.last_success = false;
        tracing::debug!(%goal, "goal drawn");
        Ok(())
    }

    fn observation(&self) -> GoalObservation {
        GoalObservation {
            observation: self.inner.state().clone(),
            achieved_goal: self.inner.state().clone(),
            desired_goal: self.desired.clone(),
        }
    }
}

impl Environment for GoalMaze {
    type Observation = GoalObservation;

    fn reset(&mut self) -> Result<GoalObservation, SimError> {
        self.inner.reset()?;
        self.draw_goal()?;
        Ok(self.observation())
    }

    fn step(&mut self, action: Action) -> Result<Transition<GoalObservation>, SimError> {
        if self.terminated {
            let info = Info::new().with("is_success", self.last_success);
            return Ok(Transition::new(self.observation(), 0.0, true, info));
        }

        let base = self.inner.step(action)?;
        let success = self.inner.player_position() == self.goal;
        self.terminated = base.terminated || success;
        self.last_success = success;

        let mut info = base.info;
        info.insert("is_success", success);
        Ok(Transition::new(
            self.observation(),
            if success { 1.0 } else { 0.0 },
            self.terminated,
            info,
        ))
    }

    fn seed(&mut self, seed: Option<u64>) -> u64 {
        self.inner.seed(seed)
    }
}
