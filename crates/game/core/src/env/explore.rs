use std::collections::VecDeque;

use crate::action::{Action, Direction};
use crate::config::MazeConfig;
use crate::engine::{DiscoMaze, SimError, SpawnError, Transition};
use crate::observe::{Frame, Rgb};
use crate::state::{GridMap, Position};

use super::{Environment, Info};

/// Breadth-first distances over non-wall cells from `source`.
///
/// Walls and unreachable cells stay `None`.
pub(crate) fn distances(grid: &GridMap, source: Position) -> Frame<Option<usize>> {
    let (rows, cols) = grid.shape();
    let mut cost = Frame::new(rows, cols, None);
    if !grid.contains(source) {
        return cost;
    }

    cost[source] = Some(0);
    let mut frontier = VecDeque::from([(source, 0usize)]);
    while let Some((at, d)) = frontier.pop_front() {
        for direction in Direction::ALL {
            let Some(next) = at.step(direction) else {
                continue;
            };
            let open = grid.get(next).is_some_and(|cell| !cell.is_wall());
            if open && cost.get(next).is_some_and(Option::is_none) {
                cost[next] = Some(d + 1);
                frontier.push_back((next, d + 1));
            }
        }
    }
    cost
}

/// Maze with shaped reward towards a hidden goal.
///
/// Runs the base simulator without targets. Each reset draws a goal cell
/// and precomputes `(1 − d / d_max)^alpha` over the corridor graph, where
/// `d` is the path length to the goal. Stepping onto a wall costs `-1` and
/// ends the episode; reaching the goal ends it as well.
#[derive(Clone, Debug)]
pub struct ExploreMaze {
    inner: DiscoMaze,
    alpha: f64,
    goal: Position,
    proximity: Frame<f32>,
    terminated: bool,
}

impl ExploreMaze {
    pub const DEFAULT_ALPHA: f64 = 10.0;

    pub fn new(config: MazeConfig) -> Result<Self, SimError> {
        Self::with_alpha(config, Self::DEFAULT_ALPHA)
    }

    pub fn with_alpha(config: MazeConfig, alpha: f64) -> Result<Self, SimError> {
        let inner = DiscoMaze::new(config.with_targets(0).with_end_without_targets(false))?;
        let (rows, cols) = inner.grid().shape();
        let mut env = Self {
            inner,
            alpha,
            goal: Position::ORIGIN,
            proximity: Frame::new(rows, cols, 0.0),
            terminated: false,
        };
        env.draw_goal()?;
        Ok(env)
    }

    pub fn inner(&self) -> &DiscoMaze {
        &self.inner
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Shaped reward of every cell for the current goal; `0` on walls.
    pub fn proximity(&self) -> &Frame<f32> {
        &self.proximity
    }

    fn draw_goal(&mut self) -> Result<(), SimError> {
        let goal = self
            .inner
            .random_empty_cell()
            .ok_or(SpawnError::NotEnoughSpace {
                requested: 1,
                available: 0,
            })?;

        let cost = distances(self.inner.grid(), goal);
        let longest = cost.as_slice().iter().flatten().copied().max().unwrap_or(0);
        let alpha = self.alpha;
        self.proximity = cost.map(|d| match *d {
            Some(d) if longest > 0 => (1.0 - d as f64 / longest as f64).powf(alpha) as f32,
            Some(_) => 1.0,
            None => 0.0,
        });
        self.goal = goal;
        self.terminated = false;
        tracing::debug!(%goal, longest, "exploration goal drawn");
        Ok(())
    }

    fn info(&self) -> Info {
        Info::new()
            .with("goal", self.goal)
            .with("player", self.inner.player_position())
    }
}

impl Environment for ExploreMaze {
    type Observation = Frame<Rgb>;

    fn reset(&mut self) -> Result<Frame<Rgb>, SimError> {
        let observation = self.inner.reset()?;
        self.draw_goal()?;
        Ok(observation)
    }

    fn step(&mut self, action: Action) -> Result<Transition<Frame<Rgb>>, SimError> {
        if self.terminated {
            return Ok(Transition::new(
                self.inner.observation(),
                0.0,
                true,
                self.info(),
            ));
        }

        let base = self.inner.step(action)?;
        let player = self.inner.player_position();
        let reward = if base.terminated {
            -1.0
        } else {
            self.proximity.get(player).copied().unwrap_or(0.0)
        };
        self.terminated = base.terminated || player == self.goal;

        Ok(Transition::new(
            base.observation,
            reward,
            self.terminated,
            self.info(),
        ))
    }

    fn seed(&mut self, seed: Option<u64>) -> u64 {
        self.inner.seed(seed)
    }
}
