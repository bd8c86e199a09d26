//! Episode simulation.
//!
//! [`DiscoMaze`] is the authoritative owner of an episode: it carves the
//! maze, spawns the player and targets, resolves movement, and renders the
//! color buffer that observations are cut from. Every random draw goes
//! through its single [`PcgRng`], so a seed fixes the whole trajectory.

mod errors;
mod transition;

pub use errors::{SimError, SpawnError};
pub use transition::Transition;

use std::collections::BTreeSet;

use rand::seq::{SliceRandom, index};

use crate::action::Action;
use crate::config::MazeConfig;
use crate::env::{Environment, Info, PcgRng};
use crate::maze;
use crate::observe::{self, Frame, Palette, Rgb};
use crate::state::{Cell, GridMap, ObjectId, ObjectTable, Position};

/// Base Random Disco Maze simulator.
///
/// Observations are color frames: the full buffer, or an egocentric window
/// when [`MazeConfig::field`] is set.
#[derive(Clone, Debug)]
pub struct DiscoMaze {
    config: MazeConfig,
    palette: Palette,
    rng: PcgRng,
    seed: u64,
    grid: GridMap,
    objects: ObjectTable,
    targets: BTreeSet<ObjectId>,
    is_alive: bool,
    terminated: bool,
    buffer: Frame<Rgb>,
}

impl DiscoMaze {
    /// Validates `config`, seeds the generator and runs the first reset.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] for invalid parameters.
    pub fn new(config: MazeConfig) -> Result<Self, SimError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(PcgRng::entropy_seed);
        let (rows, cols) = config.grid_shape();
        let mut sim = Self {
            palette: Palette::hot(config.n_colors),
            rng: PcgRng::new(seed),
            seed,
            grid: GridMap::new(rows, cols),
            objects: ObjectTable::new(),
            targets: BTreeSet::new(),
            is_alive: false,
            terminated: false,
            buffer: Frame::new(rows, cols, Palette::BACKGROUND),
            config,
        };
        sim.reset()?;
        Ok(sim)
    }

    /// Starts a new episode on a freshly carved maze.
    ///
    /// The generator is not reseeded, so consecutive resets produce
    /// different mazes.
    pub fn reset(&mut self) -> Result<Frame<Rgb>, SimError> {
        let walls = maze::generate(self.config.rows, self.config.cols, &mut self.rng);
        let mut grid = GridMap::from_walls(&walls);
        let mut objects = ObjectTable::new();
        let mut targets = BTreeSet::new();

        let empty = grid.coordinates_of(Cell::Empty);
        let requested = 1 + self.config.n_targets;
        if empty.len() < requested {
            return Err(SpawnError::NotEnoughSpace {
                requested,
                available: empty.len(),
            }
            .into());
        }

        let player = *empty
            .choose(&mut self.rng)
            .ok_or(SpawnError::NotEnoughSpace {
                requested,
                available: 0,
            })?;
        let id = objects.insert(player).ok_or(SpawnError::IdsExhausted)?;
        grid.set(player, id)?;

        let empty = grid.coordinates_of(Cell::Empty);
        for i in index::sample(&mut self.rng, empty.len(), self.config.n_targets) {
            let at = empty[i];
            let id = objects.insert(at).ok_or(SpawnError::IdsExhausted)?;
            grid.set(at, id)?;
            targets.insert(id);
        }

        self.grid = grid;
        self.objects = objects;
        self.targets = targets;
        self.is_alive = true;
        self.terminated = false;
        self.buffer = self.render_grid_inner();

        tracing::debug!(
            rows = self.config.rows,
            cols = self.config.cols,
            %player,
            targets = self.targets.len(),
            "episode reset"
        );
        Ok(self.observation())
    }

    /// Applies one action.
    ///
    /// After termination the last observation is returned again with zero
    /// reward and `terminated = true`.
    pub fn step(&mut self, action: Action) -> Result<Transition<Frame<Rgb>>, SimError> {
        if self.terminated {
            return Ok(Transition::new(self.observation(), 0.0, true, Info::new()));
        }

        let mut dest = Cell::Empty;
        if self.is_alive {
            if let Some(direction) = action.direction() {
                dest = transition::resolve_move(
                    &mut self.grid,
                    &mut self.objects,
                    &self.targets,
                    ObjectId::PLAYER,
                    direction,
                )?;
            }
        }

        let mut reward = 0.0;
        if let Cell::Object(id) = dest {
            if self.targets.remove(&id) {
                self.objects.retire(id);
                reward = 1.0;
            }
        }

        if dest.is_wall() {
            self.is_alive = false;
        }
        let exhausted = self.targets.is_empty()
            && (self.config.n_targets > 0 || self.config.end_without_targets);
        self.terminated = !self.is_alive || exhausted;

        self.buffer = self.render_grid_inner();

        tracing::trace!(
            %action,
            player = %self.player_position(),
            reward,
            remaining = self.targets.len(),
            "step"
        );
        if self.terminated {
            tracing::debug!(
                alive = self.is_alive,
                remaining = self.targets.len(),
                "episode terminated"
            );
        }

        Ok(Transition::new(
            self.observation(),
            reward,
            self.terminated,
            Info::new(),
        ))
    }

    /// Reseeds the generator without touching the current episode.
    ///
    /// Draws a seed from OS entropy when `seed` is `None`; returns the seed
    /// actually used.
    pub fn seed(&mut self, seed: Option<u64>) -> u64 {
        let seed = seed.unwrap_or_else(PcgRng::entropy_seed);
        self.rng.reseed(seed);
        self.seed = seed;
        tracing::debug!(seed, "generator reseeded");
        seed
    }

    /// Seed the generator was last seeded with.
    pub fn current_seed(&self) -> u64 {
        self.seed
    }

    // ===== queries =====

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Full color buffer of the current step.
    pub fn state(&self) -> &Frame<Rgb> {
        &self.buffer
    }

    /// Agent's view of the current step.
    pub fn observation(&self) -> Frame<Rgb> {
        observe::observe(
            &self.buffer,
            self.player_position(),
            self.config.field,
            Palette::BACKGROUND,
        )
    }

    /// Visibility mask matching [`Self::observation`].
    pub fn mask(&self) -> Frame<bool> {
        observe::observe_mask(
            self.buffer.shape(),
            self.player_position(),
            self.config.field,
        )
    }

    pub fn grid(&self) -> &GridMap {
        &self.grid
    }

    pub fn objects(&self) -> &ObjectTable {
        &self.objects
    }

    pub fn player_position(&self) -> Position {
        // the player is inserted first on every reset and never retired
        let position = self.objects.position(ObjectId::PLAYER);
        debug_assert!(position.is_some(), "player missing from object table");
        position.unwrap_or(Position::ORIGIN)
    }

    /// Ids of targets not yet consumed.
    pub fn targets(&self) -> &BTreeSet<ObjectId> {
        &self.targets
    }

    /// Positions of targets not yet consumed, in id order.
    pub fn target_positions(&self) -> Vec<Position> {
        self.targets
            .iter()
            .filter_map(|&id| self.objects.position(id))
            .collect()
    }

    pub fn is_alive(&self) -> bool {
        self.is_alive
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Renders an arbitrary grid with this episode's palette, target set
    /// and generator.
    pub fn render_grid(&mut self, grid: &GridMap) -> Frame<Rgb> {
        observe::render(grid, &self.targets, &self.palette, &mut self.rng)
    }

    /// Draws a uniformly random empty cell with the episode generator.
    pub fn random_empty_cell(&mut self) -> Option<Position> {
        self.grid
            .coordinates_of(Cell::Empty)
            .choose(&mut self.rng)
            .copied()
    }

    fn render_grid_inner(&mut self) -> Frame<Rgb> {
        observe::render(&self.grid, &self.targets, &self.palette, &mut self.rng)
    }
}

impl Environment for DiscoMaze {
    type Observation = Frame<Rgb>;

    fn reset(&mut self) -> Result<Self::Observation, SimError> {
        DiscoMaze::reset(self)
    }

    fn step(&mut self, action: Action) -> Result<Transition<Self::Observation>, SimError> {
        DiscoMaze::step(self, action)
    }

    fn seed(&mut self, seed: Option<u64>) -> u64 {
        DiscoMaze::seed(self, seed)
    }
}
