//! Environment capability shared by the base simulator and its variants.
//!
//! [`Environment`] is the reset/step/seed contract consumed by control loops
//! and policies. [`DiscoMaze`](crate::engine::DiscoMaze) implements it
//! directly; the variants here wrap a base simulator and reshape its
//! observations, rewards and termination.
mod explore;
mod goal;
mod info;
mod position;
mod rng;

pub use explore::ExploreMaze;
pub use goal::{GoalMaze, GoalObservation};
pub use info::{Info, InfoValue};
pub use position::{PositionObservation, WithPosition};
pub use rng::PcgRng;

use crate::action::Action;
use crate::engine::{SimError, Transition};

/// Episodic environment driven by discrete actions.
pub trait Environment {
    type Observation;

    /// Starts a new episode and returns its first observation.
    fn reset(&mut self) -> Result<Self::Observation, SimError>;

    /// Advances the episode by one action.
    fn step(&mut self, action: Action) -> Result<Transition<Self::Observation>, SimError>;

    /// Reseeds the episode generator and returns the seed in effect.
    fn seed(&mut self, seed: Option<u64>) -> u64;
}
