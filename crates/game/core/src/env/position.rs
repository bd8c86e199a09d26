use crate::action::Action;
use crate::config::MazeConfig;
use crate::engine::{DiscoMaze, SimError, Transition};
use crate::observe::{Frame, Rgb};
use crate::state::Position;

use super::Environment;

/// Base observation paired with the player's current cell.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionObservation {
    pub position: Position,
    pub state: Frame<Rgb>,
}

/// Adds the player's coordinates to every observation.
#[derive(Clone, Debug)]
pub struct WithPosition {
    inner: DiscoMaze,
}

impl WithPosition {
    pub fn new(config: MazeConfig) -> Result<Self, SimError> {
        Ok(Self::wrap(DiscoMaze::new(config)?))
    }

    pub fn wrap(inner: DiscoMaze) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &DiscoMaze {
        &self.inner
    }

    pub fn into_inner(self) -> DiscoMaze {
        self.inner
    }

    fn augment(&self, state: Frame<Rgb>) -> PositionObservation {
        PositionObservation {
            position: self.inner.player_position(),
            state,
        }
    }
}

impl Environment for WithPosition {
    type Observation = PositionObservation;

    fn reset(&mut self) -> Result<PositionObservation, SimError> {
        let state = self.inner.reset()?;
        Ok(self.augment(state))
    }

    fn step(&mut self, action: Action) -> Result<Transition<PositionObservation>, SimError> {
        let transition = self.inner.step(action)?;
        Ok(transition.map_observation(|state| self.augment(state)))
    }

    fn seed(&mut self, seed: Option<u64>) -> u64 {
        self.inner.seed(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldRadius;

    #[test]
    fn position_tracks_player() {
        let config = MazeConfig::new(4, 4)
            .with_seed(12)
            .with_field(FieldRadius::new(1, 1));
        let mut env = WithPosition::new(config).unwrap();

        let first = env.reset().unwrap();
        assert_eq!(first.position, env.inner().player_position());
        assert_eq!(first.state.shape(), (3, 3));

        for action in Action::ALL {
            let transition = env.step(action).unwrap();
            assert_eq!(transition.observation.position, env.inner().player_position());
            assert_eq!(transition.observation.state, env.inner().observation());
        }
    }
}
