//! Movement resolution and the step result type.

use std::collections::BTreeSet;

use crate::action::Direction;
use crate::env::Info;
use crate::state::{Cell, GridError, GridMap, ObjectId, ObjectTable, Relocation};

/// Result of advancing an environment by one step.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition<Obs> {
    pub observation: Obs,
    pub reward: f32,
    pub terminated: bool,
    pub info: Info,
}

impl<Obs> Transition<Obs> {
    pub fn new(observation: Obs, reward: f32, terminated: bool, info: Info) -> Self {
        Self {
            observation,
            reward,
            terminated,
            info,
        }
    }

    /// Replaces the observation, keeping reward, termination and info.
    pub fn map_observation<U>(self, f: impl FnOnce(Obs) -> U) -> Transition<U> {
        Transition {
            observation: f(self.observation),
            reward: self.reward,
            terminated: self.terminated,
            info: self.info,
        }
    }
}

/// Moves `mover` one cell towards `direction`.
///
/// The destination is read before anything changes and returned to the
/// caller. A target at the destination is consumed and a wall is displaced
/// (both cleared) before the move; any other occupant blocks it.
pub(super) fn resolve_move(
    grid: &mut GridMap,
    objects: &mut ObjectTable,
    targets: &BTreeSet<ObjectId>,
    mover: ObjectId,
    direction: Direction,
) -> Result<Cell, GridError> {
    let Some(src) = objects.position(mover) else {
        tracing::warn!(%mover, "move requested for a retired object");
        return Ok(Cell::Empty);
    };
    let Some(dst) = src.step(direction).filter(|&dst| grid.contains(dst)) else {
        return Ok(Cell::Empty);
    };

    let dest = grid.get(dst).unwrap_or_default();
    match dest {
        Cell::Object(id) if targets.contains(&id) => grid.clear(dst)?,
        Cell::Wall => grid.clear(dst)?,
        _ => {}
    }

    match grid.relocate(src, dst)? {
        Relocation::Moved => {
            objects.relocate(mover, dst);
        }
        Relocation::Blocked(occupant) => {
            tracing::warn!(%mover, from = %src, to = %dst, ?occupant, "relocation blocked");
        }
    }
    Ok(dest)
}
