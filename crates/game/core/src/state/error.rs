//! Grid access errors.

use crate::error::{ErrorSeverity, MazeFault};
use crate::state::Position;

/// Errors raised by [`GridMap`](super::GridMap) accessors.
///
/// The simulator only addresses cells it derived from the grid itself, so any
/// of these indicates a broken invariant rather than bad user input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    /// Position is outside the grid bounds.
    #[error("position {position} is out of bounds (grid size: {rows}x{cols})")]
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },
}

impl MazeFault for GridError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "GRID_OUT_OF_BOUNDS",
        }
    }
}
