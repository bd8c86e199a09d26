//! Error types surfaced by the episode simulator.

use crate::config::ConfigError;
use crate::error::{ErrorSeverity, MazeFault};
use crate::state::GridError;

/// Entities could not be placed at reset.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpawnError {
    #[error("cannot place {requested} entities on {available} empty cells")]
    NotEnoughSpace { requested: usize, available: usize },

    #[error("object ids exhausted")]
    IdsExhausted,
}

impl MazeFault for SpawnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotEnoughSpace { .. } => ErrorSeverity::Validation,
            // configuration validation rules this out
            Self::IdsExhausted => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotEnoughSpace { .. } => "SPAWN_NOT_ENOUGH_SPACE",
            Self::IdsExhausted => "SPAWN_IDS_EXHAUSTED",
        }
    }
}

/// Errors surfaced while constructing, resetting or stepping a simulator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("grid access failed: {0}")]
    Grid(#[from] GridError),

    #[error("spawn failed: {0}")]
    Spawn(#[from] SpawnError),
}

impl MazeFault for SimError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Config(e) => e.severity(),
            Self::Grid(e) => e.severity(),
            Self::Spawn(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Grid(e) => e.error_code(),
            Self::Spawn(e) => e.error_code(),
        }
    }
}
