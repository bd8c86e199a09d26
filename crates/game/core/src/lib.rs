//! Deterministic Random Disco Maze simulation.
//!
//! `discomaze-core` carves perfect mazes, runs grid-world episodes on them and
//! renders the color frames agents observe. All episode state is owned by
//! [`engine::DiscoMaze`]; variants in [`env`] wrap it behind the shared
//! [`Environment`] capability.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod maze;
pub mod observe;
pub mod state;

pub use action::{Action, Direction};
pub use config::{ConfigError, FieldRadius, MazeConfig};
pub use engine::{DiscoMaze, SimError, SpawnError, Transition};
pub use env::{
    Environment, ExploreMaze, GoalMaze, GoalObservation, Info, InfoValue, PcgRng,
    PositionObservation, WithPosition,
};
pub use error::{ErrorSeverity, MazeFault};
pub use observe::{Frame, Palette, Rgb, observe, observe_mask};
pub use state::{Cell, GridError, GridMap, ObjectId, ObjectTable, Occupant, Position, Relocation, Slot};
