//! Terminal front end for the Random Disco Maze simulator.
//!
//! The `discomaze` binary is the composition root: it loads
//! [`ClientConfig`](config::ClientConfig), installs logging and dispatches to
//! one of the commands below. Everything here consumes the public
//! `discomaze-core` API only.
pub mod config;
pub mod input;
pub mod logging;
pub mod play;
pub mod presentation;
pub mod rollout;

pub use config::{ClientConfig, LoggingConfig, Overrides};
pub use input::InputEvent;
pub use play::{Play, PlayReport};
pub use rollout::{EpisodeSummary, Rollout, RolloutSummary};
