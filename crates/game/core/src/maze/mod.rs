//! Perfect maze generation.
//!
//! Carving runs on a compact per-cell representation (see [`Sides`]) and is
//! then expanded into a boolean wall grid that seeds the episode's
//! [`GridMap`](crate::state::GridMap).
mod cell;
mod generator;

pub use cell::Sides;
pub use generator::generate;
