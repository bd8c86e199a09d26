//! Authoritative episode state representation.
//!
//! This module owns the cell grid and the object table. The simulator is the
//! only writer; observers read through [`GridMap`] and [`ObjectTable`] queries.
mod error;
mod grid;
mod objects;

pub use error::GridError;
pub use grid::{Cell, GridMap, Occupant, Relocation};
pub use objects::{ObjectTable, Slot};

use std::fmt;

use crate::action::Direction;

/// Unique identifier for a live entity within one episode.
///
/// Ids are handed out in insertion order and never reused; id `0` is
/// permanently vacant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectId(pub u32);

impl ObjectId {
    /// Reserved identifier for the controllable player.
    pub const PLAYER: Self = Self(1);

    /// Largest id the table can hand out.
    pub const MAX: Self = Self(u32::MAX);

    /// Number of target ids available after the vacant slot and the player.
    pub fn target_capacity() -> usize {
        usize::try_from(Self::MAX.0 - Self::PLAYER.0).unwrap_or(usize::MAX)
    }

    /// Returns true if this id names the player.
    #[inline]
    pub const fn is_player(self) -> bool {
        self.0 == Self::PLAYER.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Cell coordinates expressed as `(row, col)`, row 0 at the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Neighbouring position one cell towards `direction`, or `None` when it
    /// would leave the non-negative quadrant.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.delta();
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_follows_screen_orientation() {
        let p = Position::new(3, 3);
        assert_eq!(p.step(Direction::North), Some(Position::new(2, 3)));
        assert_eq!(p.step(Direction::South), Some(Position::new(4, 3)));
        assert_eq!(p.step(Direction::East), Some(Position::new(3, 4)));
        assert_eq!(p.step(Direction::West), Some(Position::new(3, 2)));
    }

    #[test]
    fn step_never_underflows() {
        assert_eq!(Position::ORIGIN.step(Direction::North), None);
        assert_eq!(Position::ORIGIN.step(Direction::West), None);
    }

    #[test]
    fn player_id_is_one() {
        assert!(ObjectId(1).is_player());
        assert_eq!(ObjectId::PLAYER.to_string(), "#1");
    }
}
