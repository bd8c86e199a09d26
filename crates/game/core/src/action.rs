//! The action alphabet.
//!
//! The core defines which actions exist; mapping keys or policy outputs onto
//! them is left to callers.

/// Cardinal direction on the grid. North is towards row 0.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// `(row, col)` offset of one step.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

/// One of the five actions accepted by the simulator.
///
/// The discriminants give the canonical integer encoding used by policies.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Action {
    #[default]
    Stay = 0,
    West = 1,
    South = 2,
    East = 3,
    North = 4,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Stay,
        Action::West,
        Action::South,
        Action::East,
        Action::North,
    ];

    /// Size of the action alphabet.
    pub const COUNT: usize = Self::ALL.len();

    /// Decodes a policy output. Returns `None` outside `0..COUNT`.
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::from_repr)
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Movement direction, or `None` for [`Action::Stay`].
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Action::Stay => None,
            Action::West => Some(Direction::West),
            Action::South => Some(Direction::South),
            Action::East => Some(Direction::East),
            Action::North => Some(Direction::North),
        }
    }
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::North => Action::North,
            Direction::South => Action::South,
            Direction::East => Action::East,
            Direction::West => Action::West,
        }
    }
}
