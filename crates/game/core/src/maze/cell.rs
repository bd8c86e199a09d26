use bitflags::bitflags;

use crate::action::Direction;

bitflags! {
    /// One nibble of side flags, one bit per cardinal direction.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Sides: u8 {
        const NORTH = 1 << 0;
        const SOUTH = 1 << 1;
        const EAST  = 1 << 2;
        const WEST  = 1 << 3;
    }
}

impl From<Direction> for Sides {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::North => Sides::NORTH,
            Direction::South => Sides::SOUTH,
            Direction::East => Sides::EAST,
            Direction::West => Sides::WEST,
        }
    }
}

/// Generation-time state of one logical cell, packed into three nibbles:
/// standing walls, indestructible border sides, and the side to backtrack
/// through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PackedCell(u16);

impl PackedCell {
    const WALLS: u32 = 0;
    const BORDER: u32 = 4;
    const BACKTRACK: u32 = 8;
    const NIBBLE: u16 = 0xF;

    /// A cell with all four walls standing and nothing else set.
    pub(crate) const fn sealed() -> Self {
        Self(Sides::all().bits() as u16)
    }

    fn nibble(self, shift: u32) -> Sides {
        Sides::from_bits_truncate(((self.0 >> shift) & Self::NIBBLE) as u8)
    }

    fn set_nibble(&mut self, shift: u32, sides: Sides) {
        self.0 = (self.0 & !(Self::NIBBLE << shift)) | ((sides.bits() as u16) << shift);
    }

    pub(crate) fn walls(self) -> Sides {
        self.nibble(Self::WALLS)
    }

    pub(crate) fn border(self) -> Sides {
        self.nibble(Self::BORDER)
    }

    /// Unvisited cells still have every wall standing.
    pub(crate) fn is_untouched(self) -> bool {
        self.walls() == Sides::all()
    }

    pub(crate) fn knock_down(&mut self, direction: Direction) {
        let walls = self.walls() - Sides::from(direction);
        self.set_nibble(Self::WALLS, walls);
    }

    pub(crate) fn mark_border(&mut self, direction: Direction) {
        let border = self.border() | Sides::from(direction);
        self.set_nibble(Self::BORDER, border);
    }

    pub(crate) fn set_backtrack(&mut self, direction: Direction) {
        self.set_nibble(Self::BACKTRACK, Sides::from(direction));
    }

    /// Direction back towards the cell this one was carved from.
    pub(crate) fn backtrack(self) -> Option<Direction> {
        let bits = self.nibble(Self::BACKTRACK);
        Direction::ALL
            .into_iter()
            .find(|&direction| bits == Sides::from(direction))
    }
}
