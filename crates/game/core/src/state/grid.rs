use crate::observe::Frame;

use super::{GridError, ObjectId, Position};

/// Content of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Wall,
    Object(ObjectId),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub const fn is_wall(self) -> bool {
        matches!(self, Cell::Wall)
    }

    /// Object stored in the cell, if any.
    pub const fn object(self) -> Option<ObjectId> {
        match self {
            Cell::Object(id) => Some(id),
            _ => None,
        }
    }

    /// Non-empty content of the cell.
    pub const fn occupant(self) -> Option<Occupant> {
        match self {
            Cell::Empty => None,
            Cell::Wall => Some(Occupant::Wall),
            Cell::Object(id) => Some(Occupant::Object(id)),
        }
    }
}

/// Anything that can be written into a cell.
///
/// Emptiness is deliberately not an occupant: writing it goes through
/// [`GridMap::clear`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupant {
    Wall,
    Object(ObjectId),
}

impl From<Occupant> for Cell {
    fn from(occupant: Occupant) -> Self {
        match occupant {
            Occupant::Wall => Cell::Wall,
            Occupant::Object(id) => Cell::Object(id),
        }
    }
}

impl From<ObjectId> for Occupant {
    fn from(id: ObjectId) -> Self {
        Occupant::Object(id)
    }
}

/// Outcome of [`GridMap::relocate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relocation {
    /// The source content now sits at the destination; the source is empty.
    Moved,
    /// The destination was occupied; nothing changed.
    Blocked(Occupant),
}

/// Fixed-size 2-D store of cells in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridMap {
    cells: Frame<Cell>,
}

impl GridMap {
    /// Creates an all-empty grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Frame::new(rows, cols, Cell::Empty),
        }
    }

    /// Creates a grid holding `Cell::Wall` wherever `walls` is true.
    pub fn from_walls(walls: &Frame<bool>) -> Self {
        Self {
            cells: walls.map(|&wall| if wall { Cell::Wall } else { Cell::Empty }),
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    pub fn cols(&self) -> usize {
        self.cells.cols()
    }

    pub fn shape(&self) -> (usize, usize) {
        self.cells.shape()
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(position)
    }

    pub fn get(&self, position: Position) -> Option<Cell> {
        self.cells.get(position).copied()
    }

    /// Returns true if the cell exists and holds nothing.
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position).is_some_and(Cell::is_empty)
    }

    /// Underlying row-major cell buffer.
    pub fn as_frame(&self) -> &Frame<Cell> {
        &self.cells
    }

    /// Iterates over every cell with its position, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells.iter().map(|(position, &cell)| (position, cell))
    }

    /// All positions currently holding `kind`, in row-major order.
    pub fn coordinates_of(&self, kind: Cell) -> Vec<Position> {
        self.iter()
            .filter_map(|(position, cell)| (cell == kind).then_some(position))
            .collect()
    }

    /// Writes `occupant` into an empty cell.
    ///
    /// Callers must clear occupied cells first; the grid does not merge.
    /// Overwriting an occupant is a caller bug and trips a debug assertion.
    pub fn set(
        &mut self,
        position: Position,
        occupant: impl Into<Occupant>,
    ) -> Result<(), GridError> {
        let slot = self.slot_mut(position)?;
        debug_assert!(
            slot.is_empty(),
            "set onto occupied cell {position}: {slot:?}"
        );
        *slot = Cell::from(occupant.into());
        Ok(())
    }

    /// Empties the cell unconditionally.
    pub fn clear(&mut self, position: Position) -> Result<(), GridError> {
        *self.slot_mut(position)? = Cell::Empty;
        Ok(())
    }

    /// Moves the content of `src` into `dst` if, and only if, `dst` is empty.
    ///
    /// A blocked move leaves the grid untouched and reports the occupant of
    /// `dst` so the caller can decide what to do about it.
    pub fn relocate(&mut self, src: Position, dst: Position) -> Result<Relocation, GridError> {
        let moving = self.get(src).ok_or_else(|| self.out_of_bounds(src))?;
        let target = self.get(dst).ok_or_else(|| self.out_of_bounds(dst))?;

        if let Some(occupant) = target.occupant() {
            return Ok(Relocation::Blocked(occupant));
        }

        *self.slot_mut(dst)? = moving;
        *self.slot_mut(src)? = Cell::Empty;
        Ok(Relocation::Moved)
    }

    fn slot_mut(&mut self, position: Position) -> Result<&mut Cell, GridError> {
        let (rows, cols) = self.shape();
        self.cells.get_mut(position).ok_or(GridError::OutOfBounds {
            position,
            rows,
            cols,
        })
    }

    fn out_of_bounds(&self, position: Position) -> GridError {
        GridError::OutOfBounds {
            position,
            rows: self.rows(),
            cols: self.cols(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn set_and_clear() {
        let mut grid = GridMap::new(3, 3);
        grid.set(p(1, 1), ObjectId::PLAYER).unwrap();
        assert_eq!(grid.get(p(1, 1)), Some(Cell::Object(ObjectId::PLAYER)));

        grid.clear(p(1, 1)).unwrap();
        assert!(grid.is_empty(p(1, 1)));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "set onto occupied cell")]
    fn set_onto_occupied_cell_panics() {
        let mut grid = GridMap::new(3, 3);
        grid.set(p(1, 1), ObjectId::PLAYER).unwrap();
        grid.set(p(1, 1), Occupant::Wall).unwrap();
    }

    #[test]
    fn set_after_clear_replaces_occupant() {
        let mut grid = GridMap::new(3, 3);
        grid.set(p(1, 1), ObjectId::PLAYER).unwrap();
        grid.clear(p(1, 1)).unwrap();
        grid.set(p(1, 1), Occupant::Wall).unwrap();
        assert_eq!(grid.get(p(1, 1)), Some(Cell::Wall));
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        let mut grid = GridMap::new(2, 2);
        assert_eq!(
            grid.set(p(2, 0), Occupant::Wall),
            Err(GridError::OutOfBounds {
                position: p(2, 0),
                rows: 2,
                cols: 2
            })
        );
        assert!(grid.relocate(p(0, 0), p(0, 5)).is_err());
        assert!(!grid.is_empty(p(9, 9)));
    }

    #[test]
    fn relocate_into_empty_cell_moves() {
        let mut grid = GridMap::new(1, 3);
        grid.set(p(0, 0), ObjectId(2)).unwrap();

        assert_eq!(grid.relocate(p(0, 0), p(0, 1)), Ok(Relocation::Moved));
        assert!(grid.is_empty(p(0, 0)));
        assert_eq!(grid.get(p(0, 1)), Some(Cell::Object(ObjectId(2))));
    }

    #[test]
    fn relocate_into_occupied_cell_reports_occupant() {
        let mut grid = GridMap::new(1, 3);
        grid.set(p(0, 0), ObjectId::PLAYER).unwrap();
        grid.set(p(0, 1), Occupant::Wall).unwrap();
        let before = grid.clone();

        assert_eq!(
            grid.relocate(p(0, 0), p(0, 1)),
            Ok(Relocation::Blocked(Occupant::Wall))
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn relocate_onto_itself_is_blocked() {
        let mut grid = GridMap::new(1, 1);
        grid.set(p(0, 0), ObjectId::PLAYER).unwrap();
        assert_eq!(
            grid.relocate(p(0, 0), p(0, 0)),
            Ok(Relocation::Blocked(Occupant::Object(ObjectId::PLAYER)))
        );
        assert_eq!(grid.get(p(0, 0)), Some(Cell::Object(ObjectId::PLAYER)));
    }

    #[test]
    fn coordinates_of_scans_row_major() {
        let mut walls = Frame::new(2, 2, false);
        walls[p(0, 1)] = true;
        walls[p(1, 0)] = true;
        let grid = GridMap::from_walls(&walls);

        assert_eq!(grid.coordinates_of(Cell::Wall), vec![p(0, 1), p(1, 0)]);
        assert_eq!(grid.coordinates_of(Cell::Empty), vec![p(0, 0), p(1, 1)]);
    }
}
