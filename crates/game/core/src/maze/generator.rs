use arrayvec::ArrayVec;
use rand::Rng;
use rand::seq::SliceRandom;

use super::cell::{PackedCell, Sides};
use crate::action::Direction;
use crate::observe::Frame;
use crate::state::Position;

/// Logical maze after carving, before expansion into the wall grid.
#[derive(Clone, Debug)]
pub(crate) struct CarvedMaze {
    rows: usize,
    cols: usize,
    cells: Vec<PackedCell>,
}

impl CarvedMaze {
    fn sealed(rows: usize, cols: usize) -> Self {
        let mut cells = vec![PackedCell::sealed(); rows * cols];
        for i in 0..rows {
            for j in 0..cols {
                let cell = &mut cells[i * cols + j];
                if i == 0 {
                    cell.mark_border(Direction::North);
                }
                if i + 1 == rows {
                    cell.mark_border(Direction::South);
                }
                if j == 0 {
                    cell.mark_border(Direction::West);
                }
                if j + 1 == cols {
                    cell.mark_border(Direction::East);
                }
            }
        }
        Self { rows, cols, cells }
    }

    fn index(&self, at: Position) -> usize {
        at.row * self.cols + at.col
    }

    fn cell(&self, at: Position) -> PackedCell {
        self.cells[self.index(at)]
    }

    fn cell_mut(&mut self, at: Position) -> &mut PackedCell {
        let index = self.index(at);
        &mut self.cells[index]
    }

    /// Neighbour across `direction`, unless that side is a border.
    fn neighbour(&self, at: Position, direction: Direction) -> Option<Position> {
        if self.cell(at).border().contains(Sides::from(direction)) {
            return None;
        }
        at.step(direction)
            .filter(|next| next.row < self.rows && next.col < self.cols)
    }

    /// Randomized iterative depth-first search.
    ///
    /// Each iteration either carves into an unvisited cell or follows the
    /// recorded backtrack side, so the walk takes at most `2·rows·cols`
    /// iterations and ends back at the origin.
    fn carve<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut at = Position::ORIGIN;
        loop {
            let open: ArrayVec<Direction, 4> = Direction::ALL
                .into_iter()
                .filter(|&direction| {
                    self.neighbour(at, direction)
                        .is_some_and(|next| self.cell(next).is_untouched())
                })
                .collect();

            if let Some(&direction) = open.as_slice().choose(rng) {
                let Some(next) = self.neighbour(at, direction) else {
                    break;
                };
                self.cell_mut(at).knock_down(direction);
                let entered = self.cell_mut(next);
                entered.knock_down(direction.opposite());
                entered.set_backtrack(direction.opposite());
                at = next;
                continue;
            }

            match self
                .cell(at)
                .backtrack()
                .and_then(|back| self.neighbour(at, back))
            {
                Some(previous) => at = previous,
                None => break,
            }
        }
    }

    /// Number of passages removed between logical cells.
    pub(crate) fn passages(&self) -> usize {
        let interior: usize = self
            .cells
            .iter()
            .map(|cell| (Sides::all() - cell.walls()).bits().count_ones() as usize)
            .sum();
        // every passage is counted from both of its cells
        interior / 2
    }

    /// Expands into the `(2·rows + 1) × (2·cols + 1)` wall grid.
    ///
    /// Logical cell `(i, j)` lands on `(2i + 1, 2j + 1)`; each of its four
    /// even-index neighbours stays a wall iff that side survived carving.
    pub(crate) fn expand(&self) -> Frame<bool> {
        let mut walls = Frame::new(2 * self.rows + 1, 2 * self.cols + 1, true);
        for i in 0..self.rows {
            for j in 0..self.cols {
                let centre = Position::new(2 * i + 1, 2 * j + 1);
                walls[centre] = false;

                let standing = self.cell(Position::new(i, j)).walls();
                for direction in Direction::ALL {
                    if standing.contains(Sides::from(direction)) {
                        continue;
                    }
                    if let Some(side) = centre.step(direction) {
                        walls[side] = false;
                    }
                }
            }
        }
        walls
    }
}

pub(crate) fn carve<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> CarvedMaze {
    let mut maze = CarvedMaze::sealed(rows, cols);
    if rows > 0 && cols > 0 {
        maze.carve(rng);
    }
    maze
}

/// Builds a perfect maze of `rows × cols` logical cells.
///
/// Returns the expanded wall grid of shape `(2·rows + 1, 2·cols + 1)` where
/// `true` marks a wall. The carved corridors form a spanning tree over the
/// logical cells, and the outer ring is always wall.
pub fn generate<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Frame<bool> {
    let maze = carve(rows, cols, rng);
    tracing::trace!(rows, cols, passages = maze.passages(), "carved maze");
    maze.expand()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    #[test]
    fn single_cell_maze_is_a_sealed_room() {
        let mut rng = PcgRng::new(0);
        let walls = generate(1, 1, &mut rng);
        assert_eq!(walls.shape(), (3, 3));
        for (position, &wall) in walls.iter() {
            assert_eq!(wall, position != Position::new(1, 1));
        }
    }

    #[test]
    fn carving_visits_every_cell() {
        let mut rng = PcgRng::new(11);
        let maze = carve(6, 9, &mut rng);
        assert!(maze.cells.iter().all(|cell| !cell.is_untouched()));
        assert_eq!(maze.passages(), 6 * 9 - 1);
    }

    #[test]
    fn origin_has_no_backtrack() {
        let mut rng = PcgRng::new(5);
        let maze = carve(4, 4, &mut rng);
        assert_eq!(maze.cell(Position::ORIGIN).backtrack(), None);
        let with_backtrack = maze
            .cells
            .iter()
            .filter(|cell| cell.backtrack().is_some())
            .count();
        assert_eq!(with_backtrack, 4 * 4 - 1);
    }

    #[test]
    fn borders_are_never_carved() {
        let mut rng = PcgRng::new(2);
        let maze = carve(3, 5, &mut rng);
        for cell in &maze.cells {
            assert!(cell.walls().contains(cell.border()));
        }
    }

    #[test]
    fn corners_of_expanded_grid_stay_walls() {
        let mut rng = PcgRng::new(8);
        let walls = generate(5, 4, &mut rng);
        for row in (0..walls.rows()).step_by(2) {
            for col in (0..walls.cols()).step_by(2) {
                assert!(walls[Position::new(row, col)]);
            }
        }
    }
}
