use std::collections::VecDeque;

use discomaze_core::{Action, Direction, Frame, GridMap, Position};

/// First action of a shortest corridor path from `from` to any cell in
/// `goals`.
pub fn first_step_towards(grid: &GridMap, from: Position, goals: &[Position]) -> Option<Action> {
    let mut came_from: Frame<Option<Direction>> = Frame::new(grid.rows(), grid.cols(), None);
    let mut queue = VecDeque::from([from]);
    let mut seen = Frame::new(grid.rows(), grid.cols(), false);
    seen[from] = true;

    while let Some(at) = queue.pop_front() {
        if goals.contains(&at) {
            // walk back to the cell adjacent to `from`
            let mut cursor = at;
            loop {
                let direction = came_from[cursor]?;
                let previous = cursor.step(direction.opposite())?;
                if previous == from {
                    return Some(Action::from(direction));
                }
                cursor = previous;
            }
        }
        for direction in Direction::ALL {
            let Some(next) = at.step(direction) else {
                continue;
            };
            let passable = grid.get(next).is_some_and(|cell| !cell.is_wall());
            if passable && !seen[next] {
                seen[next] = true;
                came_from[next] = Some(direction);
                queue.push_back(next);
            }
        }
    }
    None
}
