use std::collections::BTreeSet;

use rand::Rng;

use super::{Frame, Palette, Rgb};
use crate::state::{Cell, GridMap, ObjectId};

/// Colorizes a grid.
///
/// Empty cells take the background, the player and members of `targets`
/// take their fixed colors, and every other cell (walls, stray objects)
/// draws a fresh wall color from `rng`.
pub fn render<R: Rng + ?Sized>(
    grid: &GridMap,
    targets: &BTreeSet<ObjectId>,
    palette: &Palette,
    rng: &mut R,
) -> Frame<Rgb> {
    grid.as_frame().map(|&cell| match cell {
        Cell::Empty => Palette::BACKGROUND,
        Cell::Object(id) if id.is_player() => Palette::PLAYER,
        Cell::Object(id) if targets.contains(&id) => Palette::TARGET,
        Cell::Wall | Cell::Object(_) => palette.sample_wall(rng),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::state::{Occupant, Position};

    #[test]
    fn entities_take_fixed_colors() {
        let mut grid = GridMap::new(1, 4);
        grid.set(Position::new(0, 0), ObjectId::PLAYER).unwrap();
        grid.set(Position::new(0, 1), ObjectId(2)).unwrap();
        grid.set(Position::new(0, 2), Occupant::Wall).unwrap();
        let targets = BTreeSet::from([ObjectId(2)]);
        let palette = Palette::hot(2);

        let frame = render(&grid, &targets, &palette, &mut PcgRng::new(1));
        assert_eq!(frame[Position::new(0, 0)], Palette::PLAYER);
        assert_eq!(frame[Position::new(0, 1)], Palette::TARGET);
        assert!(palette.walls().contains(&frame[Position::new(0, 2)]));
        assert_eq!(frame[Position::new(0, 3)], Palette::BACKGROUND);
    }

    #[test]
    fn retired_target_renders_as_wall_color() {
        let mut grid = GridMap::new(1, 1);
        grid.set(Position::ORIGIN, ObjectId(3)).unwrap();
        let palette = Palette::hot(1);

        let frame = render(&grid, &BTreeSet::new(), &palette, &mut PcgRng::new(0));
        assert_eq!(frame[Position::ORIGIN], palette.walls()[0]);
    }
}
