//! Text rendering of an episode for terminals.
use console::Style;
use discomaze_core::{Cell, DiscoMaze, Frame, Position, Rgb, observe};

const WALL: char = '#';
const PLAYER: char = '@';
const TARGET: char = '*';
const EMPTY: char = ' ';
const HIDDEN: char = '.';

/// Nearest color in the 6x6x6 cube of the 256-color ANSI palette.
fn ansi256(color: Rgb) -> u8 {
    let [r, g, b] = color.to_array().map(|c| (c.clamp(0.0, 1.0) * 5.0).round() as u8);
    16 + 36 * r + 6 * g + b
}

fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Empty => EMPTY,
        Cell::Wall => WALL,
        Cell::Object(id) if id.is_player() => PLAYER,
        Cell::Object(_) => TARGET,
    }
}

/// Draws the agent's current view, one line per row.
///
/// Cells outside the maze are shown as `.`. With `styled`, every glyph is
/// painted with the color the agent observes for that cell.
pub fn text_frame(sim: &DiscoMaze, styled: bool) -> String {
    let center = sim.player_position();
    let field = sim.config().field;
    let cells = observe(sim.grid().as_frame(), center, field, Cell::Empty);
    let colors = sim.observation();
    let mask = sim.mask();
    draw(&cells, &colors, &mask, styled)
}

fn draw(cells: &Frame<Cell>, colors: &Frame<Rgb>, mask: &Frame<bool>, styled: bool) -> String {
    let mut out = String::with_capacity(cells.len() * 2);
    for row in 0..cells.rows() {
        for col in 0..cells.cols() {
            let at = Position::new(row, col);
            if !mask.get(at).copied().unwrap_or(false) {
                out.push(HIDDEN);
                continue;
            }
            let ch = cells.get(at).copied().map_or(EMPTY, glyph);
            match colors.get(at) {
                Some(&color) if styled && ch != EMPTY => {
                    let painted = Style::new().color256(ansi256(color)).apply_to(ch);
                    out.push_str(&painted.to_string());
                }
                _ => out.push(ch),
            }
        }
        out.push('\n');
    }
    out
}
