use super::Frame;
use crate::config::FieldRadius;
use crate::state::Position;

/// Maps a window coordinate back onto the full frame, if it lands inside.
fn source(
    full: (usize, usize),
    center: Position,
    field: FieldRadius,
    row: usize,
    col: usize,
) -> Option<Position> {
    let src = Position::new(
        (center.row + row).checked_sub(field.rows)?,
        (center.col + col).checked_sub(field.cols)?,
    );
    (src.row < full.0 && src.col < full.1).then_some(src)
}

/// Egocentric view of `full` around `center`.
///
/// Without a radius the whole buffer is returned. Otherwise the result has
/// shape `(2·fr + 1, 2·fc + 1)`: cells that fall outside `full` are filled
/// with `background`, the rest are copied at the matching offset.
pub fn observe<T: Clone>(
    full: &Frame<T>,
    center: Position,
    field: Option<FieldRadius>,
    background: T,
) -> Frame<T> {
    let Some(field) = field else {
        return full.clone();
    };

    let (rows, cols) = field.window_shape();
    let mut window = Frame::new(rows, cols, background);
    for row in 0..rows {
        for col in 0..cols {
            if let Some(src) = source(full.shape(), center, field, row, col) {
                window[Position::new(row, col)] = full[src].clone();
            }
        }
    }
    window
}

/// Visibility mask matching [`observe`]: `true` where the window overlaps
/// real cells. All-true over `shape` without a radius.
pub fn observe_mask(shape: (usize, usize), center: Position, field: Option<FieldRadius>) -> Frame<bool> {
    let Some(field) = field else {
        return Frame::new(shape.0, shape.1, true);
    };

    let (rows, cols) = field.window_shape();
    let mut mask = Frame::new(rows, cols, false);
    for row in 0..rows {
        for col in 0..cols {
            mask[Position::new(row, col)] = source(shape, center, field, row, col).is_some();
        }
    }
    mask
}
