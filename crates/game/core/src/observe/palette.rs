use rand::Rng;
use rand::seq::SliceRandom;

use super::Rgb;

/// Piecewise-linear channel of the "hot" colormap as `(x, y)` knots.
type Channel = &'static [(f32, f32)];

const HOT_RED: Channel = &[(0.0, 0.0416), (0.365079, 1.0), (1.0, 1.0)];
const HOT_GREEN: Channel = &[(0.0, 0.0), (0.365079, 0.0), (0.746032, 1.0), (1.0, 1.0)];
const HOT_BLUE: Channel = &[(0.0, 0.0), (0.746032, 0.0), (1.0, 1.0)];

/// Portion of the colormap used for walls. The dark and white ends are
/// skipped so walls never look like empty space or the player.
const HOT_RANGE: (f32, f32) = (0.2, 0.8);

fn interpolate(channel: Channel, x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    for pair in channel.windows(2) {
        let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
        if x <= x1 {
            if x1 <= x0 {
                return y1;
            }
            return y0 + (y1 - y0) * (x - x0) / (x1 - x0);
        }
    }
    channel.last().map_or(0.0, |&(_, y)| y)
}

/// Samples the "hot" colormap at `x ∈ [0, 1]`.
pub(crate) fn hot(x: f32) -> Rgb {
    Rgb::new(
        interpolate(HOT_RED, x),
        interpolate(HOT_GREEN, x),
        interpolate(HOT_BLUE, x),
    )
}

/// Colors used to render an episode.
///
/// Entity colors are fixed; wall colors are `n_colors` evenly spaced samples
/// of the hot colormap, and each wall cell picks one at random on every
/// render.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    walls: Vec<Rgb>,
}

impl Palette {
    pub const BACKGROUND: Rgb = Rgb::BLACK;
    pub const PLAYER: Rgb = Rgb::WHITE;
    pub const TARGET: Rgb = Rgb::new(0.3, 0.3, 1.0);

    pub fn hot(n_colors: usize) -> Self {
        let (lo, hi) = HOT_RANGE;
        let walls = match n_colors {
            0 => Vec::new(),
            1 => vec![hot(lo)],
            n => (0..n)
                .map(|i| hot(lo + (hi - lo) * i as f32 / (n - 1) as f32))
                .collect(),
        };
        Self { walls }
    }

    pub fn walls(&self) -> &[Rgb] {
        &self.walls
    }

    /// Uniformly picks a wall color. Falls back to the background for an
    /// empty palette.
    pub fn sample_wall<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgb {
        self.walls.choose(rng).copied().unwrap_or(Self::BACKGROUND)
    }
}
