//! Color buffers and partial observability.
//!
//! The simulator renders its [`GridMap`](crate::state::GridMap) into a
//! [`Frame<Rgb>`] every step. Windowing then crops that buffer around the
//! player when a [`FieldRadius`](crate::config::FieldRadius) is configured.
mod frame;
mod palette;
mod render;
mod window;

pub use frame::Frame;
pub use palette::Palette;
pub use render::render;
pub use window::{observe, observe_mask};

/// Linear RGB triple with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Quantizes to 8-bit channels.
    pub fn to_u8(self) -> [u8; 3] {
        self.to_array()
            .map(|channel| (channel.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

impl From<[f32; 3]> for Rgb {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self { r, g, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantizes_and_clamps() {
        assert_eq!(Rgb::WHITE.to_u8(), [255, 255, 255]);
        assert_eq!(Rgb::new(-1.0, 0.5, 2.0).to_u8(), [0, 128, 255]);
    }
}
