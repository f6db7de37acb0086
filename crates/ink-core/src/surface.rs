//! Drawing seam between the renderer and whatever holds the pixels.

use glam::Vec2;

/// Straight-alpha color, each channel in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(rgb: [f32; 3], a: f32) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a,
        }
    }

    pub fn rgb(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// CSS `rgba()` string for Canvas 2D fill styles.
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            channel_u8(self.r),
            channel_u8(self.g),
            channel_u8(self.b),
            self.a.clamp(0.0, 1.0)
        )
    }
}

#[inline]
pub fn channel_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// A persistent 2D drawing target. Nothing is cleared between frames unless
/// the implementation is told to fade.
pub trait Surface {
    /// Backing size in device pixels. Zero in either axis means not yet known.
    fn size(&self) -> (u32, u32);

    /// Composite `color` over the whole surface.
    fn fade(&mut self, color: Rgba);

    /// Composite a filled disc.
    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Where the smoothed attractor is this frame. Surfaces without a cursor
    /// marker ignore it.
    fn mark_attractor(&mut self, _pos: Vec2, _visible: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_string_rounds_channels() {
        let c = Rgba::new([1.0, 0.5, 0.0], 0.18);
        assert_eq!(c.to_css(), "rgba(255, 128, 0, 0.180)");
    }

    #[test]
    fn channel_clamps_out_of_range() {
        assert_eq!(channel_u8(-0.2), 0);
        assert_eq!(channel_u8(1.7), 255);
    }
}
