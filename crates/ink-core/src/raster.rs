//! CPU surface used by the native viewer and by headless tests.
//!
//! Pixels are kept as linear `f32` RGB so that a low-alpha fade keeps
//! converging instead of stalling on 8-bit rounding. `to_rgba8` quantizes for
//! upload.

use crate::error::{InkError, Result};
use crate::surface::{channel_u8, Rgba, Surface};
use glam::Vec2;

#[derive(Clone, Debug)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<[f32; 3]>,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32, background: [f32; 3]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(InkError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![background; width as usize * height as usize],
        })
    }

    /// Reallocate at a new size, filled with `background`. Zero sizes are ignored.
    pub fn resize(&mut self, width: u32, height: u32, background: [f32; 3]) {
        if width == 0 || height == 0 || (width == self.width && height == self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels
            .resize(width as usize * height as usize, background);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[[f32; 3]] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[f32; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Row-major RGBA8, opaque.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|p| [channel_u8(p[0]), channel_u8(p[1]), channel_u8(p[2]), 255])
            .collect()
    }
}

#[inline]
fn blend(dst: &mut [f32; 3], src: [f32; 3], a: f32) {
    if a >= 1.0 {
        *dst = src;
        return;
    }
    for c in 0..3 {
        dst[c] += (src[c] - dst[c]) * a;
    }
}

impl Surface for PixelSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fade(&mut self, color: Rgba) {
        let a = color.a.clamp(0.0, 1.0);
        let rgb = color.rgb();
        for p in &mut self.pixels {
            blend(p, rgb, a);
        }
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if radius <= 0.0 || !center.is_finite() {
            return;
        }
        let a = color.a.clamp(0.0, 1.0);
        let rgb = color.rgb();
        let r2 = radius * radius;
        // pixel (x, y) covers [x, x+1) and is sampled at its center
        let x0 = (center.x - radius - 0.5).floor().max(0.0) as i64;
        let y0 = (center.y - radius - 0.5).floor().max(0.0) as i64;
        let x1 = ((center.x + radius - 0.5).ceil() as i64).min(self.width as i64 - 1);
        let y1 = ((center.y + radius - 0.5).ceil() as i64).min(self.height as i64 - 1);
        if x0 > x1 || y0 > y1 {
            return;
        }
        let w = self.width as usize;
        for y in y0..=y1 {
            let dy = y as f32 + 0.5 - center.y;
            let row = y as usize * w;
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - center.x;
                if dx * dx + dy * dy <= r2 {
                    blend(&mut self.pixels[row + x as usize], rgb, a);
                }
            }
        }
    }
}
