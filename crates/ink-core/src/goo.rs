//! Blur-then-threshold post-process that fuses nearby discs into one body.
//!
//! Ink coverage is measured per pixel against the paper and ink colors,
//! box-blurred (separable, two passes) and pushed through a narrow smoothstep.
//! Discs that are close enough for their blurred skirts to add past the
//! threshold merge; isolated specks fall below it and vanish.

use crate::constants::{GOO_BLUR_RADIUS, GOO_SOFTNESS, GOO_THRESHOLD, INK_RGB, PAPER_RGB};
use crate::error::{InkError, Result};
use crate::raster::PixelSurface;
use crate::surface::channel_u8;

#[derive(Clone, Debug)]
pub struct GooFilter {
    blur_radius: usize,
    threshold: f32,
    softness: f32,
    paper: [f32; 3],
    ink: [f32; 3],
    coverage: Vec<f32>,
    scratch: Vec<f32>,
}

impl GooFilter {
    pub fn new(blur_radius: usize, threshold: f32, softness: f32) -> Result<Self> {
        if blur_radius == 0 {
            return Err(InkError::InvalidFilter("blur radius must be at least 1".into()));
        }
        if !(threshold > 0.0 && threshold < 1.0) {
            return Err(InkError::InvalidFilter(format!(
                "threshold {threshold} outside (0, 1)"
            )));
        }
        if !(softness >= 0.0) {
            return Err(InkError::InvalidFilter(format!(
                "softness {softness} must be non-negative"
            )));
        }
        Ok(Self {
            blur_radius,
            threshold,
            softness,
            paper: PAPER_RGB,
            ink: INK_RGB,
            coverage: Vec::new(),
            scratch: Vec::new(),
        })
    }

    pub fn blur_radius(&self) -> usize {
        self.blur_radius
    }

    /// Filter `src` into row-major opaque RGBA8. The output buffer is resized as needed.
    pub fn apply(&mut self, src: &PixelSurface, out: &mut Vec<u8>) {
        let w = src.width() as usize;
        let h = src.height() as usize;
        self.measure_coverage(src);
        self.scratch.resize(w * h, 0.0);
        box_blur_rows(&self.coverage, &mut self.scratch, w, h, self.blur_radius);
        box_blur_cols(&self.scratch, &mut self.coverage, w, h, self.blur_radius);

        out.clear();
        out.reserve(w * h * 4);
        let lo = self.threshold - self.softness;
        let hi = self.threshold + self.softness;
        for &c in &self.coverage {
            let t = smoothstep(lo, hi, c);
            out.extend_from_slice(&[
                channel_u8(self.paper[0] + (self.ink[0] - self.paper[0]) * t),
                channel_u8(self.paper[1] + (self.ink[1] - self.paper[1]) * t),
                channel_u8(self.paper[2] + (self.ink[2] - self.paper[2]) * t),
                255,
            ]);
        }
    }

    /// Blurred coverage from the last `apply`, 0 = paper, 1 = ink.
    pub fn coverage(&self) -> &[f32] {
        &self.coverage
    }

    fn measure_coverage(&mut self, src: &PixelSurface) {
        let paper_l = luma(self.paper);
        let span = paper_l - luma(self.ink);
        self.coverage.clear();
        self.coverage.extend(src.pixels().iter().map(|p| {
            if span.abs() < f32::EPSILON {
                0.0
            } else {
                ((paper_l - luma(*p)) / span).clamp(0.0, 1.0)
            }
        }));
    }
}

impl Default for GooFilter {
    fn default() -> Self {
        Self {
            blur_radius: GOO_BLUR_RADIUS,
            threshold: GOO_THRESHOLD,
            softness: GOO_SOFTNESS,
            paper: PAPER_RGB,
            ink: INK_RGB,
            coverage: Vec::new(),
            scratch: Vec::new(),
        }
    }
}

#[inline]
fn luma(rgb: [f32; 3]) -> f32 {
    0.2126 * rgb[0] + 0.7152 * rgb[1] + 0.0722 * rgb[2]
}

#[inline]
fn smoothstep(lo: f32, hi: f32, x: f32) -> f32 {
    if hi <= lo {
        return if x >= lo { 1.0 } else { 0.0 };
    }
    let t = ((x - lo) / (hi - lo)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

// Sliding-window mean; samples past the edge clamp to the border pixel.
fn box_blur_rows(src: &[f32], dst: &mut [f32], w: usize, h: usize, r: usize) {
    let norm = 1.0 / (2 * r + 1) as f32;
    for y in 0..h {
        let row = &src[y * w..(y + 1) * w];
        let at = |i: isize| row[i.clamp(0, w as isize - 1) as usize];
        let mut acc: f32 = (-(r as isize)..=r as isize).map(&at).sum();
        for x in 0..w {
            dst[y * w + x] = acc * norm;
            acc += at(x as isize + r as isize + 1) - at(x as isize - r as isize);
        }
    }
}

fn box_blur_cols(src: &[f32], dst: &mut [f32], w: usize, h: usize, r: usize) {
    let norm = 1.0 / (2 * r + 1) as f32;
    for x in 0..w {
        let at = |i: isize| src[i.clamp(0, h as isize - 1) as usize * w + x];
        let mut acc: f32 = (-(r as isize)..=r as isize).map(&at).sum();
        for y in 0..h {
            dst[y * w + x] = acc * norm;
            acc += at(y as isize + r as isize + 1) - at(y as isize - r as isize);
        }
    }
}
