use crate::constants::{FADE_ALPHA, INK_ALPHA, INK_RGB, PAPER_RGB};
use crate::field::BlobField;
use crate::surface::{Rgba, Surface};
use glam::Vec2;

/// Fades the surface toward paper, then stamps every blob as an ink disc.
///
/// The surface is never cleared: the previous frame survives at reduced
/// contrast, which is what leaves the trails behind moving blobs.
#[derive(Clone, Debug)]
pub struct Renderer {
    pub(crate) fade: Rgba,
    pub(crate) ink: Rgba,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            fade: Rgba::new(PAPER_RGB, FADE_ALPHA),
            ink: Rgba::new(INK_RGB, INK_ALPHA),
        }
    }
}

impl Renderer {
    pub fn fade(&self) -> Rgba {
        self.fade
    }

    pub fn ink(&self) -> Rgba {
        self.ink
    }

    pub fn render_frame<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        field: &BlobField,
        attractor: Vec2,
        pointer_present: bool,
        time: f64,
    ) {
        surface.fade(self.fade);
        for blob in field {
            surface.fill_disc(blob.position(time), blob.radius(), self.ink);
        }
        surface.mark_attractor(attractor, pointer_present);
    }
}
