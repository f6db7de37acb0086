use crate::input;
use glam::Vec2;
use ink_core::{Rgba, Surface};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D implementation of the core drawing surface. The canvas keeps its
/// pixels between frames, which is what carries the ink trails.
///
/// Coordinates are CSS pixels; the context transform maps them onto the
/// devicePixelRatio-scaled backing store.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    cursor: Option<web::HtmlElement>,
    // fill style strings are rebuilt only when the color changes
    fill_cache: Option<(Rgba, String)>,
    cursor_visible: bool,
    backing: (u32, u32),
    dpr: f64,
}

impl CanvasSurface {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        cursor: Option<web::HtmlElement>,
    ) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext error: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let mut surface = Self {
            canvas,
            ctx,
            cursor,
            fill_cache: None,
            cursor_visible: false,
            backing: (0, 0),
            dpr: 0.0,
        };
        surface.sync_transform();
        Ok(surface)
    }

    /// Re-apply the devicePixelRatio transform once the backing store or the
    /// ratio changed. Resizing a canvas resets its whole context state.
    pub fn sync_transform(&mut self) {
        let backing = (self.canvas.width(), self.canvas.height());
        let dpr = input::device_pixel_ratio();
        if backing == self.backing && dpr == self.dpr {
            return;
        }
        self.backing = backing;
        self.dpr = dpr;
        if let Err(e) = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0) {
            log::warn!("setTransform failed: {:?}", e);
        }
        self.fill_cache = None;
        log::debug!(
            "[canvas] backing {}x{} at dpr {:.2}",
            backing.0,
            backing.1,
            dpr
        );
    }

    fn set_fill(&mut self, color: Rgba) {
        match &self.fill_cache {
            Some((c, _)) if *c == color => {}
            _ => {
                let css = color.to_css();
                self.ctx.set_fill_style_str(&css);
                self.fill_cache = Some((color, css));
            }
        }
    }
}

impl Surface for CanvasSurface {
    /// CSS size, the unit blobs are seeded in.
    fn size(&self) -> (u32, u32) {
        input::css_size(self.backing, self.dpr)
    }

    fn fade(&mut self, color: Rgba) {
        self.set_fill(color);
        // cover the full backing store even when dpr doesn't divide it evenly
        self.ctx.fill_rect(
            0.0,
            0.0,
            self.backing.0 as f64 / self.dpr,
            self.backing.1 as f64 / self.dpr,
        );
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.set_fill(color);
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }

    fn mark_attractor(&mut self, pos: Vec2, visible: bool) {
        let Some(el) = &self.cursor else {
            return;
        };
        let style = el.style();
        if visible != self.cursor_visible {
            _ = style.set_property("opacity", if visible { "1" } else { "0" });
            self.cursor_visible = visible;
        }
        if !visible {
            return;
        }
        let client = input::canvas_to_client(pos, input::canvas_origin(&self.canvas));
        _ = style.set_property("left", &format!("{:.1}px", client.x));
        _ = style.set_property("top", &format!("{:.1}px", client.y));
    }
}
