use glam::Vec2;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    TogglePause,
    Reseed,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        " " => Some(KeyAction::TogglePause),
        "r" | "R" => Some(KeyAction::Reseed),
        _ => None,
    }
}

/// CSS client coordinates -> canvas-relative CSS px, the unit the simulation
/// runs in. Device pixels only appear in the backing store.
#[inline]
pub fn client_to_canvas(client: Vec2, rect_origin: Vec2) -> Vec2 {
    client - rect_origin
}

/// Inverse of `client_to_canvas`, used to place DOM elements over the canvas.
#[inline]
pub fn canvas_to_client(pos: Vec2, rect_origin: Vec2) -> Vec2 {
    rect_origin + pos
}

/// Backing store size for a CSS box at `dpr`.
#[inline]
pub fn backing_size(css_w: f64, css_h: f64, dpr: f64) -> (u32, u32) {
    ((css_w * dpr).round() as u32, (css_h * dpr).round() as u32)
}

/// CSS size covered by a backing store at `dpr`. Zero while `dpr` is unusable.
#[inline]
pub fn css_size(backing: (u32, u32), dpr: f64) -> (u32, u32) {
    if dpr.is_nan() || dpr <= 0.0 {
        return (0, 0);
    }
    (
        (backing.0 as f64 / dpr).round() as u32,
        (backing.1 as f64 / dpr).round() as u32,
    )
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map_or(1.0, |w| w.device_pixel_ratio())
}

#[inline]
pub fn canvas_origin(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(rect.left() as f32, rect.top() as f32)
}

#[inline]
pub fn pointer_canvas_pos(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    client_to_canvas(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        canvas_origin(canvas),
    )
}
