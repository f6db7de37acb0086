use crate::constants::{
    goo_filter_css, CURSOR_DISRUPTION_CLASS, CURSOR_DISRUPTION_FADE_MS,
    CURSOR_DISRUPTION_SIZE_CSS_PX,
};
use crate::input::backing_size;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Match the canvas backing store to its CSS size times devicePixelRatio.
/// Changing the size clears the canvas, so it is left alone when unchanged.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let rect = canvas.get_bounding_client_rect();
        let (w_px, h_px) = backing_size(rect.width(), rect.height(), w.device_pixel_ratio());
        if canvas.width() != w_px {
            canvas.set_width(w_px);
        }
        if canvas.height() != h_px {
            canvas.set_height(h_px);
        }
    }
}

/// Blur + contrast on the canvas element fuses overlapping discs.
pub fn apply_goo_filter(canvas: &web::HtmlCanvasElement) {
    let style = canvas.style();
    _ = style.set_property("filter", &goo_filter_css());
}

/// The marker that trails the smoothed pointer. Starts invisible.
pub fn create_cursor_disruption(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("document has no body"))?;
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    el.set_class_name(CURSOR_DISRUPTION_CLASS);
    let size = CURSOR_DISRUPTION_SIZE_CSS_PX;
    let style = el.style();
    for (k, v) in [
        ("position", "fixed".to_string()),
        ("left", "0px".to_string()),
        ("top", "0px".to_string()),
        ("width", format!("{size}px")),
        ("height", format!("{size}px")),
        ("margin-left", format!("{}px", -size / 2.0)),
        ("margin-top", format!("{}px", -size / 2.0)),
        ("border-radius", "50%".to_string()),
        (
            "background",
            "radial-gradient(circle, rgba(13, 13, 23, 0.18) 0%, rgba(13, 13, 23, 0) 70%)"
                .to_string(),
        ),
        ("pointer-events", "none".to_string()),
        ("opacity", "0".to_string()),
        (
            "transition",
            format!("opacity {CURSOR_DISRUPTION_FADE_MS}ms ease"),
        ),
    ] {
        _ = style.set_property(k, &v);
    }
    body.append_child(&el)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(el)
}
