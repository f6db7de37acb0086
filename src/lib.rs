#![cfg(target_arch = "wasm32")]
use constants::CANVAS_ID;
use ink_core::{FrameScheduler, PointerCell, Renderer, SimParams, Simulation};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ink-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio.
    // The field seeds itself on the first frame that sees a non-zero size.
    wire_canvas_resize(&canvas);
    dom::apply_goo_filter(&canvas);

    let cursor = match dom::create_cursor_disruption(&document) {
        Ok(el) => Some(el),
        Err(e) => {
            log::warn!("cursor marker unavailable: {:?}", e);
            None
        }
    };
    let surface = render::CanvasSurface::new(canvas.clone(), cursor)?;

    let pointer = PointerCell::new();
    events::wire_pointer_handlers(&canvas, &pointer);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        sim: Simulation::from_entropy(SimParams::default()),
        scheduler: FrameScheduler::new(Renderer::default()),
        pointer,
        surface,
        started: Instant::now(),
    }));
    events::wire_global_keydown(frame_ctx.clone());

    frame::start_loop(frame_ctx);
    Ok(())
}
