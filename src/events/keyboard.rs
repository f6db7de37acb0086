use crate::frame::FrameContext;
use crate::input::{key_action, KeyAction};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, frame_ctx: &Rc<RefCell<FrameContext>>) {
    let Some(action) = key_action(&ev.key()) else {
        return;
    };
    let mut ctx = frame_ctx.borrow_mut();
    match action {
        KeyAction::TogglePause => {
            let running = ctx.scheduler.toggle();
            log::info!("[keys] running={}", running);
            ev.prevent_default();
        }
        KeyAction::Reseed => {
            if ctx.sim.reseed() {
                log::info!("[keys] reseeded field");
            }
        }
    }
}

pub fn wire_global_keydown(frame_ctx: Rc<RefCell<FrameContext>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &frame_ctx);
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
