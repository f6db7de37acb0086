use crate::input;
use ink_core::PointerCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Route pointer move/enter/leave into the shared latest-value cell. The frame
/// tick reads it once per frame.
pub fn wire_pointer_handlers(canvas: &web::HtmlCanvasElement, pointer: &PointerCell) {
    let Some(window) = web::window() else {
        return;
    };
    let Some(root) = window.document().and_then(|d| d.document_element()) else {
        return;
    };

    // move and enter both report a live position
    for (target, event) in [
        (window.unchecked_ref::<web::EventTarget>(), "pointermove"),
        (root.unchecked_ref::<web::EventTarget>(), "pointerenter"),
    ] {
        let canvas = canvas.clone();
        let pointer = pointer.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            pointer.move_to(input::pointer_canvas_pos(&ev, &canvas));
        }) as Box<dyn FnMut(_)>);
        _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // leaving the page, or losing focus mid-drag, parks the attractor offscreen
    for (target, event) in [
        (root.unchecked_ref::<web::EventTarget>(), "pointerleave"),
        (window.unchecked_ref::<web::EventTarget>(), "blur"),
    ] {
        let pointer = pointer.clone();
        let closure = Closure::wrap(Box::new(move || {
            pointer.leave();
            log::debug!("[pointer] left");
        }) as Box<dyn FnMut()>);
        _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
