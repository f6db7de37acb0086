use crate::render::CanvasSurface;
use instant::Instant;
use ink_core::{FrameScheduler, PointerCell, Simulation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub sim: Simulation,
    pub scheduler: FrameScheduler,
    pub pointer: PointerCell,
    pub surface: CanvasSurface,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.surface.sync_transform();
        let time = self.started.elapsed().as_secs_f64();
        let ticked = self
            .scheduler
            .tick(&mut self.sim, &self.pointer, &mut self.surface, time);
        if ticked && self.scheduler.frames() == 1 {
            log::info!("[frame] first frame rendered at t={:.3}s", time);
        }
    }
}

/// Drive `frame` from requestAnimationFrame for the lifetime of the page.
/// Pausing stops the scheduler, not the callback chain.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    frame_ctx.borrow_mut().scheduler.start();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }
}
