use std::time::Instant;

use glam::Vec2;
use ink_core::{
    FrameScheduler, GooFilter, PixelSurface, PointerCell, Renderer, SimParams, Simulation,
    PAPER_RGB,
};
use winit::{
    dpi::{LogicalPosition, LogicalSize, PhysicalPosition, PhysicalSize},
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

mod constants;
mod gpu;

use constants::{INITIAL_HEIGHT, INITIAL_WIDTH, WINDOW_TITLE};
use gpu::GpuState;

/// Logical size of the window, the resolution the CPU frame is rendered at.
/// The simulation constants are tuned in logical pixels; the present pass
/// stretches the frame over the physical surface.
fn logical_frame_size(size: PhysicalSize<u32>, scale_factor: f64) -> (u32, u32) {
    let logical: LogicalSize<f64> = size.to_logical(scale_factor);
    (
        (logical.width.round() as u32).max(1),
        (logical.height.round() as u32).max(1),
    )
}

fn logical_cursor(position: PhysicalPosition<f64>, scale_factor: f64) -> Vec2 {
    let logical: LogicalPosition<f32> = position.to_logical(scale_factor);
    Vec2::new(logical.x, logical.y)
}

/// CPU side of the viewer: simulation, raster target and goo pass.
struct InkApp {
    sim: Simulation,
    scheduler: FrameScheduler,
    pointer: PointerCell,
    canvas: PixelSurface,
    goo: GooFilter,
    filtered: Vec<u8>,
    started: Instant,
}

impl InkApp {
    fn new((width, height): (u32, u32)) -> anyhow::Result<Self> {
        let canvas = PixelSurface::new(width, height, PAPER_RGB)?;
        let mut scheduler = FrameScheduler::new(Renderer::default());
        scheduler.start();
        Ok(Self {
            sim: Simulation::from_entropy(SimParams::default()),
            scheduler,
            pointer: PointerCell::new(),
            canvas,
            goo: GooFilter::default(),
            filtered: Vec::new(),
            started: Instant::now(),
        })
    }

    fn resize(&mut self, (width, height): (u32, u32)) {
        self.canvas.resize(width, height, PAPER_RGB);
    }

    fn on_key(&mut self, key: &Key) {
        match key {
            Key::Named(NamedKey::Space) => {
                let running = self.scheduler.toggle();
                log::info!("[keys] running={}", running);
            }
            Key::Character(c) if c.eq_ignore_ascii_case("r") => {
                if self.sim.reseed() {
                    log::info!("[keys] reseeded field");
                }
            }
            _ => {}
        }
    }

    /// Advance one frame. Returns the filtered RGBA8 frame when one was rendered.
    fn frame(&mut self) -> Option<(&[u8], u32, u32)> {
        let time = self.started.elapsed().as_secs_f64();
        if !self
            .scheduler
            .tick(&mut self.sim, &self.pointer, &mut self.canvas, time)
        {
            return None;
        }
        if self.scheduler.frames() == 1 {
            log::info!("[frame] first frame rendered at t={:.3}s", time);
        }
        self.goo.apply(&self.canvas, &mut self.filtered);
        Some((&self.filtered, self.canvas.width(), self.canvas.height()))
    }

    fn cursor(&self) -> (Vec2, bool) {
        (self.sim.attractor().current(), self.sim.pointer_present())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(INITIAL_WIDTH, INITIAL_HEIGHT))
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window))?;
    let mut app = InkApp::new(logical_frame_size(
        window.inner_size(),
        window.scale_factor(),
    ))?;
    log::info!("ink-native starting");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => {
                state.resize(size);
                app.resize(logical_frame_size(size, state.window.scale_factor()));
            }
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                let scale_factor = state.window.scale_factor();
                app.pointer.move_to(logical_cursor(position, scale_factor));
            }
            WindowEvent::CursorLeft { .. } | WindowEvent::Focused(false) => app.pointer.leave(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => app.on_key(&logical_key),
            _ => {}
        },
        Event::AboutToWait => {
            if let Some((rgba, w, h)) = app.frame() {
                state.upload(rgba, w, h);
            }
            let (cursor, visible) = app.cursor();
            match state.render(cursor, visible) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    state.resize(state.window.inner_size())
                }
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("[gpu] frame skipped: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
