//! Simulation context and the frame tick that drives it.
//!
//! `Simulation` owns everything that persists between frames (the attractor,
//! the blob field and the RNG used to seed it). `FrameScheduler` runs one frame
//! per `tick`: read the surface size, read the pointer once, advance the
//! simulation, render. Front-ends call `tick` from their refresh callback;
//! tests call `run_frames`.

use crate::attractor::AttractorTracker;
use crate::constants::{BLOB_COUNT, SMOOTH_RATE, SPRING_RATE};
use crate::field::BlobField;
use crate::pointer::{PointerCell, PointerState};
use crate::render::Renderer;
use crate::solver;
use crate::spring;
use crate::surface::Surface;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// When a size change recreates the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReseedPolicy {
    /// Seed once, at the first known size. Later resizes keep the old blobs.
    #[default]
    FirstSizeOnly,
    /// Seed again whenever the surface size changes.
    EveryResize,
}

/// Simulation setup. Counts and rates are fixed to the tuned constants; the
/// reseed policy is the one caller-facing switch.
#[derive(Clone, Debug)]
pub struct SimParams {
    pub(crate) blob_count: usize,
    pub(crate) smooth_rate: f32,
    pub(crate) spring_rate: f32,
    reseed: ReseedPolicy,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            blob_count: BLOB_COUNT,
            smooth_rate: SMOOTH_RATE,
            spring_rate: SPRING_RATE,
            reseed: ReseedPolicy::default(),
        }
    }
}

impl SimParams {
    pub fn with_reseed(mut self, reseed: ReseedPolicy) -> Self {
        self.reseed = reseed;
        self
    }

    pub fn reseed(&self) -> ReseedPolicy {
        self.reseed
    }

    pub fn blob_count(&self) -> usize {
        self.blob_count
    }
}

pub struct Simulation {
    params: SimParams,
    attractor: AttractorTracker,
    field: BlobField,
    rng: StdRng,
    size: (u32, u32),
    pointer_present: bool,
}

impl Simulation {
    pub fn new(params: SimParams, seed: u64) -> Self {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(params: SimParams) -> Self {
        Self::with_rng(params, StdRng::from_entropy())
    }

    fn with_rng(params: SimParams, rng: StdRng) -> Self {
        Self {
            attractor: AttractorTracker::new(params.smooth_rate),
            params,
            field: BlobField::new(),
            rng,
            size: (0, 0),
            pointer_present: false,
        }
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn attractor(&self) -> &AttractorTracker {
        &self.attractor
    }

    pub fn field(&self) -> &BlobField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut BlobField {
        &mut self.field
    }

    /// Last non-zero surface size seen, `(0, 0)` before that.
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    pub fn pointer_present(&self) -> bool {
        self.pointer_present
    }

    /// Record the surface size and seed the field if the policy calls for it.
    /// Returns whether a reseed happened. Zero sizes are ignored.
    pub fn observe_size(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        let changed = self.size != (width, height);
        if changed {
            log::debug!("[sim] surface size {}x{}", width, height);
        }
        self.size = (width, height);
        let reseed = match self.params.reseed {
            ReseedPolicy::FirstSizeOnly => self.field.is_empty(),
            ReseedPolicy::EveryResize => self.field.is_empty() || changed,
        };
        reseed && self.reseed()
    }

    /// Recreate every blob at the current size. No-op until a size is known.
    pub fn reseed(&mut self) -> bool {
        let (w, h) = self.size;
        if w == 0 || h == 0 {
            return false;
        }
        self.field
            .seed(&mut self.rng, self.params.blob_count, w as f32, h as f32);
        log::info!("[sim] seeded {} blobs over {}x{}", self.field.len(), w, h);
        true
    }

    /// Advance one frame: smooth the attractor toward the pointer, then solve
    /// and integrate every blob. Returns the smoothed attractor.
    pub fn step(&mut self, pointer: PointerState, time: f64) -> Vec2 {
        if let PointerState::At(p) = pointer {
            if !self.pointer_present {
                self.attractor.snap(p);
            }
        }
        self.pointer_present = pointer.is_present();
        let current = self.attractor.update(pointer.target());
        let rate = self.params.spring_rate;
        for blob in self.field.iter_mut() {
            let target = solver::solve(blob, current, time);
            spring::integrate_with_rate(blob, target, rate);
        }
        current
    }
}

/// Start/stop wrapper around the per-frame pipeline.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    renderer: Renderer,
    running: bool,
    frames: u64,
}

impl FrameScheduler {
    /// A stopped scheduler; call `start` before ticking.
    pub fn new(renderer: Renderer) -> Self {
        Self {
            renderer,
            running: false,
            frames: 0,
        }
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            log::debug!("[scheduler] started at frame {}", self.frames);
        }
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            log::debug!("[scheduler] stopped at frame {}", self.frames);
        }
    }

    /// Flip between running and stopped; returns the new running state.
    pub fn toggle(&mut self) -> bool {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
        self.running
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames rendered since construction.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame at `time` seconds. Returns false (and touches nothing)
    /// while stopped.
    pub fn tick<S: Surface + ?Sized>(
        &mut self,
        sim: &mut Simulation,
        pointer: &PointerCell,
        surface: &mut S,
        time: f64,
    ) -> bool {
        if !self.running {
            return false;
        }
        let (w, h) = surface.size();
        sim.observe_size(w, h);
        let state = pointer.latest();
        let current = sim.step(state, time);
        self.renderer
            .render_frame(surface, sim.field(), current, state.is_present(), time);
        self.frames += 1;
        true
    }

    /// Run up to `n` frames at `start_time, start_time + dt, ...`. Returns how
    /// many were rendered.
    pub fn run_frames<S: Surface + ?Sized>(
        &mut self,
        sim: &mut Simulation,
        pointer: &PointerCell,
        surface: &mut S,
        n: u32,
        start_time: f64,
        dt: f64,
    ) -> u32 {
        let mut rendered = 0;
        for i in 0..n {
            if self.tick(sim, pointer, surface, start_time + i as f64 * dt) {
                rendered += 1;
            }
        }
        rendered
    }
}
