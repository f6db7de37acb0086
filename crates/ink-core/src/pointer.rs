//! Latest-value pointer cell shared between input handlers and the frame tick.

use crate::constants::OFFSCREEN_SENTINEL;
use glam::Vec2;
use std::sync::{Arc, Mutex};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PointerState {
    /// No pointer over the surface (never arrived, or left).
    #[default]
    Absent,
    /// Pointer at a surface position in device pixels.
    At(Vec2),
}

impl PointerState {
    pub fn is_present(&self) -> bool {
        matches!(self, PointerState::At(_))
    }

    /// Attractor target: the live position, or the offscreen sentinel.
    pub fn target(&self) -> Vec2 {
        match *self {
            PointerState::At(p) => p,
            PointerState::Absent => OFFSCREEN_SENTINEL,
        }
    }
}

/// Single-slot cell. Writers overwrite; the scheduler reads once per frame.
#[derive(Clone, Debug, Default)]
pub struct PointerCell {
    inner: Arc<Mutex<PointerState>>,
}

impl PointerCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, state: PointerState) {
        // the payload is Copy, so a poisoned lock still holds a usable value
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        *guard = state;
    }

    pub fn move_to(&self, pos: Vec2) {
        self.set(PointerState::At(pos));
    }

    pub fn leave(&self) {
        self.set(PointerState::Absent);
    }

    pub fn latest(&self) -> PointerState {
        *self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}
