//! A single metaball: immutable seed parameters plus a smoothed displacement.

use crate::constants::{WOBBLE_AMPLITUDE, WOBBLE_PHASE_SKEW_Y};
use glam::Vec2;
use std::f64::consts::TAU;

/// `time * speed + offset`, reduced to one turn before it narrows to f32.
/// Elapsed seconds grow without bound; an f32 angle would stop resolving
/// single frames after a few days.
#[inline]
fn oscillator_angle(time: f64, speed: f32, offset: f32) -> f32 {
    (time * speed as f64 + offset as f64).rem_euclid(TAU) as f32
}

#[derive(Clone, Debug, PartialEq)]
pub struct Blob {
    base_position: Vec2,
    radius: f32,
    phase: f32,
    osc_speed: Vec2,
    displacement: Vec2,
}

impl Blob {
    /// `osc_speed` holds the independent x and y wobble rates in rad/s.
    pub fn new(base_position: Vec2, radius: f32, phase: f32, osc_speed: Vec2) -> Self {
        Self {
            base_position,
            radius,
            phase,
            osc_speed,
            displacement: Vec2::ZERO,
        }
    }

    pub fn with_displacement(mut self, displacement: Vec2) -> Self {
        self.displacement = displacement;
        self
    }

    pub fn base_position(&self) -> Vec2 {
        self.base_position
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn osc_speed(&self) -> Vec2 {
        self.osc_speed
    }

    pub fn displacement(&self) -> Vec2 {
        self.displacement
    }

    pub(crate) fn displacement_mut(&mut self) -> &mut Vec2 {
        &mut self.displacement
    }

    /// Deterministic drift around the base position at `time` seconds.
    #[inline]
    pub fn wobble(&self, time: f64) -> Vec2 {
        let ax = oscillator_angle(time, self.osc_speed.x, self.phase);
        let ay = oscillator_angle(time, self.osc_speed.y, self.phase * WOBBLE_PHASE_SKEW_Y);
        Vec2::new(ax.sin(), ay.cos()) * WOBBLE_AMPLITUDE
    }

    /// Wobble-adjusted anchor, the point repulsion is measured from.
    #[inline]
    pub fn anchor(&self, time: f64) -> Vec2 {
        self.base_position + self.wobble(time)
    }

    /// Where the blob is drawn this frame.
    #[inline]
    pub fn position(&self, time: f64) -> Vec2 {
        self.anchor(time) + self.displacement
    }
}
