//! Smoothed pointer tracking.

use crate::constants::{OFFSCREEN_SENTINEL, SMOOTH_RATE};
use glam::Vec2;

/// Raw pointer target plus the exponentially smoothed point the solver reads.
#[derive(Clone, Debug)]
pub struct AttractorTracker {
    target: Vec2,
    current: Vec2,
    rate: f32,
}

impl Default for AttractorTracker {
    fn default() -> Self {
        Self::new(SMOOTH_RATE)
    }
}

impl AttractorTracker {
    /// Starts parked at the offscreen sentinel, as if no pointer had arrived yet.
    pub fn new(rate: f32) -> Self {
        Self {
            target: OFFSCREEN_SENTINEL,
            current: OFFSCREEN_SENTINEL,
            rate,
        }
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn current(&self) -> Vec2 {
        self.current
    }

    /// One frame of one-pole smoothing toward `target`; returns the new `current`.
    pub fn update(&mut self, target: Vec2) -> Vec2 {
        self.target = target;
        self.current += (target - self.current) * self.rate;
        self.current
    }

    /// Jump straight to `pos` with no smoothing. This is the one write to
    /// `current` outside `update`, and it departs from plain smoothing on
    /// purpose: the simulation calls it when the pointer re-enters, so
    /// `current` does not glide in from the offscreen sentinel across the
    /// whole field. Every later frame smooths as usual.
    pub fn snap(&mut self, pos: Vec2) {
        self.target = pos;
        self.current = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_is_a_no_op_at_the_fixed_point() {
        let mut t = AttractorTracker::default();
        t.snap(Vec2::new(320.0, 200.0));
        let out = t.update(Vec2::new(320.0, 200.0));
        assert_eq!(out, Vec2::new(320.0, 200.0));
        assert_eq!(t.current(), t.target());
    }

    #[test]
    fn update_closes_ten_percent_of_the_gap() {
        let mut t = AttractorTracker::default();
        t.snap(Vec2::ZERO);
        let out = t.update(Vec2::new(100.0, -50.0));
        assert!((out.x - 10.0).abs() < 1e-5);
        assert!((out.y + 5.0).abs() < 1e-5);
    }

    #[test]
    fn converges_toward_a_fixed_target() {
        let mut t = AttractorTracker::default();
        t.snap(Vec2::ZERO);
        let goal = Vec2::new(400.0, 300.0);
        for _ in 0..120 {
            t.update(goal);
        }
        // 0.9^120 ~ 3.2e-6 of the initial 500 px gap
        assert!(t.current().distance(goal) < 0.01);
    }

    #[test]
    fn starts_at_the_sentinel() {
        let t = AttractorTracker::default();
        assert_eq!(t.current(), OFFSCREEN_SENTINEL);
        assert_eq!(t.target(), OFFSCREEN_SENTINEL);
    }
}
