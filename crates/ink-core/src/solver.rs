//! Per-blob repulsion from the attractor.
//!
//! The force falls off quadratically from `PUSH_STRENGTH` at the attractor to
//! zero at `CURSOR_RADIUS` and points from the attractor toward the blob's
//! wobbling anchor. An anchor exactly on the attractor has no defined
//! direction and receives no force.

use crate::blob::Blob;
use crate::constants::{CURSOR_RADIUS, PUSH_STRENGTH};
use glam::Vec2;

/// Force magnitude at `dist` px from the attractor. Zero outside `(0, CURSOR_RADIUS)`.
#[inline]
pub fn push_magnitude(dist: f32) -> f32 {
    if dist <= 0.0 || dist >= CURSOR_RADIUS {
        return 0.0;
    }
    let n = dist / CURSOR_RADIUS;
    let falloff = 1.0 - n;
    falloff * falloff * PUSH_STRENGTH
}

/// Repulsion felt by an anchor at `anchor` from an attractor at `attractor`.
#[inline]
pub fn repulsion(anchor: Vec2, attractor: Vec2) -> Vec2 {
    let d = anchor - attractor;
    let dist = d.length();
    let f = push_magnitude(dist);
    if f == 0.0 {
        return Vec2::ZERO;
    }
    let angle = d.y.atan2(d.x);
    Vec2::new(angle.cos(), angle.sin()) * f
}

/// Target displacement for `blob` at `time`, given the smoothed attractor.
#[inline]
pub fn solve(blob: &Blob, attractor: Vec2, time: f64) -> Vec2 {
    repulsion(blob.anchor(time), attractor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_point_at_distance_100() {
        let v = repulsion(Vec2::new(100.0, 0.0), Vec2::ZERO);
        // (1 - 100/180)^2 * 120 = 23.7037...
        assert!((v.x - 23.7037).abs() < 1e-3, "got {v:?}");
        assert!(v.y.abs() < 1e-4);
    }

    #[test]
    fn direction_points_away_from_attractor() {
        let attractor = Vec2::new(50.0, 50.0);
        let v = repulsion(Vec2::new(20.0, 90.0), attractor);
        assert!(v.x < 0.0 && v.y > 0.0);
        let expected_dir = (Vec2::new(20.0, 90.0) - attractor).normalize();
        assert!((v.normalize() - expected_dir).length() < 1e-5);
    }

    #[test]
    fn coincident_anchor_gets_no_force() {
        assert_eq!(repulsion(Vec2::new(12.0, 34.0), Vec2::new(12.0, 34.0)), Vec2::ZERO);
    }

    #[test]
    fn boundary_distance_gets_no_force() {
        assert_eq!(repulsion(Vec2::new(CURSOR_RADIUS, 0.0), Vec2::ZERO), Vec2::ZERO);
        assert_eq!(push_magnitude(CURSOR_RADIUS), 0.0);
    }

    #[test]
    fn magnitude_approaches_push_strength_near_zero() {
        let m = push_magnitude(1e-3);
        assert!((m - PUSH_STRENGTH).abs() < 1e-2);
    }

    #[test]
    fn solve_measures_from_wobbling_anchor() {
        let blob = Blob::new(Vec2::new(300.0, 300.0), 30.0, 0.0, Vec2::new(1.0, 1.0));
        let t = 1.7;
        let attractor = blob.anchor(t) - Vec2::new(60.0, 0.0);
        let v = solve(&blob, attractor, t);
        assert!((v.length() - push_magnitude(60.0)).abs() < 1e-3);
        assert!(v.x > 0.0);
    }
}
