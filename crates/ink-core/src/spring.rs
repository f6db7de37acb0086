use crate::blob::Blob;
use crate::constants::SPRING_RATE;
use glam::Vec2;

/// One-pole smoothing of a blob's displacement toward the solver's target.
#[inline]
pub fn integrate(blob: &mut Blob, target: Vec2) {
    integrate_with_rate(blob, target, SPRING_RATE);
}

#[inline]
pub fn integrate_with_rate(blob: &mut Blob, target: Vec2, rate: f32) {
    let d = blob.displacement_mut();
    *d += (target - *d) * rate;
}
