//! The fixed-size blob collection and its seeding.

use crate::blob::Blob;
use crate::constants::{BLOB_RADIUS_MAX, BLOB_RADIUS_MIN, OSC_SPEED_MAX, OSC_SPEED_MIN};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Debug, Default)]
pub struct BlobField {
    blobs: Vec<Blob>,
}

impl BlobField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_blobs(blobs: Vec<Blob>) -> Self {
        Self { blobs }
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Blob> {
        self.blobs.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Blob> {
        self.blobs.iter_mut()
    }

    pub fn clear(&mut self) {
        self.blobs.clear();
    }

    /// Replace every blob with `count` fresh ones spread over a `width` x `height`
    /// surface. Displacements start at zero.
    pub fn seed<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize, width: f32, height: f32) {
        self.blobs.clear();
        self.blobs.reserve(count);
        for _ in 0..count {
            self.blobs.push(random_blob(rng, width, height));
        }
    }
}

fn random_blob<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Blob {
    let base = Vec2::new(
        rng.gen::<f32>() * width.max(0.0),
        rng.gen::<f32>() * height.max(0.0),
    );
    let radius = rng.gen_range(BLOB_RADIUS_MIN..BLOB_RADIUS_MAX);
    let phase = rng.gen_range(0.0..TAU);
    let osc_speed = Vec2::new(
        rng.gen_range(OSC_SPEED_MIN..OSC_SPEED_MAX),
        rng.gen_range(OSC_SPEED_MIN..OSC_SPEED_MAX),
    );
    Blob::new(base, radius, phase, osc_speed)
}

impl<'a> IntoIterator for &'a BlobField {
    type Item = &'a Blob;
    type IntoIter = std::slice::Iter<'a, Blob>;

    fn into_iter(self) -> Self::IntoIter {
        self.blobs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn seed_fills_exactly_count_blobs() {
        let mut f = BlobField::new();
        let mut rng = StdRng::seed_from_u64(7);
        f.seed(&mut rng, 48, 800.0, 600.0);
        assert_eq!(f.len(), 48);
        assert!(!f.is_empty());
    }

    #[test]
    fn seeded_parameters_stay_in_range() {
        let mut f = BlobField::new();
        let mut rng = StdRng::seed_from_u64(11);
        f.seed(&mut rng, 500, 640.0, 480.0);
        for b in f.iter() {
            assert!(b.radius() >= BLOB_RADIUS_MIN && b.radius() < BLOB_RADIUS_MAX);
            assert!(b.phase() >= 0.0 && b.phase() < TAU);
            assert!(b.osc_speed().x >= OSC_SPEED_MIN && b.osc_speed().x < OSC_SPEED_MAX);
            assert!(b.osc_speed().y >= OSC_SPEED_MIN && b.osc_speed().y < OSC_SPEED_MAX);
            let p = b.base_position();
            assert!((0.0..=640.0).contains(&p.x) && (0.0..=480.0).contains(&p.y));
            assert_eq!(b.displacement(), Vec2::ZERO);
        }
    }

    #[test]
    fn same_seed_gives_same_field() {
        let mut a = BlobField::new();
        let mut b = BlobField::new();
        a.seed(&mut StdRng::seed_from_u64(3), 10, 100.0, 100.0);
        b.seed(&mut StdRng::seed_from_u64(3), 10, 100.0, 100.0);
        assert_eq!(a.blobs(), b.blobs());
    }

    #[test]
    fn reseeding_replaces_rather_than_appends() {
        let mut f = BlobField::new();
        let mut rng = StdRng::seed_from_u64(5);
        f.seed(&mut rng, 12, 300.0, 300.0);
        f.seed(&mut rng, 12, 300.0, 300.0);
        assert_eq!(f.len(), 12);
    }
}
