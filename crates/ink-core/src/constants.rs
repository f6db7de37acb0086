use glam::Vec2;

// Shared simulation/visual tuning constants used by both web and native frontends.

// Attractor smoothing
pub const SMOOTH_RATE: f32 = 0.1; // fraction of the remaining gap closed per frame

// Repulsion
pub const CURSOR_RADIUS: f32 = 180.0; // px; no force at or beyond this distance
pub const PUSH_STRENGTH: f32 = 120.0; // px; force magnitude as distance -> 0

// Displacement spring
pub const SPRING_RATE: f32 = 0.08;

// Organic drift
pub const WOBBLE_AMPLITUDE: f32 = 20.0; // px
pub const WOBBLE_PHASE_SKEW_Y: f32 = 1.3; // decorrelates the y wobble from x

// Field seeding
pub const BLOB_COUNT: usize = 48;
pub const BLOB_RADIUS_MIN: f32 = 25.0;
pub const BLOB_RADIUS_MAX: f32 = 70.0; // exclusive
pub const OSC_SPEED_MIN: f32 = 0.3; // rad/s
pub const OSC_SPEED_MAX: f32 = 0.9; // rad/s, exclusive

/// Attractor target used while no pointer is over the surface. Far enough that
/// `CURSOR_RADIUS` never reaches a blob, small enough to stay exact in f32.
pub const OFFSCREEN_SENTINEL: Vec2 = Vec2::new(-1.0e5, -1.0e5);

// Colors (straight alpha, 0..=1 per channel)
pub const PAPER_RGB: [f32; 3] = [0.96, 0.95, 0.92];
pub const INK_RGB: [f32; 3] = [0.05, 0.05, 0.09];
pub const FADE_ALPHA: f32 = 0.18; // per-frame dim toward paper; lower = longer trails
pub const INK_ALPHA: f32 = 1.0;

// Goo post-process (native viewer; the web build uses a CSS filter instead)
pub const GOO_BLUR_RADIUS: usize = 8; // px, box blur half-width
pub const GOO_THRESHOLD: f32 = 0.5; // coverage at which a pixel flips to ink
pub const GOO_SOFTNESS: f32 = 0.08; // smoothstep half-width around the threshold
