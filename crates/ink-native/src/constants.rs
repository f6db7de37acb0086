// Native viewer constants

pub const WINDOW_TITLE: &str = "Ink Field (native)";
pub const INITIAL_WIDTH: u32 = 1280;
pub const INITIAL_HEIGHT: u32 = 800;

// Halo drawn around the smoothed attractor, logical px
pub const CURSOR_HALO_RADIUS: f32 = 60.0;

// Matches the clear color to the paper so a not-yet-uploaded frame doesn't flash
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.96,
    g: 0.95,
    b: 0.92,
    a: 1.0,
};
