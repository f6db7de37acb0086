// Web front-end constants: DOM contract and filter tuning.
//
// Simulation constants live in `ink_core::constants`; these only describe how
// the page is wired and styled.
// Element ids / classes the page provides or we create
pub const CANVAS_ID: &str = "ink-canvas";
pub const CURSOR_DISRUPTION_CLASS: &str = "cursor-disruption";

// Goo post-process as a CSS filter: blur spreads each disc, contrast snaps the
// blurred edge back to a hard ink boundary so overlapping skirts fuse.
pub const GOO_BLUR_CSS_PX: f32 = 12.0;
pub const GOO_CONTRAST: f32 = 18.0;

// Cursor disruption marker (CSS pixels)
pub const CURSOR_DISRUPTION_SIZE_CSS_PX: f32 = 120.0;
pub const CURSOR_DISRUPTION_FADE_MS: u32 = 300;

#[inline]
pub fn goo_filter_css() -> String {
    format!(
        "blur({:.0}px) contrast({:.0})",
        GOO_BLUR_CSS_PX, GOO_CONTRAST
    )
}
