// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn client_to_canvas_stays_in_css_pixels_at_any_dpr() {
    // The mapping never sees the backing store, so a 150 CSS px offset stays
    // 150 px on a dpr 2 screen and remains inside the push radius.
    let origin = Vec2::new(10.0, 20.0);
    let pos = client_to_canvas(Vec2::new(160.0, 20.0), origin);
    assert_eq!(pos, Vec2::new(150.0, 0.0));
    assert!(pos.length() < ink_core::CURSOR_RADIUS);
    assert!(ink_core::push_magnitude(pos.length()) > 0.0);
}

#[test]
fn client_to_canvas_allows_points_outside_the_canvas() {
    // Pointer over the page margin still maps; the solver just finds no blobs nearby.
    let pos = client_to_canvas(Vec2::new(-50.0, 5.0), Vec2::ZERO);
    assert_eq!(pos, Vec2::new(-50.0, 5.0));
}

#[test]
fn canvas_to_client_inverts_the_mapping() {
    let origin = Vec2::new(32.0, 48.0);
    let client = Vec2::new(123.5, 300.25);
    let back = canvas_to_client(client_to_canvas(client, origin), origin);
    assert!((back - client).length() < 1e-4);
}

#[test]
fn backing_size_scales_by_device_pixel_ratio() {
    assert_eq!(backing_size(400.0, 300.0, 2.0), (800, 600));
    assert_eq!(backing_size(400.0, 300.0, 1.0), (400, 300));
    assert_eq!(backing_size(333.0, 100.0, 1.5), (500, 150));
}

#[test]
fn css_size_undoes_backing_size() {
    for dpr in [1.0, 1.25, 1.5, 2.0, 3.0] {
        let backing = backing_size(640.0, 480.0, dpr);
        assert_eq!(css_size(backing, dpr), (640, 480), "dpr {dpr}");
    }
}

#[test]
fn css_size_with_unusable_ratio_is_zero() {
    assert_eq!(css_size((800, 600), 0.0), (0, 0));
    assert_eq!(css_size((800, 600), f64::NAN), (0, 0));
}

#[test]
fn key_action_maps_space_and_r() {
    assert_eq!(key_action(" "), Some(KeyAction::TogglePause));
    assert_eq!(key_action("r"), Some(KeyAction::Reseed));
    assert_eq!(key_action("R"), Some(KeyAction::Reseed));
}

#[test]
fn key_action_ignores_other_keys() {
    for key in ["a", "Enter", "Escape", "ArrowLeft", "1", ""] {
        assert_eq!(key_action(key), None, "key {key:?} should be ignored");
    }
}
