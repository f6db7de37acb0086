// Frame-level scenarios run headless against the software surface.

use glam::Vec2;
use ink_core::*;

fn blob_near_origin(x: f32, y: f32, phase: f32) -> Blob {
    Blob::new(Vec2::new(x, y), 40.0, phase, Vec2::new(0.5, 0.7))
}

#[test]
fn far_attractor_lets_displacement_decay() {
    // Start every blob at maximum push, then park the attractor out of range.
    let mut field = BlobField::from_blobs(vec![
        blob_near_origin(0.0, 0.0, 0.0).with_displacement(Vec2::new(PUSH_STRENGTH, 0.0)),
        blob_near_origin(60.0, 20.0, 1.0).with_displacement(Vec2::new(-40.0, 80.0)),
        blob_near_origin(-30.0, 50.0, 2.0).with_displacement(Vec2::new(0.0, -PUSH_STRENGTH)),
    ]);
    let attractor = Vec2::new(1000.0, 1000.0);
    for frame in 0..100 {
        let t = frame as f64 / 60.0;
        for blob in field.iter_mut() {
            let target = solve(blob, attractor, t);
            assert_eq!(target, Vec2::ZERO);
            integrate(blob, target);
        }
    }
    for blob in field.iter() {
        assert!(
            blob.displacement().length() < 0.5,
            "displacement {:?} did not decay",
            blob.displacement()
        );
    }

    // Attractor lands exactly on a blob's anchor: no direction, no force.
    let t = 100.0 / 60.0;
    let blob = &field.blobs()[0];
    assert_eq!(solve(blob, blob.anchor(t), t), Vec2::ZERO);
}

#[test]
fn reference_scenario_pushes_along_positive_x() {
    let v = repulsion(Vec2::new(100.0, 0.0), Vec2::ZERO);
    let n = 100.0 / 180.0;
    let expected = (1.0f32 - n).powi(2) * 120.0;
    assert!((v.x - expected).abs() < 1e-3);
    assert!((v.x - 23.7).abs() < 0.01);
    assert!(v.y.abs() < 1e-4);
}

#[test]
fn reseeding_twice_gives_different_fields_of_equal_size() {
    let mut a = Simulation::from_entropy(SimParams::default());
    let mut b = Simulation::from_entropy(SimParams::default());
    assert!(a.observe_size(1280, 720));
    assert!(b.observe_size(1280, 720));
    assert_eq!(a.field().len(), b.field().len());
    assert_ne!(a.field().blobs(), b.field().blobs());

    // Same context, explicit reseed: new configuration, same count.
    let before = a.field().blobs().to_vec();
    assert!(a.reseed());
    assert_eq!(a.field().len(), before.len());
    assert_ne!(a.field().blobs(), &before[..]);
    for blob in a.field().iter().chain(b.field().iter()) {
        assert!((BLOB_RADIUS_MIN..BLOB_RADIUS_MAX).contains(&blob.radius()));
    }
}

#[test]
fn absent_pointer_never_pushes() {
    let mut sim = Simulation::new(SimParams::default(), 99);
    let mut surface = PixelSurface::new(400, 300, PAPER_RGB).unwrap();
    let pointer = PointerCell::new();
    let mut sched = FrameScheduler::default();
    sched.start();
    sched.run_frames(&mut sim, &pointer, &mut surface, 120, 0.0, 1.0 / 60.0);
    for blob in sim.field().iter() {
        assert_eq!(blob.displacement(), Vec2::ZERO);
    }
}

#[test]
fn pointer_parts_the_field_then_it_heals_after_leaving() {
    let mut sim = Simulation::new(SimParams::default(), 7);
    let mut surface = PixelSurface::new(640, 480, PAPER_RGB).unwrap();
    let pointer = PointerCell::new();
    let mut sched = FrameScheduler::default();
    sched.start();

    // First frame seeds the field.
    sched.tick(&mut sim, &pointer, &mut surface, 0.0);
    let anchor = sim.field().blobs()[0].anchor(0.0);
    // Park the pointer 60 px to the left of the first blob.
    pointer.move_to(anchor - Vec2::new(60.0, 0.0));
    let dt = 1.0 / 60.0;
    sched.run_frames(&mut sim, &pointer, &mut surface, 30, dt, dt);
    let pushed = sim.field().blobs()[0].displacement();
    assert!(pushed.length() > 5.0, "blob barely moved: {pushed:?}");
    assert!(pushed.x > 0.0, "blob should move away from the pointer: {pushed:?}");

    pointer.leave();
    sched.run_frames(&mut sim, &pointer, &mut surface, 200, 31.0 * dt, dt);
    assert!(!sim.pointer_present());
    for blob in sim.field().iter() {
        assert!(blob.displacement().length() < 0.5);
    }
}

#[test]
fn pointer_reentry_snaps_instead_of_sweeping_in() {
    let mut sim = Simulation::new(SimParams::default(), 8);
    sim.observe_size(800, 600);
    sim.step(PointerState::At(Vec2::new(100.0, 100.0)), 0.0);
    for i in 0..50 {
        sim.step(PointerState::Absent, i as f64 * 0.016);
    }
    assert!(sim.attractor().current().x < -1000.0);
    let back = sim.step(PointerState::At(Vec2::new(400.0, 300.0)), 1.0);
    assert_eq!(back, Vec2::new(400.0, 300.0));
}

#[test]
fn rendered_frames_leave_ink_on_the_surface() {
    let mut sim = Simulation::new(SimParams::default(), 3);
    let mut surface = PixelSurface::new(320, 240, PAPER_RGB).unwrap();
    let pointer = PointerCell::new();
    let mut sched = FrameScheduler::default();
    sched.start();
    sched.run_frames(&mut sim, &pointer, &mut surface, 5, 0.0, 1.0 / 60.0);
    let blob = &sim.field().blobs()[0];
    let p = blob.position(4.0 / 60.0);
    if p.x >= 0.0 && p.y >= 0.0 && p.x < 320.0 && p.y < 240.0 {
        assert_eq!(surface.pixel(p.x as u32, p.y as u32), Some(INK_RGB));
    }
    let inked = surface.pixels().iter().filter(|px| **px == INK_RGB).count();
    assert!(inked > 0);
}

#[test]
fn stopping_freezes_the_simulation() {
    let mut sim = Simulation::new(SimParams::default(), 4);
    let mut surface = PixelSurface::new(200, 200, PAPER_RGB).unwrap();
    let pointer = PointerCell::new();
    let mut sched = FrameScheduler::default();
    sched.start();
    sched.run_frames(&mut sim, &pointer, &mut surface, 3, 0.0, 0.016);
    let snapshot = surface.to_rgba8();
    sched.stop();
    assert_eq!(
        sched.run_frames(&mut sim, &pointer, &mut surface, 10, 1.0, 0.016),
        0
    );
    assert_eq!(sched.frames(), 3);
    assert_eq!(surface.to_rgba8(), snapshot);
}

#[test]
fn callers_get_the_tuned_constants_and_only_choose_the_reseed_policy() {
    let params = SimParams::default();
    assert_eq!(params.blob_count(), BLOB_COUNT);
    assert_eq!(params.reseed(), ReseedPolicy::FirstSizeOnly);

    let renderer = Renderer::default();
    assert_eq!(renderer.fade(), Rgba::new(PAPER_RGB, FADE_ALPHA));
    assert_eq!(renderer.ink(), Rgba::new(INK_RGB, INK_ALPHA));

    let mut sim = Simulation::new(params.with_reseed(ReseedPolicy::EveryResize), 11);
    assert_eq!(sim.params().reseed(), ReseedPolicy::EveryResize);
    assert!(sim.observe_size(640, 480));
    let first = sim.field().blobs().to_vec();
    assert!(sim.observe_size(800, 600));
    assert_eq!(sim.field().len(), BLOB_COUNT);
    assert_ne!(sim.field().blobs(), &first[..]);
}

#[test]
fn wobbling_field_keeps_moving_days_into_a_session() {
    let mut sim = Simulation::new(SimParams::default(), 12);
    assert!(sim.observe_size(800, 600));
    let start = 3.0 * 86_400.0;
    let dt = 1.0 / 60.0;
    for i in 0..60 {
        let t = start + i as f64 * dt;
        let moved = sim
            .field()
            .iter()
            .all(|b| b.anchor(t) != b.anchor(t + dt));
        assert!(moved, "a blob froze at frame {i}");
    }
}
