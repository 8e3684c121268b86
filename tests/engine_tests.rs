//! Engine Tests
//!
//! Tests for:
//! - Frame pipeline: scroll → scrub → timeline → resolver → world matrices
//! - Resize leaving the pose untouched
//! - World composition order (tilt → group → body → part)
//! - Tilt arming after the opening phase

use glam::{EulerRot, Quat, Vec2, Vec3, Vec3A};

use mace_orbit::config::EngineConfig;
use mace_orbit::engine::Engine;
use mace_orbit::rig::pose::{PoseField, PoseState};
use mace_orbit::rig::resolver::LOCAL_UP;
use mace_orbit::timeline::{Phase, PhaseKind, ProgressDriver, Tween};

const FRAME: f32 = 1.0 / 60.0;

fn instant_engine() -> Engine {
    let config = EngineConfig {
        scrub_lag: 0.0,
        ..EngineConfig::default()
    };
    Engine::new(&config).unwrap()
}

fn scroll_to(engine: &mut Engine, progress: f32) {
    let offset = engine.scroll_region().offset_at(progress);
    engine.on_scroll(offset);
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn engine_starts_at_rest() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut engine = Engine::new(&EngineConfig::default()).unwrap();
    assert_eq!(engine.catalog().len(), 8);
    assert!((engine.camera().position_z - 18.0).abs() < 1e-6);

    let frame = engine.update(FRAME);
    assert_eq!(frame.frame, 1);
    assert!((frame.time - FRAME).abs() < 1e-6);
    assert_eq!(frame.phase, PhaseKind::Assemble);
    assert_eq!(frame.progress, 0.0);
    assert_eq!(frame.resolved.pose, PoseState::REST);
    assert_eq!(frame.world.len(), 8);
}

#[test]
fn invalid_config_is_rejected() {
    let config = EngineConfig {
        camera_fov: -5.0,
        ..EngineConfig::default()
    };
    assert!(Engine::new(&config).is_err());
}

#[test]
fn custom_driver() {
    let driver = ProgressDriver::builder()
        .phase(Phase::new(PhaseKind::Collapse, 0.0, 1.0).tween(Tween::pose(PoseField::Collapse, 1.0)))
        .build()
        .unwrap();
    let config = EngineConfig {
        scrub_lag: 0.0,
        ..EngineConfig::default()
    };
    let mut engine = Engine::with_driver(&config, driver).unwrap();

    scroll_to(&mut engine, 1.0);
    let frame = engine.update(FRAME);
    assert_eq!(frame.phase, PhaseKind::Collapse);
    assert!((frame.resolved.factors.sphere_scale - 4.0).abs() < 1e-5);
}

// ============================================================================
// Scrub
// ============================================================================

#[test]
fn progress_trails_the_scroll() {
    let mut engine = Engine::new(&EngineConfig::default()).unwrap();
    scroll_to(&mut engine, 1.0);

    let frame = engine.update(FRAME);
    assert_eq!(frame.target_progress, 1.0);
    assert!(frame.progress > 0.0 && frame.progress < 0.1);

    for _ in 0..600 {
        engine.update(FRAME);
    }
    assert_eq!(engine.progress(), 1.0);
    assert_eq!(engine.frame_count(), 601);
}

#[test]
fn reversing_the_scroll_reverses_immediately() {
    let mut engine = Engine::new(&EngineConfig::default()).unwrap();
    scroll_to(&mut engine, 1.0);
    for _ in 0..30 {
        engine.update(FRAME);
    }
    let peak = engine.progress();

    scroll_to(&mut engine, 0.0);
    let frame = engine.update(FRAME);
    assert!(frame.progress < peak);
}

#[test]
fn snap_to_scroll_skips_the_lag() {
    let mut engine = Engine::new(&EngineConfig::default()).unwrap();
    scroll_to(&mut engine, 0.5);
    engine.snap_to_scroll();

    let frame = engine.update(FRAME);
    assert!((frame.progress - 0.5).abs() < 1e-4);
}

// ============================================================================
// Pipeline consistency
// ============================================================================

#[test]
fn frame_matches_pure_evaluation() {
    let mut engine = instant_engine();
    for progress in [0.05, 0.2, 0.45, 0.8, 1.0] {
        scroll_to(&mut engine, progress);
        let frame = engine.update(FRAME);
        let (sample, resolved) = engine.evaluate(frame.progress);

        assert_eq!(frame.resolved, resolved);
        assert_eq!(frame.scene, sample.scene);
        assert_eq!(frame.camera.position_z, sample.scene.camera_z);
        assert_eq!(frame.camera.roll, sample.scene.camera_roll);
    }
}

#[test]
fn revisiting_a_progress_reproduces_the_frame() {
    let mut engine = instant_engine();
    scroll_to(&mut engine, 0.47);
    let first = engine.update(FRAME);

    for progress in [0.9, 1.0, 0.2, 0.0, 0.65] {
        scroll_to(&mut engine, progress);
        engine.update(FRAME);
    }

    scroll_to(&mut engine, 0.47);
    let second = engine.update(FRAME);
    assert_eq!(first.resolved, second.resolved);
    assert_eq!(first.world, second.world);
}

#[test]
fn resize_keeps_the_pose() {
    let mut engine = instant_engine();
    scroll_to(&mut engine, 0.4);
    let before = engine.update(FRAME);

    engine.on_resize(800.0, 600.0, 3.0);
    let after = engine.update(FRAME);

    assert_eq!(before.resolved, after.resolved);
    assert_eq!(before.world, after.world);
    assert!((after.camera.aspect - 800.0 / 600.0).abs() < 1e-6);
    assert!((engine.input.viewport.pixel_ratio() - 2.0).abs() < 1e-6);
}

#[test]
fn projection_follows_resize() {
    let mut engine = instant_engine();
    engine.on_resize(900.0, 300.0, 1.0);
    let frame = engine.update(FRAME);

    let projection = frame.camera.projection_matrix();
    // perspective_rh scales x by 1 / aspect relative to y.
    let aspect = projection.y_axis.y / projection.x_axis.x;
    assert!((aspect - 3.0).abs() < 1e-4);

    // The ring center sits straight ahead of the camera.
    let center = frame.camera.view_projection_matrix().project_point3(Vec3::ZERO);
    assert!(center.x.abs() < 1e-5 && center.y.abs() < 1e-5);
    assert!(center.z > 0.0 && center.z < 1.0);

    let eye = frame.camera.view_matrix().transform_point3(Vec3::ZERO);
    assert!(eye.abs_diff_eq(Vec3::new(0.0, 0.0, -frame.camera.position_z), 1e-4));
}

// ============================================================================
// World composition
// ============================================================================

#[test]
fn sphere_sits_on_the_rod_tip_inside_the_group() {
    let mut engine = instant_engine();
    scroll_to(&mut engine, 0.2);
    let frame = engine.update(FRAME);

    // No pointer input yet, so the tilt is identity.
    assert_eq!(frame.tilt, Vec2::ZERO);

    let r = frame.scene.group_rotation;
    let group = Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z);

    for (body, world) in frame.resolved.bodies.iter().zip(&frame.world) {
        let tip = body.position + body.orientation * (LOCAL_UP * body.sphere.offset);
        let expected = group * tip;
        assert!(
            world.sphere_center().abs_diff_eq(expected, 1e-4),
            "body {}: {:?} != {:?}",
            body.index,
            world.sphere_center(),
            expected
        );

        let origin: Vec3 = world.body.translation.into();
        assert!(origin.abs_diff_eq(group * body.position, 1e-4));
    }
}

#[test]
fn collapsed_bodies_meet_at_the_center() {
    let mut engine = instant_engine();
    scroll_to(&mut engine, 1.0);
    let frame = engine.update(FRAME);

    for world in &frame.world {
        assert!(world.sphere_center().abs_diff_eq(Vec3::ZERO, 1e-4));
    }
    assert!(frame.particle_matrix.matrix3.x_axis.abs_diff_eq(Vec3A::X, 1e-5));
}

// ============================================================================
// Tilt
// ============================================================================

#[test]
fn tilt_waits_for_the_opening_phase_to_end() {
    let mut engine = instant_engine();
    let viewport = engine.input.viewport;
    engine.on_pointer_move(viewport.width, 0.0);

    scroll_to(&mut engine, 0.05);
    for _ in 0..120 {
        let frame = engine.update(FRAME);
        assert_eq!(frame.phase, PhaseKind::Assemble);
        assert_eq!(frame.tilt, Vec2::ZERO);
    }

    scroll_to(&mut engine, 0.5);
    let mut frame = engine.update(FRAME);
    for _ in 0..600 {
        frame = engine.update(FRAME);
    }
    assert!(frame.tilt.abs_diff_eq(Vec2::new(0.1, 0.3), 1e-4));

    // Tilt is applied above the group.
    let r = frame.scene.group_rotation;
    let group = Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z);
    let tilt = Quat::from_euler(EulerRot::XYZ, frame.tilt.x, frame.tilt.y, 0.0);
    let body = &frame.resolved.bodies[0];
    let origin: Vec3 = frame.world[0].body.translation.into();
    assert!(origin.abs_diff_eq(tilt * (group * body.position), 1e-4));

    scroll_to(&mut engine, 0.05);
    for _ in 0..600 {
        frame = engine.update(FRAME);
    }
    assert!(frame.tilt.abs_diff_eq(Vec2::ZERO, 1e-4));
}
