//! Input Tests
//!
//! Tests for:
//! - Viewport normalization and pixel ratio capping
//! - ScrollRegion progress mapping
//! - ScrubSmoother lag, retargeting and snapping
//! - TiltRig arming, convergence and frame-rate independence

use glam::Vec2;

use mace_orbit::input::{Input, MAX_PIXEL_RATIO, ScrollRegion, ScrubSmoother, TiltRig, TiltSettings, Viewport};

const EPSILON: f32 = 1e-5;
const FRAME: f32 = 1.0 / 60.0;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec2_approx(a: Vec2, b: Vec2, eps: f32) -> bool {
    a.abs_diff_eq(b, eps)
}

// ============================================================================
// Viewport & Input
// ============================================================================

#[test]
fn normalize_maps_corners_with_y_up() {
    let viewport = Viewport::new(800.0, 600.0, 1.0);
    assert!(vec2_approx(viewport.normalize(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, 1.0), EPSILON));
    assert!(vec2_approx(viewport.normalize(Vec2::new(800.0, 600.0)), Vec2::new(1.0, -1.0), EPSILON));
    assert!(vec2_approx(viewport.normalize(Vec2::new(400.0, 300.0)), Vec2::ZERO, EPSILON));
    assert!(vec2_approx(viewport.normalize(Vec2::new(600.0, 150.0)), Vec2::new(0.5, 0.5), EPSILON));
}

#[test]
fn normalize_clamps_outside_the_viewport() {
    let viewport = Viewport::new(100.0, 100.0, 1.0);
    assert_eq!(viewport.normalize(Vec2::new(-50.0, 500.0)), Vec2::new(-1.0, -1.0));
}

#[test]
fn aspect_and_pixel_ratio() {
    assert!(approx(Viewport::new(1920.0, 1080.0, 1.0).aspect(), 16.0 / 9.0));
    assert!(approx(Viewport::new(0.0, 1080.0, 1.0).aspect(), 1.0));
    assert!(approx(Viewport::new(10.0, 10.0, 3.0).pixel_ratio(), MAX_PIXEL_RATIO));
    assert!(approx(Viewport::new(10.0, 10.0, 0.5).pixel_ratio(), 1.0));
}

#[test]
fn pointer_is_centered_until_the_cursor_moves() {
    let mut input = Input::new();
    assert_eq!(input.pointer(), Vec2::ZERO);

    input.handle_resize(200.0, 100.0, 1.0);
    input.handle_cursor_move(200.0, 0.0);
    assert!(vec2_approx(input.pointer(), Vec2::ONE, EPSILON));
}

#[test]
fn non_finite_scroll_is_ignored() {
    let mut input = Input::new();
    input.handle_scroll(120.0);
    input.handle_scroll(f32::NAN);
    assert!(approx(input.scroll_offset, 120.0));
}

// ============================================================================
// ScrollRegion
// ============================================================================

#[test]
fn region_maps_offsets_to_progress() {
    let region = ScrollRegion::new(500.0, 1500.0);
    assert_eq!(region.progress(0.0), 0.0);
    assert_eq!(region.progress(500.0), 0.0);
    assert!(approx(region.progress(750.0), 0.25));
    assert_eq!(region.progress(1500.0), 1.0);
    assert_eq!(region.progress(9000.0), 1.0);
    assert!(approx(region.offset_at(0.25), 750.0));
}

#[test]
fn region_from_element() {
    let region = ScrollRegion::from_element(200.0, 4000.0, 0.5);
    assert!(approx(region.start, 200.0));
    assert!(approx(region.end, 2200.0));
    assert!(approx(region.length(), 2000.0));
}

#[test]
fn zero_length_region_is_a_step() {
    let region = ScrollRegion::new(300.0, 300.0);
    assert_eq!(region.progress(299.0), 0.0);
    assert_eq!(region.progress(300.0), 1.0);
}

// ============================================================================
// ScrubSmoother
// ============================================================================

#[test]
fn scrub_lags_behind_the_target() {
    let mut scrub = ScrubSmoother::new(1.2);
    scrub.set_target(1.0);

    let first = scrub.update(FRAME);
    assert!(first > 0.0 && first < 0.1, "first frame = {first}");

    // ~95% of the gap is closed after `lag` seconds.
    let mut scrub = ScrubSmoother::new(1.2);
    scrub.set_target(1.0);
    let value = scrub.update(1.2);
    assert!(approx(value, 1.0 - (-3.0f32).exp()));
}

#[test]
fn scrub_settles_exactly() {
    let mut scrub = ScrubSmoother::new(1.2);
    scrub.set_target(0.6);
    for _ in 0..600 {
        scrub.update(FRAME);
    }
    assert_eq!(scrub.value(), 0.6);
    assert!(scrub.is_settled());
}

#[test]
fn scrub_retargets_mid_flight() {
    let mut scrub = ScrubSmoother::new(1.2);
    scrub.set_target(1.0);
    for _ in 0..30 {
        scrub.update(FRAME);
    }
    let peak = scrub.value();
    assert!(peak > 0.0 && peak < 1.0);

    scrub.set_target(0.0);
    let next = scrub.update(FRAME);
    assert!(next < peak, "reversal must take effect on the next frame");
}

#[test]
fn scrub_clamps_target_and_snaps() {
    let mut scrub = ScrubSmoother::new(1.2);
    scrub.set_target(4.0);
    assert_eq!(scrub.target(), 1.0);

    scrub.snap(0.3);
    assert_eq!(scrub.value(), 0.3);
    assert_eq!(scrub.update(FRAME), 0.3);
}

#[test]
fn zero_lag_follows_immediately() {
    let mut scrub = ScrubSmoother::new(0.0);
    scrub.set_target(0.42);
    assert_eq!(scrub.update(FRAME), 0.42);
}

// ============================================================================
// TiltRig
// ============================================================================

#[test]
fn disarmed_tilt_ignores_the_pointer() {
    let mut tilt = TiltRig::default();
    for _ in 0..120 {
        tilt.update(Vec2::ONE, FRAME);
    }
    assert_eq!(tilt.rotation(), Vec2::ZERO);
    assert_eq!(tilt.target(Vec2::ONE), Vec2::ZERO);
}

#[test]
fn armed_tilt_converges_to_the_pointer() {
    let mut tilt = TiltRig::default();
    tilt.set_armed(true);
    assert!(tilt.is_armed());

    let first = tilt.update(Vec2::new(1.0, 1.0), FRAME);
    // 5% of the gap per 60 fps frame.
    assert!(vec2_approx(first, Vec2::new(0.005, 0.015), 1e-5));

    for _ in 0..600 {
        tilt.update(Vec2::new(1.0, 1.0), FRAME);
    }
    assert!(vec2_approx(tilt.rotation(), Vec2::new(0.1, 0.3), 1e-4));
}

#[test]
fn tilt_eases_back_when_disarmed() {
    let mut tilt = TiltRig::default();
    tilt.set_armed(true);
    for _ in 0..600 {
        tilt.update(Vec2::new(-1.0, 0.5), FRAME);
    }
    assert!(vec2_approx(tilt.rotation(), Vec2::new(0.05, -0.3), 1e-4));

    tilt.set_armed(false);
    for _ in 0..600 {
        tilt.update(Vec2::new(-1.0, 0.5), FRAME);
    }
    assert!(vec2_approx(tilt.rotation(), Vec2::ZERO, 1e-4));
}

#[test]
fn tilt_is_frame_rate_independent() {
    let pointer = Vec2::new(0.3, -0.8);

    let mut at_60 = TiltRig::default();
    at_60.set_armed(true);
    at_60.update(pointer, FRAME);
    at_60.update(pointer, FRAME);

    let mut at_30 = TiltRig::default();
    at_30.set_armed(true);
    at_30.update(pointer, 2.0 * FRAME);

    assert!(vec2_approx(at_60.rotation(), at_30.rotation(), 1e-6));
}

#[test]
fn tilt_damping_extremes() {
    let frozen = TiltSettings {
        damping_factor: 0.0,
        ..TiltSettings::default()
    };
    let mut tilt = TiltRig::new(frozen);
    tilt.set_armed(true);
    tilt.update(Vec2::ONE, FRAME);
    assert_eq!(tilt.rotation(), Vec2::ZERO);

    let instant = TiltSettings {
        damping_factor: 1.0,
        ..TiltSettings::default()
    };
    let mut tilt = TiltRig::new(instant);
    tilt.set_armed(true);
    tilt.update(Vec2::ONE, FRAME);
    assert!(vec2_approx(tilt.rotation(), Vec2::new(0.1, 0.3), EPSILON));
}
