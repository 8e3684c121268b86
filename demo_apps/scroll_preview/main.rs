//! Scroll Preview
//!
//! Headless stand-in for the browser page: drives the engine through a
//! scripted scroll session at 60 fps and logs a summary line per sampled
//! frame. Run with `RUST_LOG=info` (or `trace` to see phase changes).
//!
//! Usage:
//! - `scroll_preview` uses the reference configuration
//! - `scroll_preview path/to/config.json` loads an `EngineConfig` first
//!
//! Session:
//! 1. Scroll down through the whole region over six seconds
//! 2. Sweep the pointer across the viewport
//! 3. Reverse halfway and scroll back to the top

use glam::Vec3;
use mace_orbit::{Engine, EngineConfig, FrameOutput};

const FRAME_DT: f32 = 1.0 / 60.0;
const LOG_EVERY: u64 = 30;

fn log_frame(frame: &FrameOutput) {
    let factors = frame.resolved.factors;
    let first_sphere = frame
        .world
        .first()
        .map_or(Vec3::ZERO, mace_orbit::scene::BodyWorld::sphere_center);

    log::info!(
        "#{:04} t={:5.2}s scroll={:.3} smooth={:.3} {:<11} orbit={:.3} rod={:.3} sphere={:.3} cam_z={:5.2} roll={:+.3} glow={:.2} tilt=({:+.3},{:+.3}) tip0=({:+.2},{:+.2},{:+.2})",
        frame.frame,
        frame.time,
        frame.target_progress,
        frame.progress,
        frame.phase.name(),
        factors.orbit_distance,
        factors.rod_scale,
        factors.sphere_scale,
        frame.camera.position_z,
        frame.camera.roll,
        frame.scene.emissive_intensity,
        frame.tilt.x,
        frame.tilt.y,
        first_sphere.x,
        first_sphere.y,
        first_sphere.z,
    );
}

fn run_segment(engine: &mut Engine, from: f32, to: f32, seconds: f32, pointer: impl Fn(f32) -> (f32, f32)) {
    let frames = (seconds / FRAME_DT).round().max(1.0) as u32;
    let region = *engine.scroll_region();

    for i in 0..=frames {
        let t = i as f32 / frames as f32;
        let progress = from + (to - from) * t;
        engine.on_scroll(region.offset_at(progress));

        let (x, y) = pointer(t);
        engine.on_pointer_move(x, y);

        let frame = engine.update(FRAME_DT);
        if frame.frame % LOG_EVERY == 0 {
            log_frame(&frame);
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::load(&path)?,
        None => EngineConfig::default(),
    };

    let mut engine = Engine::new(&config)?;
    engine.on_resize(1280.0, 720.0, 2.0);
    let viewport = engine.input.viewport;
    let center = (viewport.width / 2.0, viewport.height / 2.0);

    log::info!("Scrolling down");
    run_segment(&mut engine, 0.0, 1.0, 6.0, |_| center);

    log::info!("Sweeping pointer at the bottom of the page");
    run_segment(&mut engine, 1.0, 1.0, 2.0, |t| (viewport.width * t, viewport.height * (1.0 - t)));

    log::info!("Scrolling back up");
    run_segment(&mut engine, 1.0, 0.5, 1.5, |_| center);
    run_segment(&mut engine, 0.5, 0.0, 3.0, |_| center);

    // Let the scrub settle at the top before the final report.
    run_segment(&mut engine, 0.0, 0.0, 3.0, |_| center);

    let top = engine.evaluate(0.0).1;
    log::info!(
        "Back at rest: orbit {:.3}, rod {:.3}, settled progress {:.4}",
        top.factors.orbit_distance,
        top.factors.rod_scale,
        engine.progress()
    );

    Ok(())
}
