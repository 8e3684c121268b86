//! Engine Core Module
//!
//! This module contains [`Engine`], the per-frame coordinator of the pose
//! engine. It owns no window, renderer or event loop: a presentation layer
//! forwards its scroll, pointer and resize events and calls
//! [`Engine::update`] once per display refresh.
//!
//! # Frame Pipeline
//!
//! 1. Scroll offset → [`ScrollRegion`] → raw progress
//! 2. Raw progress → [`ScrubSmoother`] → smoothed progress
//! 3. Smoothed progress → [`ProgressDriver`] → pose + scene parameters
//! 4. Pose → [`PoseResolver`] → per-body transforms
//! 5. Transforms + group rotation + tilt → world matrices
//!
//! Only steps 2 and the tilt carry state across frames, and neither feeds
//! back into the pose: every frame re-derives the whole rig from the current
//! smoothed progress.
//!
//! # Example
//!
//! ```rust,ignore
//! use mace_orbit::{Engine, EngineConfig};
//!
//! let mut engine = Engine::new(&EngineConfig::default())?;
//! engine.on_resize(1280.0, 720.0, 2.0);
//!
//! loop {
//!     engine.on_scroll(window_scroll_y);
//!     let frame = engine.update(dt);
//!     // ... draw frame.world ...
//! }
//! ```

use crate::config::EngineConfig;
use crate::errors::Result;
use crate::input::{Input, ScrollRegion, ScrubSmoother, TiltRig};
use crate::rig::{PoseResolver, ResolvedPose, RigidBodyCatalog};
use crate::scene::{CameraRig, FrameOutput, compose_world, particle_matrix};
use crate::timeline::{DriverSample, PhaseKind, ProgressDriver, reference_driver};

/// The per-frame coordinator of the pose engine.
///
/// # Lifecycle
///
/// 1. Create with [`Engine::new`] (reference timeline) or [`Engine::with_driver`]
/// 2. Forward events with [`Engine::on_scroll`], [`Engine::on_pointer_move`]
///    and [`Engine::on_resize`]
/// 3. Call [`Engine::update`] once per frame and draw its [`FrameOutput`]
pub struct Engine {
    pub input: Input,

    catalog: RigidBodyCatalog,
    resolver: PoseResolver,
    driver: ProgressDriver,
    region: ScrollRegion,
    scrub: ScrubSmoother,
    tilt: TiltRig,
    camera: CameraRig,

    time: f32,
    frame_count: u64,
    last_phase: Option<PhaseKind>,
}

impl Engine {
    /// Creates an engine running the reference hero timeline.
    pub fn new(config: &EngineConfig) -> Result<Self> {
        Self::with_driver(config, reference_driver()?)
    }

    /// Creates an engine running a custom timeline.
    pub fn with_driver(config: &EngineConfig, driver: ProgressDriver) -> Result<Self> {
        config.validate()?;
        let catalog = config.build_catalog()?;
        let input = Input::new();

        let mut camera = CameraRig::new_perspective(config.camera_fov, input.viewport.aspect(), 0.1, 1000.0);
        camera.apply_scene(driver.initial_scene());

        log::debug!(
            "Engine ready: {} bodies, {} phases, scrub lag {}s",
            catalog.len(),
            driver.phases().len(),
            config.scrub_lag
        );

        Ok(Self {
            input,
            catalog,
            resolver: PoseResolver::default(),
            driver,
            region: config.scroll_region,
            scrub: ScrubSmoother::new(config.scrub_lag),
            tilt: TiltRig::new(config.tilt),
            camera,
            time: 0.0,
            frame_count: 0,
            last_phase: None,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &RigidBodyCatalog {
        &self.catalog
    }

    #[inline]
    #[must_use]
    pub fn driver(&self) -> &ProgressDriver {
        &self.driver
    }

    #[inline]
    #[must_use]
    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    #[inline]
    #[must_use]
    pub fn scroll_region(&self) -> &ScrollRegion {
        &self.region
    }

    /// Total elapsed time in seconds since the engine started.
    #[inline]
    #[must_use]
    pub fn time(&self) -> f32 {
        self.time
    }

    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Smoothed progress as of the last update.
    #[inline]
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.scrub.value()
    }

    // ========================================================================
    // Events
    // ========================================================================

    pub fn on_scroll(&mut self, offset: f32) {
        self.input.handle_scroll(offset);
    }

    pub fn on_pointer_move(&mut self, client_x: f32, client_y: f32) {
        self.input.handle_cursor_move(client_x, client_y);
    }

    /// Updates the viewport and camera projection. Pose state is untouched.
    pub fn on_resize(&mut self, width: f32, height: f32, device_pixel_ratio: f32) {
        self.input.handle_resize(width, height, device_pixel_ratio);
        self.camera.set_aspect(self.input.viewport.aspect());
        log::trace!(
            "Resized to {width}x{height} (pixel ratio {})",
            self.input.viewport.pixel_ratio()
        );
    }

    /// Moves the smoothed progress straight onto the current scroll
    /// position, e.g. after a page load restores a scroll offset.
    pub fn snap_to_scroll(&mut self) {
        self.scrub.snap(self.region.progress(self.input.scroll_offset));
    }

    // ========================================================================
    // Frame
    // ========================================================================

    /// Pure pose lookup at `progress`, bypassing scrub and tilt.
    #[must_use]
    pub fn evaluate(&self, progress: f32) -> (DriverSample, ResolvedPose) {
        let sample = self.driver.evaluate(progress);
        let resolved = self.resolver.resolve(&self.catalog, &sample.pose);
        (sample, resolved)
    }

    /// Advances by `dt` seconds and builds the frame.
    pub fn update(&mut self, dt: f32) -> FrameOutput {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.time += dt;
        self.frame_count += 1;

        let target_progress = self.region.progress(self.input.scroll_offset);
        self.scrub.set_target(target_progress);
        let progress = self.scrub.update(dt);

        let (sample, resolved) = self.evaluate(progress);

        if self.last_phase != Some(sample.phase) {
            log::trace!(
                "Phase {} -> {} at progress {progress:.3}",
                self.last_phase.map_or("none", PhaseKind::name),
                sample.phase
            );
            self.last_phase = Some(sample.phase);
        }

        // Parallax follows the pointer once the opening phase has been left.
        let opening = self.driver.phases().first().map(|phase| phase.kind);
        self.tilt.set_armed(Some(sample.phase) != opening);
        let tilt = self.tilt.update(self.input.pointer(), dt);
        let tilt_quat = self.tilt.quat();

        self.camera.apply_scene(&sample.scene);
        let world = compose_world(&resolved, &sample.scene, tilt_quat);

        FrameOutput {
            frame: self.frame_count,
            time: self.time,
            progress,
            target_progress,
            phase: sample.phase,
            phase_progress: sample.phase_progress,
            resolved,
            scene: sample.scene,
            tilt,
            camera: self.camera,
            particle_matrix: particle_matrix(&sample.scene, tilt_quat),
            world,
        }
    }
}
