//! Input Module
//!
//! Plain per-frame input state fed by the presentation layer's event
//! listeners, plus the small time-based filters that sit between raw input
//! and the pose engine:
//!
//! - [`Input`]: latest scroll offset, cursor position and viewport
//! - [`ScrollRegion`]: document offsets of the scroll trigger, mapped to progress
//! - [`ScrubSmoother`]: lagged, retargetable progress following the scroll
//! - [`TiltRig`]: damped cursor parallax applied above the mace group
//!
//! Event handlers only overwrite fields. Everything is read once per frame by
//! [`Engine::update`](crate::engine::Engine::update).

pub mod scroll;
pub mod scrub;
pub mod tilt;

pub use scroll::ScrollRegion;
pub use scrub::ScrubSmoother;
pub use tilt::{TiltRig, TiltSettings};

use glam::Vec2;

/// Maximum device pixel ratio handed to the renderer.
pub const MAX_PIXEL_RATIO: f32 = 2.0;

/// Size of the drawing surface in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            device_pixel_ratio: 1.0,
        }
    }
}

impl Viewport {
    #[must_use]
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }

    /// Width over height; a degenerate viewport reports 1.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.width <= 0.0 || self.height <= 0.0 {
            1.0
        } else {
            self.width / self.height
        }
    }

    /// Device pixel ratio capped at [`MAX_PIXEL_RATIO`].
    #[must_use]
    pub fn pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio.clamp(1.0, MAX_PIXEL_RATIO)
    }

    /// Maps client coordinates (origin top-left, y down) into `[-1, 1]²`
    /// with +y up.
    #[must_use]
    pub fn normalize(&self, client: Vec2) -> Vec2 {
        let width = self.width.max(1.0);
        let height = self.height.max(1.0);
        let x = (client.x / width) * 2.0 - 1.0;
        let y = -(client.y / height) * 2.0 + 1.0;
        Vec2::new(x, y).clamp(Vec2::NEG_ONE, Vec2::ONE)
    }
}

/// Latest raw input, overwritten by event handlers.
#[derive(Debug, Clone, Default)]
pub struct Input {
    /// Document scroll offset in pixels.
    pub scroll_offset: f32,
    /// Cursor position in client pixels, `None` until the pointer first moves.
    pub cursor_position: Option<Vec2>,
    pub viewport: Viewport,
}

impl Input {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_scroll(&mut self, offset: f32) {
        if offset.is_finite() {
            self.scroll_offset = offset;
        }
    }

    pub fn handle_cursor_move(&mut self, x: f32, y: f32) {
        self.cursor_position = Some(Vec2::new(x, y));
    }

    pub fn handle_resize(&mut self, width: f32, height: f32, device_pixel_ratio: f32) {
        self.viewport = Viewport::new(width, height, device_pixel_ratio);
    }

    /// Cursor in `[-1, 1]²`, centered when the pointer has not moved yet.
    #[must_use]
    pub fn pointer(&self) -> Vec2 {
        self.cursor_position
            .map_or(Vec2::ZERO, |position| self.viewport.normalize(position))
    }
}
