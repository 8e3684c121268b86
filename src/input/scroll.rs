use serde::{Deserialize, Serialize};

use crate::animation::saturate;

/// Scroll trigger region in document pixels.
///
/// Progress is 0 while the scroll offset is at or above `start` and 1 once
/// it reaches `end`, linear in between.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollRegion {
    pub start: f32,
    pub end: f32,
}

impl Default for ScrollRegion {
    fn default() -> Self {
        Self::from_element(0.0, 10_000.0, 1.0)
    }
}

impl ScrollRegion {
    #[must_use]
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Region that starts when the element's top reaches the viewport top
    /// and ends `end_fraction` of the element's height later.
    #[must_use]
    pub fn from_element(top: f32, height: f32, end_fraction: f32) -> Self {
        Self {
            start: top,
            end: top + height.max(0.0) * end_fraction.max(0.0),
        }
    }

    #[inline]
    #[must_use]
    pub fn length(&self) -> f32 {
        self.end - self.start
    }

    /// Progress of `scroll_offset` through the region, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress(&self, scroll_offset: f32) -> f32 {
        let length = self.length();
        if length <= f32::EPSILON {
            return if scroll_offset >= self.start { 1.0 } else { 0.0 };
        }
        saturate((scroll_offset - self.start) / length)
    }

    /// Scroll offset that produces `progress`.
    #[must_use]
    pub fn offset_at(&self, progress: f32) -> f32 {
        self.start + self.length().max(0.0) * saturate(progress)
    }
}
