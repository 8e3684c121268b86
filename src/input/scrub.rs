use crate::animation::saturate;

/// Residual below which the smoothed value snaps onto its target.
const SETTLE_EPSILON: f32 = 1e-4;

/// Lagged progress that trails the raw scroll progress.
///
/// Each frame the smoothed value closes a frame-rate independent share of
/// the remaining gap, so it covers ~95% of any jump within `lag` seconds.
/// A new target takes effect on the next [`update`](Self::update), whatever
/// the value was travelling toward before.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubSmoother {
    /// Seconds to catch up; 0 follows the target exactly.
    pub lag: f32,
    value: f32,
    target: f32,
}

impl Default for ScrubSmoother {
    fn default() -> Self {
        Self::new(1.2)
    }
}

impl ScrubSmoother {
    #[must_use]
    pub fn new(lag: f32) -> Self {
        Self {
            lag: lag.max(0.0),
            value: 0.0,
            target: 0.0,
        }
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() <= f32::EPSILON
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = saturate(target);
    }

    /// Jumps straight to `value`, dropping any pending travel.
    pub fn snap(&mut self, value: f32) {
        self.target = saturate(value);
        self.value = self.target;
    }

    /// Advances by `dt` seconds and returns the smoothed value.
    pub fn update(&mut self, dt: f32) -> f32 {
        if self.lag <= 0.0 {
            self.value = self.target;
            return self.value;
        }

        let dt = dt.max(0.0);
        // 1 - e^-3 ≈ 0.95 of the gap is closed after `lag` seconds.
        let rate = 3.0 / self.lag;
        let blend = 1.0 - (-rate * dt).exp();
        self.value += (self.target - self.value) * blend;

        if (self.target - self.value).abs() < SETTLE_EPSILON {
            self.value = self.target;
        }
        self.value
    }
}
