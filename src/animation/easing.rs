//! Easing curves for scroll-scrubbed tweens.
//!
//! Every curve maps a linear fraction in `[0, 1]` to an eased fraction and is
//! pinned to `f(0) = 0` and `f(1) = 1`, so a tween that starts or finishes on
//! a phase boundary never introduces a jump. Overshooting curves (`BackOut`,
//! `ElasticIn`, `ElasticOut`) may leave `[0, 1]` between the endpoints.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Which end of the curve carries the acceleration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EaseDirection {
    In,
    Out,
    InOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Ease {
    #[default]
    Linear,
    /// Polynomial ease of degree `power + 1` (`power` 1 = quadratic).
    Power { power: u8, direction: EaseDirection },
    Sine(EaseDirection),
    BackOut { overshoot: f32 },
    ElasticIn { amplitude: f32, period: f32 },
    ElasticOut { amplitude: f32, period: f32 },
}

impl Ease {
    pub const DEFAULT_OVERSHOOT: f32 = 1.701_58;
    pub const DEFAULT_AMPLITUDE: f32 = 1.0;
    pub const DEFAULT_PERIOD: f32 = 0.3;

    #[must_use]
    pub const fn power_in(power: u8) -> Self {
        Self::Power { power, direction: EaseDirection::In }
    }

    #[must_use]
    pub const fn power_out(power: u8) -> Self {
        Self::Power { power, direction: EaseDirection::Out }
    }

    #[must_use]
    pub const fn power_in_out(power: u8) -> Self {
        Self::Power { power, direction: EaseDirection::InOut }
    }

    #[must_use]
    pub const fn back_out() -> Self {
        Self::BackOut { overshoot: Self::DEFAULT_OVERSHOOT }
    }

    #[must_use]
    pub const fn elastic_out() -> Self {
        Self::ElasticOut {
            amplitude: Self::DEFAULT_AMPLITUDE,
            period: Self::DEFAULT_PERIOD,
        }
    }

    #[must_use]
    pub const fn elastic_in() -> Self {
        Self::ElasticIn {
            amplitude: Self::DEFAULT_AMPLITUDE,
            period: Self::DEFAULT_PERIOD,
        }
    }

    /// Applies the curve to `t`, clamping the input into `[0, 1]`.
    #[must_use]
    pub fn apply(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match *self {
            Self::Linear => t,
            Self::Power { power, direction } => {
                let exponent = i32::from(power) + 1;
                match direction {
                    EaseDirection::In => t.powi(exponent),
                    EaseDirection::Out => 1.0 - (1.0 - t).powi(exponent),
                    EaseDirection::InOut => {
                        if t < 0.5 {
                            (2.0 * t).powi(exponent) / 2.0
                        } else {
                            1.0 - (2.0 * (1.0 - t)).powi(exponent) / 2.0
                        }
                    }
                }
            }
            Self::Sine(direction) => match direction {
                EaseDirection::In => 1.0 - (t * FRAC_PI_2).cos(),
                EaseDirection::Out => (t * FRAC_PI_2).sin(),
                EaseDirection::InOut => -((PI * t).cos() - 1.0) / 2.0,
            },
            Self::BackOut { overshoot } => {
                let u = t - 1.0;
                1.0 + (overshoot + 1.0) * u * u * u + overshoot * u * u
            }
            Self::ElasticOut { amplitude, period } => elastic_out(t, amplitude, period),
            Self::ElasticIn { amplitude, period } => 1.0 - elastic_out(1.0 - t, amplitude, period),
        }
    }
}

fn elastic_out(t: f32, amplitude: f32, period: f32) -> f32 {
    // Amplitudes below 1 cannot reach the target, so they degrade to 1.
    let amplitude = amplitude.max(1.0);
    let period = period.max(f32::EPSILON);
    let phase = period / TAU * (1.0 / amplitude).asin();
    amplitude * 2.0_f32.powf(-10.0 * t) * ((t - phase) * TAU / period).sin() + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 8] = [
        Ease::Linear,
        Ease::power_in(2),
        Ease::power_out(2),
        Ease::power_in_out(3),
        Ease::Sine(EaseDirection::InOut),
        Ease::back_out(),
        Ease::elastic_in(),
        Ease::elastic_out(),
    ];

    #[test]
    fn endpoints_are_pinned() {
        for ease in ALL {
            assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
            assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
            assert_eq!(ease.apply(-3.0), 0.0, "{ease:?}");
            assert_eq!(ease.apply(7.0), 1.0, "{ease:?}");
        }
    }

    #[test]
    fn power_out_decelerates() {
        let ease = Ease::power_out(2);
        assert!(ease.apply(0.25) > 0.25);
        assert!((ease.apply(0.5) - 0.875).abs() < 1e-6);
    }

    #[test]
    fn elastic_out_overshoots() {
        let peak = (1..100)
            .map(|i| Ease::elastic_out().apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn back_out_crosses_one_once() {
        let ease = Ease::BackOut { overshoot: 0.7 };
        let crossings = (0..100)
            .filter(|&i| {
                let a = ease.apply(i as f32 / 100.0) - 1.0;
                let b = ease.apply((i + 1) as f32 / 100.0) - 1.0;
                a < 0.0 && b >= 0.0 || a > 0.0 && b < 0.0
            })
            .count();
        assert_eq!(crossings, 1);
        assert!(ease.apply(0.5) < 1.0);
    }
}
