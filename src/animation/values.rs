use glam::{Quat, Vec3};

/// Values a tween channel can carry.
///
/// Quaternions interpolate along the shortest arc; everything else blends
/// component-wise.
pub trait Interpolatable: Copy + Clone + Sized + PartialEq + std::fmt::Debug {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    #[inline]
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Interpolatable for Vec3 {
    #[inline]
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

impl Interpolatable for Quat {
    /// `glam`'s slerp flips the end quaternion onto the start's hemisphere,
    /// so this always walks the short arc and stays unit length.
    #[inline]
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.slerp(end, t)
    }
}

/// Scalar lerp, the building block of every composed factor.
#[inline]
#[must_use]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    f32::interpolate_linear(start, end, t)
}

/// Clamps a progress value into `[0, 1]`, mapping NaN to 0.
#[inline]
#[must_use]
pub fn saturate(t: f32) -> f32 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}
