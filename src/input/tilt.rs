use glam::{EulerRot, Quat, Vec2};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TiltSettings {
    /// Radians of X tilt at the top/bottom viewport edge.
    pub pitch_range: f32,
    /// Radians of Y tilt at the left/right viewport edge.
    pub yaw_range: f32,
    /// Share of the remaining gap closed per frame at 60 fps.
    pub damping_factor: f32,
}

impl Default for TiltSettings {
    fn default() -> Self {
        Self {
            pitch_range: 0.1,
            yaw_range: 0.3,
            damping_factor: 0.05,
        }
    }
}

/// Cursor parallax applied to the group holding the maces.
///
/// The rig only follows the pointer while armed; disarmed, it eases back to
/// rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltRig {
    pub settings: TiltSettings,
    armed: bool,
    /// Current (pitch, yaw) in radians.
    rotation: Vec2,
}

impl TiltRig {
    #[must_use]
    pub fn new(settings: TiltSettings) -> Self {
        Self {
            settings,
            armed: false,
            rotation: Vec2::ZERO,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn set_armed(&mut self, armed: bool) {
        self.armed = armed;
    }

    /// Current (pitch, yaw) in radians.
    #[inline]
    #[must_use]
    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    #[must_use]
    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0)
    }

    /// Rotation the rig is heading for with the pointer at `pointer`.
    #[must_use]
    pub fn target(&self, pointer: Vec2) -> Vec2 {
        if !self.armed {
            return Vec2::ZERO;
        }
        let pointer = pointer.clamp(Vec2::NEG_ONE, Vec2::ONE);
        Vec2::new(pointer.y * self.settings.pitch_range, pointer.x * self.settings.yaw_range)
    }

    /// Moves toward the target for `pointer`, `dt` seconds after the last call.
    pub fn update(&mut self, pointer: Vec2, dt: f32) -> Vec2 {
        let target = self.target(pointer);
        let target_fps = 60.0;
        let retention = (1.0 - self.settings.damping_factor.clamp(0.0, 1.0)).powf(dt.max(0.0) * target_fps);
        self.rotation += (target - self.rotation) * (1.0 - retention);
        self.rotation
    }
}

impl Default for TiltRig {
    fn default() -> Self {
        Self::new(TiltSettings::default())
    }
}
