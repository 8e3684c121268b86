use std::f32::consts::TAU;

use crate::animation::{Ease, EaseDirection};
use crate::errors::Result;
use crate::rig::pose::PoseField;
use crate::timeline::driver::{ProgressDriver, SceneParams};
use crate::timeline::phase::{Channel, Phase, PhaseKind, Tween};

/// Total-progress boundaries of the hero timeline.
pub const ASSEMBLE_END: f32 = 0.10;
pub const EXPAND_END: f32 = 0.30;
pub const VORTEX_END: f32 = 0.60;

/// Joint ease: a gentle back-out that crosses 1 once, past the middle of
/// its span, then settles from above.
///
/// Pose channels clamp at 1, so a single-crossing overshoot reads as a
/// non-decreasing ramp that holds at 1.
pub const JOINT_EASE: Ease = Ease::BackOut { overshoot: 0.7 };

/// Rod stretch ease, single-crossing like [`JOINT_EASE`].
pub const SCALE_EASE: Ease = Ease::back_out();

/// The four-phase hero timeline: assemble, expand & glow, vortex, collapse.
pub fn reference_driver() -> Result<ProgressDriver> {
    reference_driver_with(SceneParams::default())
}

pub fn reference_driver_with(initial_scene: SceneParams) -> Result<ProgressDriver> {
    ProgressDriver::builder()
        .initial_scene(initial_scene)
        .phase(
            Phase::new(PhaseKind::Assemble, 0.0, ASSEMBLE_END)
                .tween(Tween::group_rotation(0.0, -0.4, 0.23).over(0.0, 0.5).ease(Ease::power_out(2)))
                .tween(Tween::pose(PoseField::Reveal, 1.0).over(0.0, 0.6).ease(Ease::power_out(2)))
                .tween(Tween::pose(PoseField::Joint, 1.0).over(0.55, 0.95).ease(JOINT_EASE)),
        )
        .phase(
            Phase::new(PhaseKind::ExpandGlow, ASSEMBLE_END, EXPAND_END)
                .tween(Tween::pose(PoseField::Scale, 1.0).over(0.0, 0.7).ease(SCALE_EASE))
                .tween(Tween::group_rotation(-0.025, -0.6, 0.9).over(0.0, 0.5))
                .tween(Tween::group_rotation(0.5, 0.4, 1.4).over(0.5, 1.0))
                .tween(Tween::scalar(Channel::CameraZ, 11.0).over(0.5, 1.0))
                .tween(Tween::scalar(Channel::EmissiveIntensity, 0.6).over(0.2, 1.0)),
        )
        .phase(
            Phase::new(PhaseKind::Vortex, EXPAND_END, VORTEX_END)
                .ease(Ease::Sine(EaseDirection::InOut))
                .tween(Tween::group_rotation(0.9, 2.6, 2.2).ease(Ease::power_in_out(2)))
                .tween(Tween::scalar(Channel::CameraZ, 8.0))
                .tween(Tween::scalar(Channel::CameraRoll, 0.35))
                .tween(Tween::scalar(Channel::ParticleScale, 1.6)),
        )
        .phase(
            Phase::new(PhaseKind::Collapse, VORTEX_END, 1.0)
                .tween(Tween::pose(PoseField::Collapse, 1.0).over(0.1, 0.9).ease(Ease::power_in_out(3)))
                .tween(Tween::scalar(Channel::CameraZ, 24.0))
                .tween(Tween::scalar(Channel::CameraRoll, 0.0))
                .tween(Tween::scalar(Channel::EmissiveIntensity, 2.5).over(0.4, 1.0))
                .tween(Tween::group_rotation(0.0, TAU, 0.0).ease(Ease::power_out(1)))
                .tween(Tween::scalar(Channel::ParticleScale, 1.0).over(0.3, 1.0)),
        )
        .build()
}
