use glam::{Affine3A, Quat, Vec2, Vec3};
use smallvec::SmallVec;

use crate::rig::resolver::ResolvedPose;
use crate::rig::transform::Transform;
use crate::scene::camera::CameraRig;
use crate::timeline::{PhaseKind, SceneParams};

/// World matrices of one mace and its two parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyWorld {
    pub body: Affine3A,
    pub rod: Affine3A,
    pub sphere: Affine3A,
}

impl BodyWorld {
    /// World-space center of the sphere.
    #[inline]
    #[must_use]
    pub fn sphere_center(&self) -> Vec3 {
        self.sphere.translation.into()
    }
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    pub frame: u64,
    /// Seconds since the engine started.
    pub time: f32,
    /// Smoothed progress the pose was sampled at.
    pub progress: f32,
    /// Raw progress of the current scroll offset.
    pub target_progress: f32,
    pub phase: PhaseKind,
    pub phase_progress: f32,
    pub resolved: ResolvedPose,
    pub scene: SceneParams,
    /// Cursor parallax (pitch, yaw), radians.
    pub tilt: Vec2,
    pub camera: CameraRig,
    pub particle_matrix: Affine3A,
    pub world: SmallVec<[BodyWorld; 8]>,
}

/// Composes world matrices through `tilt → group → body → part`.
#[must_use]
pub fn compose_world(resolved: &ResolvedPose, scene: &SceneParams, tilt: Quat) -> SmallVec<[BodyWorld; 8]> {
    let tilt_matrix = Affine3A::from_quat(tilt);
    let rotation = scene.group_rotation;
    let group_matrix = Transform::from_euler(rotation.x, rotation.y, rotation.z).compose(&tilt_matrix);

    resolved
        .bodies
        .iter()
        .map(|body| {
            let body_matrix = body.transform().compose(&group_matrix);
            BodyWorld {
                body: body_matrix,
                rod: body.rod.local.compose(&body_matrix),
                sphere: body.sphere.local.compose(&body_matrix),
            }
        })
        .collect()
}

/// Particle field: uniform scale under the tilt group.
#[must_use]
pub fn particle_matrix(scene: &SceneParams, tilt: Quat) -> Affine3A {
    Affine3A::from_quat(tilt) * Affine3A::from_scale(Vec3::splat(scene.particle_scale))
}
