use glam::{Affine3A, Mat4, Quat, Vec3};

use crate::timeline::SceneParams;

/// Perspective camera looking down -Z at the ring.
///
/// Projection properties change only on resize; `position_z` and `roll` are
/// written from the timeline every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    /// Vertical field of view, radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,

    pub position_z: f32,
    /// Rotation about the view axis, radians.
    pub roll: f32,
}

impl CameraRig {
    /// `fov_degrees` is the vertical field of view in degrees.
    #[must_use]
    pub fn new_perspective(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov: fov_degrees.to_radians(),
            aspect,
            near,
            far,
            position_z: 18.0,
            roll: 0.0,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    pub fn apply_scene(&mut self, scene: &SceneParams) {
        self.position_z = scene.camera_z;
        self.roll = scene.camera_roll;
    }

    #[must_use]
    pub fn world_matrix(&self) -> Affine3A {
        Affine3A::from_rotation_translation(
            Quat::from_rotation_z(self.roll),
            Vec3::new(0.0, 0.0, self.position_z),
        )
    }

    /// View matrix, the inverse of the world matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from(self.world_matrix()).inverse()
    }

    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new_perspective(75.0, 16.0 / 9.0, 0.1, 1000.0)
    }
}
