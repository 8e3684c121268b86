use glam::{Affine3A, EulerRot, Quat, Vec3};

/// Plain TRS value used for every node in the rig hierarchy.
///
/// Unlike a live scene-graph node this carries no cached matrices or dirty
/// flags: the resolver rebuilds each transform from scratch every frame and
/// composes world matrices explicitly with [`Transform::compose`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    #[must_use]
    pub fn new(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    #[must_use]
    pub fn from_rotation(rotation: Quat) -> Self {
        Self {
            rotation,
            ..Self::IDENTITY
        }
    }

    /// Rotation from XYZ Euler angles in radians.
    #[must_use]
    pub fn from_euler(x: f32, y: f32, z: f32) -> Self {
        Self::from_rotation(Quat::from_euler(EulerRot::XYZ, x, y, z))
    }

    #[inline]
    #[must_use]
    pub fn local_matrix(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// World matrix of this transform under `parent`.
    #[inline]
    #[must_use]
    pub fn compose(&self, parent: &Affine3A) -> Affine3A {
        *parent * self.local_matrix()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
