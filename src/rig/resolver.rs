//! Pose Resolver
//!
//! Turns a [`PoseState`] into concrete transforms for every body in a
//! [`RigidBodyCatalog`]. Resolution is a pure function of its inputs: nothing
//! is cached between calls and no delta is ever accumulated, so the output
//! for a given pose is the same no matter which poses came before it.
//!
//! # Composition order
//!
//! Each phase-scoped interpolation is folded into a single factor, in a fixed
//! order where `collapse` is always applied last:
//!
//! | Factor          | Chain                                              |
//! |-----------------|----------------------------------------------------|
//! | orbit distance  | `base → joint radius` by `joint`, then `→ 0` by `collapse` |
//! | rod scale       | `1 → max` by `scale`, then `→ 0` by `collapse`     |
//! | sphere scale    | `1 → collapsed` by `collapse`                      |
//!
//! With `collapse = 1` every body therefore lands on the origin with a
//! zero-length rod, whatever `joint` and `scale` are doing.

use glam::{Quat, Vec3};
use smallvec::SmallVec;

use crate::animation::{Interpolatable, lerp};
use crate::rig::catalog::{RigidBody, RigidBodyCatalog};
use crate::rig::pose::PoseState;
use crate::rig::transform::Transform;

/// Body-local axis the rod runs along and the orbit offset points toward.
pub const LOCAL_UP: Vec3 = Vec3::Y;

/// Scalars shared by every body for one pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComposedFactors {
    pub orbit_distance: f32,
    pub rod_scale: f32,
    pub sphere_scale: f32,
}

/// Resolved rod sub-part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RodPose {
    pub length_scale: f32,
    /// Local transform under the body: `(1, length_scale, 1)` scale.
    pub local: Transform,
}

/// Resolved sphere sub-part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpherePose {
    /// Offset along the body's local up axis, the tip of the scaled rod.
    pub offset: f32,
    pub scale: f32,
    pub local: Transform,
}

/// Resolved transform of one mace relative to the mace group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPose {
    pub index: usize,
    pub orientation: Quat,
    pub position: Vec3,
    pub rod: RodPose,
    pub sphere: SpherePose,
}

impl BodyPose {
    #[inline]
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform::new(self.position, self.orientation, Vec3::ONE)
    }
}

/// Output of one resolution pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPose {
    pub pose: PoseState,
    pub factors: ComposedFactors,
    pub bodies: SmallVec<[BodyPose; 8]>,
}

/// Interpolation anchors of the resolver.
///
/// The baseline orbit distance and rod length come from the catalog; these
/// are the values the phases pull toward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseResolver {
    /// Orbit distance once the joint phase completes.
    pub joint_orbit_distance: f32,
    /// Rod length multiplier once the scale phase completes.
    pub max_rod_scale: f32,
    /// Sphere scale once the collapse phase completes.
    pub collapsed_sphere_scale: f32,
}

impl Default for PoseResolver {
    fn default() -> Self {
        Self {
            joint_orbit_distance: 2.0,
            max_rod_scale: 1.8,
            collapsed_sphere_scale: 4.0,
        }
    }
}

impl PoseResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds the pose into the shared factors, `collapse` last.
    ///
    /// `base_orbit_distance` is the resting orbit radius of the bodies.
    #[must_use]
    pub fn factors(&self, pose: &PoseState, base_orbit_distance: f32) -> ComposedFactors {
        let pose = pose.clamped();
        let orbit_distance = self.orbit_distance(&pose, base_orbit_distance);

        let rod_scale = lerp(1.0, self.max_rod_scale, pose.scale);
        let rod_scale = lerp(rod_scale, 0.0, pose.collapse);

        let sphere_scale = lerp(1.0, self.collapsed_sphere_scale, pose.collapse);

        ComposedFactors {
            orbit_distance,
            rod_scale: rod_scale.max(0.0),
            sphere_scale: sphere_scale.max(0.0),
        }
    }

    /// Orbit radius for a body resting at `base`, `collapse` last.
    #[must_use]
    pub fn orbit_distance(&self, pose: &PoseState, base: f32) -> f32 {
        let pose = pose.clamped();
        let distance = lerp(base, self.joint_orbit_distance, pose.joint);
        lerp(distance, 0.0, pose.collapse).max(0.0)
    }

    /// Resolves every body of `catalog` for `pose`.
    #[must_use]
    pub fn resolve(&self, catalog: &RigidBodyCatalog, pose: &PoseState) -> ResolvedPose {
        let pose = pose.clamped();
        let factors = self.factors(&pose, catalog.geometry().orbit_distance);

        let bodies = catalog
            .bodies()
            .iter()
            .map(|body| self.resolve_body(body, &pose, &factors))
            .collect();

        ResolvedPose {
            pose,
            factors,
            bodies,
        }
    }

    fn resolve_body(&self, body: &RigidBody, pose: &PoseState, factors: &ComposedFactors) -> BodyPose {
        let orbit_distance = self.orbit_distance(pose, body.base_orbit_distance);

        let orientation = Quat::interpolate_linear(
            body.initial_orientation,
            body.target_orientation,
            pose.reveal,
        );
        let position = orientation * LOCAL_UP * orbit_distance;

        let rod_local = Transform {
            scale: Vec3::new(1.0, factors.rod_scale, 1.0),
            ..Transform::IDENTITY
        };

        let offset = body.rod.base_length * factors.rod_scale / 2.0;
        let sphere_local = Transform {
            position: LOCAL_UP * offset,
            scale: Vec3::splat(factors.sphere_scale),
            ..Transform::IDENTITY
        };

        BodyPose {
            index: body.index,
            orientation,
            position,
            rod: RodPose {
                length_scale: factors.rod_scale,
                local: rod_local,
            },
            sphere: SpherePose {
                offset,
                scale: factors.sphere_scale,
                local: sphere_local,
            },
        }
    }
}

/// Resolves with the default interpolation anchors.
#[must_use]
pub fn resolve(catalog: &RigidBodyCatalog, pose: &PoseState) -> ResolvedPose {
    PoseResolver::default().resolve(catalog, pose)
}
