use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::errors::{MaceError, Result};

/// Euler angles in degrees, applied in XYZ order.
pub type EulerDegrees = Vec3;

/// Fixed geometry shared by every mace in the ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyGeometry {
    /// Distance from the ring center to a body at rest.
    pub orbit_distance: f32,
    /// Unscaled rod length; the sphere sits on its upper tip.
    pub rod_length: f32,
    pub rod_radius: f32,
    pub sphere_radius: f32,
}

impl Default for BodyGeometry {
    fn default() -> Self {
        Self {
            orbit_distance: 3.0,
            rod_length: 4.5,
            rod_radius: 0.275,
            sphere_radius: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RodPart {
    pub base_length: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpherePart {
    pub radius: f32,
}

/// One mace: a rod with a sphere on its tip, orbiting the ring center.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    pub index: usize,
    pub initial_orientation: Quat,
    pub target_orientation: Quat,
    pub base_orbit_distance: f32,
    pub rod: RodPart,
    pub sphere: SpherePart,
}

impl RigidBody {
    fn new(index: usize, from: EulerDegrees, to: EulerDegrees, geometry: &BodyGeometry) -> Self {
        Self {
            index,
            initial_orientation: quat_from_euler_degrees(from),
            target_orientation: quat_from_euler_degrees(to),
            base_orbit_distance: geometry.orbit_distance,
            rod: RodPart {
                base_length: geometry.rod_length,
                radius: geometry.rod_radius,
            },
            sphere: SpherePart {
                radius: geometry.sphere_radius,
            },
        }
    }
}

/// Immutable set of mace bodies, built once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBodyCatalog {
    bodies: Vec<RigidBody>,
    geometry: BodyGeometry,
}

/// Initial orientations of the reference ring.
pub const REFERENCE_INITIAL_EULER: [[f32; 3]; 8] = [
    [30.0, 0.0, 30.0],
    [30.0, 0.0, 30.0],
    [-30.0, 0.0, -30.0],
    [-30.0, 0.0, -30.0],
    [150.0, 0.0, 30.0],
    [150.0, 0.0, 30.0],
    [-150.0, 0.0, -30.0],
    [-150.0, 0.0, -30.0],
];

/// Orientations the reference ring settles into once revealed.
pub const REFERENCE_TARGET_EULER: [[f32; 3]; 8] = [
    [45.0, 0.0, 15.0],
    [15.0, 0.0, 45.0],
    [-15.0, 0.0, -45.0],
    [-45.0, 0.0, -15.0],
    [135.0, 0.0, 15.0],
    [-15.0, 0.0, 135.0],
    [15.0, 0.0, -135.0],
    [-135.0, 0.0, -15.0],
];

/// Converts an XYZ Euler triple in degrees to a unit quaternion.
#[must_use]
pub fn quat_from_euler_degrees(euler: EulerDegrees) -> Quat {
    Quat::from_euler(
        EulerRot::XYZ,
        euler.x.to_radians(),
        euler.y.to_radians(),
        euler.z.to_radians(),
    )
    .normalize()
}

impl RigidBodyCatalog {
    /// Builds a catalog with the default [`BodyGeometry`].
    pub fn build(initial: &[EulerDegrees], target: &[EulerDegrees]) -> Result<Self> {
        Self::build_with_geometry(initial, target, BodyGeometry::default())
    }

    /// Builds one body per Euler pair. Both lists must have the same,
    /// non-zero length.
    pub fn build_with_geometry(
        initial: &[EulerDegrees],
        target: &[EulerDegrees],
        geometry: BodyGeometry,
    ) -> Result<Self> {
        if initial.len() != target.len() {
            return Err(MaceError::CatalogMismatch {
                initial: initial.len(),
                target: target.len(),
            });
        }
        if initial.is_empty() {
            return Err(MaceError::EmptyCatalog);
        }

        let bodies: Vec<RigidBody> = initial
            .iter()
            .zip(target)
            .enumerate()
            .map(|(index, (&from, &to))| RigidBody::new(index, from, to, &geometry))
            .collect();

        log::debug!(
            "Built mace catalog: {} bodies, orbit {}, rod length {}",
            bodies.len(),
            geometry.orbit_distance,
            geometry.rod_length
        );

        Ok(Self { bodies, geometry })
    }

    /// The eight-body ring used by the hero scene.
    #[must_use]
    pub fn reference() -> Self {
        Self::reference_with_geometry(BodyGeometry::default())
    }

    #[must_use]
    pub fn reference_with_geometry(geometry: BodyGeometry) -> Self {
        let bodies = REFERENCE_INITIAL_EULER
            .iter()
            .zip(REFERENCE_TARGET_EULER.iter())
            .enumerate()
            .map(|(index, (from, to))| {
                RigidBody::new(index, Vec3::from_array(*from), Vec3::from_array(*to), &geometry)
            })
            .collect();
        Self { bodies, geometry }
    }

    #[inline]
    #[must_use]
    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&RigidBody> {
        self.bodies.get(index)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn geometry(&self) -> &BodyGeometry {
        &self.geometry
    }
}
