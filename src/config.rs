//! Engine Configuration
//!
//! [`EngineConfig`] gathers every tunable of the engine. All fields default
//! to the reference hero scene, so a JSON file only needs to list what it
//! changes:
//!
//! ```json
//! {
//!   "scrub_lag": 0.8,
//!   "scroll_region": { "start": 0.0, "end": 6000.0 },
//!   "geometry": { "rod_length": 5.0 }
//! }
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::errors::{MaceError, Result};
use crate::input::{ScrollRegion, TiltSettings};
use crate::rig::catalog::{BodyGeometry, REFERENCE_INITIAL_EULER, REFERENCE_TARGET_EULER, RigidBodyCatalog};

/// Euler orientations (degrees, XYZ) of every body, as two parallel lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyOrientations {
    pub initial: Vec<Vec3>,
    pub target: Vec<Vec3>,
}

impl Default for BodyOrientations {
    fn default() -> Self {
        Self {
            initial: REFERENCE_INITIAL_EULER.iter().map(|e| Vec3::from_array(*e)).collect(),
            target: REFERENCE_TARGET_EULER.iter().map(|e| Vec3::from_array(*e)).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub geometry: BodyGeometry,
    pub bodies: BodyOrientations,
    /// Seconds the scrubbed progress takes to catch up with the scroll.
    pub scrub_lag: f32,
    pub scroll_region: ScrollRegion,
    pub tilt: TiltSettings,
    /// Vertical field of view, degrees.
    pub camera_fov: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            geometry: BodyGeometry::default(),
            bodies: BodyOrientations::default(),
            scrub_lag: 1.2,
            scroll_region: ScrollRegion::default(),
            tilt: TiltSettings::default(),
            camera_fov: 75.0,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::debug!("Loaded engine config from {}", path.display());
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks counts and ranges that would otherwise only surface as a
    /// broken scene.
    pub fn validate(&self) -> Result<()> {
        let BodyOrientations { initial, target } = &self.bodies;
        if initial.len() != target.len() {
            return Err(MaceError::CatalogMismatch {
                initial: initial.len(),
                target: target.len(),
            });
        }
        if initial.is_empty() {
            return Err(MaceError::EmptyCatalog);
        }

        let geometry = &self.geometry;
        let lengths = [
            ("geometry.orbit_distance", geometry.orbit_distance),
            ("geometry.rod_length", geometry.rod_length),
            ("geometry.rod_radius", geometry.rod_radius),
            ("geometry.sphere_radius", geometry.sphere_radius),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(MaceError::InvalidConfig(format!("{name} must be a non-negative number, got {value}")));
            }
        }

        if !self.scrub_lag.is_finite() || self.scrub_lag < 0.0 {
            return Err(MaceError::InvalidConfig(format!(
                "scrub_lag must be a non-negative number, got {}",
                self.scrub_lag
            )));
        }
        let region_length = self.scroll_region.length();
        if !region_length.is_finite() || region_length <= 0.0 {
            return Err(MaceError::InvalidConfig(format!(
                "scroll_region must end after it starts ([{}, {}])",
                self.scroll_region.start, self.scroll_region.end
            )));
        }
        if !(0.0..=1.0).contains(&self.tilt.damping_factor) {
            return Err(MaceError::InvalidConfig(format!(
                "tilt.damping_factor must lie in [0, 1], got {}",
                self.tilt.damping_factor
            )));
        }
        if !self.camera_fov.is_finite() || self.camera_fov <= 0.0 || self.camera_fov >= 180.0 {
            return Err(MaceError::InvalidConfig(format!(
                "camera_fov must lie in (0, 180), got {}",
                self.camera_fov
            )));
        }
        Ok(())
    }

    /// Builds the rigid-body catalog described by this config.
    pub fn build_catalog(&self) -> Result<RigidBodyCatalog> {
        RigidBodyCatalog::build_with_geometry(&self.bodies.initial, &self.bodies.target, self.geometry)
    }
}
