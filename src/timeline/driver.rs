//! Progress Driver
//!
//! Maps total scroll progress to a [`PoseState`] plus the auxiliary
//! [`SceneParams`] through an explicit, ordered list of [`Phase`]
//! descriptors.
//!
//! # Evaluation
//!
//! [`ProgressDriver::evaluate`] walks every phase in order. For each phase it
//! takes the raw fraction of `progress` inside the phase range, runs it
//! through the phase ease, then hands that eased progress to each tween,
//! which re-normalizes it into its own span and applies its own ease. A tween
//! starts from whatever its channel holds at that point, so a channel's value
//! is the end of a chain that begins at the driver's initial values.
//!
//! Nothing is carried between calls. The sample for a given progress is the
//! same whether it is reached scrolling down, scrolling up, or by jumping
//! straight to it.

use glam::Vec3;

use crate::animation::saturate;
use crate::errors::{MaceError, Result};
use crate::rig::pose::PoseState;
use crate::timeline::phase::{Channel, ChannelValue, Phase, PhaseKind};

/// Auxiliary, non-rigid-body parameters animated by the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneParams {
    /// XYZ Euler rotation of the mace group, radians.
    pub group_rotation: Vec3,
    pub camera_z: f32,
    /// Camera rotation about its view axis, radians.
    pub camera_roll: f32,
    pub emissive_intensity: f32,
    pub particle_scale: f32,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            group_rotation: Vec3::new(0.0, -0.75, 0.0),
            camera_z: 18.0,
            camera_roll: 0.0,
            emissive_intensity: 0.0,
            particle_scale: 1.0,
        }
    }
}

/// Everything the timeline produces for one progress value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriverSample {
    /// Clamped total progress the sample was taken at.
    pub progress: f32,
    pub phase: PhaseKind,
    /// Eased progress inside `phase`.
    pub phase_progress: f32,
    pub pose: PoseState,
    pub scene: SceneParams,
}

/// Channel values while a sample is being built.
#[derive(Debug, Clone, Copy)]
struct ChannelState {
    pose: PoseState,
    scene: SceneParams,
}

impl ChannelState {
    fn get(&self, channel: Channel) -> ChannelValue {
        match channel {
            Channel::Pose(field) => ChannelValue::Scalar(self.pose.get(field)),
            Channel::GroupRotation => ChannelValue::Euler(self.scene.group_rotation),
            Channel::CameraZ => ChannelValue::Scalar(self.scene.camera_z),
            Channel::CameraRoll => ChannelValue::Scalar(self.scene.camera_roll),
            Channel::EmissiveIntensity => ChannelValue::Scalar(self.scene.emissive_intensity),
            Channel::ParticleScale => ChannelValue::Scalar(self.scene.particle_scale),
        }
    }

    fn set(&mut self, channel: Channel, value: ChannelValue) {
        match (channel, value) {
            // Pose fields clamp, so overshooting eases settle at the boundary.
            (Channel::Pose(field), ChannelValue::Scalar(v)) => self.pose.set(field, v),
            (Channel::GroupRotation, ChannelValue::Euler(v)) => self.scene.group_rotation = v,
            (Channel::CameraZ, ChannelValue::Scalar(v)) => self.scene.camera_z = v,
            (Channel::CameraRoll, ChannelValue::Scalar(v)) => self.scene.camera_roll = v,
            (Channel::EmissiveIntensity, ChannelValue::Scalar(v)) => {
                self.scene.emissive_intensity = v;
            }
            (Channel::ParticleScale, ChannelValue::Scalar(v)) => self.scene.particle_scale = v,
            _ => {}
        }
    }
}

/// Ordered phase timeline. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressDriver {
    phases: Vec<Phase>,
    initial_pose: PoseState,
    initial_scene: SceneParams,
}

impl ProgressDriver {
    #[must_use]
    pub fn builder() -> ProgressDriverBuilder {
        ProgressDriverBuilder::default()
    }

    #[inline]
    #[must_use]
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    #[must_use]
    pub fn phase(&self, kind: PhaseKind) -> Option<&Phase> {
        self.phases.iter().find(|phase| phase.kind == kind)
    }

    #[inline]
    #[must_use]
    pub fn initial_scene(&self) -> &SceneParams {
        &self.initial_scene
    }

    /// Phase owning `progress`: the last phase starting at or before it.
    ///
    /// Progress before the first phase belongs to the first phase.
    #[must_use]
    pub fn phase_at(&self, progress: f32) -> PhaseKind {
        let progress = saturate(progress);
        let index = self
            .phases
            .partition_point(|phase| phase.range.start <= progress)
            .saturating_sub(1);
        // The builder guarantees at least one phase.
        self.phases[index].kind
    }

    /// Samples the timeline at total scroll `progress`.
    ///
    /// Values outside `[0, 1]` clamp to the nearest end of the timeline.
    #[must_use]
    pub fn evaluate(&self, progress: f32) -> DriverSample {
        let progress = saturate(progress);
        let mut state = ChannelState {
            pose: self.initial_pose,
            scene: self.initial_scene,
        };

        for phase in &self.phases {
            let local = phase.local_progress(progress);
            for tween in &phase.tweens {
                let from = state.get(tween.channel);
                let t = tween.ease.apply(tween.span.local(local));
                state.set(tween.channel, from.interpolate(tween.to, t));
            }
        }

        let phase = self.phase_at(progress);
        let phase_progress = self
            .phase(phase)
            .map_or(0.0, |owner| owner.local_progress(progress));

        DriverSample {
            progress,
            phase,
            phase_progress,
            pose: state.pose,
            scene: state.scene,
        }
    }
}

/// Collects and validates phase descriptors.
#[derive(Debug, Clone, Default)]
pub struct ProgressDriverBuilder {
    phases: Vec<Phase>,
    initial_pose: PoseState,
    initial_scene: SceneParams,
}

impl ProgressDriverBuilder {
    #[must_use]
    pub fn phase(mut self, phase: Phase) -> Self {
        self.phases.push(phase);
        self
    }

    #[must_use]
    pub fn initial_pose(mut self, pose: PoseState) -> Self {
        self.initial_pose = pose.clamped();
        self
    }

    #[must_use]
    pub fn initial_scene(mut self, scene: SceneParams) -> Self {
        self.initial_scene = scene;
        self
    }

    /// Validates the descriptors: at least one phase, each well formed, and
    /// phase ranges ordered and non-overlapping.
    pub fn build(self) -> Result<ProgressDriver> {
        if self.phases.is_empty() {
            return Err(MaceError::InvalidPhase("timeline has no phases".into()));
        }

        for (i, phase) in self.phases.iter().enumerate() {
            phase.validate()?;
            if self.phases[..i].iter().any(|other| other.kind == phase.kind) {
                return Err(MaceError::InvalidPhase(format!("'{}' appears twice", phase.kind)));
            }
        }

        for pair in self.phases.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.range.start < prev.range.end {
                return Err(MaceError::InvalidPhase(format!(
                    "'{}' starts at {} before '{}' ends at {}",
                    next.kind, next.range.start, prev.kind, prev.range.end
                )));
            }
        }

        log::debug!(
            "Built progress driver: {} phases, {} tweens",
            self.phases.len(),
            self.phases.iter().map(|phase| phase.tweens.len()).sum::<usize>()
        );

        Ok(ProgressDriver {
            phases: self.phases,
            initial_pose: self.initial_pose,
            initial_scene: self.initial_scene,
        })
    }
}
