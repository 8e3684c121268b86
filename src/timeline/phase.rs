use glam::Vec3;

use crate::animation::{Ease, Interpolatable, saturate};
use crate::errors::{MaceError, Result};
use crate::rig::pose::PoseField;

/// The ordered phases of the scroll timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    /// Bodies slerp into their target orientation and pull into the joint radius.
    Assemble,
    /// Rods lengthen, the camera dollies in and the material starts to glow.
    ExpandGlow,
    /// Auxiliary-only phase: group twist, camera roll, particle swell.
    Vortex,
    /// Everything folds into the center while the camera pulls back.
    Collapse,
}

impl PhaseKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Assemble => "assemble",
            Self::ExpandGlow => "expand-glow",
            Self::Vortex => "vortex",
            Self::Collapse => "collapse",
        }
    }
}

impl std::fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Closed sub-range `[start, end]` of a normalized axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub start: f32,
    pub end: f32,
}

impl Span {
    pub const FULL: Self = Self { start: 0.0, end: 1.0 };

    #[must_use]
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> f32 {
        self.end - self.start
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, t: f32) -> bool {
        t >= self.start && t <= self.end
    }

    /// Linear position of `t` inside the span, clamped into `[0, 1]`.
    ///
    /// A zero-length span acts as a step at `start`.
    #[must_use]
    pub fn local(&self, t: f32) -> f32 {
        let len = self.len();
        if len <= f32::EPSILON {
            return if t >= self.start { 1.0 } else { 0.0 };
        }
        saturate((t - self.start) / len)
    }

    /// Inverse of [`Span::local`].
    #[must_use]
    pub fn at(&self, local: f32) -> f32 {
        self.start + self.len() * saturate(local)
    }

    fn is_well_formed(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.start >= 0.0
            && self.end <= 1.0
            && self.start <= self.end
    }
}

/// Animated parameter a tween writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Pose(PoseField),
    /// XYZ Euler rotation of the mace group, radians.
    GroupRotation,
    CameraZ,
    /// Camera rotation about its view axis, radians.
    CameraRoll,
    EmissiveIntensity,
    /// Uniform scale of the particle field.
    ParticleScale,
}

impl Channel {
    /// Whether this channel carries a [`ChannelValue::Euler`].
    #[must_use]
    pub fn is_euler(self) -> bool {
        matches!(self, Self::GroupRotation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChannelValue {
    Scalar(f32),
    Euler(Vec3),
}

impl ChannelValue {
    #[must_use]
    pub fn interpolate(self, to: Self, t: f32) -> Self {
        match (self, to) {
            (Self::Scalar(a), Self::Scalar(b)) => Self::Scalar(f32::interpolate_linear(a, b, t)),
            (Self::Euler(a), Self::Euler(b)) => Self::Euler(Vec3::interpolate_linear(a, b, t)),
            // Kind mismatches are rejected when the driver is built.
            (from, _) => from,
        }
    }
}

/// One eased transition of a channel toward `to`.
///
/// `span` is expressed in the owning phase's eased progress. The start value
/// is whatever the channel holds when the tween begins, so consecutive tweens
/// on a channel chain without gaps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub channel: Channel,
    pub span: Span,
    pub to: ChannelValue,
    pub ease: Ease,
}

impl Tween {
    #[must_use]
    pub fn scalar(channel: Channel, to: f32) -> Self {
        Self {
            channel,
            span: Span::FULL,
            to: ChannelValue::Scalar(to),
            ease: Ease::Linear,
        }
    }

    #[must_use]
    pub fn pose(field: PoseField, to: f32) -> Self {
        Self::scalar(Channel::Pose(field), to)
    }

    #[must_use]
    pub fn group_rotation(x: f32, y: f32, z: f32) -> Self {
        Self {
            channel: Channel::GroupRotation,
            span: Span::FULL,
            to: ChannelValue::Euler(Vec3::new(x, y, z)),
            ease: Ease::Linear,
        }
    }

    #[must_use]
    pub fn over(mut self, start: f32, end: f32) -> Self {
        self.span = Span::new(start, end);
        self
    }

    #[must_use]
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub(crate) fn validate(&self, phase: PhaseKind) -> Result<()> {
        if !self.span.is_well_formed() {
            return Err(MaceError::InvalidTween(format!(
                "{:?} in phase '{phase}' has span [{}, {}] outside [0, 1] or reversed",
                self.channel, self.span.start, self.span.end
            )));
        }
        if self.channel.is_euler() != matches!(self.to, ChannelValue::Euler(_)) {
            return Err(MaceError::InvalidTween(format!(
                "{:?} in phase '{phase}' targets a value of the wrong kind",
                self.channel
            )));
        }
        Ok(())
    }
}

/// A contiguous slice of total scroll progress and the tweens it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    pub kind: PhaseKind,
    pub range: Span,
    /// Reparametrizes the raw fraction inside `range` before tweens see it.
    pub ease: Ease,
    pub tweens: Vec<Tween>,
}

impl Phase {
    #[must_use]
    pub fn new(kind: PhaseKind, start: f32, end: f32) -> Self {
        Self {
            kind,
            range: Span::new(start, end),
            ease: Ease::Linear,
            tweens: Vec::new(),
        }
    }

    #[must_use]
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    #[must_use]
    pub fn tween(mut self, tween: Tween) -> Self {
        self.tweens.push(tween);
        self
    }

    /// Eased progress of this phase at total scroll `progress`.
    #[must_use]
    pub fn local_progress(&self, progress: f32) -> f32 {
        self.ease.apply(self.range.local(progress))
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !self.range.is_well_formed() {
            return Err(MaceError::InvalidPhase(format!(
                "'{}' has range [{}, {}] outside [0, 1] or reversed",
                self.kind, self.range.start, self.range.end
            )));
        }

        for (i, tween) in self.tweens.iter().enumerate() {
            tween.validate(self.kind)?;

            // Same-channel tweens must be ordered and disjoint.
            let earlier = self.tweens[..i]
                .iter()
                .filter(|other| other.channel == tween.channel);
            for other in earlier {
                if other.span.end > tween.span.start {
                    return Err(MaceError::InvalidTween(format!(
                        "{:?} in phase '{}' overlaps an earlier tween on the same channel",
                        tween.channel, self.kind
                    )));
                }
            }
        }
        Ok(())
    }
}
