use crate::animation::saturate;

/// The named scalar fields of [`PoseState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoseField {
    /// Orientation slerp from initial to target.
    Reveal,
    /// Orbit pull-in from the baseline distance toward the joint radius.
    Joint,
    /// Rod length multiplier.
    Scale,
    /// Final fold into the ring center; overrides every other field.
    Collapse,
}

impl PoseField {
    pub const ALL: [PoseField; 4] = [Self::Reveal, Self::Joint, Self::Scale, Self::Collapse];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Reveal => "reveal",
            Self::Joint => "joint",
            Self::Scale => "scale",
            Self::Collapse => "collapse",
        }
    }
}

/// Minimal progress vector every transform is derived from.
///
/// Fields are expected to lie in `[0, 1]`. [`PoseState::new`] and
/// [`PoseState::set`] clamp; the fields stay public so a presentation layer
/// can poke values directly, and the resolver clamps again on read.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PoseState {
    pub reveal: f32,
    pub joint: f32,
    pub scale: f32,
    pub collapse: f32,
}

impl PoseState {
    /// Everything at rest, the pose at the top of the page.
    pub const REST: Self = Self {
        reveal: 0.0,
        joint: 0.0,
        scale: 0.0,
        collapse: 0.0,
    };

    #[must_use]
    pub fn new(reveal: f32, joint: f32, scale: f32, collapse: f32) -> Self {
        Self {
            reveal,
            joint,
            scale,
            collapse,
        }
        .clamped()
    }

    /// Copy with every field forced into `[0, 1]` (NaN becomes 0).
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            reveal: saturate(self.reveal),
            joint: saturate(self.joint),
            scale: saturate(self.scale),
            collapse: saturate(self.collapse),
        }
    }

    #[must_use]
    pub fn get(&self, field: PoseField) -> f32 {
        match field {
            PoseField::Reveal => self.reveal,
            PoseField::Joint => self.joint,
            PoseField::Scale => self.scale,
            PoseField::Collapse => self.collapse,
        }
    }

    pub fn set(&mut self, field: PoseField, value: f32) {
        let value = saturate(value);
        match field {
            PoseField::Reveal => self.reveal = value,
            PoseField::Joint => self.joint = value,
            PoseField::Scale => self.scale = value,
            PoseField::Collapse => self.collapse = value,
        }
    }

    #[must_use]
    pub fn with(mut self, field: PoseField, value: f32) -> Self {
        self.set(field, value);
        self
    }
}
