//! Timeline Module
//!
//! Scroll progress in, [`PoseState`](crate::rig::PoseState) and
//! [`SceneParams`] out.
//!
//! - [`phase`]: phase and tween descriptors ([`Phase`], [`Tween`], [`Channel`])
//! - [`driver`]: [`ProgressDriver`], the pure evaluator over those descriptors
//! - [`reference`]: the four-phase hero timeline

pub mod driver;
pub mod phase;
pub mod reference;

pub use driver::{DriverSample, ProgressDriver, ProgressDriverBuilder, SceneParams};
pub use phase::{Channel, ChannelValue, Phase, PhaseKind, Span, Tween};
pub use reference::reference_driver;
