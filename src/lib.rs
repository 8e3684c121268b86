#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod config;
pub mod engine;
pub mod errors;
pub mod input;
pub mod rig;
pub mod scene;
pub mod timeline;

pub use animation::{Ease, EaseDirection};
pub use config::EngineConfig;
pub use engine::Engine;
pub use errors::{MaceError, Result};
pub use input::{Input, ScrollRegion, ScrubSmoother, TiltRig, Viewport};
pub use rig::{PoseField, PoseResolver, PoseState, ResolvedPose, RigidBodyCatalog, resolve};
pub use scene::{CameraRig, FrameOutput};
pub use timeline::{DriverSample, Phase, PhaseKind, ProgressDriver, SceneParams, Tween, reference_driver};
