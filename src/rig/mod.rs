//! Rig Module
//!
//! The rigid-body side of the pose engine:
//!
//! - [`catalog`]: the immutable ring of mace bodies and their orientations
//! - [`pose`]: [`PoseState`], the scalar vector the timeline writes
//! - [`resolver`]: [`PoseResolver`], the pure `pose → transforms` step
//! - [`transform`]: plain TRS values used to compose world matrices

pub mod catalog;
pub mod pose;
pub mod resolver;
pub mod transform;

pub use catalog::{BodyGeometry, EulerDegrees, RigidBody, RigidBodyCatalog, RodPart, SpherePart};
pub use pose::{PoseField, PoseState};
pub use resolver::{BodyPose, ComposedFactors, PoseResolver, ResolvedPose, RodPose, SpherePose, resolve};
pub use transform::Transform;
