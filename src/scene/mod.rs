//! Scene Output Module
//!
//! Presentation-facing values built once per frame:
//! - [`CameraRig`]: projection plus the timeline-driven dolly and roll
//! - [`FrameOutput`]: resolved pose, auxiliary parameters and world matrices
//! - [`compose_world`]: explicit `tilt → group → body → part` composition
//!
//! There is no live scene graph. The hierarchy exists only as the order in
//! which matrices are multiplied.

pub mod camera;
pub mod frame;

pub use camera::CameraRig;
pub use frame::{BodyWorld, FrameOutput, compose_world, particle_matrix};
