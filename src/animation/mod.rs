//! Animation primitives shared by the timeline and the resolver.
//!
//! - [`values`]: the [`Interpolatable`] trait (scalar/vector lerp, quaternion slerp)
//! - [`easing`]: [`Ease`] curves used to reparametrize scroll fractions

pub mod easing;
pub mod values;

pub use easing::{Ease, EaseDirection};
pub use values::{Interpolatable, lerp, saturate};
