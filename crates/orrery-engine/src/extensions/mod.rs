// extensions/mod.rs
//
// Math extensions used by the simulation systems.
// These are decoupled from the registry and camera; systems opt in by
// calling them.

pub mod easing;
pub mod transform;
pub mod tween;

pub use easing::{Easing, lerp_vec3, ease_vec3};
pub use transform::{LocalTransform, WorldTransform};
pub use tween::{CameraPose, CameraTween};
