pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::config::{CameraConfig, ClockConfig, FocusConfig, MotionConfig, OrreryConfig};
pub use api::context::{Scenario, SimulationContext};
pub use api::error::OrreryError;
pub use api::types::{
    BodyId, FocusPhase, OrreryEvent, EVENT_CLOCK, EVENT_DESELECTED, EVENT_FOCUS, EVENT_SELECTED,
};
pub use components::body::{Body, BodyKind};
pub use components::info::BodyInfo;
pub use core::clock::{Motion, OrbitalState, SimulationClock};
pub use core::registry::{BodyRegistry, RegisteredBody};
pub use core::timers::{DeferredAction, TimerId, TimerQueue};
pub use renderer::camera::{Camera3D, CameraUniform};
pub use renderer::instance::{BodyInstance, InstanceBuffer};
pub use input::queue::{InputEvent, InputQueue};
pub use systems::focus::{FocusController, FocusSession};

// Extensions: math helpers shared by the systems
pub use extensions::{
    Easing, lerp_vec3, ease_vec3,
    LocalTransform, WorldTransform,
    CameraPose, CameraTween,
};
