use bytemuck::{Pod, Zeroable};

/// Unique identifier for a registered body.
/// Ids are dense indices in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

impl BodyId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Externally visible phase of the focus state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPhase {
    /// No active session.
    #[default]
    Idle,
    /// Camera animating toward the viewing pose, or holding before tracking.
    Approaching,
    /// Camera following the moving target.
    Tracking,
}

impl FocusPhase {
    /// Numeric code used in UI events.
    pub fn code(self) -> f32 {
        match self {
            FocusPhase::Idle => 0.0,
            FocusPhase::Approaching => 1.0,
            FocusPhase::Tracking => 2.0,
        }
    }
}

/// Clock state: a = simulated seconds, b = speed multiplier, c = 1 if paused.
pub const EVENT_CLOCK: f32 = 1.0;
/// Focus state: a = phase code, b = body id (−1 when idle), c = optimal distance.
pub const EVENT_FOCUS: f32 = 2.0;
/// Emitted once when a selection is accepted: a = body id, b = generation.
pub const EVENT_SELECTED: f32 = 3.0;
/// Emitted once when the selection is cleared.
pub const EVENT_DESELECTED: f32 = 4.0;

/// An event communicated from Rust to the UI layer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct OrreryEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl OrreryEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: f32, a: f32, b: f32, c: f32) -> Self {
        Self { kind, a, b, c }
    }
}
