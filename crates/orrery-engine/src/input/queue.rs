/// User-control events the simulation understands.
/// Picking and widgets live outside; they resolve clicks to body names first.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Focus the camera on a body (already resolved by picking).
    Select { name: String },
    /// Close the info panel and stop tracking.
    Deselect,
    SetPaused(bool),
    TogglePause,
    /// Speed multiplier from the slider, 0.0–2.0.
    SetSpeed(f64),
    /// Manual orbit drag, in radians.
    OrbitCamera { d_azimuth: f32, d_polar: f32 },
    /// Manual zoom; < 1 moves closer.
    ZoomCamera { scale: f32 },
    /// Viewport resized.
    Resize { width: f32, height: f32 },
}

/// A queue of input events.
/// JS writes events into the queue; Rust drains them at the start of each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
