// extensions/tween.rs
//
// Camera pose tween: animates camera position and look-at target together.
// Completely decoupled from the focus state machine: the owner decides when
// a tween starts and what happens after it completes.
//
// Usage:
//   let mut tween = CameraTween::new(from, to, Some(now_ms), 1500.0, Easing::CubicInOut);
//   tween.anchor(now_ms);              // no-op once started
//   let pose = tween.sample(now_ms);   // call once per frame
//   if tween.is_complete(now_ms) { ... }

use glam::Vec3;

use super::easing::{ease_vec3, Easing};

/// A camera position + look-at pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }
}

/// Time-based interpolation between two camera poses.
///
/// Driven by absolute timestamps rather than accumulated deltas so that
/// progress is exact at the end: once `now >= start + duration` the sampled
/// pose equals `to` bit-for-bit. A tween created without a start time holds
/// `from` until the first `anchor`.
#[derive(Debug, Clone)]
pub struct CameraTween {
    pub from: CameraPose,
    pub to: CameraPose,
    /// Timestamp the tween started at (milliseconds).
    pub start_ms: Option<f64>,
    /// Duration in milliseconds.
    pub duration_ms: f64,
    pub easing: Easing,
}

impl CameraTween {
    pub fn new(from: CameraPose, to: CameraPose, start_ms: Option<f64>, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
            easing,
        }
    }

    /// Start the clock at `now_ms` unless it is already running.
    /// Returns the start time in effect.
    pub fn anchor(&mut self, now_ms: f64) -> f64 {
        *self.start_ms.get_or_insert(now_ms)
    }

    /// Normalized progress [0, 1]. Zero until anchored.
    pub fn progress(&self, now_ms: f64) -> f32 {
        let Some(start_ms) = self.start_ms else { return 0.0 };
        if self.duration_ms <= 0.0 {
            1.0
        } else {
            ((now_ms - start_ms) / self.duration_ms).clamp(0.0, 1.0) as f32
        }
    }

    /// Whether the tween has reached its end pose.
    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Pose at `now_ms`.
    pub fn sample(&self, now_ms: f64) -> CameraPose {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            return self.to;
        }
        CameraPose {
            position: ease_vec3(self.from.position, self.to.position, t, self.easing),
            target: ease_vec3(self.from.target, self.to.target, t, self.easing),
        }
    }
}
