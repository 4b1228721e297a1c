// systems/focus.rs
//
// Focus controller: the Idle → Approaching → Tracking state machine.
//
// A selection samples the target's world position once, tweens the camera
// to a framing pose, holds for a settle period, then hands off to the
// tracking loop. The hold is a deferred timer tagged with the session's
// generation; selecting again bumps the generation, so a timer left behind
// by an earlier session is dropped when it fires.

use glam::Vec3;

use crate::api::config::FocusConfig;
use crate::api::error::OrreryError;
use crate::api::types::{BodyId, FocusPhase};
use crate::core::registry::BodyRegistry;
use crate::core::timers::{Deferred, DeferredAction, TimerQueue};
use crate::extensions::tween::{CameraPose, CameraTween};
use crate::renderer::camera::Camera3D;
use crate::systems::tracking;

/// Camera position framing `target` from `distance` away at `elevation`
/// radians, keeping the camera's current horizontal bearing.
///
/// A camera directly above or below the target has no bearing; the
/// horizontal component then collapses to zero.
pub fn viewing_position(camera_position: Vec3, target: Vec3, distance: f32, elevation: f32) -> Vec3 {
    let horizontal = distance * elevation.cos();
    let vertical = distance * elevation.sin();
    let bearing = Vec3::new(camera_position.x - target.x, 0.0, camera_position.z - target.z).normalize_or_zero();
    target + bearing * horizontal + Vec3::Y * vertical
}

#[derive(Debug, Clone)]
enum Stage {
    /// Tween toward the framing pose.
    Approach(CameraTween),
    /// Approach done; waiting for the tracking timer. Camera is left alone.
    Settle,
    Track { started_at_ms: f64 },
}

/// The single active focus session.
#[derive(Debug, Clone)]
pub struct FocusSession {
    pub generation: u64,
    pub target: BodyId,
    pub name: String,
    pub optimal_distance: f32,
    /// When the approach started. `None` until the first frame after a
    /// selection made outside a frame.
    pub started_at_ms: Option<f64>,
    stage: Stage,
}

impl FocusSession {
    pub fn phase(&self) -> FocusPhase {
        match self.stage {
            Stage::Approach(_) | Stage::Settle => FocusPhase::Approaching,
            Stage::Track { .. } => FocusPhase::Tracking,
        }
    }

    /// When the session entered tracking, if it has.
    pub fn tracking_started_at(&self) -> Option<f64> {
        match self.stage {
            Stage::Track { started_at_ms } => Some(started_at_ms),
            _ => None,
        }
    }

    /// Whether the approach tween has finished.
    pub fn approach_complete(&self) -> bool {
        !matches!(self.stage, Stage::Approach(_))
    }
}

pub struct FocusController {
    config: FocusConfig,
    session: Option<FocusSession>,
    generation: u64,
}

impl FocusController {
    pub fn new(config: FocusConfig) -> Self {
        Self {
            config,
            session: None,
            generation: 0,
        }
    }

    pub fn config(&self) -> &FocusConfig {
        &self.config
    }

    /// Start a new session on `name`, replacing any current one.
    /// Unknown names leave every piece of state untouched.
    ///
    /// `now_ms` is the current frame timestamp. Pass `None` when selecting
    /// between frames; the approach then starts on the next `update`.
    pub fn select(
        &mut self,
        name: &str,
        now_ms: Option<f64>,
        registry: &BodyRegistry,
        camera: &mut Camera3D,
    ) -> Result<u64, OrreryError> {
        let entry = registry.get(name)?;
        let target = entry.world_position();
        let optimal_distance = entry.optimal_distance();

        let desired = viewing_position(camera.position, target, optimal_distance, self.config.elevation_radians());
        let tween = CameraTween::new(
            camera.pose(),
            CameraPose::new(desired, target),
            now_ms,
            self.config.approach_ms,
            self.config.easing,
        );

        self.generation += 1;
        camera.set_min_distance(self.config.focus_min_distance);
        self.session = Some(FocusSession {
            generation: self.generation,
            target: entry.id,
            name: entry.name().to_string(),
            optimal_distance,
            started_at_ms: now_ms,
            stage: Stage::Approach(tween),
        });
        log::debug!(
            "focus: approaching '{}' (generation {}, distance {})",
            name,
            self.generation,
            optimal_distance
        );
        Ok(self.generation)
    }

    /// Drop the active session. Returns false if there was none.
    pub fn deselect(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                log::debug!("focus: released '{}'", session.name);
                true
            }
            None => false,
        }
    }

    /// Apply a fired timer. Returns true if it belonged to the live session.
    pub fn handle_deferred(&mut self, deferred: &Deferred, now_ms: f64) -> bool {
        let Some(session) = self.session.as_mut() else {
            log::trace!("focus: timer {:?} fired with no session", deferred.id);
            return false;
        };
        if session.generation != deferred.generation {
            log::trace!(
                "focus: dropping stale timer (generation {} != {})",
                deferred.generation,
                session.generation
            );
            return false;
        }
        match deferred.action {
            DeferredAction::BeginTracking => {
                if !matches!(session.stage, Stage::Settle) {
                    return false;
                }
                session.stage = Stage::Track { started_at_ms: now_ms };
                log::debug!("focus: tracking '{}'", session.name);
                true
            }
        }
    }

    /// Per-tick step: advance the approach tween or run one tracking step.
    pub fn update(&mut self, now_ms: f64, registry: &BodyRegistry, camera: &mut Camera3D, timers: &mut TimerQueue) {
        let Some(session) = self.session.as_mut() else { return };

        let mut approach_done = false;
        match &mut session.stage {
            Stage::Approach(tween) => {
                session.started_at_ms = Some(tween.anchor(now_ms));
                camera.set_pose(tween.sample(now_ms));
                approach_done = tween.is_complete(now_ms);
            }
            Stage::Settle => {}
            Stage::Track { started_at_ms } => {
                let Some(entry) = registry.get_by_id(session.target) else { return };
                let ease = tracking::tracking_ease(now_ms - *started_at_ms, self.config.tracking_ramp_ms, self.config.easing);
                tracking::track(camera, entry.world_position(), session.optimal_distance, ease, &self.config);
            }
        }

        if approach_done {
            timers.schedule(now_ms + self.config.settle_ms, session.generation, DeferredAction::BeginTracking);
            session.stage = Stage::Settle;
        }
    }

    pub fn phase(&self) -> FocusPhase {
        self.session.as_ref().map_or(FocusPhase::Idle, FocusSession::phase)
    }

    pub fn session(&self) -> Option<&FocusSession> {
        self.session.as_ref()
    }

    /// Generation of the most recent selection (0 before the first).
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::{CameraConfig, MotionConfig};
    use crate::components::body::{Body, BodyKind};
    use crate::systems::orbits::apply_transforms;

    struct Fixture {
        registry: BodyRegistry,
        camera: Camera3D,
        timers: TimerQueue,
        focus: FocusController,
    }

    impl Fixture {
        fn new() -> Self {
            let mut registry = BodyRegistry::new();
            registry.register(Body::star("sun", 20.0)).unwrap();
            registry
                .register(
                    Body::orbiting("earth", 1.0, 100.0, 1.0)
                        .with_rotation(1.0)
                        .with_satellite(Body::orbiting("moon", 0.27, 5.0, 0.27).with_kind(BodyKind::Satellite)),
                )
                .unwrap();
            registry.register(Body::orbiting("mars", 0.532, 152.0, 1.88)).unwrap();
            apply_transforms(&mut registry, 0.0, &MotionConfig::default());
            Self {
                registry,
                camera: Camera3D::new(&CameraConfig::default()),
                timers: TimerQueue::new(),
                focus: FocusController::new(FocusConfig::default()),
            }
        }

        fn select(&mut self, name: &str, now: f64) -> Result<u64, OrreryError> {
            self.focus.select(name, Some(now), &self.registry, &mut self.camera)
        }

        /// Fire due timers, then step the controller.
        fn frame(&mut self, now: f64) -> usize {
            let mut fired = 0;
            for deferred in self.timers.drain_due(now) {
                if self.focus.handle_deferred(&deferred, now) {
                    fired += 1;
                }
            }
            self.focus.update(now, &self.registry, &mut self.camera, &mut self.timers);
            fired
        }
    }

    #[test]
    fn viewing_position_keeps_bearing() {
        let p = viewing_position(Vec3::new(0.0, 0.0, 100.0), Vec3::ZERO, 4.0, 30f32.to_radians());
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - 2.0).abs() < 1e-5);
        assert!((p.z - 4.0 * 30f32.to_radians().cos()).abs() < 1e-5);

        let offset = Vec3::new(10.0, 0.0, 0.0);
        let q = viewing_position(offset + Vec3::new(-3.0, 50.0, 0.0), offset, 8.0, 30f32.to_radians());
        assert!(q.x < offset.x);
        assert!(q.z.abs() < 1e-6);
    }

    #[test]
    fn viewing_position_directly_overhead() {
        let p = viewing_position(Vec3::new(0.0, 50.0, 0.0), Vec3::ZERO, 10.0, 30f32.to_radians());
        assert!(p.is_finite());
        assert!(p.x == 0.0 && p.z == 0.0);
        assert!((p.y - 5.0).abs() < 1e-5);
    }

    #[test]
    fn unknown_name_is_a_no_op() {
        let mut fx = Fixture::new();
        let before = fx.camera.pose();
        assert!(matches!(fx.select("pluto", 0.0), Err(OrreryError::NotFound(_))));
        assert_eq!(fx.focus.phase(), FocusPhase::Idle);
        assert_eq!(fx.focus.generation(), 0);
        assert_eq!(fx.camera.pose(), before);
        assert_eq!(fx.camera.min_distance, 50.0);
    }

    #[test]
    fn approach_lands_exactly_on_framing_pose() {
        let mut fx = Fixture::new();
        let earth = fx.registry.get("earth").unwrap().world_position();
        let start = fx.camera.pose();
        let expected = viewing_position(start.position, earth, 4.0, 30f32.to_radians());

        fx.select("earth", 1000.0).unwrap();
        assert_eq!(fx.focus.phase(), FocusPhase::Approaching);
        assert_eq!(fx.camera.min_distance, 2.0);

        fx.frame(1750.0);
        let mid = fx.camera.pose();
        assert!(mid.position.distance(start.position.lerp(expected, 0.5)) < 1e-3);
        assert!(!fx.focus.session().unwrap().approach_complete());

        fx.frame(2500.0);
        assert_eq!(fx.camera.position, expected);
        assert_eq!(fx.camera.target, earth);
        assert!(fx.focus.session().unwrap().approach_complete());
        assert_eq!(fx.focus.phase(), FocusPhase::Approaching);
        assert_eq!(fx.timers.len(), 1);
    }

    #[test]
    fn tracking_starts_after_settle_hold() {
        let mut fx = Fixture::new();
        fx.select("earth", 0.0).unwrap();
        fx.frame(1500.0);

        assert_eq!(fx.frame(3499.0), 0);
        assert_eq!(fx.focus.phase(), FocusPhase::Approaching);

        let pose = fx.camera.pose();
        assert_eq!(fx.frame(3500.0), 1);
        assert_eq!(fx.focus.phase(), FocusPhase::Tracking);
        assert_eq!(fx.focus.session().unwrap().tracking_started_at(), Some(3500.0));
        // Hand-off tick does not move the camera.
        assert_eq!(fx.camera.pose(), pose);
    }

    #[test]
    fn manual_moves_during_settle_carry_into_tracking() {
        let mut fx = Fixture::new();
        fx.select("earth", 0.0).unwrap();
        fx.frame(1500.0);
        fx.camera.orbit_by(0.8, 0.0);
        let moved = fx.camera.pose();
        fx.frame(2500.0);
        assert_eq!(fx.camera.pose(), moved);
        fx.frame(3500.0);
        assert_eq!(fx.camera.pose(), moved);
    }

    #[test]
    fn reselect_replaces_session_and_drops_stale_timer() {
        let mut fx = Fixture::new();
        let first = fx.select("earth", 0.0).unwrap();
        fx.frame(1500.0);
        assert_eq!(fx.timers.len(), 1);

        let second = fx.select("mars", 2600.0).unwrap();
        assert!(second > first);
        assert_eq!(fx.focus.session().unwrap().name, "mars");

        // Earth's timer comes due while mars is still approaching.
        assert_eq!(fx.frame(3500.0), 0);
        assert_eq!(fx.timers.len(), 0);
        let session = fx.focus.session().unwrap();
        assert_eq!(session.name, "mars");
        assert_eq!(session.generation, second);
        assert_eq!(session.phase(), FocusPhase::Approaching);
    }

    #[test]
    fn reselect_mid_approach_leaves_one_session() {
        let mut fx = Fixture::new();
        fx.select("earth", 0.0).unwrap();
        fx.frame(400.0);
        fx.select("mars", 500.0).unwrap();

        let mut fired = 0;
        let mut now = 500.0;
        while now < 10_000.0 {
            now += 16.0;
            fired += fx.frame(now);
        }
        assert_eq!(fired, 1);
        let session = fx.focus.session().unwrap();
        assert_eq!(session.name, "mars");
        assert_eq!(session.phase(), FocusPhase::Tracking);
    }

    #[test]
    fn deselect_returns_to_idle_and_ignores_pending_timer() {
        let mut fx = Fixture::new();
        fx.select("earth", 0.0).unwrap();
        fx.frame(1500.0);
        assert!(fx.focus.deselect());
        assert!(!fx.focus.deselect());

        let pose = fx.camera.pose();
        assert_eq!(fx.frame(4000.0), 0);
        assert_eq!(fx.focus.phase(), FocusPhase::Idle);
        assert_eq!(fx.camera.pose(), pose);
    }

    #[test]
    fn optimal_distance_is_stable_across_sessions() {
        let mut fx = Fixture::new();
        fx.select("earth", 0.0).unwrap();
        let first = fx.focus.session().unwrap().optimal_distance;
        fx.focus.deselect();
        fx.select("earth", 100.0).unwrap();
        let second = fx.focus.session().unwrap().optimal_distance;
        assert_eq!(first, 4.0);
        assert_eq!(first, second);
        assert!(fx.registry.get("earth").unwrap().has_cached_distance());

        fx.select("moon", 200.0).unwrap();
        assert_eq!(fx.focus.session().unwrap().optimal_distance, 5.0);
        fx.select("mars", 300.0).unwrap();
        assert_eq!(fx.focus.session().unwrap().optimal_distance, 8.0);
        fx.select("sun", 400.0).unwrap();
        assert_eq!(fx.focus.session().unwrap().optimal_distance, 120.0);
    }

    #[test]
    fn tracking_pulls_toward_framing_distance() {
        let mut fx = Fixture::new();
        fx.select("sun", 0.0).unwrap();
        let mut now = 0.0;
        while now < 20_000.0 {
            now += 16.0;
            fx.frame(now);
        }
        assert_eq!(fx.focus.phase(), FocusPhase::Tracking);
        assert!(fx.camera.target.length() < 1e-3);
        assert!((fx.camera.distance() - 120.0).abs() < 0.05);
    }
}
