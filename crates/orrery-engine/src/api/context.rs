use crate::api::config::OrreryConfig;
use crate::api::error::OrreryError;
use crate::api::types::{BodyId, FocusPhase, OrreryEvent, EVENT_CLOCK, EVENT_DESELECTED, EVENT_FOCUS, EVENT_SELECTED};
use crate::components::body::Body;
use crate::components::info::BodyInfo;
use crate::core::clock::SimulationClock;
use crate::core::registry::BodyRegistry;
use crate::core::timers::TimerQueue;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::camera::Camera3D;
use crate::systems::focus::FocusController;
use crate::systems::orbits;

/// The contract every orrery scenario fulfills.
pub trait Scenario {
    /// Return simulation configuration. Called once before init.
    fn config(&self) -> OrreryConfig {
        OrreryConfig::default()
    }

    /// Register bodies and set up the initial view.
    fn init(&mut self, ctx: &mut SimulationContext) -> Result<(), OrreryError>;

    /// Called each frame before pending input is applied.
    fn update(&mut self, _ctx: &mut SimulationContext, _input: &InputQueue) {}

    /// Descriptive text for the info panel.
    fn body_info(&self, _name: &str) -> Option<BodyInfo> {
        None
    }
}

/// All mutable simulation state, passed explicitly to every system.
pub struct SimulationContext {
    pub config: OrreryConfig,
    pub clock: SimulationClock,
    pub registry: BodyRegistry,
    pub camera: Camera3D,
    pub focus: FocusController,
    pub timers: TimerQueue,
    /// UI events produced by the last tick.
    pub events: Vec<OrreryEvent>,
    last_frame_ms: Option<f64>,
    now_ms: f64,
    /// Set while a tick applies queued input.
    in_frame: bool,
    /// The user moved the camera this tick; focus leaves it alone.
    manual_camera: bool,
    running: bool,
}

impl SimulationContext {
    pub fn new(config: OrreryConfig) -> Result<Self, OrreryError> {
        config.validate()?;
        Ok(Self {
            clock: SimulationClock::new(&config.clock),
            registry: BodyRegistry::new(),
            camera: Camera3D::new(&config.camera),
            focus: FocusController::new(config.focus.clone()),
            timers: TimerQueue::new(),
            events: Vec::with_capacity(config.max_events),
            last_frame_ms: None,
            now_ms: 0.0,
            in_frame: false,
            manual_camera: false,
            running: true,
            config,
        })
    }

    /// Register a body tree and place it at the current simulated time.
    pub fn register(&mut self, body: Body) -> Result<BodyId, OrreryError> {
        let id = self.registry.register(body)?;
        orbits::apply_transforms(&mut self.registry, self.clock.sim_time(), &self.config.motion);
        Ok(id)
    }

    /// Focus the camera on `name`. Returns the new session's generation.
    ///
    /// Called between ticks, the approach starts on the next tick.
    pub fn select(&mut self, name: &str) -> Result<u64, OrreryError> {
        let start = self.in_frame.then_some(self.now_ms);
        let generation = self.focus.select(name, start, &self.registry, &mut self.camera)?;
        let id = self.registry.id_of(name).map_or(-1.0, |id| id.0 as f32);
        self.emit(OrreryEvent::new(EVENT_SELECTED, id, generation as f32, 0.0));
        Ok(generation)
    }

    pub fn deselect(&mut self) -> bool {
        let released = self.focus.deselect();
        if released {
            self.emit(OrreryEvent::new(EVENT_DESELECTED, 0.0, 0.0, 0.0));
        }
        released
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.clock.set_paused(paused);
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.clock.toggle_pause()
    }

    pub fn set_speed(&mut self, speed: f64) -> Result<(), OrreryError> {
        self.clock.set_speed(speed)
    }

    /// Apply one user-control event. Rejected input is logged and dropped.
    pub fn apply_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Select { name } => {
                if let Err(err) = self.select(&name) {
                    log::debug!("select ignored: {err}");
                }
            }
            InputEvent::Deselect => {
                self.deselect();
            }
            InputEvent::SetPaused(paused) => self.set_paused(paused),
            InputEvent::TogglePause => {
                self.toggle_pause();
            }
            InputEvent::SetSpeed(speed) => {
                if let Err(err) = self.set_speed(speed) {
                    log::warn!("speed rejected: {err}");
                }
            }
            InputEvent::OrbitCamera { d_azimuth, d_polar } => {
                self.camera.orbit_by(d_azimuth, d_polar);
                self.manual_camera |= self.in_frame;
            }
            InputEvent::ZoomCamera { scale } => {
                self.camera.zoom_by(scale);
                self.manual_camera |= self.in_frame;
            }
            InputEvent::Resize { width, height } => self.camera.resize(width, height),
        }
    }

    /// One frame: input, clock, transforms, due timers, focus, events.
    ///
    /// `now_ms` is the frame timestamp. The first tick (and the first after
    /// `resume`) only establishes the baseline and advances nothing. A tick
    /// that carried manual camera input skips the focus step.
    pub fn tick(&mut self, now_ms: f64, input: &mut InputQueue) {
        if !self.running {
            return;
        }
        self.events.clear();
        self.now_ms = now_ms;

        self.in_frame = true;
        self.manual_camera = false;
        for event in input.drain() {
            self.apply_input(event);
        }
        self.in_frame = false;

        let dt_ms = self.last_frame_ms.map_or(0.0, |last| (now_ms - last).max(0.0));
        self.last_frame_ms = Some(now_ms);
        self.clock.advance(dt_ms / 1000.0);

        orbits::update_transforms(&mut self.registry, &self.clock, &self.config.motion);

        for deferred in self.timers.drain_due(now_ms) {
            self.focus.handle_deferred(&deferred, now_ms);
        }
        if !self.manual_camera {
            self.focus.update(now_ms, &self.registry, &mut self.camera, &mut self.timers);
        }

        self.emit_frame_events();
    }

    /// Stop ticking. State is kept; `resume` continues without a time jump.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn resume(&mut self) {
        if !self.running {
            self.running = true;
            self.last_frame_ms = None;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> FocusPhase {
        self.focus.phase()
    }

    /// Timestamp of the most recent tick.
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    fn emit(&mut self, event: OrreryEvent) {
        if self.events.len() < self.config.max_events {
            self.events.push(event);
        }
    }

    fn emit_frame_events(&mut self) {
        let paused = if self.clock.is_paused() { 1.0 } else { 0.0 };
        self.emit(OrreryEvent::new(
            EVENT_CLOCK,
            self.clock.sim_time() as f32,
            self.clock.speed() as f32,
            paused,
        ));

        let focus = match self.focus.session() {
            Some(session) => OrreryEvent::new(
                EVENT_FOCUS,
                session.phase().code(),
                session.target.0 as f32,
                session.optimal_distance,
            ),
            None => OrreryEvent::new(EVENT_FOCUS, FocusPhase::Idle.code(), -1.0, 0.0),
        };
        self.emit(focus);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::body::BodyKind;
    use crate::systems::focus::viewing_position;

    fn context() -> SimulationContext {
        let mut ctx = SimulationContext::new(OrreryConfig::default()).unwrap();
        ctx.register(Body::star("sun", 20.0)).unwrap();
        ctx.register(
            Body::orbiting("earth", 1.0, 100.0, 1.0)
                .with_rotation(1.0)
                .with_satellite(Body::orbiting("moon", 0.27, 5.0, 0.27).with_kind(BodyKind::Satellite)),
        )
        .unwrap();
        ctx
    }

    fn run(ctx: &mut SimulationContext, input: &mut InputQueue, from: f64, to: f64) {
        let mut now = from;
        while now < to {
            now += 16.0;
            ctx.tick(now, input);
        }
    }

    fn count(ctx: &SimulationContext, kind: f32) -> usize {
        ctx.events.iter().filter(|e| e.kind == kind).count()
    }

    #[test]
    fn rejects_invalid_config() {
        let mut config = OrreryConfig::default();
        config.clock.default_speed = -1.0;
        assert!(matches!(
            SimulationContext::new(config),
            Err(OrreryError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn register_places_bodies_immediately() {
        let ctx = context();
        let earth = ctx.registry.get("earth").unwrap().world_position();
        assert!((earth.length() - 100.0).abs() < 1e-4);
        let moon = ctx.registry.get("moon").unwrap().world_position();
        assert!(((moon - earth).length() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn first_tick_only_sets_baseline() {
        let mut ctx = context();
        let mut input = InputQueue::new();
        ctx.tick(5000.0, &mut input);
        assert_eq!(ctx.clock.sim_time(), 0.0);
        ctx.tick(6000.0, &mut input);
        assert!((ctx.clock.sim_time() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn speed_change_applies_before_same_tick_advance() {
        let mut ctx = context();
        let mut input = InputQueue::new();
        ctx.tick(0.0, &mut input);
        input.push(InputEvent::SetSpeed(2.0));
        ctx.tick(1000.0, &mut input);
        assert!((ctx.clock.sim_time() - 2.0).abs() < 1e-12);

        input.push(InputEvent::SetSpeed(5.0));
        ctx.tick(2000.0, &mut input);
        assert_eq!(ctx.clock.speed(), 2.0);
        assert!((ctx.clock.sim_time() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn pause_freezes_bodies() {
        let mut ctx = context();
        let mut input = InputQueue::new();
        run(&mut ctx, &mut input, 0.0, 500.0);
        input.push(InputEvent::TogglePause);
        ctx.tick(516.0, &mut input);
        let frozen = *ctx.registry.get("moon").unwrap().world_transform();
        let t = ctx.clock.sim_time();

        run(&mut ctx, &mut input, 516.0, 2000.0);
        assert_eq!(ctx.clock.sim_time(), t);
        assert_eq!(*ctx.registry.get("moon").unwrap().world_transform(), frozen);
    }

    #[test]
    fn selection_runs_through_to_tracking() {
        let mut ctx = context();
        let mut input = InputQueue::new();
        ctx.tick(0.0, &mut input);

        input.push(InputEvent::Select { name: "earth".into() });
        ctx.tick(16.0, &mut input);
        assert_eq!(count(&ctx, EVENT_SELECTED), 1);
        assert_eq!(ctx.phase(), FocusPhase::Approaching);
        assert_eq!(ctx.camera.min_distance, 2.0);

        run(&mut ctx, &mut input, 16.0, 3000.0);
        assert_eq!(ctx.phase(), FocusPhase::Approaching);
        run(&mut ctx, &mut input, 3000.0, 3600.0);
        assert_eq!(ctx.phase(), FocusPhase::Tracking);

        let focus = ctx.events.iter().find(|e| e.kind == EVENT_FOCUS).unwrap();
        assert_eq!(focus.a, FocusPhase::Tracking.code());
        assert_eq!(focus.c, 4.0);

        // Earth keeps moving; the look-at point trails it by the follow lag
        // (about 15 units at 50 units/s) instead of being left behind.
        run(&mut ctx, &mut input, 3600.0, 12_000.0);
        let earth = ctx.registry.get("earth").unwrap().world_position();
        assert!(ctx.camera.target.distance(earth) < 20.0);
    }

    #[test]
    fn direct_select_starts_approach_on_next_tick() {
        let mut ctx = context();
        let mut input = InputQueue::new();
        let start = ctx.camera.pose();

        ctx.select("earth").unwrap();
        ctx.tick(5000.0, &mut input);
        let session = ctx.focus.session().unwrap();
        assert_eq!(session.started_at_ms, Some(5000.0));
        assert!(!session.approach_complete());
        assert_eq!(ctx.camera.pose(), start);

        ctx.tick(5750.0, &mut input);
        assert!(!ctx.focus.session().unwrap().approach_complete());
        assert_ne!(ctx.camera.pose(), start);
        ctx.tick(6500.0, &mut input);
        assert!(ctx.focus.session().unwrap().approach_complete());
    }

    #[test]
    fn select_after_resume_waits_for_next_tick() {
        let mut ctx = context();
        let mut input = InputQueue::new();
        run(&mut ctx, &mut input, 0.0, 1000.0);
        ctx.stop();
        ctx.resume();

        ctx.select("moon").unwrap();
        ctx.tick(90_000.0, &mut input);
        let session = ctx.focus.session().unwrap();
        assert_eq!(session.started_at_ms, Some(90_000.0));
        assert!(!session.approach_complete());
    }

    #[test]
    fn approach_destination_is_sampled_once() {
        let mut ctx = context();
        let mut input = InputQueue::new();
        ctx.tick(0.0, &mut input);

        // Selection happens before this tick's transform update.
        let p0 = ctx.registry.get("earth").unwrap().world_position();
        let cam0 = ctx.camera.position;
        input.push(InputEvent::Select { name: "earth".into() });
        ctx.tick(16.0, &mut input);

        run(&mut ctx, &mut input, 16.0, 1600.0);
        let session = ctx.focus.session().unwrap();
        assert!(session.approach_complete());
        assert_eq!(session.phase(), FocusPhase::Approaching);

        let expected = viewing_position(cam0, p0, 4.0, ctx.config.focus.elevation_radians());
        assert_eq!(ctx.camera.target, p0);
        assert_eq!(ctx.camera.position, expected);
        let earth = ctx.registry.get("earth").unwrap().world_position();
        assert!(earth.distance(p0) > 10.0);
    }

    #[test]
    fn manual_camera_tick_skips_tracking_write() {
        let mut ctx = context();
        let mut input = InputQueue::new();
        ctx.tick(0.0, &mut input);
        input.push(InputEvent::Select { name: "earth".into() });
        run(&mut ctx, &mut input, 0.0, 4000.0);
        assert_eq!(ctx.phase(), FocusPhase::Tracking);

        let mut expected = ctx.camera.clone();
        expected.orbit_by(0.3, 0.0);
        input.push(InputEvent::OrbitCamera { d_azimuth: 0.3, d_polar: 0.0 });
        ctx.tick(4016.0, &mut input);
        assert_eq!(ctx.camera.pose(), expected.pose());

        ctx.tick(4032.0, &mut input);
        assert_ne!(ctx.camera.pose(), expected.pose());
        assert_eq!(ctx.phase(), FocusPhase::Tracking);
    }

    #[test]
    fn unknown_selection_is_ignored() {
        let mut ctx = context();
        let mut input = InputQueue::new();
        input.push(InputEvent::Select { name: "vulcan".into() });
        ctx.tick(0.0, &mut input);
        assert_eq!(count(&ctx, EVENT_SELECTED), 0);
        assert_eq!(ctx.phase(), FocusPhase::Idle);
        assert_eq!(ctx.camera.min_distance, 50.0);
    }

    #[test]
    fn deselect_clears_session() {
        let mut ctx = context();
        let mut input = InputQueue::new();
        input.push(InputEvent::Select { name: "moon".into() });
        ctx.tick(0.0, &mut input);
        input.push(InputEvent::Deselect);
        ctx.tick(16.0, &mut input);
        assert_eq!(count(&ctx, EVENT_DESELECTED), 1);
        assert_eq!(ctx.phase(), FocusPhase::Idle);

        run(&mut ctx, &mut input, 16.0, 5000.0);
        assert_eq!(ctx.phase(), FocusPhase::Idle);
        assert!(ctx.timers.is_empty());
    }

    #[test]
    fn stop_and_resume_without_time_jump() {
        let mut ctx = context();
        let mut input = InputQueue::new();
        run(&mut ctx, &mut input, 0.0, 1000.0);
        let t = ctx.clock.sim_time();

        ctx.stop();
        ctx.tick(50_000.0, &mut input);
        assert_eq!(ctx.clock.sim_time(), t);

        ctx.resume();
        ctx.tick(60_000.0, &mut input);
        assert_eq!(ctx.clock.sim_time(), t);
        ctx.tick(60_500.0, &mut input);
        assert!((ctx.clock.sim_time() - (t + 0.5)).abs() < 1e-9);
    }

    #[test]
    fn camera_input_reaches_camera() {
        let mut ctx = context();
        let mut input = InputQueue::new();
        let distance = ctx.camera.distance();
        input.push(InputEvent::ZoomCamera { scale: 0.5 });
        input.push(InputEvent::Resize { width: 800.0, height: 400.0 });
        ctx.tick(0.0, &mut input);
        assert!((ctx.camera.distance() - distance * 0.5).abs() < 1e-2);
        assert_eq!(ctx.camera.aspect, 2.0);
    }

    #[test]
    fn events_are_capped() {
        let mut config = OrreryConfig::default();
        config.max_events = 3;
        let mut ctx = SimulationContext::new(config).unwrap();
        ctx.register(Body::star("sun", 20.0)).unwrap();
        let mut input = InputQueue::new();
        for _ in 0..5 {
            input.push(InputEvent::Select { name: "sun".into() });
        }
        ctx.tick(0.0, &mut input);
        assert_eq!(ctx.events.len(), 3);
        assert_eq!(ctx.focus.generation(), 5);
    }
}
