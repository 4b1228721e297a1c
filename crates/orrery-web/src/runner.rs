use orrery_engine::{
    CameraUniform, FocusPhase, InputEvent, InputQueue, InstanceBuffer, OrreryError, OrreryEvent, Scenario,
    SimulationContext,
};

/// Generic scenario runner that wires up the frame loop.
///
/// Each concrete scenario (e.g., `solar-system`) creates a `thread_local!`
/// OrreryRunner and exports free functions via `#[wasm_bindgen]`, because
/// wasm-bindgen cannot export generic structs directly.
pub struct OrreryRunner<S: Scenario> {
    scenario: S,
    ctx: SimulationContext,
    input: InputQueue,
    instances: InstanceBuffer,
    camera_uniform: CameraUniform,
    initialized: bool,
}

impl<S: Scenario> OrreryRunner<S> {
    pub fn new(scenario: S) -> Result<Self, OrreryError> {
        let ctx = SimulationContext::new(scenario.config())?;
        let camera_uniform = ctx.camera.uniform();
        Ok(Self {
            scenario,
            ctx,
            input: InputQueue::new(),
            instances: InstanceBuffer::new(),
            camera_uniform,
            initialized: false,
        })
    }

    /// Initialize the scenario. Call once after construction.
    pub fn init(&mut self) -> Result<(), OrreryError> {
        self.scenario.init(&mut self.ctx)?;
        self.instances.rebuild(&self.ctx.registry);
        self.camera_uniform = self.ctx.camera.uniform();
        self.initialized = true;
        log::info!("orrery: {} bodies registered", self.ctx.registry.len());
        Ok(())
    }

    /// Push an input event into the queue. Applied at the start of the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame at timestamp `now_ms` and refresh the shared buffers.
    pub fn tick(&mut self, now_ms: f64) {
        if !self.initialized || !self.ctx.is_running() {
            return;
        }

        self.scenario.update(&mut self.ctx, &self.input);
        self.ctx.tick(now_ms, &mut self.input);

        self.instances.rebuild(&self.ctx.registry);
        self.camera_uniform = self.ctx.camera.uniform();
    }

    /// Stop the frame loop (teardown). Later ticks are ignored.
    pub fn stop(&mut self) {
        self.ctx.stop();
    }

    pub fn resume(&mut self) {
        self.ctx.resume();
    }

    pub fn context(&self) -> &SimulationContext {
        &self.ctx
    }

    // ---- Pointer accessors for JS reads ----

    /// `CameraUniform::FLOATS` floats: view-projection, eye, look-at.
    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera_uniform as *const CameraUniform as *const f32
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.instance_count()
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    /// Number of events (each `OrreryEvent::FLOATS` floats).
    pub fn events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn events(&self) -> &[OrreryEvent] {
        &self.ctx.events
    }

    // ---- UI state ----

    /// Info panel JSON for the focused body, if any.
    pub fn selection_info(&self) -> Option<String> {
        let session = self.ctx.focus.session()?;
        let info = self.scenario.body_info(&session.name)?;
        match info.to_json() {
            Ok(json) => Some(json),
            Err(err) => {
                log::error!("orrery: info for '{}' failed to serialize: {err}", session.name);
                None
            }
        }
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.ctx.focus.session().map(|s| s.name.as_str())
    }

    /// Registered body names in instance order.
    pub fn body_names(&self) -> Vec<String> {
        self.ctx.registry.names().map(str::to_string).collect()
    }

    pub fn phase(&self) -> FocusPhase {
        self.ctx.phase()
    }

    pub fn sim_time(&self) -> f64 {
        self.ctx.clock.sim_time()
    }

    pub fn speed(&self) -> f64 {
        self.ctx.clock.speed()
    }

    pub fn is_paused(&self) -> bool {
        self.ctx.clock.is_paused()
    }

    pub fn max_events(&self) -> u32 {
        self.ctx.config.max_events as u32
    }
}
