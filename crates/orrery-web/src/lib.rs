pub mod runner;

pub use runner::OrreryRunner;

pub use js_sys;
pub use wasm_bindgen;
pub use web_sys;

/// Generate all `#[wasm_bindgen]` exports for a scenario.
///
/// Generates:
/// - `thread_local!` storage for the OrreryRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (lifecycle, user controls, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use orrery_engine::*;
///
/// mod game;
/// use game::MyScenario;
///
/// orrery_web::export_orrery!(MyScenario, "my-scenario");
/// ```
///
/// # Arguments
///
/// - `$scenario_type`: a type implementing `orrery_engine::Scenario` with a `new()` constructor
/// - `$name`: a string literal used in log messages
#[macro_export]
macro_rules! export_orrery {
    ($scenario_type:ty, $name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::OrreryRunner<$scenario_type>>> = RefCell::new(None);
        }

        /// Run `f` on the live runner; `None` before `orrery_init` succeeded.
        fn with_runner<R>(f: impl FnOnce(&mut $crate::OrreryRunner<$scenario_type>) -> R) -> Option<R> {
            let result = RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f));
            if result.is_none() {
                $crate::web_sys::console::warn_1(&$crate::wasm_bindgen::JsValue::from_str(concat!(
                    $name,
                    ": not initialized, call orrery_init() first"
                )));
            }
            result
        }

        /// Returns false if the scenario failed to set up.
        #[wasm_bindgen]
        pub fn orrery_init() -> bool {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let mut runner = match $crate::OrreryRunner::new(<$scenario_type>::new()) {
                Ok(runner) => runner,
                Err(err) => {
                    log::error!("{}: invalid config: {}", $name, err);
                    return false;
                }
            };
            if let Err(err) = runner.init() {
                log::error!("{}: init failed: {}", $name, err);
                return false;
            }

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            log::info!("{}: initialized", $name);
            true
        }

        /// Advance one frame; `now_ms` is the requestAnimationFrame timestamp.
        #[wasm_bindgen]
        pub fn orrery_tick(now_ms: f64) {
            with_runner(|r| r.tick(now_ms));
        }

        #[wasm_bindgen]
        pub fn orrery_stop() {
            with_runner(|r| r.stop());
        }

        #[wasm_bindgen]
        pub fn orrery_resume() {
            with_runner(|r| r.resume());
        }

        // ---- User controls ----

        #[wasm_bindgen]
        pub fn orrery_select(name: &str) {
            let name = name.to_string();
            with_runner(|r| r.push_input(InputEvent::Select { name }));
        }

        #[wasm_bindgen]
        pub fn orrery_deselect() {
            with_runner(|r| r.push_input(InputEvent::Deselect));
        }

        #[wasm_bindgen]
        pub fn orrery_set_paused(paused: bool) {
            with_runner(|r| r.push_input(InputEvent::SetPaused(paused)));
        }

        #[wasm_bindgen]
        pub fn orrery_toggle_pause() {
            with_runner(|r| r.push_input(InputEvent::TogglePause));
        }

        /// Slider value as a multiplier (0.0–2.0).
        #[wasm_bindgen]
        pub fn orrery_set_speed(speed: f64) {
            with_runner(|r| r.push_input(InputEvent::SetSpeed(speed)));
        }

        #[wasm_bindgen]
        pub fn orrery_orbit_camera(d_azimuth: f32, d_polar: f32) {
            with_runner(|r| r.push_input(InputEvent::OrbitCamera { d_azimuth, d_polar }));
        }

        #[wasm_bindgen]
        pub fn orrery_zoom_camera(scale: f32) {
            with_runner(|r| r.push_input(InputEvent::ZoomCamera { scale }));
        }

        #[wasm_bindgen]
        pub fn orrery_resize(width: f32, height: f32) {
            with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_camera_ptr() -> *const f32 {
            with_runner(|r| r.camera_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_events_ptr() -> *const f32 {
            with_runner(|r| r.events_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_events_len() -> u32 {
            with_runner(|r| r.events_len()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events()).unwrap_or(0)
        }

        /// Info panel JSON for the focused body, or undefined.
        #[wasm_bindgen]
        pub fn get_selection_info() -> Option<String> {
            with_runner(|r| r.selection_info()).flatten()
        }

        #[wasm_bindgen]
        pub fn get_selected_name() -> Option<String> {
            with_runner(|r| r.selected_name().map(str::to_string)).flatten()
        }

        /// Body names in instance order, for labels and picking.
        #[wasm_bindgen]
        pub fn get_body_names() -> $crate::js_sys::Array {
            let names = $crate::js_sys::Array::new();
            for name in with_runner(|r| r.body_names()).unwrap_or_default() {
                names.push(&$crate::wasm_bindgen::JsValue::from_str(&name));
            }
            names
        }

        #[wasm_bindgen]
        pub fn get_focus_phase() -> u32 {
            with_runner(|r| r.phase().code() as u32).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_sim_time() -> f64 {
            with_runner(|r| r.sim_time()).unwrap_or(0.0)
        }

        #[wasm_bindgen]
        pub fn get_speed() -> f64 {
            with_runner(|r| r.speed()).unwrap_or(0.0)
        }

        #[wasm_bindgen]
        pub fn get_paused() -> bool {
            with_runner(|r| r.is_paused()).unwrap_or(false)
        }
    };
}
