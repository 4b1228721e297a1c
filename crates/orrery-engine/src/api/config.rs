use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::api::error::OrreryError;
use crate::extensions::easing::Easing;

/// Configuration for the simulation, provided by the scenario.
/// Every section falls back to its defaults when omitted from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrreryConfig {
    pub clock: ClockConfig,
    pub motion: MotionConfig,
    pub focus: FocusConfig,
    pub camera: CameraConfig,
    /// Maximum number of UI events kept per frame (default: 32).
    pub max_events: usize,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            clock: ClockConfig::default(),
            motion: MotionConfig::default(),
            focus: FocusConfig::default(),
            camera: CameraConfig::default(),
            max_events: 32,
        }
    }
}

/// Simulation clock settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Speed multiplier at startup.
    pub default_speed: f64,
    /// Upper bound accepted by `set_speed` (the slider's 200 %).
    pub max_speed: f64,
    pub start_paused: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            default_speed: 1.0,
            max_speed: 2.0,
            start_paused: false,
        }
    }
}

/// Phase rate constants per motion type: phase = sim_time / period × rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Planet orbits around the central body.
    pub orbit_rate: f64,
    /// Self rotation.
    pub spin_rate: f64,
    /// Satellite orbits around their parent.
    pub satellite_orbit_rate: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            orbit_rate: 0.5,
            spin_rate: 2.0,
            satellite_orbit_rate: 2.0,
        }
    }
}

/// Focus approach and tracking settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    /// Duration of the approach animation.
    pub approach_ms: f64,
    /// Hold after the approach before tracking begins.
    pub settle_ms: f64,
    /// Window over which tracking responsiveness ramps up.
    pub tracking_ramp_ms: f64,
    /// Per-tick follow fraction at full responsiveness.
    pub follow_rate: f32,
    /// Camera elevation above the target's horizontal plane.
    pub elevation_deg: f32,
    pub easing: Easing,
    /// Manual-camera minimum distance once a body has been focused.
    pub focus_min_distance: f32,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            approach_ms: 1500.0,
            settle_ms: 2000.0,
            tracking_ramp_ms: 1000.0,
            follow_rate: 0.05,
            elevation_deg: 30.0,
            easing: Easing::CubicInOut,
            focus_min_distance: 2.0,
        }
    }
}

impl FocusConfig {
    pub fn elevation_radians(&self) -> f32 {
        self.elevation_deg.to_radians()
    }
}

/// Perspective camera and manual-control limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub aspect: f32,
    pub initial_position: [f32; 3],
    pub initial_target: [f32; 3],
    pub min_distance: f32,
    pub max_distance: f32,
    /// Polar angle limits measured from +Y (radians).
    pub min_polar: f32,
    pub max_polar: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: 45.0,
            near: 0.1,
            far: 2000.0,
            aspect: 16.0 / 9.0,
            initial_position: [200.0, 200.0, 400.0],
            initial_target: [0.0, 0.0, 0.0],
            min_distance: 50.0,
            max_distance: 1000.0,
            min_polar: PI * 0.1,
            max_polar: PI * 0.9,
        }
    }
}

impl OrreryConfig {
    /// Parse a config from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self, OrreryError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would push NaN or negative time into the simulation.
    pub fn validate(&self) -> Result<(), OrreryError> {
        non_negative("clock.default_speed", self.clock.default_speed)?;
        positive("clock.max_speed", self.clock.max_speed)?;
        if self.clock.default_speed > self.clock.max_speed {
            return Err(OrreryError::invalid("clock.default_speed", self.clock.default_speed));
        }

        positive("motion.orbit_rate", self.motion.orbit_rate)?;
        positive("motion.spin_rate", self.motion.spin_rate)?;
        positive("motion.satellite_orbit_rate", self.motion.satellite_orbit_rate)?;

        non_negative("focus.approach_ms", self.focus.approach_ms)?;
        non_negative("focus.settle_ms", self.focus.settle_ms)?;
        non_negative("focus.tracking_ramp_ms", self.focus.tracking_ramp_ms)?;
        let rate = self.focus.follow_rate as f64;
        if !rate.is_finite() || rate <= 0.0 || rate > 1.0 {
            return Err(OrreryError::invalid("focus.follow_rate", rate));
        }
        let elevation = self.focus.elevation_deg as f64;
        if !elevation.is_finite() || elevation.abs() >= 90.0 {
            return Err(OrreryError::invalid("focus.elevation_deg", elevation));
        }
        positive("focus.focus_min_distance", self.focus.focus_min_distance as f64)?;

        let cam = &self.camera;
        positive("camera.fov_deg", cam.fov_deg as f64)?;
        positive("camera.near", cam.near as f64)?;
        positive("camera.aspect", cam.aspect as f64)?;
        if cam.far <= cam.near {
            return Err(OrreryError::invalid("camera.far", cam.far as f64));
        }
        positive("camera.min_distance", cam.min_distance as f64)?;
        if cam.max_distance < cam.min_distance {
            return Err(OrreryError::invalid("camera.max_distance", cam.max_distance as f64));
        }
        if !(0.0..=PI).contains(&cam.min_polar) || !(cam.min_polar..=PI).contains(&cam.max_polar) {
            return Err(OrreryError::invalid("camera.max_polar", cam.max_polar as f64));
        }
        for (name, v) in [
            ("camera.initial_position", cam.initial_position),
            ("camera.initial_target", cam.initial_target),
        ] {
            if let Some(bad) = v.iter().find(|c| !c.is_finite()) {
                return Err(OrreryError::invalid(name, *bad as f64));
            }
        }
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> Result<(), OrreryError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(OrreryError::invalid(name, value))
    }
}

fn non_negative(name: &str, value: f64) -> Result<(), OrreryError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(OrreryError::invalid(name, value))
    }
}
