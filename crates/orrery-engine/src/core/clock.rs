use crate::api::config::{ClockConfig, MotionConfig};
use crate::api::error::OrreryError;

/// Simulated time accumulator driven by real frame deltas.
///
/// Simulated time advances by `real_dt × speed` per tick and is frozen while
/// paused, so resuming continues from where it stopped instead of jumping.
/// Uses f64 throughout; phases are only narrowed to f32 when building
/// orientations.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    sim_time: f64,
    speed: f64,
    max_speed: f64,
    paused: bool,
}

impl SimulationClock {
    pub fn new(config: &ClockConfig) -> Self {
        Self {
            sim_time: 0.0,
            speed: config.default_speed,
            max_speed: config.max_speed,
            paused: config.start_paused,
        }
    }

    /// Advance by a real-time delta in seconds. Negative deltas are ignored.
    pub fn advance(&mut self, real_dt: f64) {
        if self.paused || !(real_dt > 0.0) {
            return;
        }
        self.sim_time += real_dt * self.speed;
    }

    /// Set the speed multiplier. Must lie in [0, max_speed].
    pub fn set_speed(&mut self, speed: f64) -> Result<(), OrreryError> {
        if !speed.is_finite() || speed < 0.0 || speed > self.max_speed {
            return Err(OrreryError::invalid("speed", speed));
        }
        self.speed = speed;
        Ok(())
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Flip pause state. Returns the new state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

/// Kind of periodic motion. Each has its own rate constant so that orbit,
/// spin and satellite speeds stay visually balanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Orbit,
    Spin,
    SatelliteOrbit,
}

impl Motion {
    pub fn rate(self, config: &MotionConfig) -> f64 {
        match self {
            Motion::Orbit => config.orbit_rate,
            Motion::Spin => config.spin_rate,
            Motion::SatelliteOrbit => config.satellite_orbit_rate,
        }
    }
}

/// Unbounded phase in radians: `(sim_time / period) × rate`.
/// Negative periods yield phases that run backwards (retrograde).
#[inline]
pub fn phase(sim_time: f64, period: f64, motion: Motion, config: &MotionConfig) -> f64 {
    (sim_time / period) * motion.rate(config)
}

/// Wrap an unbounded phase into [0, 2π) without a discontinuity in the
/// resulting orientation.
#[inline]
pub fn wrap_phase(phase: f64) -> f32 {
    phase.rem_euclid(std::f64::consts::TAU) as f32
}

/// Phases of one body at one instant. Derived every tick, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalState {
    /// `None` for the central star.
    pub orbital_phase: Option<f64>,
    /// `None` for bodies without self rotation.
    pub rotation_phase: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock() -> SimulationClock {
        SimulationClock::new(&ClockConfig::default())
    }

    #[test]
    fn advances_by_speed() {
        let mut c = clock();
        c.advance(1.0);
        assert_eq!(c.sim_time(), 1.0);
        c.set_speed(2.0).unwrap();
        c.advance(0.5);
        assert_eq!(c.sim_time(), 2.0);
    }

    #[test]
    fn paused_clock_is_frozen_and_resumes_without_jump() {
        let mut c = clock();
        c.advance(3.0);
        c.set_paused(true);
        for _ in 0..100 {
            c.advance(1.0);
        }
        assert_eq!(c.sim_time(), 3.0);
        c.set_paused(false);
        c.advance(0.25);
        assert_eq!(c.sim_time(), 3.25);
    }

    #[test]
    fn zero_speed_freezes_but_is_not_paused() {
        let mut c = clock();
        c.set_speed(0.0).unwrap();
        c.advance(10.0);
        assert_eq!(c.sim_time(), 0.0);
        assert!(!c.is_paused());
    }

    #[test]
    fn negative_delta_does_not_rewind() {
        let mut c = clock();
        c.advance(2.0);
        c.advance(-1.0);
        c.advance(f64::NAN);
        assert_eq!(c.sim_time(), 2.0);
    }

    #[test]
    fn rejects_invalid_speed() {
        let mut c = clock();
        assert!(c.set_speed(-0.5).is_err());
        assert!(c.set_speed(f64::INFINITY).is_err());
        assert!(c.set_speed(2.5).is_err());
        assert_eq!(c.speed(), 1.0);
        c.set_speed(2.0).unwrap();
    }

    #[test]
    fn toggle_pause_flips() {
        let mut c = clock();
        assert!(c.toggle_pause());
        assert!(!c.toggle_pause());
    }

    #[test]
    fn phase_uses_distinct_rates() {
        let m = MotionConfig::default();
        assert_eq!(phase(1.0, 1.0, Motion::Orbit, &m), 0.5);
        assert_eq!(phase(1.0, 1.0, Motion::Spin, &m), 2.0);
        assert_eq!(phase(0.27, 0.27, Motion::SatelliteOrbit, &m), 2.0);
        assert!(phase(1.0, -243.0, Motion::Spin, &m) < 0.0);
    }

    #[test]
    fn wrap_phase_stays_in_range() {
        let w = wrap_phase(-0.5);
        assert!(w >= 0.0 && w < std::f32::consts::TAU);
        assert!((wrap_phase(std::f64::consts::TAU + 1.0) - 1.0).abs() < 1e-6);
    }
}
