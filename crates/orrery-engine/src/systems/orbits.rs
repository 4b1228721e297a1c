// systems/orbits.rs
//
// Transform updater: turns clock phases into body transforms.
//
// Bodies move on fixed-radius circles in their parent's horizontal plane at
// a constant angular rate. Satellites compose with their parent's freshly
// updated world transform; registry order (parents first) makes a single
// forward pass sufficient for any hierarchy depth.

use glam::Vec3;

use crate::api::config::MotionConfig;
use crate::api::types::BodyId;
use crate::core::clock::{phase, wrap_phase, Motion, OrbitalState, SimulationClock};
use crate::core::registry::{BodyRegistry, RegisteredBody};
use crate::extensions::transform::LocalTransform;

/// Orbital and rotation phase of a body at `sim_time`.
pub fn orbital_state(entry: &RegisteredBody, sim_time: f64, motion: &MotionConfig) -> OrbitalState {
    let body = &entry.body;
    if body.is_central() {
        return OrbitalState {
            orbital_phase: None,
            rotation_phase: None,
        };
    }
    let orbit = if entry.is_satellite() { Motion::SatelliteOrbit } else { Motion::Orbit };
    OrbitalState {
        orbital_phase: body.orbital_period.map(|p| phase(sim_time, p, orbit, motion)),
        rotation_phase: body.rotation_period.map(|r| phase(sim_time, r, Motion::Spin, motion)),
    }
}

/// Recompute every non-central body's transforms at `sim_time`,
/// regardless of pause state.
pub fn apply_transforms(registry: &mut BodyRegistry, sim_time: f64, motion: &MotionConfig) {
    for index in 0..registry.len() {
        let id = BodyId(index as u32);
        let Some(entry) = registry.get_by_id(id) else { continue };
        if entry.body.is_central() {
            continue;
        }

        let state = orbital_state(entry, sim_time, motion);
        let local = LocalTransform {
            orbit_angle: state.orbital_phase.map(wrap_phase).unwrap_or(0.0),
            offset: Vec3::new(entry.body.orbital_radius, 0.0, 0.0),
            tilt: entry.local_transform().tilt,
            spin: state.rotation_phase.map(wrap_phase).unwrap_or(0.0),
        };
        let world = local.compose(&registry.parent_world(id));
        registry.set_transforms(id, local, world);
    }
}

/// Per-tick update. Skipped entirely while paused.
/// Returns whether transforms were written.
pub fn update_transforms(registry: &mut BodyRegistry, clock: &SimulationClock, motion: &MotionConfig) -> bool {
    if clock.is_paused() {
        return false;
    }
    apply_transforms(registry, clock.sim_time(), motion);
    true
}
