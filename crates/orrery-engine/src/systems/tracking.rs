use glam::Vec3;

use crate::api::config::FocusConfig;
use crate::extensions::easing::{lerp_vec3, Easing};
use crate::renderer::camera::Camera3D;
use crate::systems::focus::viewing_position;

/// Responsiveness ramp on entering tracking: 0 at hand-off, 1 once
/// `ramp_ms` has elapsed.
pub fn tracking_ease(elapsed_ms: f64, ramp_ms: f64, easing: Easing) -> f32 {
    let t = if ramp_ms <= 0.0 {
        1.0
    } else {
        (elapsed_ms / ramp_ms).clamp(0.0, 1.0) as f32
    };
    easing.apply(t)
}

/// One follow step toward a (possibly moving) target.
///
/// The look-at point decays toward `target_position` and the eye decays
/// toward the viewing pose rebuilt from the camera's *current* horizontal
/// direction, so a manual orbit between ticks redefines the azimuth being
/// followed instead of being undone. Only distance, elevation and the
/// target's translation are chased.
pub fn track(camera: &mut Camera3D, target_position: Vec3, optimal_distance: f32, ease_factor: f32, config: &FocusConfig) {
    let alpha = (config.follow_rate * ease_factor).clamp(0.0, 1.0);
    if alpha == 0.0 {
        return;
    }
    camera.target = lerp_vec3(camera.target, target_position, alpha);
    let desired = viewing_position(camera.position, target_position, optimal_distance, config.elevation_radians());
    camera.position = lerp_vec3(camera.position, desired, alpha);
}
