use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::api::config::CameraConfig;
use crate::extensions::tween::CameraPose;

/// Perspective camera orbiting a look-at target.
///
/// The focus controller writes `position`/`target` directly during an active
/// session; manual manipulation goes through `orbit_by`/`zoom_by`, which
/// move the camera on a sphere around the target like typical orbit
/// controls (azimuth about +Y, polar angle measured from +Y).
#[derive(Debug, Clone)]
pub struct Camera3D {
    pub position: Vec3,
    /// Look-at point; also the pivot for manual orbiting.
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar: f32,
    pub max_polar: f32,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    /// xyz = eye position, w = 1.
    pub position: [f32; 4],
    /// xyz = look-at target, w = 1.
    pub target: [f32; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 24;
}

impl Camera3D {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            position: Vec3::from_array(config.initial_position),
            target: Vec3::from_array(config.initial_target),
            fov_y: config.fov_deg.to_radians(),
            aspect: config.aspect,
            near: config.near,
            far: config.far,
            min_distance: config.min_distance,
            max_distance: config.max_distance,
            min_polar: config.min_polar,
            max_polar: config.max_polar,
        }
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose::new(self.position, self.target)
    }

    pub fn set_pose(&mut self, pose: CameraPose) {
        self.position = pose.position;
        self.target = pose.target;
    }

    /// Right-handed view matrix, +Y up.
    pub fn view_matrix(&self) -> Mat4 {
        if (self.position - self.target).length_squared() < f32::EPSILON {
            return Mat4::from_translation(-self.position);
        }
        // look_at_rh degenerates when looking straight along the up axis.
        let forward = (self.target - self.position).normalize();
        let up = if forward.cross(Vec3::Y).length_squared() < 1e-8 { Vec3::Z } else { Vec3::Y };
        Mat4::look_at_rh(self.position, self.target, up)
    }

    /// Perspective projection, Z in [0, 1].
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: (self.projection_matrix() * self.view_matrix()).to_cols_array_2d(),
            position: self.position.extend(1.0).to_array(),
            target: self.target.extend(1.0).to_array(),
        }
    }

    /// Update the aspect ratio on viewport resize.
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        if viewport_width > 0.0 && viewport_height > 0.0 {
            self.aspect = viewport_width / viewport_height;
        }
    }

    /// Distance from camera to target.
    pub fn distance(&self) -> f32 {
        (self.position - self.target).length()
    }

    /// Horizontal angle of the camera around the target (radians, about +Y).
    pub fn azimuth(&self) -> f32 {
        let offset = self.position - self.target;
        offset.x.atan2(offset.z)
    }

    /// Angle between +Y and the target→camera vector (radians).
    pub fn polar(&self) -> f32 {
        let offset = self.position - self.target;
        let r = offset.length();
        if r == 0.0 {
            0.0
        } else {
            (offset.y / r).clamp(-1.0, 1.0).acos()
        }
    }

    /// Orbit around the target by angle deltas, respecting polar and
    /// distance limits.
    pub fn orbit_by(&mut self, d_azimuth: f32, d_polar: f32) {
        let r = self.distance();
        if r == 0.0 {
            return;
        }
        let theta = self.azimuth() + d_azimuth;
        let phi = (self.polar() + d_polar).clamp(self.min_polar, self.max_polar);
        self.place(r, theta, phi);
    }

    /// Scale the camera's distance from the target (< 1 moves closer).
    pub fn zoom_by(&mut self, scale: f32) {
        if !(scale > 0.0) || !scale.is_finite() {
            return;
        }
        let r = self.distance();
        if r == 0.0 {
            return;
        }
        let theta = self.azimuth();
        let phi = self.polar();
        self.place(r * scale, theta, phi);
    }

    /// Relax or tighten the manual zoom floor.
    pub fn set_min_distance(&mut self, min_distance: f32) {
        self.min_distance = min_distance.min(self.max_distance);
    }

    fn place(&mut self, r: f32, theta: f32, phi: f32) {
        let r = r.clamp(self.min_distance, self.max_distance);
        let sin_phi = phi.sin();
        self.position = self.target
            + Vec3::new(r * sin_phi * theta.sin(), r * phi.cos(), r * sin_phi * theta.cos());
    }
}
