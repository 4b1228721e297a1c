// extensions/transform.rs
//
// Transform composition for the body hierarchy.
// A body's local transform describes an orbit holder (rotation about the
// parent's vertical axis), an offset along the holder's X axis, and the
// body's own tilt + spin. World transforms are produced by composing the
// local transform with the parent's already-computed world transform.

use glam::{Quat, Vec3};

/// Position and orientation of a body's renderable proxy in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldTransform {
    pub position: Vec3,
    pub orientation: Quat,
}

impl WorldTransform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
    };
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Transform of a body relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalTransform {
    /// Orbit holder rotation about the parent's vertical axis (radians).
    pub orbit_angle: f32,
    /// Offset from the parent inside the holder frame.
    pub offset: Vec3,
    /// Axial tilt about the body's X axis (radians).
    pub tilt: f32,
    /// Self rotation about the body's vertical axis (radians).
    pub spin: f32,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            orbit_angle: 0.0,
            offset: Vec3::ZERO,
            tilt: 0.0,
            spin: 0.0,
        }
    }
}

impl LocalTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orbit_angle(mut self, angle: f32) -> Self {
        self.orbit_angle = angle;
        self
    }

    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_tilt(mut self, tilt: f32) -> Self {
        self.tilt = tilt;
        self
    }

    pub fn with_spin(mut self, spin: f32) -> Self {
        self.spin = spin;
        self
    }

    /// Rotation of the orbit holder relative to the parent.
    pub fn holder_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.orbit_angle)
    }

    /// Rotation of the body inside its holder: tilt first, then spin about
    /// the tilted axis.
    pub fn body_rotation(&self) -> Quat {
        Quat::from_rotation_x(self.tilt) * Quat::from_rotation_y(self.spin)
    }

    /// Compose with the parent's world transform.
    pub fn compose(&self, parent: &WorldTransform) -> WorldTransform {
        let holder = parent.orientation * self.holder_rotation();
        WorldTransform {
            position: parent.position + holder * self.offset,
            orientation: (holder * self.body_rotation()).normalize(),
        }
    }
}
