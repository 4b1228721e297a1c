use bytemuck::{Pod, Zeroable};

use crate::core::registry::BodyRegistry;

/// Per-body render data written to a flat buffer for the JS renderer.
/// Must match the JS side: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    /// World position.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// World orientation quaternion.
    pub qx: f32,
    pub qy: f32,
    pub qz: f32,
    pub qw: f32,
    /// Body radius in world units.
    pub size: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Instance buffer in registry order (instance `i` is `BodyId(i)`).
pub struct InstanceBuffer {
    pub instances: Vec<BodyInstance>,
}

impl InstanceBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(16),
        }
    }

    /// Rebuild from the registry's current world transforms.
    pub fn rebuild(&mut self, registry: &BodyRegistry) {
        self.instances.clear();
        for body in registry.iter() {
            let world = body.world_transform();
            let q = world.orientation;
            self.instances.push(BodyInstance {
                x: world.position.x,
                y: world.position.y,
                z: world.position.z,
                qx: q.x,
                qy: q.y,
                qz: q.z,
                qw: q.w,
                size: body.body.size,
            });
        }
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for JS reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for InstanceBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::body::Body;

    #[test]
    fn stride_matches_float_count() {
        assert_eq!(std::mem::size_of::<BodyInstance>(), BodyInstance::STRIDE_BYTES);
    }

    #[test]
    fn rebuild_follows_registry_order() {
        let mut reg = BodyRegistry::new();
        reg.register(Body::star("sun", 20.0)).unwrap();
        reg.register(Body::orbiting("earth", 1.0, 100.0, 1.0)).unwrap();

        let mut buf = InstanceBuffer::new();
        buf.rebuild(&reg);
        assert_eq!(buf.instance_count(), 2);
        assert_eq!(buf.instances[0].size, 20.0);
        assert_eq!(buf.instances[1].size, 1.0);
        assert_eq!(buf.instances[0].qw, 1.0);

        let floats: &[f32] = bytemuck::cast_slice(&buf.instances);
        assert_eq!(floats.len(), 2 * BodyInstance::FLOATS);
    }
}
