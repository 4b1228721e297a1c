use std::cell::OnceCell;
use std::collections::HashMap;

use crate::api::error::OrreryError;
use crate::api::types::BodyId;
use crate::components::body::Body;
use crate::extensions::transform::{LocalTransform, WorldTransform};

/// A body after registration: its definition, its place in the hierarchy,
/// and its current transforms.
#[derive(Debug, Clone)]
pub struct RegisteredBody {
    pub id: BodyId,
    /// Definition with `satellites` moved out into their own entries.
    pub body: Body,
    pub parent: Option<BodyId>,
    pub children: Vec<BodyId>,
    local: LocalTransform,
    world: WorldTransform,
    optimal_distance: OnceCell<f32>,
}

impl RegisteredBody {
    pub fn name(&self) -> &str {
        &self.body.name
    }

    /// Whether this body orbits a planet rather than the central star.
    pub fn is_satellite(&self) -> bool {
        self.parent.is_some()
    }

    pub fn local_transform(&self) -> &LocalTransform {
        &self.local
    }

    pub fn world_transform(&self) -> &WorldTransform {
        &self.world
    }

    pub fn world_position(&self) -> glam::Vec3 {
        self.world.position
    }

    /// Framing distance, computed on first use and reused afterwards.
    pub fn optimal_distance(&self) -> f32 {
        *self.optimal_distance.get_or_init(|| self.body.optimal_distance())
    }

    /// Whether the framing distance has been computed yet.
    pub fn has_cached_distance(&self) -> bool {
        self.optimal_distance.get().is_some()
    }
}

/// Flat body storage in insertion order.
/// Designed for small body counts (tens, not thousands).
///
/// Satellites are stored right after their parent (pre-order), so a single
/// forward pass always sees a parent before its children.
#[derive(Debug, Default)]
pub struct BodyRegistry {
    bodies: Vec<RegisteredBody>,
    by_name: HashMap<String, BodyId>,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a body and, recursively, its satellites.
    ///
    /// Validation covers the whole tree before anything is inserted, so a
    /// rejected body leaves the registry untouched.
    pub fn register(&mut self, body: Body) -> Result<BodyId, OrreryError> {
        let mut seen = Vec::new();
        self.validate_tree(&body, false, &mut seen)?;
        Ok(self.insert(body, None))
    }

    fn validate_tree<'a>(&self, body: &'a Body, nested: bool, seen: &mut Vec<&'a str>) -> Result<(), OrreryError> {
        body.validate()?;
        if nested && body.is_central() {
            return Err(OrreryError::invalid(format!("{}.kind", body.name), f64::NAN));
        }
        if self.by_name.contains_key(&body.name) || seen.contains(&body.name.as_str()) {
            return Err(OrreryError::DuplicateBody(body.name.clone()));
        }
        seen.push(&body.name);
        for satellite in &body.satellites {
            self.validate_tree(satellite, true, seen)?;
        }
        Ok(())
    }

    fn insert(&mut self, mut body: Body, parent: Option<BodyId>) -> BodyId {
        let id = BodyId(self.bodies.len() as u32);
        let satellites = std::mem::take(&mut body.satellites);
        let tilt = body.axial_tilt.map(f32::to_radians).unwrap_or(0.0);
        let local = LocalTransform::new().with_tilt(tilt);

        log::debug!("registered body `{}` as {:?}", body.name, id);
        self.by_name.insert(body.name.clone(), id);
        self.bodies.push(RegisteredBody {
            id,
            body,
            parent,
            children: Vec::new(),
            local,
            world: local.compose(&WorldTransform::IDENTITY),
            optimal_distance: OnceCell::new(),
        });
        if let Some(p) = parent {
            self.bodies[p.index()].children.push(id);
        }

        for satellite in satellites {
            self.insert(satellite, Some(id));
        }
        id
    }

    /// Look up a body by name.
    pub fn get(&self, name: &str) -> Result<&RegisteredBody, OrreryError> {
        self.by_name
            .get(name)
            .map(|id| &self.bodies[id.index()])
            .ok_or_else(|| OrreryError::NotFound(name.to_string()))
    }

    /// Look up a body by id.
    pub fn get_by_id(&self, id: BodyId) -> Option<&RegisteredBody> {
        self.bodies.get(id.index())
    }

    pub fn id_of(&self, name: &str) -> Option<BodyId> {
        self.by_name.get(name).copied()
    }

    /// Visit every body in insertion order.
    pub fn for_each(&self, mut visitor: impl FnMut(&RegisteredBody)) {
        for body in &self.bodies {
            visitor(body);
        }
    }

    /// Iterate over all bodies in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredBody> {
        self.bodies.iter()
    }

    /// Names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bodies.iter().map(|b| b.name())
    }

    /// World transform of a parent, or the origin for root bodies.
    pub(crate) fn parent_world(&self, id: BodyId) -> WorldTransform {
        self.bodies[id.index()]
            .parent
            .map(|p| self.bodies[p.index()].world)
            .unwrap_or(WorldTransform::IDENTITY)
    }

    /// Write a body's transforms. Only the transform updater calls this.
    pub(crate) fn set_transforms(&mut self, id: BodyId, local: LocalTransform, world: WorldTransform) {
        let entry = &mut self.bodies[id.index()];
        entry.local = local;
        entry.world = world;
    }

    /// Number of registered bodies (satellites included).
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
