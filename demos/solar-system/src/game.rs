/// Solar System: the Sun, eight planets and the Moon on circular orbits.
///
/// Click a body to fly the camera to it, read its info panel, and follow it
/// along its orbit. Pause and speed controls drive the shared clock.

use orrery_engine::*;

use crate::bodies;

pub struct SolarSystem {
    bodies: Vec<Body>,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            bodies: bodies::catalog(),
        }
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Scenario for SolarSystem {
    fn init(&mut self, ctx: &mut SimulationContext) -> Result<(), OrreryError> {
        for body in self.bodies.drain(..) {
            ctx.register(body)?;
        }
        Ok(())
    }

    fn body_info(&self, name: &str) -> Option<BodyInfo> {
        bodies::info(name)
    }
}
