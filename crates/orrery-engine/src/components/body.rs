use serde::{Deserialize, Serialize};

use crate::api::error::OrreryError;

/// Role of a body in the system. Framing rules key off this, not the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    /// The central star. Does not orbit.
    Star,
    #[default]
    Planet,
    /// A planet with a ring system (framed tighter than other planets).
    RingedPlanet,
    /// A natural satellite orbiting a planet.
    Satellite,
}

/// A celestial body definition.
///
/// Bodies form a tree through `satellites`; the registry flattens that tree
/// on registration and keeps parent links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Unique name, also the lookup key used by picking and the UI.
    pub name: String,
    #[serde(default)]
    pub kind: BodyKind,
    /// Radius in world units.
    pub size: f32,
    /// Distance from the parent. Zero for the central star.
    #[serde(default)]
    pub orbital_radius: f32,
    /// Simulated seconds per revolution. `None` for the central star.
    #[serde(default)]
    pub orbital_period: Option<f64>,
    /// Simulated seconds per self rotation. Negative means retrograde.
    #[serde(default)]
    pub rotation_period: Option<f64>,
    /// Axial tilt in degrees.
    #[serde(default)]
    pub axial_tilt: Option<f32>,
    #[serde(default)]
    pub satellites: Vec<Body>,
}

impl Body {
    /// A central star at the origin.
    pub fn star(name: impl Into<String>, size: f32) -> Self {
        Self {
            name: name.into(),
            kind: BodyKind::Star,
            size,
            orbital_radius: 0.0,
            orbital_period: None,
            rotation_period: None,
            axial_tilt: None,
            satellites: Vec::new(),
        }
    }

    /// A body on a circular orbit around its parent.
    pub fn orbiting(name: impl Into<String>, size: f32, orbital_radius: f32, orbital_period: f64) -> Self {
        Self {
            name: name.into(),
            kind: BodyKind::Planet,
            size,
            orbital_radius,
            orbital_period: Some(orbital_period),
            rotation_period: None,
            axial_tilt: None,
            satellites: Vec::new(),
        }
    }

    // -- Builder pattern --

    pub fn with_kind(mut self, kind: BodyKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_rotation(mut self, period: f64) -> Self {
        self.rotation_period = Some(period);
        self
    }

    pub fn with_tilt(mut self, degrees: f32) -> Self {
        self.axial_tilt = Some(degrees);
        self
    }

    pub fn with_satellite(mut self, satellite: Body) -> Self {
        self.satellites.push(satellite);
        self
    }

    /// Whether this body sits at the center and never orbits.
    pub fn is_central(&self) -> bool {
        self.kind == BodyKind::Star
    }

    /// Camera-to-target distance that frames this body well.
    ///
    /// Apparent visual scale drives framing, not literal size: every small
    /// body gets the same fixed distance, with the satellite pulled closer.
    pub fn optimal_distance(&self) -> f32 {
        match self.kind {
            BodyKind::Star => self.size * 6.0,
            BodyKind::Satellite if self.size < 1.0 => 5.0,
            _ if self.size < 1.0 => 8.0,
            BodyKind::RingedPlanet => self.size * 3.0,
            _ => self.size * 4.0,
        }
    }

    /// Check the body's own parameters (satellites are checked on registration).
    pub fn validate(&self) -> Result<(), OrreryError> {
        let field = |f: &str| format!("{}.{}", self.name, f);

        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(OrreryError::invalid(field("size"), self.size as f64));
        }
        if !self.is_central() {
            if !self.orbital_radius.is_finite() || self.orbital_radius <= 0.0 {
                return Err(OrreryError::invalid(field("orbital_radius"), self.orbital_radius as f64));
            }
            match self.orbital_period {
                Some(p) if p.is_finite() && p > 0.0 => {}
                Some(p) => return Err(OrreryError::invalid(field("orbital_period"), p)),
                None => return Err(OrreryError::invalid(field("orbital_period"), f64::NAN)),
            }
        } else if self.orbital_radius != 0.0 {
            return Err(OrreryError::invalid(field("orbital_radius"), self.orbital_radius as f64));
        }
        if let Some(r) = self.rotation_period {
            if !r.is_finite() || r == 0.0 {
                return Err(OrreryError::invalid(field("rotation_period"), r));
            }
        }
        if let Some(t) = self.axial_tilt {
            if !t.is_finite() {
                return Err(OrreryError::invalid(field("axial_tilt"), t as f64));
            }
        }
        Ok(())
    }
}
