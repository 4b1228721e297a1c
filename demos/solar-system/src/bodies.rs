/// Solar system catalog: body parameters and info panel text.
///
/// Sizes and distances are display units, not physical ones: the inner
/// planets are spread out and the giants shrunk so everything fits one view.
/// Periods are in Earth years (the simulated time unit); negative rotation
/// means retrograde.

use orrery_engine::{Body, BodyInfo, BodyKind};

pub const SUN: &str = "sun";
pub const MOON: &str = "moon";

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_SIZE: f32 = 20.0;

// ── Planets ──────────────────────────────────────────────────────────

/// Display parameters for one planet.
struct PlanetParams {
    name: &'static str,
    size: f32,
    distance: f32,
    period: f64,
    rotation: f64,
    tilt: Option<f32>,
    kind: BodyKind,
}

const PLANETS: [PlanetParams; 8] = [
    PlanetParams { name: "mercury", size: 0.383, distance: 39.0, period: 0.24, rotation: 58.6, tilt: None, kind: BodyKind::Planet },
    PlanetParams { name: "venus", size: 0.949, distance: 72.0, period: 0.62, rotation: -243.0, tilt: None, kind: BodyKind::Planet },
    PlanetParams { name: "earth", size: 1.0, distance: 100.0, period: 1.0, rotation: 1.0, tilt: Some(23.5), kind: BodyKind::Planet },
    PlanetParams { name: "mars", size: 0.532, distance: 152.0, period: 1.88, rotation: 1.03, tilt: None, kind: BodyKind::Planet },
    PlanetParams { name: "jupiter", size: 11.21, distance: 260.0, period: 11.86, rotation: 0.41, tilt: None, kind: BodyKind::Planet },
    PlanetParams { name: "saturn", size: 16.8, distance: 320.0, period: 29.46, rotation: 0.44, tilt: None, kind: BodyKind::RingedPlanet },
    PlanetParams { name: "uranus", size: 4.0, distance: 380.0, period: 84.0, rotation: 0.72, tilt: Some(97.77), kind: BodyKind::Planet },
    PlanetParams { name: "neptune", size: 3.88, distance: 440.0, period: 164.79, rotation: 0.67, tilt: None, kind: BodyKind::Planet },
];

// ── Moon ─────────────────────────────────────────────────────────────

/// About 27% of Earth's size; period is 27 days as a fraction of a year.
const MOON_SIZE: f32 = 0.27;
const MOON_DISTANCE: f32 = 5.0;
const MOON_PERIOD: f64 = 0.27;

/// The full body tree, star first.
pub fn catalog() -> Vec<Body> {
    let mut bodies = Vec::with_capacity(PLANETS.len() + 1);
    bodies.push(Body::star(SUN, SUN_SIZE));

    for p in &PLANETS {
        let mut body = Body::orbiting(p.name, p.size, p.distance, p.period)
            .with_kind(p.kind)
            .with_rotation(p.rotation);
        if let Some(tilt) = p.tilt {
            body = body.with_tilt(tilt);
        }
        if p.name == "earth" {
            body = body.with_satellite(
                Body::orbiting(MOON, MOON_SIZE, MOON_DISTANCE, MOON_PERIOD).with_kind(BodyKind::Satellite),
            );
        }
        bodies.push(body);
    }
    bodies
}

// ── Info panel ───────────────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
fn entry(
    title: &str,
    kind: &str,
    mass: &str,
    diameter: &str,
    orbital_period: Option<&str>,
    surface_temp: &str,
    description: &str,
    fun_fact: &str,
) -> BodyInfo {
    BodyInfo {
        title: title.to_string(),
        kind: kind.to_string(),
        mass: mass.to_string(),
        diameter: diameter.to_string(),
        orbital_period: orbital_period.map(str::to_string),
        rotation_period: None,
        surface_temp: surface_temp.to_string(),
        description: description.to_string(),
        fun_fact: fun_fact.to_string(),
    }
}

/// Info panel text for a body, keyed by registry name.
pub fn info(name: &str) -> Option<BodyInfo> {
    let info = match name {
        "sun" => BodyInfo {
            rotation_period: Some("27 Earth days".to_string()),
            ..entry(
                "Sun",
                "Star",
                "1.989 × 10^30 kg",
                "1,392,700 km",
                None,
                "5,500°C (surface)",
                "The Sun is the star at the center of our Solar System, providing light and energy to all planets.",
                "The Sun contains 99.86% of all mass in our solar system!",
            )
        },
        "mercury" => entry(
            "Mercury",
            "Terrestrial Planet",
            "3.285 × 10^23 kg",
            "4,879 km",
            Some("88 Earth days"),
            "-180°C to 430°C",
            "Mercury is the smallest planet and closest to the Sun.",
            "Despite being closest to the Sun, Venus is actually hotter than Mercury!",
        ),
        "venus" => entry(
            "Venus",
            "Terrestrial Planet",
            "4.867 × 10^24 kg",
            "12,104 km",
            Some("225 Earth days"),
            "462°C",
            "Venus is often called Earth's sister planet due to their similar sizes.",
            "Venus spins backwards compared to most other planets!",
        ),
        "earth" => entry(
            "Earth",
            "Terrestrial Planet",
            "5.972 × 10^24 kg",
            "12,742 km",
            Some("365.25 days"),
            "-88°C to 58°C",
            "Earth is the only known planet to support life.",
            "Earth is the only planet not named after a god or goddess!",
        ),
        "mars" => entry(
            "Mars",
            "Terrestrial Planet",
            "6.39 × 10^23 kg",
            "6,779 km",
            Some("687 Earth days"),
            "-140°C to 20°C",
            "Mars is called the Red Planet due to iron oxide (rust) on its surface.",
            "Mars has the largest volcano in the solar system - Olympus Mons!",
        ),
        "jupiter" => entry(
            "Jupiter",
            "Gas Giant",
            "1.898 × 10^27 kg",
            "139,820 km",
            Some("11.9 Earth years"),
            "-110°C",
            "Jupiter is the largest planet in our solar system.",
            "Jupiter's Great Red Spot has been storming for at least 400 years!",
        ),
        "saturn" => entry(
            "Saturn",
            "Gas Giant",
            "5.683 × 10^26 kg",
            "116,460 km",
            Some("29.5 Earth years"),
            "-140°C",
            "Saturn is known for its spectacular ring system.",
            "Saturn has 82 moons - the most of any planet in our solar system!",
        ),
        "uranus" => entry(
            "Uranus",
            "Ice Giant",
            "8.681 × 10^25 kg",
            "50,724 km",
            Some("84 Earth years"),
            "-195°C",
            "Uranus is the only planet that rotates on its side.",
            "Uranus was the first planet discovered using a telescope!",
        ),
        "neptune" => entry(
            "Neptune",
            "Ice Giant",
            "1.024 × 10^26 kg",
            "49,244 km",
            Some("165 Earth years"),
            "-200°C",
            "Neptune is the windiest planet, with speeds reaching 2,100 km/h.",
            "Neptune was discovered through mathematical predictions!",
        ),
        "moon" => entry(
            "Moon",
            "Natural Satellite",
            "7.342 × 10^22 kg",
            "3,474 km",
            Some("27.3 Earth days"),
            "-233°C to 123°C",
            "The Moon is Earth's only natural satellite.",
            "The Moon is slowly moving away from Earth at about 3.8 cm per year!",
        ),
        _ => return None,
    };
    Some(info)
}
