pub mod focus;
pub mod orbits;
pub mod tracking;
