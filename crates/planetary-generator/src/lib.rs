//! Body generation for star systems.
//!
//! Places terrestrial planets, gas giants and planetoids around a star,
//! classifies them and gives them moons. Everything is driven by the seeded
//! streams of the star and of each body, so a generator run replays exactly.

pub mod config;
pub mod error;
pub mod generation;
pub mod moon_generation;
pub mod naming;
pub mod orbit_placement;
pub mod sampling;

pub use config::GeneratorConfig;
pub use error::GenerationError;
pub use generation::{BodyGenerator, BodyStage};
pub use moon_generation::MoonGenerator;
pub use orbit_placement::OrbitPlacer;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod generation_test;
