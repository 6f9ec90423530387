//! Planets, planetoids and moons: orbits, derived physical properties and
//! rule-based classification.
//!
//! Bodies only store what was drawn for them (mass, diameter, orbit,
//! material, class). Everything else is derived on demand through
//! [`PhysicalProperties::derive`].

pub mod catalog;
pub mod error;
pub mod material;
pub mod orbit;
pub mod physical;
pub mod planet_class;
pub mod registry;
pub mod satellite;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod material_test;
#[cfg(test)]
mod orbit_test;
#[cfg(test)]
mod registry_test;

pub use error::OrbitError;
pub use material::{Material, MaterialParams};
pub use orbit::{Orbit, OrbitalZone};
pub use physical::{Parent, PhysicalProperties};
pub use planet_class::{ClassFamily, PlanetaryClass, PlanetaryClassId};
pub use registry::ClassRegistry;
pub use satellite::{Moon, Planet, Satellite};
