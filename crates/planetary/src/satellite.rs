use serde::{Deserialize, Serialize};
use stellar::{SeedStream, Star};
use units::{Length, Mass, Time};

use crate::material::Material;
use crate::orbit::Orbit;
use crate::physical::{Parent, PhysicalProperties};
use crate::planet_class::PlanetaryClassId;

/// Stored state shared by planets, planetoids and moons.
///
/// Derived quantities live in [`PhysicalProperties`] and are computed on
/// demand from these fields and the parent chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Satellite {
    pub name: String,
    pub seed: u64,
    pub mass: Mass,
    pub diameter: Length,
    pub orbit: Orbit,
    /// Signed; negative is retrograde.
    pub rotation_period: Time,
    pub material: Material,
    pub class: PlanetaryClassId,
    #[serde(skip)]
    pub stream: SeedStream,
}

impl Satellite {
    /// A body with a fresh stream, not yet sized or classified.
    pub fn new(name: impl Into<String>, seed: u64, mass: Mass, orbit: Orbit) -> Self {
        Self {
            name: name.into(),
            seed,
            mass,
            diameter: Length::zero(),
            orbit,
            rotation_period: Time::zero(),
            material: Material::default(),
            class: PlanetaryClassId::Unknown,
            stream: SeedStream::new(seed),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Moves the seed forward by `step` and restarts the stream from it.
    pub fn advance_seed(&mut self, step: u64) {
        self.stream.advance(step);
        self.seed = self.stream.seed();
    }

    /// Draws the next child seed from this body's stream.
    pub fn child_seed(&mut self) -> u64 {
        self.stream.child_seed(1)
    }
}

/// A planet or planetoid orbiting a star.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    #[serde(flatten)]
    pub body: Satellite,
    pub moons: Vec<Moon>,
    /// Set for planetoids: bodies that have not cleared their orbit.
    pub minor: bool,
}

impl Planet {
    pub fn new(body: Satellite, minor: bool) -> Self {
        Self {
            body,
            moons: Vec::new(),
            minor,
        }
    }

    pub fn properties(&self, star: &Star) -> PhysicalProperties {
        PhysicalProperties::derive(&self.body, Parent::Star(star))
    }

    pub fn is_habitable(&self, star: &Star) -> bool {
        self.properties(star).is_habitable()
    }
}

/// A satellite of a planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moon {
    #[serde(flatten)]
    pub body: Satellite,
}

impl Moon {
    pub fn properties(&self, planet: &Planet, star: &Star) -> PhysicalProperties {
        PhysicalProperties::derive(
            &self.body,
            Parent::Planet {
                planet: &planet.body,
                star,
            },
        )
    }
}
